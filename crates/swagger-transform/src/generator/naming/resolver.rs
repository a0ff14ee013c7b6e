use super::identifiers::{capitalize, ref_key, sanitize_identifier, uncapitalize};
use crate::generator::{
  config::Config,
  schema::{DefinitionRegistry, ParameterLocation},
};

const WRAPPER_SUFFIX: &str = "Class";

/// Maps definition keys to the names used in generated code.
///
/// User hooks in [`Config`] take precedence over every default rule.
#[derive(Debug, Clone, Copy)]
pub struct NamingResolver<'a> {
  config: &'a Config,
}

impl<'a> NamingResolver<'a> {
  #[must_use]
  pub fn new(config: &'a Config) -> Self {
    Self { config }
  }

  /// Name of the interface, enum or alias declared for `key`.
  #[must_use]
  pub fn declaration_name(&self, key: &str) -> String {
    match &self.config.rename_definition {
      Some(hook) => hook.apply(key),
      None => sanitize_identifier(&capitalize(key)),
    }
  }

  /// File stem of the module declaring `key`.
  #[must_use]
  pub fn module_name(&self, key: &str) -> String {
    match &self.config.rename_module {
      Some(hook) => hook.apply(key),
      None => uncapitalize(key),
    }
  }

  /// Name of the companion class emitted in wrapper mode.
  #[must_use]
  pub fn wrapper_name(&self, key: &str) -> String {
    match &self.config.rename_wrapper {
      Some(hook) => hook.apply(key),
      None => format!("{}{WRAPPER_SUFFIX}", self.declaration_name(key)),
    }
  }

  /// Name other declarations use to refer to `key`.
  #[must_use]
  pub fn type_name(&self, key: &str) -> String {
    if self.config.wrapper_mode() {
      self.wrapper_name(key)
    } else {
      self.declaration_name(key)
    }
  }

  #[must_use]
  pub fn reference_name(&self, reference: &str) -> String {
    self.type_name(&ref_key(reference))
  }

  /// Picks a registry key for the `location` parameters of `operation`.
  ///
  /// Checked against the registry as it stands now; the caller must insert the
  /// returned key before naming the next group.
  #[must_use]
  pub fn parameter_group_name(
    &self,
    operation: &str,
    location: ParameterLocation,
    registry: &DefinitionRegistry,
  ) -> String {
    let base = match &self.config.rename_parameters {
      Some(hook) => hook.apply(operation, location, registry),
      None => format!("{}{}", sanitize_identifier(&capitalize(operation)), location.tag()),
    };
    first_free(&base, |candidate| registry.contains_key(candidate))
  }
}

/// First of `base`, `base0`, `base1`, ... for which `is_taken` is false.
pub(crate) fn first_free(base: &str, is_taken: impl Fn(&str) -> bool) -> String {
  if !is_taken(base) {
    return base.to_string();
  }
  let mut i = 0_usize;
  loop {
    let candidate = format!("{base}{i}");
    if !is_taken(&candidate) {
      return candidate;
    }
    i += 1;
  }
}
