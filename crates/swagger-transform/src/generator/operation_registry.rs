use std::collections::BTreeSet;

use serde_json::{Map, Value};
use strum::{Display, EnumString};

use crate::generator::{
  metrics::GenerationWarning,
  naming::{
    identifiers::ensure_unique,
    operations::{function_name, operation_name},
  },
};

const PATHS_KEY: &str = "paths";
const OPERATION_ID_KEY: &str = "operationId";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum HttpMethod {
  Get,
  Put,
  Post,
  Delete,
  Options,
  Head,
  Patch,
  Trace,
}

impl HttpMethod {
  /// Methods whose payload is the request body rather than the query.
  #[must_use]
  pub const fn is_write(self) -> bool {
    matches!(self, Self::Post | Self::Put)
  }
}

/// One `path × method` pair found in the document.
#[derive(Debug, Clone)]
pub struct OperationEntry<'a> {
  /// Unique operation name: the route-map key and contract name.
  pub name: String,
  /// Unique request-function identifier, derived from `name`.
  pub function_name: String,
  pub method: HttpMethod,
  pub path: String,
  pub operation: &'a Map<String, Value>,
  /// The enclosing path item, holding path-level `parameters`.
  pub path_item: &'a Map<String, Value>,
}

impl OperationEntry<'_> {
  /// `summary`, falling back to `description`.
  #[must_use]
  pub fn description(&self) -> Option<&str> {
    ["summary", "description"]
      .into_iter()
      .filter_map(|key| self.operation.get(key).and_then(Value::as_str))
      .find(|text| !text.trim().is_empty())
  }
}

/// Every operation of a document in path order, with collision-free names.
///
/// Path-item keys that are not HTTP methods are ignored. When two operations
/// derive the same name, later ones get a numeric suffix starting at `2`. Function
/// identifiers are de-duplicated the same way after sanitizing, since distinct
/// names such as `pet-list` and `pet_list` share one identifier.
#[derive(Debug, Default)]
pub struct OperationRegistry<'a> {
  entries: Vec<OperationEntry<'a>>,
  warnings: Vec<GenerationWarning>,
}

impl<'a> OperationRegistry<'a> {
  #[must_use]
  pub fn new(document: &'a Value) -> Self {
    let mut registry = Self::default();
    let mut used_names = BTreeSet::new();
    let mut used_functions = BTreeSet::new();

    let paths = document.get(PATHS_KEY).and_then(Value::as_object).into_iter().flatten();
    for (path, path_item) in paths {
      let Some(path_item) = path_item.as_object() else {
        continue;
      };

      for (key, operation) in path_item {
        let (Ok(method), Some(operation)) = (key.parse::<HttpMethod>(), operation.as_object()) else {
          continue;
        };

        let base_name = operation_name(
          operation.get(OPERATION_ID_KEY).and_then(Value::as_str),
          &method.to_string(),
          path,
        );
        let name = ensure_unique(&base_name, &used_names);
        if name != base_name {
          registry.warnings.push(GenerationWarning::DuplicateOperationName {
            method: method.to_string().to_uppercase(),
            path: path.clone(),
            name: base_name,
            renamed: name.clone(),
          });
        }
        used_names.insert(name.clone());

        let base_function = function_name(&name);
        let function = ensure_unique(&base_function, &used_functions);
        if function != base_function {
          registry.warnings.push(GenerationWarning::DuplicateFunctionName {
            method: method.to_string().to_uppercase(),
            path: path.clone(),
            name: base_function,
            renamed: function.clone(),
          });
        }
        used_functions.insert(function.clone());

        registry.entries.push(OperationEntry {
          name,
          function_name: function,
          method,
          path: path.clone(),
          operation,
          path_item,
        });
      }
    }

    registry
  }

  pub fn operations(&self) -> impl Iterator<Item = &OperationEntry<'a>> {
    self.entries.iter()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  #[must_use]
  pub fn warnings(&self) -> &[GenerationWarning] {
    &self.warnings
  }
}
