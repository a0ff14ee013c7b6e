use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub definitions_emitted: usize,
  pub interfaces_generated: usize,
  pub enums_generated: usize,
  pub type_aliases_generated: usize,
  pub classes_generated: usize,
  pub parameter_groups_synthesized: usize,
  pub operations_converted: usize,
  pub functions_generated: usize,
  pub files_generated: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_interface(&mut self) {
    self.interfaces_generated += 1;
    self.definitions_emitted += 1;
  }

  pub fn record_enum(&mut self) {
    self.enums_generated += 1;
    self.definitions_emitted += 1;
  }

  pub fn record_type_alias(&mut self) {
    self.type_aliases_generated += 1;
    self.definitions_emitted += 1;
  }

  /// `XClass` alias standing in for a wrapper class; not a definition of its own.
  pub fn record_companion_alias(&mut self) {
    self.type_aliases_generated += 1;
  }

  pub fn record_class(&mut self) {
    self.classes_generated += 1;
  }

  pub fn record_parameter_group(&mut self) {
    self.parameter_groups_synthesized += 1;
  }

  pub fn record_operation(&mut self) {
    self.operations_converted += 1;
  }

  pub fn record_functions(&mut self, count: usize) {
    self.functions_generated += count;
  }

  pub fn record_file(&mut self) {
    self.files_generated += 1;
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Skipped definition '{key}': schema has no recognizable type")]
  UnresolvableDefinition { key: String },
  #[strum(to_string = "Definition '{key}' references unknown definition '{target}'")]
  UnknownReference { key: String, target: String },
  #[strum(to_string = "Operation '{method} {path}' renamed from '{name}' to '{renamed}' to avoid a duplicate")]
  DuplicateOperationName {
    method: String,
    path: String,
    name: String,
    renamed: String,
  },
  #[strum(to_string = "Request function for '{method} {path}' renamed from '{name}' to '{renamed}' to avoid a duplicate")]
  DuplicateFunctionName {
    method: String,
    path: String,
    name: String,
    renamed: String,
  },
  #[strum(to_string = "Skipped a {location} parameter without a name in '{method} {path}'")]
  MissingParameterName {
    method: String,
    path: String,
    location: String,
  },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(
      self,
      Self::UnresolvableDefinition { .. } | Self::MissingParameterName { .. }
    )
  }
}
