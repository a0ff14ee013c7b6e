use indexmap::IndexMap;
use serde_json::Value;

use super::SchemaNode;

/// Named schema definitions shared by the path transformer and the definition emitter.
///
/// Seeded from `components.schemas` (3.x) and `definitions` (2.x); a key present
/// in both takes the `definitions` node and keeps its first position. The path
/// transformer appends synthetic parameter groups afterwards, so it must run
/// before the emitter reads the registry.
#[derive(Debug, Clone, Default)]
pub struct DefinitionRegistry {
  definitions: IndexMap<String, SchemaNode>,
}

impl DefinitionRegistry {
  #[must_use]
  pub fn from_document(document: &Value) -> Self {
    let components = document.pointer("/components/schemas").and_then(Value::as_object);
    let definitions = document.get("definitions").and_then(Value::as_object);

    let definitions = components
      .into_iter()
      .chain(definitions)
      .flatten()
      .map(|(key, schema)| (key.clone(), SchemaNode::classify(schema)))
      .collect();

    Self { definitions }
  }

  #[must_use]
  pub fn contains_key(&self, key: &str) -> bool {
    self.definitions.contains_key(key)
  }

  #[must_use]
  pub fn get(&self, key: &str) -> Option<&SchemaNode> {
    self.definitions.get(key)
  }

  /// Adds a parameter group fabricated by the path transformer.
  ///
  /// The key must come out of the collision loop in
  /// [`NamingResolver::parameter_group_name`](crate::generator::naming::NamingResolver::parameter_group_name),
  /// which guarantees it is free.
  pub fn insert_synthetic(&mut self, key: String, node: SchemaNode) {
    debug_assert!(
      !self.definitions.contains_key(&key),
      "synthetic definition '{key}' would overwrite an existing one"
    );
    self.definitions.insert(key, node);
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &SchemaNode)> {
    self.definitions.iter()
  }

  pub fn keys(&self) -> impl Iterator<Item = &String> {
    self.definitions.keys()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.definitions.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.definitions.is_empty()
  }
}

impl FromIterator<(String, SchemaNode)> for DefinitionRegistry {
  fn from_iter<T: IntoIterator<Item = (String, SchemaNode)>>(iter: T) -> Self {
    Self {
      definitions: iter.into_iter().collect(),
    }
  }
}
