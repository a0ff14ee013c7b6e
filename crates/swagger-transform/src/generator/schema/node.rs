use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Number, Value};

use super::REF_KEY;

const ALL_OF_KEY: &str = "allOf";
const ENUM_KEY: &str = "enum";
const ENUM_VARNAMES_KEY: &str = "x-enum-varnames";
const ENUM_COMMENTS_KEY: &str = "x-enum-comments";
const ITEMS_KEY: &str = "items";
const PROPERTIES_KEY: &str = "properties";
const REQUIRED_KEY: &str = "required";
const ADDITIONAL_PROPERTIES_KEY: &str = "additionalProperties";
const TYPE_KEY: &str = "type";
const DESCRIPTION_KEY: &str = "description";

const ARRAY_TYPE: &str = "array";
const OBJECT_TYPE: &str = "object";

/// One classified schema subtree.
///
/// Source documents are untrusted and a raw node can look like several shapes
/// at once (`$ref` next to `properties`, `enum` next to `items`, ...).
/// [`SchemaNode::classify`] picks exactly one [`SchemaKind`] using a fixed
/// precedence, so every node has a single resolution path afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
  pub description: Option<String>,
  pub kind: SchemaKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
  /// `$ref` pointer, kept verbatim.
  Reference(String),
  /// `allOf` members.
  Intersection(Vec<SchemaNode>),
  Enumeration(Enumeration),
  /// `type: array` or a present `items`; the item is `Untyped` when `items` is missing.
  Array(Box<SchemaNode>),
  Object(ObjectShape),
  /// Any other `type` name, mapped through the type map at resolution time.
  Primitive(String),
  /// Nothing recognizable: resolves to no type.
  Untyped,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Enumeration {
  pub values: Vec<EnumValue>,
  /// Symbolic member names (`x-enum-varnames`), index-aligned with `values`.
  pub var_names: Vec<String>,
  /// Per-member comments (`x-enum-comments`) keyed by symbolic name.
  pub comments: IndexMap<String, String>,
}

impl Enumeration {
  #[must_use]
  pub fn has_symbolic_names(&self) -> bool {
    !self.var_names.is_empty()
  }

  /// Pairs each symbolic name with its value; names without a value are dropped.
  pub fn members(&self) -> impl Iterator<Item = (&str, &EnumValue)> {
    self.var_names.iter().map(String::as_str).zip(&self.values)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumValue {
  String(String),
  Number(Number),
  Bool(bool),
  Null,
}

impl EnumValue {
  fn from_json(value: &Value) -> Option<Self> {
    match value {
      Value::String(s) => Some(Self::String(s.clone())),
      Value::Number(n) => Some(Self::Number(n.clone())),
      Value::Bool(b) => Some(Self::Bool(*b)),
      Value::Null => Some(Self::Null),
      Value::Array(_) | Value::Object(_) => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectShape {
  pub properties: IndexMap<String, SchemaNode>,
  pub required: IndexSet<String>,
  pub additional: Option<AdditionalProperties>,
}

impl ObjectShape {
  #[must_use]
  pub fn is_required(&self, key: &str) -> bool {
    self.required.contains(key)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
  /// `additionalProperties: true` or `{}`.
  Any,
  Schema(Box<SchemaNode>),
}

impl SchemaNode {
  #[must_use]
  pub fn new(kind: SchemaKind) -> Self {
    Self {
      description: None,
      kind,
    }
  }

  /// Classifies a raw JSON/YAML schema value.
  ///
  /// Precedence: reference, intersection, enumeration, array, object, primitive.
  #[must_use]
  pub fn classify(value: &Value) -> Self {
    let Value::Object(map) = value else {
      return Self::new(SchemaKind::Untyped);
    };

    Self {
      description: map.get(DESCRIPTION_KEY).and_then(Value::as_str).map(String::from),
      kind: classify_kind(map),
    }
  }
}

fn classify_kind(map: &Map<String, Value>) -> SchemaKind {
  let type_name = map.get(TYPE_KEY).and_then(Value::as_str);

  if let Some(target) = map.get(REF_KEY).and_then(Value::as_str)
    && !target.is_empty()
  {
    return SchemaKind::Reference(target.to_string());
  }

  if let Some(Value::Array(members)) = map.get(ALL_OF_KEY)
    && !members.is_empty()
  {
    return SchemaKind::Intersection(members.iter().map(SchemaNode::classify).collect());
  }

  if let Some(Value::Array(values)) = map.get(ENUM_KEY) {
    return SchemaKind::Enumeration(classify_enumeration(map, values));
  }

  let items = map.get(ITEMS_KEY).filter(|items| !items.is_null());
  if type_name == Some(ARRAY_TYPE) || items.is_some() {
    let item = items.map_or_else(|| SchemaNode::new(SchemaKind::Untyped), SchemaNode::classify);
    return SchemaKind::Array(Box::new(item));
  }

  let additional = map.get(ADDITIONAL_PROPERTIES_KEY).and_then(classify_additional);
  let properties = map.get(PROPERTIES_KEY).and_then(Value::as_object);
  if type_name == Some(OBJECT_TYPE) || properties.is_some() || additional.is_some() {
    return SchemaKind::Object(ObjectShape {
      properties: properties
        .map(|props| {
          props
            .iter()
            .map(|(key, prop)| (key.clone(), SchemaNode::classify(prop)))
            .collect()
        })
        .unwrap_or_default(),
      required: string_list(map.get(REQUIRED_KEY)).collect(),
      additional,
    });
  }

  match type_name {
    Some(name) => SchemaKind::Primitive(name.to_string()),
    None => SchemaKind::Untyped,
  }
}

fn classify_enumeration(map: &Map<String, Value>, values: &[Value]) -> Enumeration {
  let comments = map
    .get(ENUM_COMMENTS_KEY)
    .and_then(Value::as_object)
    .map(|comments| {
      comments
        .iter()
        .filter_map(|(name, comment)| comment.as_str().map(|c| (name.clone(), c.to_string())))
        .collect()
    })
    .unwrap_or_default();

  Enumeration {
    values: values.iter().filter_map(EnumValue::from_json).collect(),
    var_names: string_list(map.get(ENUM_VARNAMES_KEY)).collect(),
    comments,
  }
}

fn classify_additional(value: &Value) -> Option<AdditionalProperties> {
  match value {
    Value::Bool(true) => Some(AdditionalProperties::Any),
    Value::Object(map) if map.is_empty() => Some(AdditionalProperties::Any),
    Value::Object(_) => Some(AdditionalProperties::Schema(Box::new(SchemaNode::classify(value)))),
    _ => None,
  }
}

fn string_list(value: Option<&Value>) -> impl Iterator<Item = String> + '_ {
  value
    .and_then(Value::as_array)
    .into_iter()
    .flatten()
    .filter_map(Value::as_str)
    .map(String::from)
}
