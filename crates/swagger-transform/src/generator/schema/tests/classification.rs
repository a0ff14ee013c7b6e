use serde_json::json;

use crate::generator::schema::{AdditionalProperties, EnumValue, SchemaKind, SchemaNode};

#[test]
fn test_reference_wins_over_other_shapes() {
  let node = SchemaNode::classify(&json!({
    "$ref": "#/definitions/Pet",
    "type": "object",
    "properties": { "id": { "type": "integer" } }
  }));
  assert_eq!(node.kind, SchemaKind::Reference("#/definitions/Pet".to_string()));
}

#[test]
fn test_empty_ref_is_ignored() {
  let node = SchemaNode::classify(&json!({ "$ref": "", "type": "string" }));
  assert_eq!(node.kind, SchemaKind::Primitive("string".to_string()));
}

#[test]
fn test_all_of_wins_over_enum_and_items() {
  let node = SchemaNode::classify(&json!({
    "allOf": [{ "$ref": "#/definitions/Base" }, { "type": "object", "properties": {} }],
    "enum": ["a"],
    "items": { "type": "string" }
  }));
  let SchemaKind::Intersection(members) = node.kind else {
    panic!("expected intersection, got {:?}", node.kind)
  };
  assert_eq!(members.len(), 2);
  assert_eq!(members[0].kind, SchemaKind::Reference("#/definitions/Base".to_string()));
  assert!(matches!(members[1].kind, SchemaKind::Object(_)));
}

#[test]
fn test_empty_all_of_falls_through() {
  let node = SchemaNode::classify(&json!({ "allOf": [], "type": "boolean" }));
  assert_eq!(node.kind, SchemaKind::Primitive("boolean".to_string()));
}

#[test]
fn test_enum_with_side_tables() {
  let node = SchemaNode::classify(&json!({
    "type": "integer",
    "enum": [1, 2],
    "x-enum-varnames": ["RED", "GREEN"],
    "x-enum-comments": { "RED": "Stop" }
  }));
  let SchemaKind::Enumeration(enumeration) = node.kind else {
    panic!("expected enumeration")
  };
  assert_eq!(enumeration.values, vec![EnumValue::Number(1.into()), EnumValue::Number(2.into())]);
  assert_eq!(enumeration.var_names, ["RED", "GREEN"]);
  assert_eq!(enumeration.comments.get("RED").map(String::as_str), Some("Stop"));
  assert!(enumeration.has_symbolic_names());
}

#[test]
fn test_enum_skips_structured_values() {
  let node = SchemaNode::classify(&json!({ "enum": ["a", { "nested": true }, null, false] }));
  let SchemaKind::Enumeration(enumeration) = node.kind else {
    panic!("expected enumeration")
  };
  assert_eq!(
    enumeration.values,
    vec![
      EnumValue::String("a".to_string()),
      EnumValue::Null,
      EnumValue::Bool(false)
    ]
  );
}

#[test]
fn test_items_without_array_type_is_array() {
  let node = SchemaNode::classify(&json!({ "items": { "type": "string" } }));
  assert_eq!(node.kind, SchemaKind::Array(Box::new(SchemaNode::classify(&json!({ "type": "string" })))));
}

#[test]
fn test_array_without_items_has_untyped_item() {
  let node = SchemaNode::classify(&json!({ "type": "array" }));
  assert_eq!(node.kind, SchemaKind::Array(Box::new(SchemaNode::new(SchemaKind::Untyped))));
}

#[test]
fn test_object_collects_properties_and_required() {
  let node = SchemaNode::classify(&json!({
    "description": "A pet",
    "properties": {
      "id": { "type": "integer" },
      "name": { "type": "string", "description": "Display name" }
    },
    "required": ["id", 7]
  }));
  assert_eq!(node.description.as_deref(), Some("A pet"));
  let SchemaKind::Object(shape) = node.kind else {
    panic!("expected object")
  };
  assert_eq!(shape.properties.keys().collect::<Vec<_>>(), ["id", "name"]);
  assert!(shape.is_required("id"));
  assert!(!shape.is_required("name"));
  assert_eq!(shape.properties["name"].description.as_deref(), Some("Display name"));
  assert!(shape.additional.is_none());
}

#[test]
fn test_boolean_required_is_ignored() {
  let node = SchemaNode::classify(&json!({ "type": "object", "required": true }));
  let SchemaKind::Object(shape) = node.kind else {
    panic!("expected object")
  };
  assert!(shape.required.is_empty());
}

#[test]
fn test_additional_properties_variants() {
  let any = SchemaNode::classify(&json!({ "additionalProperties": true }));
  let SchemaKind::Object(shape) = any.kind else {
    panic!("expected object")
  };
  assert_eq!(shape.additional, Some(AdditionalProperties::Any));

  let typed = SchemaNode::classify(&json!({ "type": "object", "additionalProperties": { "type": "integer" } }));
  let SchemaKind::Object(shape) = typed.kind else {
    panic!("expected object")
  };
  assert_eq!(
    shape.additional,
    Some(AdditionalProperties::Schema(Box::new(SchemaNode::classify(&json!({ "type": "integer" })))))
  );

  let closed = SchemaNode::classify(&json!({ "type": "object", "additionalProperties": false }));
  let SchemaKind::Object(shape) = closed.kind else {
    panic!("expected object")
  };
  assert!(shape.additional.is_none());
}

#[test]
fn test_unrecognized_shapes_are_untyped() {
  assert_eq!(SchemaNode::classify(&json!({ "format": "date" })).kind, SchemaKind::Untyped);
  assert_eq!(SchemaNode::classify(&json!("string")).kind, SchemaKind::Untyped);
  assert_eq!(SchemaNode::classify(&json!({ "type": ["string", "null"] })).kind, SchemaKind::Untyped);
}
