use serde_json::json;

use crate::generator::{
  metrics::GenerationWarning,
  operation_registry::{HttpMethod, OperationRegistry},
};

#[test]
fn test_operations_in_document_order() {
  let document = json!({
    "paths": {
      "/pets": {
        "parameters": [],
        "summary": "not an operation",
        "get": { "operationId": "listPets" },
        "post": {},
        "x-extension": {}
      },
      "/pets/{id}": { "delete": { "description": "Remove a pet" } }
    }
  });

  let registry = OperationRegistry::new(&document);
  let entries: Vec<_> = registry
    .operations()
    .map(|entry| (entry.name.as_str(), entry.method, entry.path.as_str()))
    .collect();

  assert_eq!(
    entries,
    vec![
      ("listPets", HttpMethod::Get, "/pets"),
      ("postPets", HttpMethod::Post, "/pets"),
      ("deletePets", HttpMethod::Delete, "/pets/{id}"),
    ]
  );
  assert_eq!(registry.len(), 3);
  assert!(registry.warnings().is_empty());
}

#[test]
fn test_duplicate_names_get_suffixes() {
  let document = json!({
    "paths": {
      "/a": { "get": { "operationId": "fetch" } },
      "/b": { "get": { "operationId": "fetch" } },
      "/c": { "put": { "operationId": "fetch" } }
    }
  });

  let registry = OperationRegistry::new(&document);
  let names: Vec<_> = registry.operations().map(|entry| entry.name.as_str()).collect();

  assert_eq!(names, ["fetch", "fetch2", "fetch3"]);
  assert_eq!(
    registry.warnings()[0],
    GenerationWarning::DuplicateOperationName {
      method: "GET".into(),
      path: "/b".into(),
      name: "fetch".into(),
      renamed: "fetch2".into(),
    }
  );
  assert_eq!(registry.warnings().len(), 2);
}

#[test]
fn test_function_names_are_unique_after_sanitizing() {
  let document = json!({
    "paths": {
      "/a": { "get": { "operationId": "pet-list" } },
      "/b": { "get": { "operationId": "pet_list" } }
    }
  });

  let registry = OperationRegistry::new(&document);
  let names: Vec<_> = registry
    .operations()
    .map(|entry| (entry.name.as_str(), entry.function_name.as_str()))
    .collect();

  assert_eq!(names, [("pet-list", "pet_list"), ("pet_list", "pet_list2")]);
  assert_eq!(
    registry.warnings(),
    [GenerationWarning::DuplicateFunctionName {
      method: "GET".into(),
      path: "/b".into(),
      name: "pet_list".into(),
      renamed: "pet_list2".into(),
    }]
  );
}

#[test]
fn test_description_prefers_summary() {
  let document = json!({
    "paths": {
      "/a": {
        "get": { "summary": "Short", "description": "Long" },
        "put": { "summary": " ", "description": "Long" }
      }
    }
  });

  let registry = OperationRegistry::new(&document);
  let descriptions: Vec<_> = registry.operations().map(|entry| entry.description()).collect();
  assert_eq!(descriptions, [Some("Short"), Some("Long")]);
}

#[test]
fn test_document_without_paths() {
  let document = json!({ "definitions": {} });
  let registry = OperationRegistry::new(&document);
  assert!(registry.is_empty());
}

#[test]
fn test_write_methods() {
  assert!(HttpMethod::Post.is_write());
  assert!(HttpMethod::Put.is_write());
  assert!(!HttpMethod::Patch.is_write());
  assert!(!HttpMethod::Get.is_write());
}
