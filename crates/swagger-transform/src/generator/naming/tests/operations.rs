use crate::generator::naming::operations::{function_name, last_path_segment, operation_name};

#[test]
fn test_last_path_segment_skips_templates() {
  assert_eq!(last_path_segment("/pets/{id}"), "pets");
  assert_eq!(last_path_segment("/stores/{storeId}/pets/{petId}"), "pets");
  assert_eq!(last_path_segment("/pets/"), "pets");
  assert_eq!(last_path_segment("/"), "");
  assert_eq!(last_path_segment("/{id}"), "");
}

#[test]
fn test_operation_name_prefers_operation_id() {
  assert_eq!(operation_name(Some("findPetById"), "get", "/pets/{id}"), "findPetById");
  assert_eq!(operation_name(None, "get", "/pets/{id}"), "getPets");
  assert_eq!(operation_name(Some("  "), "post", "/store/order"), "postOrder");
  assert_eq!(operation_name(None, "delete", "/"), "delete");
}

#[test]
fn test_function_name_is_identifier() {
  assert_eq!(function_name("getPets"), "getPets");
  assert_eq!(function_name("pets.list"), "pets_list");
  assert_eq!(function_name("list-pets"), "list_pets");
}
