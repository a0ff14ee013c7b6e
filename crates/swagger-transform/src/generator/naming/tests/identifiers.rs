use std::collections::BTreeSet;

use crate::generator::naming::identifiers::{
  capitalize, ensure_unique, is_plain_field, property_key, quote_string, ref_key, sanitize_identifier, uncapitalize,
};

#[test]
fn test_capitalize_and_uncapitalize() {
  assert_eq!(capitalize("pet"), "Pet");
  assert_eq!(capitalize("Pet"), "Pet");
  assert_eq!(capitalize("éclair"), "Éclair");
  assert_eq!(capitalize(""), "");
  assert_eq!(uncapitalize("PetOwner"), "petOwner");
  assert_eq!(uncapitalize("URL"), "uRL");
  assert_eq!(uncapitalize(""), "");
}

#[test]
fn test_sanitize_identifier() {
  let cases = [
    ("Pet", "Pet"),
    ("PageResult«Pet»", "PageResult_Pet_"),
    ("Map<String,Pet>", "Map_String_Pet_"),
    ("pet.v1.Owner", "pet_v1_Owner"),
    ("$meta_data", "$meta_data"),
    ("1stPlace", "_1stPlace"),
    ("", "Unnamed"),
  ];
  for (input, expected) in cases {
    assert_eq!(sanitize_identifier(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_property_key_quotes_non_identifiers() {
  assert_eq!(property_key("name"), "name");
  assert_eq!(property_key("_private"), "_private");
  assert_eq!(property_key("x-request-id"), "'x-request-id'");
  assert_eq!(property_key("/pets/{id}"), "'/pets/{id}'");
  assert_eq!(property_key("2fa"), "'2fa'");
}

#[test]
fn test_plain_field_detection() {
  assert!(is_plain_field("name"));
  assert!(is_plain_field("petId2"));
  assert!(!is_plain_field("pet_id"));
  assert!(!is_plain_field("x-trace"));
  assert!(!is_plain_field("9lives"));
}

#[test]
fn test_quote_string_escapes() {
  assert_eq!(quote_string("plain"), "'plain'");
  assert_eq!(quote_string("it's"), r"'it\'s'");
  assert_eq!(quote_string(r"a\b"), r"'a\\b'");
}

#[test]
fn test_ref_key_takes_last_segment() {
  assert_eq!(ref_key("#/definitions/Pet"), "Pet");
  assert_eq!(ref_key("#/components/schemas/Pet"), "Pet");
  assert_eq!(ref_key("#/definitions/a~1b~0c"), "a/b~c");
  assert_eq!(ref_key("Pet"), "Pet");
}

#[test]
fn test_ensure_unique_handles_collisions() {
  let used: BTreeSet<String> = ["getPets", "getPets2"].into_iter().map(String::from).collect();
  assert_eq!(ensure_unique("listPets", &used), "listPets");
  assert_eq!(ensure_unique("getPets", &used), "getPets3");
}
