use serde_json::json;

use crate::generator::{
  config::{ApiConfig, Config, DefinitionStyle, NameHook, ParameterNameHook},
  naming::NamingResolver,
  schema::{DefinitionRegistry, ParameterLocation, SchemaNode},
};

fn class_config() -> Config {
  Config::builder()
    .api(ApiConfig::builder().definition_style(DefinitionStyle::Class).build())
    .build()
}

#[test]
fn test_default_names() {
  let config = Config::default();
  let naming = NamingResolver::new(&config);

  assert_eq!(naming.declaration_name("pet"), "Pet");
  assert_eq!(naming.module_name("PetOwner"), "petOwner");
  assert_eq!(naming.wrapper_name("pet"), "PetClass");
  assert_eq!(naming.type_name("pet"), "Pet");
  assert_eq!(naming.reference_name("#/definitions/pet"), "Pet");
}

#[test]
fn test_wrapper_mode_references_use_wrapper_name() {
  let config = class_config();
  let naming = NamingResolver::new(&config);

  assert_eq!(naming.type_name("Pet"), "PetClass");
  assert_eq!(naming.reference_name("#/components/schemas/Pet"), "PetClass");
  assert_eq!(naming.declaration_name("Pet"), "Pet");
}

#[test]
fn test_hooks_take_precedence() {
  let config = Config::builder()
    .rename_definition(NameHook::new(|key| format!("I{key}")))
    .rename_module(NameHook::new(|key| key.to_lowercase()))
    .rename_wrapper(NameHook::new(|key| format!("{key}Model")))
    .build();
  let naming = NamingResolver::new(&config);

  assert_eq!(naming.declaration_name("Pet"), "IPet");
  assert_eq!(naming.module_name("PetOwner"), "petowner");
  assert_eq!(naming.wrapper_name("Pet"), "PetModel");
}

#[test]
fn test_parameter_group_name_without_collision() {
  let config = Config::default();
  let naming = NamingResolver::new(&config);
  let registry = DefinitionRegistry::default();

  assert_eq!(
    naming.parameter_group_name("getPets", ParameterLocation::Path, &registry),
    "GetPetsPath"
  );
  assert_eq!(
    naming.parameter_group_name("listPets", ParameterLocation::Query, &registry),
    "ListPetsQuery"
  );
}

#[test]
fn test_parameter_group_name_takes_first_free_suffix() {
  let config = Config::default();
  let naming = NamingResolver::new(&config);
  let mut registry = DefinitionRegistry::from_document(&json!({
    "definitions": {
      "GetPetsPath": { "type": "object" },
      "GetPetsPath0": { "type": "object" }
    }
  }));

  let first = naming.parameter_group_name("getPets", ParameterLocation::Path, &registry);
  assert_eq!(first, "GetPetsPath1");
  registry.insert_synthetic(first, SchemaNode::classify(&json!({ "type": "string" })));

  let second = naming.parameter_group_name("getPets", ParameterLocation::Path, &registry);
  assert_eq!(second, "GetPetsPath2", "names inserted earlier in the run must count as taken");
}

#[test]
fn test_parameter_hook_replaces_base_only() {
  let config = Config::builder()
    .rename_parameters(ParameterNameHook::new(|operation, location, _| {
      format!("{operation}_{location}")
    }))
    .build();
  let naming = NamingResolver::new(&config);
  let registry = DefinitionRegistry::from_document(&json!({ "definitions": { "getPets_query": {} } }));

  assert_eq!(
    naming.parameter_group_name("getPets", ParameterLocation::Query, &registry),
    "getPets_query0"
  );
}
