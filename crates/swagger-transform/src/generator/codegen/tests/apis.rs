use std::path::Path;

use serde_json::{Value, json};

use crate::generator::{
  codegen::{ApiEmitter, render_index},
  config::{ApiConfig, Config, FunctionTemplate},
  converter::{PathGroup, PathTransformer},
  metrics::{GenerationStats, GenerationWarning},
  schema::DefinitionRegistry,
};

fn petstore() -> Value {
  json!({
    "definitions": {
      "Pet": { "type": "object", "properties": { "id": { "type": "integer" } } },
      "NewPet": { "type": "object", "properties": { "name": { "type": "string" } } }
    },
    "paths": {
      "/pets/{id}": {
        "get": {
          "summary": "Find pet",
          "parameters": [{ "in": "path", "name": "id", "type": "string", "required": true }],
          "responses": { "200": { "schema": { "$ref": "#/definitions/Pet" } } }
        }
      },
      "/pets": {
        "post": {
          "operationId": "add-pet",
          "parameters": [{ "in": "body", "name": "body", "schema": { "$ref": "#/definitions/NewPet" } }]
        }
      }
    }
  })
}

struct Prepared {
  groups: Vec<PathGroup>,
  registry: DefinitionRegistry,
  stats: GenerationStats,
}

fn prepare(config: &Config, document: &Value) -> Prepared {
  let mut registry = DefinitionRegistry::from_document(document);
  let mut stats = GenerationStats::default();
  let groups = PathTransformer::new(config).transform(document, &mut registry, &mut stats);
  Prepared { groups, registry, stats }
}

fn api_config(api: ApiConfig) -> Config {
  Config::builder().api(api).build()
}

fn api_of(config: &Config) -> &ApiConfig {
  config.api.as_ref().unwrap()
}

#[test]
fn test_route_map() {
  let config = api_config(ApiConfig::default());
  let prepared = prepare(&config, &petstore());

  let file = ApiEmitter::new(&config, api_of(&config)).route_map(&prepared.groups);

  assert_eq!(file.path, Path::new("swagger").join("apis.ts"));
  assert_eq!(
    file.content,
    "export const Apis = {\n  /** Find pet */\n  getPets: '/pets/{id}',\n  'add-pet': '/pets',\n} as const\n"
  );
}

#[test]
fn test_route_map_honors_api_out_dir() {
  let config = api_config(ApiConfig::builder().out_dir("src/api").file_name("routes").build());
  let prepared = prepare(&config, &petstore());

  let file = ApiEmitter::new(&config, api_of(&config)).route_map(&prepared.groups);
  assert_eq!(file.path, Path::new("src/api").join("routes.ts"));
}

#[test]
fn test_contract() {
  let config = api_config(ApiConfig::default());
  let mut prepared = prepare(&config, &petstore());

  let file = ApiEmitter::new(&config, api_of(&config)).contract(&prepared.groups, &prepared.registry, &mut prepared.stats);

  let expected = "\
import type { GetPetsPath } from './getPetsPath'
import type { NewPet } from './newPet'
import type { Pet } from './pet'

export interface AllApis {
  '/pets/{id}': {
    /** Find pet */
    get: {
      responses: Pet
      path: GetPetsPath
    }
  }
  '/pets': {
    post: {
      responses: undefined
      body: NewPet
    }
  }
}
";
  assert_eq!(file.path, Path::new("swagger").join("allApis.ts"));
  assert_eq!(file.content, expected);
  assert!(prepared.stats.warnings.is_empty());
}

#[test]
fn test_contract_reports_unknown_imports() {
  let config = api_config(ApiConfig::default());
  let document = json!({
    "paths": { "/a": { "get": { "responses": { "200": { "schema": { "$ref": "#/definitions/Gone" } } } } } }
  });
  let mut prepared = prepare(&config, &document);

  let file = ApiEmitter::new(&config, api_of(&config)).contract(&prepared.groups, &prepared.registry, &mut prepared.stats);

  assert!(!file.content.contains("import"), "unknown keys are not imported");
  assert_eq!(
    prepared.stats.warnings,
    vec![GenerationWarning::UnknownReference {
      key: "AllApis".into(),
      target: "Gone".into(),
    }]
  );
}

#[test]
fn test_default_functions() {
  let config = api_config(ApiConfig::builder().function(true).build());
  let mut prepared = prepare(&config, &petstore());

  let file =
    ApiEmitter::new(&config, api_of(&config)).functions(&prepared.groups, &prepared.registry, &mut prepared.stats);

  let expected = "\
import request from './request'
import { Apis } from './apis'
import type { GetPetsPath } from './getPetsPath'
import type { NewPet } from './newPet'
import type { Pet } from './pet'

/** Find pet */
export function getPets(payload: undefined, path: GetPetsPath, config?: Record<string, any>) {
  return request<Pet>('get', Apis.getPets, payload, path, config)
}

export function add_pet(payload: NewPet, path?: undefined, config?: Record<string, any>) {
  return request<undefined>('post', Apis['add-pet'], payload, path, config)
}
";
  assert_eq!(file.path, Path::new("swagger").join("repository.ts"));
  assert_eq!(file.content, expected);
  assert_eq!(prepared.stats.functions_generated, 2);
}

#[test]
fn test_functions_without_any_payload_are_fully_optional() {
  let config = api_config(ApiConfig::builder().function(true).build());
  let document = json!({ "paths": { "/ping": { "get": {} } } });
  let mut prepared = prepare(&config, &document);

  let file =
    ApiEmitter::new(&config, api_of(&config)).functions(&prepared.groups, &prepared.registry, &mut prepared.stats);

  assert!(file.content.contains(
    "export function getPing(payload?: undefined, path?: undefined, config?: Record<string, any>) {"
  ));
}

#[test]
fn test_sanitized_function_names_stay_unique() {
  let config = api_config(ApiConfig::builder().function(true).build());
  let document = json!({
    "paths": {
      "/a": { "get": { "operationId": "pet-list" } },
      "/b": { "get": { "operationId": "pet_list" } }
    }
  });
  let mut prepared = prepare(&config, &document);

  let file =
    ApiEmitter::new(&config, api_of(&config)).functions(&prepared.groups, &prepared.registry, &mut prepared.stats);

  assert_eq!(file.content.matches("export function pet_list(").count(), 1);
  assert!(file.content.contains("export function pet_list2("));
  assert!(file.content.contains("Apis['pet-list']"));
  assert!(file.content.contains("Apis.pet_list,"));
}

#[test]
fn test_function_template_replaces_body() {
  let template = FunctionTemplate::new(|signature| {
    format!(
      "export const {} = (payload: {}) => http.{}<{}>({})",
      signature.name, signature.payload, signature.method, signature.responses, signature.route_key
    )
  });
  let config = api_config(
    ApiConfig::builder()
      .function(true)
      .function_import("import http from '@/http'")
      .out_dir("src/api")
      .function_template(template)
      .build(),
  );
  let mut prepared = prepare(&config, &petstore());

  let file =
    ApiEmitter::new(&config, api_of(&config)).functions(&prepared.groups, &prepared.registry, &mut prepared.stats);

  let expected = "\
import http from '@/http'
import { Apis } from './apis'
import type { GetPetsPath } from '../../swagger/getPetsPath'
import type { NewPet } from '../../swagger/newPet'
import type { Pet } from '../../swagger/pet'

export const getPets = (payload: undefined) => http.get<Pet>(getPets)

export const add_pet = (payload: NewPet) => http.post<undefined>(add-pet)
";
  assert_eq!(file.path, Path::new("src/api").join("repository.ts"));
  assert_eq!(file.content, expected);
}

#[test]
fn test_index_lists_contract_first() {
  let config = Config::builder().index(true).api(ApiConfig::default()).build();

  let file = render_index(&config, ["pet", "newPet"]);

  assert_eq!(file.path, Path::new("swagger").join("index.ts"));
  assert_eq!(
    file.content,
    "export * from './allApis'\nexport * from './pet'\nexport * from './newPet'\n"
  );
}

#[test]
fn test_index_without_api() {
  let config = Config::builder().index(true).build();
  let file = render_index(&config, ["pet"]);
  assert_eq!(file.content, "export * from './pet'\n");
}
