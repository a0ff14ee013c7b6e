use indexmap::IndexMap;
use serde_json::{Map, Value, json};

use super::{ImportSet, Resolved, TypeResolver};
use crate::generator::{
  ast::{FunctionSignature, PropItem, TsType},
  config::Config,
  metrics::{GenerationStats, GenerationWarning},
  naming::NamingResolver,
  operation_registry::{HttpMethod, OperationEntry, OperationRegistry},
  schema::{DefinitionRegistry, ParameterLocation, REF_KEY, SchemaNode},
};

const PARAMETERS_KEY: &str = "parameters";
const REQUEST_BODY_KEY: &str = "requestBody";
const RESPONSES_KEY: &str = "responses";
const CONTENT_KEY: &str = "content";
const SCHEMA_KEY: &str = "schema";
const IN_KEY: &str = "in";
const NAME_KEY: &str = "name";
const REQUIRED_KEY: &str = "required";

const SUCCESS_STATUS: &str = "200";
const JSON_MEDIA_TYPE: &str = "application/json";
const MULTIPART_MEDIA_TYPE: &str = "multipart/form-data";
const BODY_LOCATION: &str = "body";
const FORM_DATA_LOCATION: &str = "formData";

const MAX_REF_HOPS: usize = 16;

/// Typed description of one `path × method` operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationContract {
  /// Route-map key.
  pub name: String,
  pub function_name: String,
  pub path: String,
  pub method: HttpMethod,
  pub description: Option<String>,
  pub responses: Option<TsType>,
  pub header: Option<TsType>,
  pub path_params: Option<TsType>,
  pub query: Option<TsType>,
  pub body: Option<TsType>,
  /// The operation accepts `multipart/form-data`.
  pub multipart: bool,
  pub imports: ImportSet,
}

impl OperationContract {
  /// Body type for `post`/`put`, query type otherwise, `undefined` when neither exists.
  ///
  /// A multipart operation without a query falls back to `FormData`.
  #[must_use]
  pub fn payload(&self) -> TsType {
    let slot = if self.method.is_write() {
      self.body.clone()
    } else {
      self
        .query
        .clone()
        .or_else(|| self.multipart.then(|| TsType::named(TsType::FORM_DATA)))
    };
    slot.unwrap_or_else(TsType::undefined)
  }

  /// `{ responses, header?, path?, query?, body? }` with absent slots omitted.
  #[must_use]
  pub fn contract_type(&self) -> TsType {
    let responses = self.responses.clone().unwrap_or_else(TsType::undefined);
    let slots = [
      ("header", &self.header),
      ("path", &self.path_params),
      ("query", &self.query),
      ("body", &self.body),
    ];

    let mut properties = vec![slot_property("responses", responses)];
    properties.extend(
      slots
        .into_iter()
        .filter_map(|(key, ty)| ty.clone().map(|ty| slot_property(key, ty))),
    );
    TsType::Object(properties)
  }

  #[must_use]
  pub fn signature(&self) -> FunctionSignature {
    let render = |ty: &Option<TsType>| ty.as_ref().map_or_else(|| TsType::UNDEFINED.to_string(), |ty| ty.render(0));

    FunctionSignature::builder()
      .name(&self.function_name)
      .route_key(&self.name)
      .method(self.method.to_string())
      .maybe_description(self.description.clone())
      .payload(self.payload().render(0))
      .path(render(&self.path_params))
      .header(render(&self.header))
      .responses(render(&self.responses))
      .build()
  }
}

fn slot_property(key: &str, ty: TsType) -> PropItem {
  PropItem {
    key: key.to_string(),
    ty,
    required: true,
    description: None,
  }
}

/// Operations sharing one literal path, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct PathGroup {
  pub path: String,
  pub operations: Vec<OperationContract>,
}

/// Walks every operation, materializing parameter groups into the registry.
#[derive(Debug, Clone, Copy)]
pub struct PathTransformer<'a> {
  naming: NamingResolver<'a>,
  resolver: TypeResolver<'a>,
}

impl<'a> PathTransformer<'a> {
  #[must_use]
  pub fn new(config: &'a Config) -> Self {
    Self {
      naming: NamingResolver::new(config),
      resolver: TypeResolver::new(config),
    }
  }

  /// Converts all operations of `document`.
  ///
  /// Must run before definitions are emitted: synthetic parameter groups are
  /// inserted into `registry` as each operation is processed, so later groups
  /// see the names taken by earlier ones.
  pub fn transform(
    &self,
    document: &Value,
    registry: &mut DefinitionRegistry,
    stats: &mut GenerationStats,
  ) -> Vec<PathGroup> {
    let operations = OperationRegistry::new(document);
    stats.record_warnings(operations.warnings().iter().cloned());

    let mut groups: IndexMap<String, Vec<OperationContract>> = IndexMap::new();
    for entry in operations.operations() {
      let contract = self.transform_operation(document, entry, registry, stats);
      stats.record_operation();
      groups.entry(entry.path.clone()).or_default().push(contract);
    }

    groups
      .into_iter()
      .map(|(path, operations)| PathGroup { path, operations })
      .collect()
  }

  fn transform_operation<'d>(
    &self,
    document: &'d Value,
    entry: &OperationEntry<'d>,
    registry: &mut DefinitionRegistry,
    stats: &mut GenerationStats,
  ) -> OperationContract {
    let parameters = merged_parameters(document, entry);
    let request_body = entry.operation.get(REQUEST_BODY_KEY).map(|body| dereference(document, body));

    let mut imports = ImportSet::new();
    let mut take = |resolved: Resolved| {
      imports.extend(resolved.imports);
      resolved.ty
    };

    let responses = take(self.response_type(document, entry.operation));
    let mut body = take(self.body_type(request_body, &parameters));
    let header = take(self.parameter_group(entry, ParameterLocation::Header, &parameters, registry, stats));
    let path_params = take(self.parameter_group(entry, ParameterLocation::Path, &parameters, registry, stats));
    let query = take(self.parameter_group(entry, ParameterLocation::Query, &parameters, registry, stats));

    let multipart = is_multipart(request_body, &parameters);
    if multipart && body.is_none() {
      body = Some(TsType::named(TsType::FORM_DATA));
    }

    OperationContract {
      name: entry.name.clone(),
      function_name: entry.function_name.clone(),
      path: entry.path.clone(),
      method: entry.method,
      description: entry.description().map(String::from),
      responses,
      header,
      path_params,
      query,
      body,
      multipart,
      imports,
    }
  }

  fn response_type(&self, document: &Value, operation: &Map<String, Value>) -> Resolved {
    operation
      .get(RESPONSES_KEY)
      .and_then(|responses| responses.get(SUCCESS_STATUS))
      .map(|response| dereference(document, response))
      .and_then(|response| json_schema(response).or_else(|| response.get(SCHEMA_KEY)))
      .map(|schema| self.resolver.resolve(&SchemaNode::classify(schema)))
      .unwrap_or_default()
  }

  fn body_type(&self, request_body: Option<&Value>, parameters: &[&Map<String, Value>]) -> Resolved {
    request_body
      .and_then(json_schema)
      .or_else(|| {
        parameters
          .iter()
          .find(|param| location_of(param) == Some(BODY_LOCATION))
          .and_then(|param| param.get(SCHEMA_KEY))
      })
      .map(|schema| self.resolver.resolve(&SchemaNode::classify(schema)))
      .unwrap_or_default()
  }

  /// Materializes the `location` parameters as a synthetic object definition
  /// and resolves a reference to it.
  fn parameter_group(
    &self,
    entry: &OperationEntry<'_>,
    location: ParameterLocation,
    parameters: &[&Map<String, Value>],
    registry: &mut DefinitionRegistry,
    stats: &mut GenerationStats,
  ) -> Resolved {
    let location_name = location.to_string();
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in parameters.iter().filter(|param| location_of(param) == Some(location_name.as_str())) {
      let Some(name) = param.get(NAME_KEY).and_then(Value::as_str) else {
        stats.record_warning(GenerationWarning::MissingParameterName {
          method: entry.method.to_string().to_uppercase(),
          path: entry.path.clone(),
          location: location_name.clone(),
        });
        continue;
      };

      if param.get(REQUIRED_KEY).and_then(Value::as_bool) == Some(true) {
        required.push(Value::String(name.to_string()));
      }
      properties.insert(name.to_string(), Value::Object(flatten_parameter(param)));
    }

    if properties.is_empty() {
      return Resolved::default();
    }

    let schema = json!({
      "type": "object",
      "required": required,
      "properties": properties,
    });
    let key = self.naming.parameter_group_name(&entry.name, location, registry);
    registry.insert_synthetic(key.clone(), SchemaNode::classify(&schema));
    stats.record_parameter_group();

    self.resolver.resolve_key(&key)
  }
}

/// Path-level parameters followed by operation-level ones; an operation-level
/// parameter replaces a path-level one with the same `(name, in)`.
fn merged_parameters<'d>(document: &'d Value, entry: &OperationEntry<'d>) -> Vec<&'d Map<String, Value>> {
  let path_level = parameter_list(document, entry.path_item);
  let operation_level = parameter_list(document, entry.operation);

  let mut merged: Vec<&Map<String, Value>> = Vec::with_capacity(path_level.len() + operation_level.len());
  for param in path_level.into_iter().chain(operation_level) {
    let identity = parameter_identity(param);
    let existing = identity.and_then(|identity| {
      merged
        .iter()
        .position(|other| parameter_identity(other) == Some(identity))
    });
    match existing {
      Some(index) => merged[index] = param,
      None => merged.push(param),
    }
  }
  merged
}

fn parameter_list<'d>(document: &'d Value, owner: &'d Map<String, Value>) -> Vec<&'d Map<String, Value>> {
  owner
    .get(PARAMETERS_KEY)
    .and_then(Value::as_array)
    .into_iter()
    .flatten()
    .filter_map(|param| dereference(document, param).as_object())
    .collect()
}

fn parameter_identity(param: &Map<String, Value>) -> Option<(&str, &str)> {
  Some((param.get(NAME_KEY)?.as_str()?, location_of(param)?))
}

fn location_of(param: &Map<String, Value>) -> Option<&str> {
  param.get(IN_KEY).and_then(Value::as_str)
}

/// The parameter's own fields overlaid with those of its nested `schema`.
fn flatten_parameter(param: &Map<String, Value>) -> Map<String, Value> {
  let mut merged = param.clone();
  if let Some(Value::Object(schema)) = merged.remove(SCHEMA_KEY) {
    merged.extend(schema);
  }
  merged
}

fn json_schema(container: &Value) -> Option<&Value> {
  container.get(CONTENT_KEY)?.get(JSON_MEDIA_TYPE)?.get(SCHEMA_KEY)
}

fn is_multipart(request_body: Option<&Value>, parameters: &[&Map<String, Value>]) -> bool {
  let form_parameter = parameters
    .iter()
    .any(|param| location_of(param) == Some(FORM_DATA_LOCATION));
  let multipart_body = request_body.and_then(|body| body.get(CONTENT_KEY)).is_some_and(|content| {
    content.get(MULTIPART_MEDIA_TYPE).is_some() && content.get(JSON_MEDIA_TYPE).is_none()
  });
  form_parameter || multipart_body
}

/// Follows local `$ref` pointers (`#/...`) until a non-reference node is reached.
///
/// Unresolvable pointers yield the reference object itself.
pub(crate) fn dereference<'d>(document: &'d Value, value: &'d Value) -> &'d Value {
  let mut current = value;
  for _ in 0..MAX_REF_HOPS {
    let Some(target) = current
      .get(REF_KEY)
      .and_then(Value::as_str)
      .and_then(|reference| reference.strip_prefix('#'))
      .and_then(|pointer| document.pointer(pointer))
    else {
      break;
    };
    current = target;
  }
  current
}
