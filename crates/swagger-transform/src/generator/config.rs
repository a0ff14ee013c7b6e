use std::{
  fmt,
  path::{Path, PathBuf},
  sync::Arc,
};

use indexmap::IndexMap;
use serde::Deserialize;
use strum::{Display, EnumString};

use crate::{
  Result, TransformError,
  generator::{
    ast::FunctionSignature,
    schema::{DefinitionRegistry, ParameterLocation},
  },
};

pub const DEFAULT_OUT_DIR: &str = "swagger";
pub const DEFAULT_API_FILE_NAME: &str = "apis";
pub const DEFAULT_API_EXPORT_NAME: &str = "Apis";
pub const DEFAULT_API_TYPE_FILE_NAME: &str = "allApis";
pub const DEFAULT_API_TYPE_NAME: &str = "AllApis";
pub const DEFAULT_FUNCTION_FILE_NAME: &str = "repository";
pub const DEFAULT_FUNCTION_IMPORT: &str = "import request from './request'";

const NUMBER_TYPE: &str = "number";
const DEFAULT_NUMERIC_TYPES: [&str; 6] = ["integer", "long", "float", "double", "int32", "int64"];

/// Input of a generation run.
///
/// Never mutated once built; every component borrows it.
#[derive(Debug, Clone, bon::Builder)]
pub struct Config {
  /// Paths or `http(s)://` URLs of the source documents, merged in order.
  #[builder(default)]
  pub entry: Vec<String>,
  #[builder(into, default = PathBuf::from(DEFAULT_OUT_DIR))]
  pub out_dir: PathBuf,
  /// Emit an `index.ts` barrel.
  #[builder(default)]
  pub index: bool,
  /// Header placed at the top of every generated file.
  #[builder(into)]
  pub description: Option<String>,
  #[builder(default)]
  pub type_map: TypeMap,
  /// Route map, contract and request functions are only generated when set.
  pub api: Option<ApiConfig>,
  pub rename_parameters: Option<ParameterNameHook>,
  pub rename_definition: Option<NameHook>,
  pub rename_wrapper: Option<NameHook>,
  pub rename_module: Option<NameHook>,
}

impl Default for Config {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl Config {
  pub fn validate(&self) -> Result<()> {
    if self.entry.iter().all(|entry| entry.trim().is_empty()) {
      return Err(TransformError::MissingEntry);
    }
    Ok(())
  }

  /// Wrapper mode pairs every declaration with a runtime class.
  #[must_use]
  pub fn wrapper_mode(&self) -> bool {
    self
      .api
      .as_ref()
      .is_some_and(|api| api.definition_style == DefinitionStyle::Class)
  }

  /// Directory of the route map and function modules; falls back to `out_dir`.
  #[must_use]
  pub fn api_out_dir(&self) -> &Path {
    self
      .api
      .as_ref()
      .and_then(|api| api.out_dir.as_deref())
      .unwrap_or(&self.out_dir)
  }
}

#[derive(Debug, Clone, bon::Builder)]
pub struct ApiConfig {
  #[builder(into, default = DEFAULT_API_FILE_NAME.to_string())]
  pub file_name: String,
  #[builder(into, default = DEFAULT_API_EXPORT_NAME.to_string())]
  pub export_name: String,
  #[builder(into, default = DEFAULT_API_TYPE_FILE_NAME.to_string())]
  pub type_file_name: String,
  #[builder(into, default = DEFAULT_API_TYPE_NAME.to_string())]
  pub type_name: String,
  #[builder(into)]
  pub out_dir: Option<PathBuf>,
  #[builder(default)]
  pub definition_style: DefinitionStyle,
  /// Generate typed request functions.
  #[builder(default)]
  pub function: bool,
  #[builder(into, default = DEFAULT_FUNCTION_FILE_NAME.to_string())]
  pub function_file_name: String,
  /// First line of the function module, expected to bind `request`.
  #[builder(into, default = DEFAULT_FUNCTION_IMPORT.to_string())]
  pub function_import: String,
  pub function_template: Option<FunctionTemplate>,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DefinitionStyle {
  /// Interfaces and aliases only.
  #[default]
  Type,
  /// Interfaces plus a companion class per declaration.
  Class,
}

/// Primitive type-name remap table.
///
/// Starts from the numeric defaults; user entries replace defaults per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap(IndexMap<String, String>);

impl Default for TypeMap {
  fn default() -> Self {
    Self(
      DEFAULT_NUMERIC_TYPES
        .iter()
        .map(|name| ((*name).to_string(), NUMBER_TYPE.to_string()))
        .collect(),
    )
  }
}

impl TypeMap {
  #[must_use]
  pub fn with_overrides<K, V>(overrides: impl IntoIterator<Item = (K, V)>) -> Self
  where
    K: Into<String>,
    V: Into<String>,
  {
    let mut map = Self::default();
    map.extend(overrides);
    map
  }

  pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
    self.0.insert(from.into(), to.into());
  }

  pub fn extend<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
  where
    K: Into<String>,
    V: Into<String>,
  {
    for (from, to) in entries {
      self.insert(from, to);
    }
  }

  /// Maps a source type name; unmapped names pass through.
  #[must_use]
  pub fn map<'a>(&'a self, name: &'a str) -> &'a str {
    self.0.get(name).map_or(name, String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(from, to)| (from.as_str(), to.as_str()))
  }
}

type NameFn = dyn Fn(&str) -> String + Send + Sync;
type ParameterNameFn = dyn Fn(&str, ParameterLocation, &DefinitionRegistry) -> String + Send + Sync;
type FunctionTemplateFn = dyn Fn(&FunctionSignature) -> String + Send + Sync;

/// Replaces a default naming rule for definition keys.
#[derive(Clone)]
pub struct NameHook(Arc<NameFn>);

impl NameHook {
  pub fn new(hook: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
    Self(Arc::new(hook))
  }

  #[must_use]
  pub fn apply(&self, key: &str) -> String {
    (self.0)(key)
  }
}

impl fmt::Debug for NameHook {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("NameHook(..)")
  }
}

/// Replaces the base name of a synthetic parameter group.
///
/// Receives the operation name, the parameter location and the registry as it
/// stands when the group is created. The collision suffix is still applied to
/// whatever the hook returns.
#[derive(Clone)]
pub struct ParameterNameHook(Arc<ParameterNameFn>);

impl ParameterNameHook {
  pub fn new(hook: impl Fn(&str, ParameterLocation, &DefinitionRegistry) -> String + Send + Sync + 'static) -> Self {
    Self(Arc::new(hook))
  }

  #[must_use]
  pub fn apply(&self, operation: &str, location: ParameterLocation, registry: &DefinitionRegistry) -> String {
    (self.0)(operation, location, registry)
  }
}

impl fmt::Debug for ParameterNameHook {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("ParameterNameHook(..)")
  }
}

/// Renders one request function in place of the default body.
#[derive(Clone)]
pub struct FunctionTemplate(Arc<FunctionTemplateFn>);

impl FunctionTemplate {
  pub fn new(template: impl Fn(&FunctionSignature) -> String + Send + Sync + 'static) -> Self {
    Self(Arc::new(template))
  }

  #[must_use]
  pub fn render(&self, signature: &FunctionSignature) -> String {
    (self.0)(signature)
  }
}

impl fmt::Debug for FunctionTemplate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("FunctionTemplate(..)")
  }
}
