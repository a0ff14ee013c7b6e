use std::path::{Path, PathBuf};

use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;
use swagger_transform::{DefinitionStyle, utils::SpecFormat};

/// Settings read from `--config`.
///
/// Keys are camelCase; every field is optional so the file can hold only the
/// settings a project wants to pin.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
  #[serde(default)]
  pub entry: Entries,
  pub out_dir: Option<PathBuf>,
  pub index: Option<bool>,
  pub description: Option<String>,
  #[serde(default)]
  pub type_map: IndexMap<String, String>,
  pub api: Option<ApiSection>,
}

/// `entry: swagger.json` or `entry: [a.json, b.yaml]`.
#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
pub enum Entries {
  #[default]
  None,
  One(String),
  Many(Vec<String>),
}

impl Entries {
  pub fn into_vec(self) -> Vec<String> {
    match self {
      Self::None => vec![],
      Self::One(entry) => vec![entry],
      Self::Many(entries) => entries,
    }
  }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ApiSection {
  pub file_name: Option<String>,
  pub export_name: Option<String>,
  pub type_file_name: Option<String>,
  pub type_name: Option<String>,
  pub out_dir: Option<PathBuf>,
  pub definition_style: Option<DefinitionStyle>,
  pub function: Option<bool>,
  pub function_file_name: Option<String>,
  pub function_import: Option<String>,
}

impl ConfigFile {
  pub async fn load(path: &Path) -> anyhow::Result<Self> {
    let contents = tokio::fs::read_to_string(path)
      .await
      .with_context(|| format!("Failed to read config file {}", path.display()))?;
    Self::parse(path, &contents)
  }

  fn parse(path: &Path, contents: &str) -> anyhow::Result<Self> {
    let format = path
      .extension()
      .and_then(|ext| ext.to_str())
      .and_then(SpecFormat::from_extension)
      .ok_or_else(|| anyhow::anyhow!("Config file {} must be .json, .yaml or .yml", path.display()))?;

    let parsed = match format {
      SpecFormat::Json => serde_json::from_str(contents).map_err(anyhow::Error::from),
      SpecFormat::Yaml => serde_yaml::from_str(contents).map_err(anyhow::Error::from),
    };
    parsed.with_context(|| format!("Invalid config file {}", path.display()))
  }
}
