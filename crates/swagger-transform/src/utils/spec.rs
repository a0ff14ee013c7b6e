use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
  sync::LazyLock,
};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use regex::Regex;
use serde_json::Value;

use super::deep_merge;
use crate::{Result, TransformError};

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(ht|f)tps?://").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext.to_ascii_lowercase().as_str() {
      "json" => Some(Self::Json),
      "yaml" | "yml" => Some(Self::Yaml),
      _ => None,
    }
  }
}

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
  File(PathBuf),
  Url(String),
}

impl SpecSource {
  #[must_use]
  pub fn parse(entry: &str) -> Self {
    if URL_RE.is_match(entry) {
      Self::Url(entry.to_string())
    } else {
      Self::File(PathBuf::from(entry))
    }
  }

  /// Format chosen by extension.
  ///
  /// Files must end in `.json`, `.yaml` or `.yml`; a URL whose last path
  /// segment has no extension is read as JSON.
  pub fn format(&self) -> Result<SpecFormat> {
    match self {
      Self::File(path) => path
        .extension()
        .and_then(OsStr::to_str)
        .and_then(SpecFormat::from_extension)
        .ok_or_else(|| TransformError::UnsupportedFormat {
          entry: path.display().to_string(),
        }),
      Self::Url(url) => {
        let without_query = url.split(['?', '#']).next().unwrap_or(url);
        let after_scheme = without_query.split_once("://").map_or(without_query, |(_, rest)| rest);
        let last_segment = after_scheme
          .split_once('/')
          .map_or("", |(_, path)| path.rsplit('/').next().unwrap_or_default());

        match Path::new(last_segment).extension().and_then(OsStr::to_str) {
          None => Ok(SpecFormat::Json),
          Some(ext) => SpecFormat::from_extension(ext).ok_or_else(|| TransformError::UnsupportedFormat {
            entry: url.clone(),
          }),
        }
      }
    }
  }
}

impl std::fmt::Display for SpecSource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::File(path) => write!(f, "{}", path.display()),
      Self::Url(url) => f.write_str(url),
    }
  }
}

enum SpecContents {
  Mapped(AsyncMmapFile),
  Fetched(Vec<u8>),
}

/// Raw bytes of one document plus the format to parse them with.
pub struct SpecLoader {
  source: SpecSource,
  contents: SpecContents,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> Result<Self> {
    let source = SpecSource::File(path.to_path_buf());
    let format = source.format()?;

    let file = AsyncMmapFile::open(path).await.map_err(|e| TransformError::Read {
      path: path.to_path_buf(),
      message: e.to_string(),
    })?;

    Ok(Self {
      source,
      contents: SpecContents::Mapped(file),
      format,
    })
  }

  pub async fn fetch(url: &str) -> Result<Self> {
    let source = SpecSource::Url(url.to_string());
    let format = source.format()?;

    let fetch_error = |source| TransformError::Fetch {
      url: url.to_string(),
      source,
    };
    let bytes = reqwest::get(url)
      .await
      .and_then(reqwest::Response::error_for_status)
      .map_err(fetch_error)?
      .bytes()
      .await
      .map_err(fetch_error)?;

    Ok(Self {
      source,
      contents: SpecContents::Fetched(bytes.to_vec()),
      format,
    })
  }

  /// Opens a local path or fetches an `http(s)://` URL.
  pub async fn load(entry: &str) -> Result<Self> {
    match SpecSource::parse(entry) {
      SpecSource::File(path) => Self::open(&path).await,
      SpecSource::Url(url) => Self::fetch(&url).await,
    }
  }

  #[must_use]
  pub fn format(&self) -> SpecFormat {
    self.format
  }

  fn as_slice(&self) -> &[u8] {
    match &self.contents {
      SpecContents::Mapped(file) => file.as_slice(),
      SpecContents::Fetched(bytes) => bytes,
    }
  }

  /// Parses the document into a JSON value; YAML is converted on the way.
  pub fn parse(&self) -> Result<Value> {
    let parse_error = |message: String| TransformError::Parse {
      entry: self.source.to_string(),
      message,
    };

    match self.format {
      SpecFormat::Json => serde_json::from_slice(self.as_slice()).map_err(|e| parse_error(e.to_string())),
      SpecFormat::Yaml => {
        let yaml: serde_yaml::Value =
          serde_yaml::from_slice(self.as_slice()).map_err(|e| parse_error(e.to_string()))?;
        serde_json::to_value(yaml).map_err(|e| parse_error(e.to_string()))
      }
    }
  }
}

/// Loads every entry in order and deep-merges them into one document.
pub async fn load_entries(entries: &[String]) -> Result<Value> {
  let mut entries = entries.iter().filter(|entry| !entry.trim().is_empty());
  let Some(first) = entries.next() else {
    return Err(TransformError::MissingEntry);
  };

  let mut document = SpecLoader::load(first).await?.parse()?;
  for entry in entries {
    deep_merge(&mut document, SpecLoader::load(entry).await?.parse()?);
  }
  Ok(document)
}
