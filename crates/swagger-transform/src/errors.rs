use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, TransformError>;

/// Fatal conditions that terminate a generation run.
///
/// Name collisions and unresolvable schemas never show up here: the first is
/// resolved by suffixing, the second is recorded as a
/// [`GenerationWarning`](crate::GenerationWarning).
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
  #[error("[swagger-transform Error]: entry is required")]
  MissingEntry,

  #[error("[swagger-transform Error]: unsupported document format '{entry}', expected .json, .yaml or .yml")]
  UnsupportedFormat { entry: String },

  #[error("[swagger-transform Error]: failed to fetch '{url}': {source}")]
  Fetch {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("[swagger-transform Error]: failed to read '{}': {message}", path.display())]
  Read { path: PathBuf, message: String },

  #[error("[swagger-transform Error]: failed to parse '{entry}': {message}")]
  Parse { entry: String, message: String },

  #[error("[swagger-transform Error]: failed to write '{}': {source}", path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
