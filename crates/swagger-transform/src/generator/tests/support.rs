use std::path::Path;

use serde_json::Value;

use crate::generator::{codegen::GeneratedFile, orchestrator::GenerationOutput};

pub(super) const PETSTORE_V2: &str = include_str!("../../../fixtures/petstore_v2.json");

pub(super) fn parse_document(json: &str) -> Value {
  serde_json::from_str(json).expect("failed to parse test document")
}

pub(super) fn fixture_path(name: &str) -> String {
  Path::new(env!("CARGO_MANIFEST_DIR"))
    .join("fixtures")
    .join(name)
    .display()
    .to_string()
}

pub(super) fn file<'a>(output: &'a GenerationOutput, path: &Path) -> &'a GeneratedFile {
  output
    .files
    .iter()
    .find(|file| file.path == path)
    .unwrap_or_else(|| panic!("no file generated at {}", path.display()))
}
