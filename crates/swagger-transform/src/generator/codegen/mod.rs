mod apis;
mod definitions;
mod index;
mod render;
mod writer;

use std::path::{Component, Path, PathBuf};

pub use apis::ApiEmitter;
pub use definitions::{DefinitionEmitter, EmittedDefinition};
pub use index::render_index;
pub use render::render_module;
pub use writer::CodeWriter;

pub(crate) const TS_EXTENSION: &str = "ts";

/// A rendered file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub path: PathBuf,
  pub content: String,
}

impl GeneratedFile {
  #[must_use]
  pub fn new(dir: &Path, module_name: &str, content: String) -> Self {
    Self {
      path: module_path(dir, module_name),
      content,
    }
  }
}

pub(crate) fn module_path(dir: &Path, module_name: &str) -> PathBuf {
  dir.join(format!("{module_name}.{TS_EXTENSION}"))
}

/// Import specifier of `module` in `to_dir` as seen from a file in `from_dir`.
///
/// Always starts with `./` or `../` and uses `/` separators. When only one of
/// the directories is absolute, the other is resolved against the current
/// directory first.
pub(crate) fn relative_import(from_dir: &Path, to_dir: &Path, module: &str) -> String {
  let (from, to) = if from_dir.is_absolute() == to_dir.is_absolute() {
    (normalized(from_dir), normalized(to_dir))
  } else {
    (normalized(&absolute(from_dir)), normalized(&absolute(to_dir)))
  };
  let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

  let mut segments: Vec<String> = std::iter::repeat_n("..".to_string(), from.len() - common).collect();
  segments.extend(to[common..].iter().cloned());
  segments.push(module.to_string());

  let joined = segments.join("/");
  if joined.starts_with("..") {
    joined
  } else {
    format!("./{joined}")
  }
}

fn absolute(dir: &Path) -> PathBuf {
  std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}

fn normalized(dir: &Path) -> Vec<String> {
  let mut parts: Vec<String> = Vec::new();
  for component in dir.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir if parts.last().is_some_and(|last| last != "..") => {
        parts.pop();
      }
      other => parts.push(other.as_os_str().to_string_lossy().into_owned()),
    }
  }
  parts
}

#[cfg(test)]
mod tests;
