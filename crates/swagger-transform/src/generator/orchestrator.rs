//! Sequencing of a generation run.
//!
//! ```text
//! document ─► DefinitionRegistry ─► PathTransformer (adds parameter groups)
//!                                 └► DefinitionEmitter ─► modules ─► write
//! ```
//!
//! The registry is owned here: it is lent mutably to the path transformer and
//! only afterwards shared with the emitters, so every synthetic parameter group
//! exists before the first definition module is rendered.

use serde_json::Value;

use crate::{
  Result, TransformError,
  generator::{
    codegen::{ApiEmitter, DefinitionEmitter, GeneratedFile, render_index},
    config::Config,
    converter::PathTransformer,
    dependency_graph::DependencyGraph,
    metrics::GenerationStats,
    schema::DefinitionRegistry,
  },
  utils::load_entries,
};

/// Files produced by one run, with its statistics.
#[derive(Debug, Clone, Default)]
pub struct GenerationOutput {
  pub files: Vec<GeneratedFile>,
  pub stats: GenerationStats,
}

impl GenerationOutput {
  /// Writes every file, creating parent directories as needed.
  pub async fn write_all(&self) -> Result<()> {
    for file in &self.files {
      if let Some(parent) = file.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
          .await
          .map_err(|source| TransformError::Write {
            path: parent.to_path_buf(),
            source,
          })?;
      }
      tokio::fs::write(&file.path, &file.content)
        .await
        .map_err(|source| TransformError::Write {
          path: file.path.clone(),
          source,
        })?;
    }
    Ok(())
  }
}

#[derive(Debug, Clone)]
pub struct Orchestrator {
  config: Config,
}

impl Orchestrator {
  #[must_use]
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  #[must_use]
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Loads and merges every configured entry.
  pub async fn load(&self) -> Result<Value> {
    self.config.validate()?;
    load_entries(&self.config.entry).await
  }

  /// Loads the entries, generates, and writes the result to disk.
  pub async fn run(&self) -> Result<GenerationOutput> {
    let document = self.load().await?;
    let output = self.generate(&document);
    output.write_all().await?;
    Ok(output)
  }

  /// Generates every module for an already loaded document. Nothing is written.
  #[must_use]
  pub fn generate(&self, document: &Value) -> GenerationOutput {
    let config = &self.config;
    let mut stats = GenerationStats::default();
    let mut registry = DefinitionRegistry::from_document(document);

    let groups = match &config.api {
      Some(_) => PathTransformer::new(config).transform(document, &mut registry, &mut stats),
      None => vec![],
    };

    let definitions = DefinitionEmitter::new(config).emit(&registry, &mut stats);
    stats.record_cycles(DependencyGraph::build(&definitions).detect_cycles());

    let mut files = Vec::with_capacity(definitions.len() + 4);
    if let Some(api) = &config.api {
      let emitter = ApiEmitter::new(config, api);
      files.push(emitter.route_map(&groups));
      files.push(emitter.contract(&groups, &registry, &mut stats));
      if api.function {
        files.push(emitter.functions(&groups, &registry, &mut stats));
      }
    }
    if config.index {
      files.push(render_index(
        config,
        definitions.iter().map(|definition| definition.module_name.as_str()),
      ));
    }
    files.extend(definitions.into_iter().map(|definition| definition.file));

    for _ in &files {
      stats.record_file();
    }

    GenerationOutput { files, stats }
  }
}
