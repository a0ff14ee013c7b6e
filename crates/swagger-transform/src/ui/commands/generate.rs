use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use itertools::Itertools;
use swagger_transform::{
  ApiConfig, Config, DefinitionStyle, GenerationStats, NameHook, Orchestrator, TypeMap,
  generator::config::DEFAULT_OUT_DIR,
};

use crate::ui::{Colors, GenerateCommand, NameCase, config_file::ConfigFile};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub config: Config,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  /// Layers built-in defaults, the `--config` file and the command-line flags,
  /// later layers winning per setting.
  pub async fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let file = match &command.config {
      Some(path) => ConfigFile::load(path).await?,
      None => ConfigFile::default(),
    };
    Self::layered(command, file)
  }

  fn layered(command: GenerateCommand, file: ConfigFile) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      config: _,
      index,
      description,
      type_map,
      api,
      api_out_dir,
      class,
      functions,
      function_import,
      file_case,
      type_case,
      verbose,
      quiet,
    } = command;

    let entry = if input.is_empty() { file.entry.into_vec() } else { input };
    if entry.iter().all(|entry| entry.trim().is_empty()) {
      anyhow::bail!("An input document (-i) is required, on the command line or as `entry` in the config file");
    }

    let mut types = TypeMap::with_overrides(file.type_map);
    types.extend(parse_type_map(type_map)?);

    let wants_api = api || class || functions || api_out_dir.is_some() || file.api.is_some();
    let api = wants_api.then(|| {
      let section = file.api.unwrap_or_default();
      let defaults = ApiConfig::default();
      ApiConfig {
        file_name: section.file_name.unwrap_or(defaults.file_name),
        export_name: section.export_name.unwrap_or(defaults.export_name),
        type_file_name: section.type_file_name.unwrap_or(defaults.type_file_name),
        type_name: section.type_name.unwrap_or(defaults.type_name),
        out_dir: api_out_dir.or(section.out_dir),
        definition_style: if class {
          DefinitionStyle::Class
        } else {
          section.definition_style.unwrap_or_default()
        },
        function: functions || section.function.unwrap_or(false),
        function_file_name: section.function_file_name.unwrap_or(defaults.function_file_name),
        function_import: function_import
          .or(section.function_import)
          .unwrap_or(defaults.function_import),
        function_template: None,
      }
    });

    let config = Config::builder()
      .entry(entry)
      .out_dir(output.or(file.out_dir).unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)))
      .index(index || file.index.unwrap_or(false))
      .maybe_description(description.or(file.description))
      .type_map(types)
      .maybe_api(api)
      .maybe_rename_module(file_case.and_then(case_hook))
      .maybe_rename_definition(type_case.and_then(case_hook))
      .build();

    Ok(Self { config, verbose, quiet })
  }
}

fn case_hook(case: NameCase) -> Option<NameHook> {
  if case == NameCase::Preserve {
    return None;
  }
  Some(NameHook::new(move |key| case.convert(key).unwrap_or_else(|| key.to_string())))
}

fn parse_type_map(entries: Vec<String>) -> anyhow::Result<Vec<(String, String)>> {
  entries
    .into_iter()
    .map(|entry| {
      let (from, to) = entry
        .split_once('=')
        .filter(|(from, to)| !from.trim().is_empty() && !to.trim().is_empty())
        .ok_or_else(|| anyhow::anyhow!("Invalid type map entry '{entry}': expected FROM=TO (e.g., long=bigint)"))?;
      Ok((from.trim().to_string(), to.trim().to_string()))
    })
    .collect()
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    for entry in &self.config.config.entry {
      self.info(
        &format!("Loading document from: {entry}")
          .with(self.colors.primary())
          .to_string(),
      );
    }
  }

  fn log_generating(&self) {
    let message = if self.config.config.api.is_some() {
      "Generating TypeScript declarations and API modules..."
    } else {
      "Generating TypeScript declarations..."
    };
    self.info(&message.with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Definitions emitted:", stats.definitions_emitted.to_string());
    self.stat("", format!("{} interfaces", stats.interfaces_generated));
    self.stat("", format!("{} enums", stats.enums_generated));
    self.stat("", format!("{} type aliases", stats.type_aliases_generated));
    if stats.classes_generated > 0 {
      self.stat("", format!("{} classes", stats.classes_generated));
    }
    if self.config.config.api.is_some() {
      self.stat("Operations converted:", stats.operations_converted.to_string());
      self.stat("", format!("{} parameter groups", stats.parameter_groups_synthesized));
      if stats.functions_generated > 0 {
        self.stat("", format!("{} request functions", stats.functions_generated));
      }
    }
    self.stat("Files generated:", stats.files_generated.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Import cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.accent()),
          cycle.iter().join(" -> ").with(self.colors.info())
        );
      }
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      if !(warning.is_skipped_item() || self.config.verbose) {
        continue;
      }

      if !printed_header {
        println!();
        printed_header = true;
      }

      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.config.out_dir.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self, files: usize) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully generated {files} files").with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);
  let orchestrator = Orchestrator::new(config.config.clone());

  logger.log_loading();
  let document = orchestrator.load().await?;

  logger.log_generating();
  let output = orchestrator.generate(&document);
  logger.print_statistics(&output.stats);

  logger.log_writing();
  output
    .write_all()
    .await
    .context("Generation finished but the output could not be written")?;

  logger.log_success(output.files.len());
  Ok(())
}
