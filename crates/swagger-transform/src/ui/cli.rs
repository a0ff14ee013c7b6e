use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use inflections::Inflect;

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "swagger-transform")]
#[command(author, version, about = "Swagger / OpenAPI to TypeScript generator", styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a Swagger / OpenAPI document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate TypeScript declarations, route map and request functions
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateCommand {
  /// Path or http(s) URL of a JSON or YAML document; repeat to merge several documents in order
  #[arg(short, long, value_name = "FILE|URL")]
  pub input: Vec<String>,

  /// Directory where the declaration modules are written [default: swagger]
  #[arg(short, long, value_name = "DIR")]
  pub output: Option<PathBuf>,

  /// JSON or YAML file with generation settings; command-line flags take precedence
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Also write an index.ts re-exporting every module
  #[arg(long, default_value_t = false)]
  pub index: bool,

  /// Comment placed at the top of every generated file
  #[arg(long, value_name = "TEXT")]
  pub description: Option<String>,

  /// Remap a source type name (comma-separated FROM=TO pairs, e.g. long=bigint)
  #[arg(long, value_name = "FROM=TO", value_delimiter = ',')]
  pub type_map: Vec<String>,

  /// Generate the route map and the combined request/response contract
  #[arg(long, default_value_t = false)]
  pub api: bool,

  /// Directory for the route map and request functions (implies --api)
  #[arg(long, value_name = "DIR")]
  pub api_out_dir: Option<PathBuf>,

  /// Pair every declaration with a companion class (implies --api)
  #[arg(long, default_value_t = false)]
  pub class: bool,

  /// Generate one typed request function per operation (implies --api)
  #[arg(long, default_value_t = false)]
  pub functions: bool,

  /// Import line placed at the top of the request function module
  #[arg(long, value_name = "LINE")]
  pub function_import: Option<String>,

  /// Naming strategy for module file names
  #[arg(long, value_enum, value_name = "CASE")]
  pub file_case: Option<NameCase>,

  /// Naming strategy for declaration names
  #[arg(long, value_enum, value_name = "CASE")]
  pub type_case: Option<NameCase>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations with the names used in the route map
  Operations {
    /// Path or http(s) URL of a JSON or YAML document; repeat to merge several documents
    #[arg(short, long, value_name = "FILE|URL", required = true)]
    input: Vec<String>,
  },
}

/// Case conversion applied by the `--file-case` / `--type-case` naming hooks.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameCase {
  /// Keep the default naming rule
  Preserve,
  Camel,
  Pascal,
  Snake,
  Kebab,
}

impl NameCase {
  /// `None` when the default naming rule should stay in place.
  pub fn convert(self, key: &str) -> Option<String> {
    match self {
      Self::Preserve => None,
      Self::Camel => Some(key.to_camel_case()),
      Self::Pascal => Some(key.to_pascal_case()),
      Self::Snake => Some(key.to_snake_case()),
      Self::Kebab => Some(key.to_kebab_case()),
    }
  }
}

#[cfg(test)]
mod tests {
  use clap::Parser;

  use super::*;

  #[test]
  fn test_name_case_convert() {
    assert_eq!(NameCase::Preserve.convert("PetOwner"), None);
    assert_eq!(NameCase::Camel.convert("PetOwner").as_deref(), Some("petOwner"));
    assert_eq!(NameCase::Pascal.convert("pet_owner").as_deref(), Some("PetOwner"));
    assert_eq!(NameCase::Snake.convert("PetOwner").as_deref(), Some("pet_owner"));
    assert_eq!(NameCase::Kebab.convert("PetOwner").as_deref(), Some("pet-owner"));
  }

  #[test]
  fn test_generate_arguments() {
    let cli = Cli::parse_from([
      "swagger-transform",
      "generate",
      "-i",
      "a.json",
      "--input",
      "https://example.com/b.yaml",
      "--type-map",
      "long=bigint,date=Date",
      "--functions",
      "--file-case",
      "kebab",
    ]);

    let Commands::Generate(command) = cli.command else {
      panic!("expected the generate command");
    };
    assert_eq!(command.input, ["a.json", "https://example.com/b.yaml"]);
    assert_eq!(command.type_map, ["long=bigint", "date=Date"]);
    assert!(command.functions);
    assert_eq!(command.file_case, Some(NameCase::Kebab));
    assert!(command.output.is_none());
  }

  #[test]
  fn test_list_requires_input() {
    assert!(Cli::try_parse_from(["swagger-transform", "list", "operations"]).is_err());
  }
}
