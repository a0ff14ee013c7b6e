#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
//! Swagger 2 / OpenAPI 3 to TypeScript generator.
//!
//! The library turns a parsed document into TypeScript declaration modules, an
//! optional route map, a combined request/response contract and optional typed
//! request functions.
//!
//! ```no_run
//! use swagger_transform::{ApiConfig, Config, Orchestrator};
//!
//! # async fn example() -> swagger_transform::Result<()> {
//! let config = Config::builder()
//!   .entry(vec!["swagger.json".to_string()])
//!   .out_dir("src/types")
//!   .index(true)
//!   .api(ApiConfig::default())
//!   .build();
//!
//! let output = Orchestrator::new(config).run().await?;
//! println!("{} files written", output.files.len());
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod generator;
pub mod utils;

pub use errors::{Result, TransformError};
pub use generator::{
  config::{ApiConfig, Config, DefinitionStyle, FunctionTemplate, NameHook, ParameterNameHook, TypeMap},
  metrics::{GenerationStats, GenerationWarning},
  orchestrator::{GenerationOutput, Orchestrator},
};
