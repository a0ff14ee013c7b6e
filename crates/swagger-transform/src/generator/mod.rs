pub mod ast;
pub mod codegen;
pub mod config;
pub mod converter;
pub(crate) mod dependency_graph;
pub mod metrics;
pub mod naming;
pub mod operation_registry;
pub mod orchestrator;
pub mod schema;

#[cfg(test)]
mod tests;
