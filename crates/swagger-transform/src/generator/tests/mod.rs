mod dependency_graph;
mod operation_registry;
mod support;
