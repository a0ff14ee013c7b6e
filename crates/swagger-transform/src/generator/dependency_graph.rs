use std::collections::{BTreeMap, BTreeSet};

use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};

use crate::generator::codegen::EmittedDefinition;

/// Import edges between emitted definition modules.
pub(crate) struct DependencyGraph {
  edges: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
  /// Edges to keys without an emitted module are dropped.
  pub(crate) fn build(definitions: &[EmittedDefinition]) -> Self {
    let known: BTreeSet<&str> = definitions.iter().map(|definition| definition.key.as_str()).collect();

    let edges = definitions
      .iter()
      .map(|definition| {
        let dependencies = definition
          .dependencies
          .iter()
          .filter(|dependency| known.contains(dependency.as_str()))
          .cloned()
          .collect();
        (definition.key.clone(), dependencies)
      })
      .collect();

    Self { edges }
  }

  /// Groups of modules that import each other, directly or transitively.
  ///
  /// TypeScript tolerates these for `import type`, so they are only reported.
  pub(crate) fn detect_cycles(&self) -> Vec<Vec<String>> {
    let mut graph = DiGraphMap::<&str, ()>::new();
    for (node, dependencies) in &self.edges {
      graph.add_node(node.as_str());
      for dependency in dependencies {
        graph.add_edge(node.as_str(), dependency.as_str(), ());
      }
    }

    let mut cycles: Vec<Vec<String>> = kosaraju_scc(&graph)
      .into_iter()
      .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
      .map(|scc| {
        let mut cycle: Vec<String> = scc.into_iter().map(String::from).collect();
        cycle.sort();
        cycle
      })
      .collect();
    cycles.sort();
    cycles
  }
}
