use std::path::Path;

use crate::generator::{
  codegen::{EmittedDefinition, GeneratedFile},
  converter::ImportSet,
  dependency_graph::DependencyGraph,
};

fn definition(key: &str, dependencies: &[&str]) -> EmittedDefinition {
  EmittedDefinition {
    key: key.to_string(),
    module_name: key.to_lowercase(),
    file: GeneratedFile::new(Path::new("out"), &key.to_lowercase(), String::new()),
    dependencies: dependencies.iter().map(|dependency| (*dependency).to_string()).collect::<ImportSet>(),
  }
}

#[test]
fn test_detects_mutual_and_self_references() {
  let definitions = [
    definition("Pet", &["Owner", "Tag"]),
    definition("Owner", &["Pet"]),
    definition("Tag", &[]),
    definition("Node", &["Node"]),
    definition("Page", &["Pet"]),
  ];

  let cycles = DependencyGraph::build(&definitions).detect_cycles();

  assert_eq!(
    cycles,
    vec![
      vec!["Node".to_string()],
      vec!["Owner".to_string(), "Pet".to_string()],
    ]
  );
}

#[test]
fn test_ignores_edges_to_unknown_modules() {
  let definitions = [definition("A", &["Missing"]), definition("B", &["A"])];
  assert!(DependencyGraph::build(&definitions).detect_cycles().is_empty());
}

#[test]
fn test_longer_cycle() {
  let definitions = [
    definition("A", &["B"]),
    definition("B", &["C"]),
    definition("C", &["A"]),
  ];
  assert_eq!(
    DependencyGraph::build(&definitions).detect_cycles(),
    vec![vec!["A".to_string(), "B".to_string(), "C".to_string()]]
  );
}
