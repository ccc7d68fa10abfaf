use super::*;
use crate::analysis::{DependencyGraph, ModulePrefix, PackageUniverse};

struct Fixture {
    prefix: ModulePrefix,
    graph: DependencyGraph,
    universe: PackageUniverse,
    layers: Vec<Vec<String>>,
}

impl Fixture {
    fn input(&self) -> RenderInput<'_> {
        RenderInput {
            module_prefix: &self.prefix,
            graph: &self.graph,
            universe: &self.universe,
            layers: &self.layers,
        }
    }
}

fn chain() -> Fixture {
    let mut graph = DependencyGraph::new();
    let mut universe = PackageUniverse::new();
    for id in ["fmt", "root/a", "root/b"] {
        graph.add_node(id);
    }
    universe.insert_referenced("fmt");
    universe.insert_local("root/a");
    universe.insert_local("root/b");
    graph.add_edge("fmt", "root/a");
    graph.add_edge("root/a", "root/b");

    Fixture {
        prefix: ModulePrefix::new("root"),
        graph,
        universe,
        layers: vec![
            vec!["fmt".to_string()],
            vec!["root/a".to_string()],
            vec!["root/b".to_string()],
        ],
    }
}

#[test]
fn test_quote_escapes() {
    assert_eq!(quote("root/a"), "\"root/a\"");
    assert_eq!(quote("we\"ird\\"), "\"we\\\"ird\\\\\"");
}

#[test]
fn test_dot_header_and_layout() {
    let fixture = chain();
    let dot = to_dot(&fixture.input());

    assert!(dot.starts_with("digraph \"root\" {\n"));
    assert!(dot.contains("rankdir=LR;"));
    assert!(dot.contains("splines=ortho;"));
    assert!(dot.contains("style=\"rounded,filled\", fillcolor=lightgrey"));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn test_dot_one_rank_per_layer() {
    let fixture = chain();
    let dot = to_dot(&fixture.input());

    assert_eq!(dot.matches("rank=same;").count(), 3);
    let layer_0 = dot.find("subgraph layer_0").unwrap();
    let layer_2 = dot.find("subgraph layer_2").unwrap();
    assert!(layer_0 < layer_2);
}

#[test]
fn test_dot_styles_external_nodes() {
    let fixture = chain();
    let dot = to_dot(&fixture.input());

    assert!(dot.contains("\"fmt\" [fillcolor=tomato, fontcolor=white];"));
    assert!(dot.contains("        \"root/a\";\n"));
}

#[test]
fn test_dot_edges_point_from_dependency() {
    let fixture = chain();
    let dot = to_dot(&fixture.input());

    assert!(dot.contains("\"fmt\" -> \"root/a\";"));
    assert!(dot.contains("\"root/a\" -> \"root/b\";"));
    assert_eq!(dot.matches("->").count(), 2);
}

#[test]
fn test_dot_emits_unlayered_nodes() {
    let mut fixture = chain();
    fixture.layers.truncate(1);
    let dot = to_dot(&fixture.input());

    assert!(dot.contains("\n    \"root/b\";\n"));
    assert_eq!(dot.matches("rank=same;").count(), 1);
}
