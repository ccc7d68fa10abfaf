use super::*;
use crate::analysis::cycles::CycleDetector;
use std::collections::HashMap;

fn graph_from(edges: &[(&str, &str)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for (dependency, dependent) in edges {
        graph.add_edge(dependency, dependent);
    }
    graph
}

fn layer_index(layers: &[Layer]) -> HashMap<&str, usize> {
    layers
        .iter()
        .enumerate()
        .flat_map(|(i, layer)| layer.iter().map(move |id| (id.as_str(), i)))
        .collect()
}

#[test]
fn test_chain_produces_one_package_per_layer() {
    let graph = graph_from(&[("root/a", "root/b"), ("root/b", "root/c")]);

    let layers = LayeredTopologicalSorter::sort_layers(&graph, graph.in_degrees()).unwrap();

    assert_eq!(
        layers,
        vec![
            vec!["root/a".to_string()],
            vec!["root/b".to_string()],
            vec!["root/c".to_string()],
        ]
    );
}

#[test]
fn test_external_leaf_joins_first_layer() {
    let mut graph = graph_from(&[("fmt", "root/a")]);
    graph.add_node("root/b");

    let layers = LayeredTopologicalSorter::sort_layers(&graph, graph.in_degrees()).unwrap();

    assert_eq!(layers[0], vec!["fmt".to_string(), "root/b".to_string()]);
    assert_eq!(layers[1], vec!["root/a".to_string()]);
}

#[test]
fn test_layer_members_are_sorted() {
    let graph = graph_from(&[
        ("zeta", "root/app"),
        ("alpha", "root/app"),
        ("mid", "root/app"),
    ]);

    let layers = LayeredTopologicalSorter::sort_layers(&graph, graph.in_degrees()).unwrap();

    assert_eq!(layers[0], vec!["alpha", "mid", "zeta"]);
    assert_eq!(layers[1], vec!["root/app"]);
}

#[test]
fn test_diamond_waits_for_all_dependencies() {
    // d imports b and c; b imports a; c imports nothing
    let graph = graph_from(&[
        ("root/a", "root/b"),
        ("root/b", "root/d"),
        ("root/c", "root/d"),
    ]);

    let layers = LayeredTopologicalSorter::sort_layers(&graph, graph.in_degrees()).unwrap();

    assert_eq!(layers.len(), 3);
    assert_eq!(layers[0], vec!["root/a", "root/c"]);
    assert_eq!(layers[1], vec!["root/b"]);
    assert_eq!(layers[2], vec!["root/d"]);
}

#[test]
fn test_every_edge_goes_to_a_later_layer() {
    let graph = graph_from(&[
        ("fmt", "root"),
        ("fmt", "root/api"),
        ("root/store", "root/api"),
        ("root/api", "root"),
        ("database/sql", "root/store"),
    ]);

    let layers = LayeredTopologicalSorter::sort_layers(&graph, graph.in_degrees()).unwrap();
    let index = layer_index(&layers);

    assert_eq!(index.len(), graph.node_count());
    for (dependency, dependent) in graph.edges() {
        assert!(
            index[dependency] < index[dependent],
            "{} should precede {}",
            dependency,
            dependent
        );
    }
}

#[test]
fn test_cyclic_graph_reports_undrained_packages() {
    let graph = graph_from(&[
        ("fmt", "root/a"),
        ("root/a", "root/b"),
        ("root/b", "root/a"),
    ]);
    assert!(CycleDetector::is_cyclic(&graph));

    let err = LayeredTopologicalSorter::sort_layers(&graph, graph.in_degrees()).unwrap_err();

    assert_eq!(
        err,
        SortError::Incomplete {
            remaining: vec!["root/a".to_string(), "root/b".to_string()]
        }
    );
    assert!(err.to_string().contains("2 package(s)"));
}

#[test]
fn test_missing_in_degree_entries_default_to_zero() {
    let graph = graph_from(&[("root/a", "root/b")]);
    let mut partial = InDegree::new();
    partial.increment("root/b");

    let layers = LayeredTopologicalSorter::sort_layers(&graph, partial).unwrap();

    assert_eq!(layers, vec![vec!["root/a"], vec!["root/b"]]);
}

#[test]
fn test_empty_graph_has_no_layers() {
    let graph = DependencyGraph::new();
    let layers = LayeredTopologicalSorter::sort_layers(&graph, InDegree::new()).unwrap();
    assert!(layers.is_empty());
}

#[test]
fn test_fresh_table_per_attempt_gives_same_result() {
    let graph = graph_from(&[("root/a", "root/b"), ("fmt", "root/b")]);

    let first = LayeredTopologicalSorter::sort_layers(&graph, graph.in_degrees()).unwrap();
    let second = LayeredTopologicalSorter::sort_layers(&graph, graph.in_degrees()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_flatten_preserves_layer_order() {
    let layers = vec![
        vec!["fmt".to_string(), "root/a".to_string()],
        vec!["root/b".to_string()],
    ];

    assert_eq!(
        LayeredTopologicalSorter::flatten(&layers),
        vec!["fmt", "root/a", "root/b"]
    );
}
