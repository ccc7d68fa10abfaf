//! Property tests tying the cycle detector and the layered sort together

use golayers_lib::analysis::{CycleDetector, DependencyGraph, LayeredTopologicalSorter};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn node(index: usize) -> String {
    format!("example.com/p{:02}", index)
}

fn graph_from(node_count: usize, edges: &[(usize, usize)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for index in 0..node_count {
        graph.add_node(&node(index));
    }
    for &(dependency, dependent) in edges {
        graph.add_edge(&node(dependency), &node(dependent));
    }
    graph
}

/// Edges only run from lower to higher indices, so the graph is acyclic
fn dag() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..16).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n), 0..n * 3).prop_map(|pairs| {
            pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)))
                .collect::<Vec<_>>()
        });
        (Just(n), edges)
    })
}

fn any_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..n * 3)))
}

proptest! {
    #[test]
    fn acyclic_graphs_emit_every_node_once((n, edges) in dag()) {
        let graph = graph_from(n, &edges);
        prop_assert!(!CycleDetector::is_cyclic(&graph));

        let layers = LayeredTopologicalSorter::sort_layers(&graph, graph.in_degrees()).unwrap();
        let flat = LayeredTopologicalSorter::flatten(&layers);
        prop_assert_eq!(flat.len(), n);

        let mut layer_of = BTreeMap::new();
        for (index, layer) in layers.iter().enumerate() {
            prop_assert!(!layer.is_empty());
            prop_assert!(layer.windows(2).all(|pair| pair[0] < pair[1]));
            for id in layer {
                prop_assert!(layer_of.insert(id.clone(), index).is_none());
            }
        }

        for (dependency, dependent) in graph.edges() {
            prop_assert!(layer_of[dependency] < layer_of[dependent]);
        }
    }

    #[test]
    fn cycle_verdict_matches_sort_completion((n, edges) in any_graph()) {
        let graph = graph_from(n, &edges);
        let sorted = LayeredTopologicalSorter::sort_layers(&graph, graph.in_degrees());
        prop_assert_eq!(CycleDetector::is_cyclic(&graph), sorted.is_err());
    }

    #[test]
    fn in_degree_counts_distinct_dependencies((n, edges) in any_graph()) {
        let graph = graph_from(n, &edges);
        let in_degree = graph.in_degrees();
        for id in graph.nodes() {
            prop_assert_eq!(in_degree.get(id), graph.dependencies_of(id).len());
            prop_assert!(!graph.has_edge(id, id));
        }
    }

    #[test]
    fn cycle_groups_are_cyclic_subsets((n, edges) in any_graph()) {
        let graph = graph_from(n, &edges);
        let cycles = CycleDetector::find_cycles(&graph);
        prop_assert_eq!(cycles.is_empty(), !CycleDetector::is_cyclic(&graph));
        for group in cycles {
            prop_assert!(group.len() > 1);
        }
    }
}
