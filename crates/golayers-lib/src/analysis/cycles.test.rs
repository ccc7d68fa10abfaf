// Tests for dependency cycle detection

use super::*;

/// Build a graph from `(dependency, dependent)` pairs
fn graph_from(edges: &[(&str, &str)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for (dependency, dependent) in edges {
        graph.add_edge(dependency, dependent);
    }
    graph
}

// ============================================================================
// is_cyclic
// ============================================================================

#[test]
fn test_empty_graph_is_acyclic() {
    assert!(!CycleDetector::is_cyclic(&DependencyGraph::new()));
}

#[test]
fn test_chain_is_acyclic() {
    let graph = graph_from(&[("root/a", "root/b"), ("root/b", "root/c")]);
    assert!(!CycleDetector::is_cyclic(&graph));
}

#[test]
fn test_diamond_is_acyclic() {
    // a <- b, a <- c, b <- d, c <- d
    let graph = graph_from(&[
        ("root/a", "root/b"),
        ("root/a", "root/c"),
        ("root/b", "root/d"),
        ("root/c", "root/d"),
    ]);
    assert!(!CycleDetector::is_cyclic(&graph));
}

#[test]
fn test_detect_simple_cycle_two_nodes() {
    // root/a imports root/b and root/b imports root/a
    let graph = graph_from(&[("root/b", "root/a"), ("root/a", "root/b")]);
    assert!(CycleDetector::is_cyclic(&graph));
}

#[test]
fn test_detect_longer_cycle_three_nodes() {
    let graph = graph_from(&[
        ("root/a", "root/b"),
        ("root/b", "root/c"),
        ("root/c", "root/a"),
    ]);
    assert!(CycleDetector::is_cyclic(&graph));
}

#[test]
fn test_cycle_reachable_only_from_later_root() {
    // The first node in key order is an isolated leaf; the cycle sits
    // behind a node visited later.
    let graph = graph_from(&[
        ("aaa", "zzz/entry"),
        ("zzz/entry", "zzz/x"),
        ("zzz/x", "zzz/y"),
        ("zzz/y", "zzz/x"),
    ]);
    assert!(CycleDetector::is_cyclic(&graph));
}

#[test]
fn test_shared_dependency_is_not_a_cycle() {
    // Two paths reaching the same finished node must not be mistaken
    // for a back edge.
    let graph = graph_from(&[
        ("fmt", "root/a"),
        ("fmt", "root/b"),
        ("root/a", "root/b"),
    ]);
    assert!(!CycleDetector::is_cyclic(&graph));
}

#[test]
fn test_is_cyclic_is_repeatable() {
    let graph = graph_from(&[("root/a", "root/b"), ("root/b", "root/a")]);
    assert!(CycleDetector::is_cyclic(&graph));
    assert!(CycleDetector::is_cyclic(&graph));
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let names: Vec<String> = (0..20_000).map(|i| format!("root/p{:05}", i)).collect();
    let mut graph = DependencyGraph::new();
    for pair in names.windows(2) {
        graph.add_edge(&pair[0], &pair[1]);
    }
    assert!(!CycleDetector::is_cyclic(&graph));

    graph.add_edge(&names[names.len() - 1], &names[0]);
    assert!(CycleDetector::is_cyclic(&graph));
}

// ============================================================================
// find_cycles
// ============================================================================

#[test]
fn test_find_cycles_acyclic_is_empty() {
    let graph = graph_from(&[("root/a", "root/b")]);
    assert!(CycleDetector::find_cycles(&graph).is_empty());
}

#[test]
fn test_find_cycles_reports_members() {
    let graph = graph_from(&[
        ("root/b", "root/a"),
        ("root/a", "root/b"),
        ("fmt", "root/a"),
        ("root/x", "root/y"),
        ("root/y", "root/z"),
        ("root/z", "root/x"),
    ]);

    let cycles = CycleDetector::find_cycles(&graph);
    assert_eq!(
        cycles,
        vec![
            vec!["root/a".to_string(), "root/b".to_string()],
            vec![
                "root/x".to_string(),
                "root/y".to_string(),
                "root/z".to_string()
            ],
        ]
    );
}
