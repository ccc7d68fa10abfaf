// Tests for dependency graph construction

use super::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a Go module tree with `module root`
fn create_module() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("go.mod"), "module root\n\ngo 1.22\n").unwrap();
    temp_dir
}

/// Write a Go file importing the given paths
fn create_go_file(root: &Path, relative: &str, imports: &[&str]) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    let package = path
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "main".to_string());
    let mut content = format!("package {}\n\nimport (\n", package);
    for import in imports {
        content.push_str(&format!("    \"{}\"\n", import));
    }
    content.push_str(")\n");

    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// DependencyGraph primitives
// ============================================================================

#[test]
fn test_new_graph_is_empty() {
    let graph = DependencyGraph::new();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_empty());
}

#[test]
fn test_add_edge_stores_dependents_orientation() {
    let mut graph = DependencyGraph::new();
    assert!(graph.add_edge("root/a", "root/b"));

    assert!(graph.has_edge("root/a", "root/b"));
    assert!(!graph.has_edge("root/b", "root/a"));
    assert_eq!(graph.dependents("root/a").collect::<Vec<_>>(), vec!["root/b"]);
    assert_eq!(graph.dependencies_of("root/b"), vec!["root/a"]);
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_add_edge_rejects_self_loop() {
    let mut graph = DependencyGraph::new();
    assert!(!graph.add_edge("root/a", "root/a"));
    assert!(graph.contains("root/a"));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_add_edge_is_idempotent() {
    let mut graph = DependencyGraph::new();
    assert!(graph.add_edge("fmt", "root"));
    assert!(!graph.add_edge("fmt", "root"));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_in_degrees_rebuilds_from_edges() {
    let mut graph = DependencyGraph::new();
    graph.add_edge("root/a", "root/c");
    graph.add_edge("root/b", "root/c");
    graph.add_edge("root/a", "root/b");

    let in_degree = graph.in_degrees();
    assert_eq!(in_degree.get("root/a"), 0);
    assert_eq!(in_degree.get("root/b"), 1);
    assert_eq!(in_degree.get("root/c"), 2);
    assert!(in_degree.contains("root/a"));
}

#[test]
fn test_in_degree_defaults_and_saturates() {
    let mut in_degree = InDegree::new();
    assert_eq!(in_degree.get("missing"), 0);

    in_degree.increment("x");
    assert_eq!(in_degree.decrement("x"), 0);
    assert_eq!(in_degree.decrement("x"), 0);
    assert_eq!(in_degree.zero_nodes().collect::<Vec<_>>(), vec!["x"]);
    assert_eq!(in_degree.pending().count(), 0);
}

#[test]
fn test_to_petgraph_preserves_shape() {
    let mut graph = DependencyGraph::new();
    graph.add_edge("root/a", "root/b");
    graph.add_edge("root/b", "root/c");
    graph.add_node("fmt");

    let pg = graph.to_petgraph();
    assert_eq!(pg.node_count(), 4);
    assert_eq!(pg.edge_count(), 2);
}

#[test]
fn test_universe_local_is_authoritative() {
    let mut universe = PackageUniverse::new();
    universe.insert_local("github.com/acme/lib");
    universe.insert_referenced("github.com/acme/lib");
    universe.insert_referenced("fmt");

    assert!(universe.is_local("github.com/acme/lib"));
    assert!(!universe.is_external("github.com/acme/lib"));
    assert!(universe.is_external("fmt"));
    assert_eq!(universe.external().into_iter().collect::<Vec<_>>(), vec!["fmt"]);
}

// ============================================================================
// GraphBuilder
// ============================================================================

#[test]
fn test_builder_requires_manifest() {
    let temp_dir = TempDir::new().unwrap();
    create_go_file(temp_dir.path(), "main.go", &["fmt"]);

    let err = GraphBuilder::new(temp_dir.path()).err().unwrap();
    assert!(matches!(err, GraphError::Manifest(_)));
}

#[test]
fn test_builder_rejects_non_directory_root() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    let err = GraphBuilder::new(&missing).err().unwrap();
    assert!(matches!(err, GraphError::InvalidRoot { .. }));
}

#[test]
fn test_build_chain_of_local_packages() {
    let module = create_module();
    let root = module.path();
    create_go_file(root, "a/a.go", &[]);
    create_go_file(root, "b/b.go", &["root/a"]);
    create_go_file(root, "c/c.go", &["root/b"]);

    let build = GraphBuilder::new(root).unwrap().build();

    assert_eq!(build.module_prefix.as_str(), "root");
    assert!(build.graph.has_edge("root/a", "root/b"));
    assert!(build.graph.has_edge("root/b", "root/c"));
    assert_eq!(build.in_degree.get("root/a"), 0);
    assert_eq!(build.in_degree.get("root/b"), 1);
    assert_eq!(build.in_degree.get("root/c"), 1);
    assert!(build.external_packages().is_empty());
    assert!(build.read_failures.is_empty());
}

#[test]
fn test_build_external_import_is_sourceless_node() {
    let module = create_module();
    let root = module.path();
    create_go_file(root, "a/a.go", &["fmt"]);

    let build = GraphBuilder::new(root).unwrap().build();

    assert!(build.universe.contains("root/a"));
    assert!(build.universe.contains("fmt"));
    assert_eq!(build.universe.len(), 2);
    assert_eq!(build.in_degree.get("fmt"), 0);
    assert!(build.in_degree.contains("fmt"));
    assert!(!build.files.contains("fmt"));
    assert_eq!(
        build.external_packages().into_iter().collect::<Vec<_>>(),
        vec!["fmt"]
    );
}

#[test]
fn test_build_same_package_files_never_self_loop() {
    let module = create_module();
    let root = module.path();
    create_go_file(root, "a/one.go", &["root/a", "fmt"]);
    create_go_file(root, "a/two.go", &["root/a", "fmt"]);

    let build = GraphBuilder::new(root).unwrap().build();

    assert!(!build.graph.has_edge("root/a", "root/a"));
    assert_eq!(build.files.files("root/a").len(), 2);
    // Both files import fmt; the edge and its count exist once
    assert_eq!(build.in_degree.get("root/a"), 1);
    assert_eq!(build.in_degree, build.graph.in_degrees());
}

#[test]
fn test_build_root_package_uses_bare_prefix() {
    let module = create_module();
    let root = module.path();
    create_go_file(root, "main.go", &["root/internal/app"]);
    create_go_file(root, "internal/app/app.go", &["os"]);

    let build = GraphBuilder::new(root).unwrap().build();

    assert!(build.universe.is_local("root"));
    assert!(build.universe.is_local("root/internal/app"));
    assert!(build.graph.has_edge("root/internal/app", "root"));
    assert!(build.graph.has_edge("os", "root/internal/app"));
}

#[test]
fn test_build_skips_test_files() {
    let module = create_module();
    let root = module.path();
    create_go_file(root, "a/a.go", &[]);
    create_go_file(root, "a/a_test.go", &["testing"]);

    let build = GraphBuilder::new(root).unwrap().build();

    assert!(!build.universe.contains("testing"));
    assert_eq!(build.files.files("root/a").len(), 1);
}

#[test]
fn test_build_recovers_from_unreadable_file() {
    let module = create_module();
    let root = module.path();
    create_go_file(root, "a/a.go", &["fmt"]);
    fs::create_dir_all(root.join("b")).unwrap();
    fs::write(root.join("b/b.go"), [0xff, 0xfe, 0x00]).unwrap();

    let build = GraphBuilder::new(root).unwrap().build();

    assert_eq!(build.read_failures.len(), 1);
    assert!(build.read_failures[0].path.ends_with("b/b.go"));
    assert!(!build.universe.contains("root/b"));
    assert!(build.universe.contains("root/a"));
}

#[test]
fn test_build_empty_tree() {
    let module = create_module();

    let build = GraphBuilder::new(module.path()).unwrap().build();

    assert!(build.is_empty());
    assert!(build.graph.is_empty());
    assert!(build.in_degree.is_empty());
}

#[test]
fn test_build_is_idempotent() {
    let module = create_module();
    let root = module.path();
    create_go_file(root, "a/a.go", &["fmt", "root/b"]);
    create_go_file(root, "b/b.go", &["strings"]);
    create_go_file(root, "main.go", &["root/a", "root/b"]);

    let builder = GraphBuilder::new(root).unwrap();
    let first = builder.build();
    let second = builder.build();

    assert_eq!(first.graph, second.graph);
    assert_eq!(first.in_degree, second.in_degree);
    assert_eq!(first.universe, second.universe);
    assert_eq!(first.files, second.files);
}

#[test]
fn test_every_universe_member_has_in_degree_entry() {
    let module = create_module();
    let root = module.path();
    create_go_file(root, "a/a.go", &["fmt", "github.com/x/y"]);
    create_go_file(root, "b/b.go", &[]);

    let build = GraphBuilder::new(root).unwrap().build();

    for id in build.universe.iter() {
        assert!(build.in_degree.contains(id), "missing in-degree for {}", id);
        assert!(build.graph.contains(id), "missing graph node for {}", id);
    }
}

/// Extractor that reports a fixed import for every file
struct FixedExtractor(&'static str);

impl ImportExtractor for FixedExtractor {
    fn extract(&self, _text: &str) -> BTreeSet<String> {
        BTreeSet::from([self.0.to_string()])
    }
}

#[test]
fn test_builder_accepts_custom_extractor() {
    let module = create_module();
    let root = module.path();
    create_go_file(root, "a/a.go", &[]);

    let build = GraphBuilder::new(root)
        .unwrap()
        .with_extractor(FixedExtractor("unsafe"))
        .build();

    assert!(build.graph.has_edge("unsafe", "root/a"));
}
