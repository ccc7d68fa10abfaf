//! Whole-pipeline scenarios over on-disk module trees

use anyhow::Result;
use golayers_lib::analysis::{
    AnalysisError, AnalysisOutcome, CycleDetector, GraphBuilder, GraphError, ImportExtractor,
    LayeredTopologicalSorter, ModulePrefix, PackageNamer, analyze, analyze_with,
};
use golayers_tests::GoTreeFixture;
use std::collections::BTreeSet;
use std::path::Path;

#[test]
fn scenario_a_chain_yields_one_package_per_layer() -> Result<()> {
    let fixture = GoTreeFixture::new("root")?
        .with_package("a", &[])?
        .with_package("b", &["root/a"])?
        .with_package("c", &["root/b"])?;

    let AnalysisOutcome::Ordered { layers, .. } = analyze(fixture.root())? else {
        panic!("expected an ordered outcome");
    };
    assert_eq!(layers, vec![vec!["root/a"], vec!["root/b"], vec!["root/c"]]);
    Ok(())
}

#[test]
fn scenario_b_mutual_imports_are_cyclic() -> Result<()> {
    let fixture = GoTreeFixture::new("root")?
        .with_package("a", &["root/b"])?
        .with_package("b", &["root/a"])?;

    let build = GraphBuilder::new(fixture.root())?.build();
    assert!(CycleDetector::is_cyclic(&build.graph));

    match analyze(fixture.root())? {
        AnalysisOutcome::Cyclic { cycles, .. } => {
            assert_eq!(cycles, vec![vec!["root/a".to_string(), "root/b".to_string()]]);
        }
        other => panic!("expected a cyclic outcome, got {:?}", other),
    }
    Ok(())
}

#[test]
fn scenario_c_external_import_is_a_sourceless_root() -> Result<()> {
    let fixture = GoTreeFixture::new("root")?
        .with_package("a", &["fmt"])?
        .with_package("z", &[])?;

    let build = GraphBuilder::new(fixture.root())?.build();
    let universe: BTreeSet<&str> = build.universe.iter().collect();
    assert_eq!(universe, BTreeSet::from(["fmt", "root/a", "root/z"]));
    assert_eq!(build.in_degree.get("fmt"), 0);
    assert!(!build.files.contains("fmt"));
    assert!(build.universe.is_external("fmt"));

    let layers = LayeredTopologicalSorter::sort_layers(&build.graph, build.in_degree.clone())?;
    assert_eq!(layers, vec![vec!["fmt", "root/z"], vec!["root/a"]]);
    Ok(())
}

#[test]
fn scenario_d_grouped_block_skips_alias_comment_and_blank() -> Result<()> {
    let fixture = GoTreeFixture::new("root")?;
    fixture.write(
        "svc/svc.go",
        "package svc\n\nimport (\n\t_ \"embed\"\n\n\t// standard library\n\t\"fmt\"\n\tlog \"example.org/logging\"\n)\n",
    )?;

    let build = GraphBuilder::new(fixture.root())?.build();
    let dependencies: BTreeSet<&str> = build.graph.dependencies_of("root/svc").into_iter().collect();
    assert_eq!(
        dependencies,
        BTreeSet::from(["embed", "example.org/logging", "fmt"])
    );
    assert!(!build.universe.contains("standard library"));
    Ok(())
}

#[test]
fn scenario_e_file_outside_root_gets_fallback_name() -> Result<()> {
    let fixture = GoTreeFixture::new("root")?;
    let elsewhere = GoTreeFixture::without_manifest()?;
    let stray = elsewhere.write("tools/gen.go", "package tools\n")?;

    let namer = PackageNamer::new(fixture.root(), ModulePrefix::new("root"));
    assert_eq!(namer.package_for(&stray), "tools");
    assert!(!namer.package_for(Path::new("/gen.go")).is_empty());
    Ok(())
}

#[test]
fn building_twice_is_idempotent() -> Result<()> {
    let fixture = GoTreeFixture::new("example.com/app")?
        .with_package("core", &["fmt", "strings"])?
        .with_package("api", &["example.com/app/core", "net/http"])?
        .with_package("", &["example.com/app/api"])?;

    let builder = GraphBuilder::new(fixture.root())?;
    let first = builder.build();
    let second = builder.build();

    assert_eq!(first.graph, second.graph);
    assert_eq!(first.in_degree, second.in_degree);
    assert_eq!(first.universe, second.universe);
    assert_eq!(first.files, second.files);
    Ok(())
}

#[test]
fn sibling_files_never_create_self_loops() -> Result<()> {
    let fixture = GoTreeFixture::new("root")?;
    fixture.write("a/one.go", "package a\n\nimport \"root/a\"\n")?;
    fixture.write("a/two.go", "package a\n\nimport (\n\t\"root/a\"\n\t\"root/b\"\n)\n")?;
    fixture.write("b/b.go", "package b\n")?;

    let build = GraphBuilder::new(fixture.root())?.build();
    assert!(!build.graph.has_edge("root/a", "root/a"));
    assert_eq!(build.in_degree.get("root/a"), 1);
    assert!(!CycleDetector::is_cyclic(&build.graph));
    Ok(())
}

#[test]
fn test_files_are_not_scanned() -> Result<()> {
    let fixture = GoTreeFixture::new("root")?.with_package("a", &[])?;
    fixture.write("a/a_test.go", "package a\n\nimport \"testing\"\n")?;

    let build = GraphBuilder::new(fixture.root())?.build();
    assert!(!build.universe.contains("testing"));
    Ok(())
}

#[test]
fn missing_manifest_is_fatal() -> Result<()> {
    let fixture = GoTreeFixture::without_manifest()?;
    fixture.write("a/a.go", "package a\n")?;

    assert!(matches!(
        analyze(fixture.root()),
        Err(AnalysisError::Graph(GraphError::Manifest(_)))
    ));
    Ok(())
}

#[test]
fn empty_module_is_informational() -> Result<()> {
    let fixture = GoTreeFixture::new("root")?;
    fixture.write("README.md", "nothing to see\n")?;

    assert!(matches!(analyze(fixture.root())?, AnalysisOutcome::Empty(_)));
    Ok(())
}

/// Treats every `// uses: <path>` line as an import
struct DirectiveExtractor;

impl ImportExtractor for DirectiveExtractor {
    fn extract(&self, text: &str) -> BTreeSet<String> {
        text.lines()
            .filter_map(|line| line.trim().strip_prefix("// uses: "))
            .map(|path| path.trim().to_string())
            .collect()
    }
}

#[test]
fn custom_extractor_replaces_lexical_scanning() -> Result<()> {
    let fixture = GoTreeFixture::new("root")?;
    fixture.write("a/a.go", "package a\n// uses: root/b\nimport \"fmt\"\n")?;
    fixture.write("b/b.go", "package b\n")?;

    let builder = GraphBuilder::new(fixture.root())?.with_extractor(DirectiveExtractor);
    let AnalysisOutcome::Ordered { layers, build } = analyze_with(&builder)? else {
        panic!("expected an ordered outcome");
    };
    assert!(!build.universe.contains("fmt"));
    assert_eq!(layers, vec![vec!["root/b"], vec!["root/a"]]);
    Ok(())
}
