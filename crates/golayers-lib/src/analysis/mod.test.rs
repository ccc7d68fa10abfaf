use super::*;
use std::fs;
use tempfile::TempDir;

fn module_with(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("go.mod"), "module root\n").unwrap();
    for (relative, content) in files {
        let path = temp_dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    temp_dir
}

#[test]
fn test_analyze_orders_chain() {
    let module = module_with(&[
        ("a/a.go", "package a\n"),
        ("b/b.go", "package b\n\nimport \"root/a\"\n"),
        ("c/c.go", "package c\n\nimport \"root/b\"\n"),
    ]);

    let outcome = analyze(module.path()).unwrap();

    let AnalysisOutcome::Ordered { layers, .. } = &outcome else {
        panic!("expected ordered outcome, got {:?}", outcome);
    };
    assert_eq!(layers, &vec![vec!["root/a"], vec!["root/b"], vec!["root/c"]]);
}

#[test]
fn test_analyze_reports_cycle_without_sorting() {
    let module = module_with(&[
        ("a/a.go", "package a\n\nimport \"root/b\"\n"),
        ("b/b.go", "package b\n\nimport \"root/a\"\n"),
    ]);

    let outcome = analyze(module.path()).unwrap();

    let AnalysisOutcome::Cyclic { cycles, .. } = &outcome else {
        panic!("expected cyclic outcome, got {:?}", outcome);
    };
    assert_eq!(cycles, &vec![vec!["root/a".to_string(), "root/b".to_string()]]);
    assert_eq!(outcome.report().status, OutcomeStatus::Cyclic);
}

#[test]
fn test_analyze_empty_tree() {
    let module = module_with(&[]);

    let outcome = analyze(module.path()).unwrap();

    assert!(matches!(outcome, AnalysisOutcome::Empty(_)));
    assert_eq!(outcome.report().status, OutcomeStatus::Empty);
}

#[test]
fn test_analyze_without_manifest_fails_fast() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("main.go"), "package main\n").unwrap();

    let err = analyze(temp_dir.path()).unwrap_err();
    assert!(matches!(err, AnalysisError::Graph(GraphError::Manifest(_))));
}

#[test]
fn test_report_serializes_external_packages() {
    let module = module_with(&[("a/a.go", "package a\n\nimport \"fmt\"\n")]);

    let report = analyze(module.path()).unwrap().report();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["module_prefix"], "root");
    assert_eq!(json["status"], "ordered");
    assert_eq!(json["external_packages"], serde_json::json!(["fmt"]));
    assert_eq!(json["local_packages"], serde_json::json!(["root/a"]));
    assert_eq!(json["layers"], serde_json::json!([["fmt"], ["root/a"]]));
    assert!(json.get("cycles").is_none());
}
