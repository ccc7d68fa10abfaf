use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn golayers() -> Command {
    let mut cmd = Command::cargo_bin("golayers").unwrap();
    cmd.env("GOLAYERS_COLOR", "never")
        .env("GOLAYERS_YES", "true")
        .env_remove("RUST_LOG");
    cmd
}

fn go_module(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("go.mod"), "module example.com/app\n").unwrap();
    for (relative, content) in files {
        let path = temp_dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    temp_dir
}

#[test]
fn version_prints_package_version() {
    golayers()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn analyze_json_reports_layers() {
    let module = go_module(&[
        ("store/store.go", "package store\n\nimport \"database/sql\"\n"),
        (
            "web/web.go",
            "package web\n\nimport (\n\t\"example.com/app/store\"\n)\n",
        ),
    ]);

    golayers()
        .args(["analyze", "--json", "--no-render"])
        .arg(module.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ordered\""))
        .stdout(predicate::str::contains("\"example.com/app/web\""));
}

#[test]
fn analyze_reports_cycle_without_rendering() {
    let module = go_module(&[
        ("a/a.go", "package a\n\nimport \"example.com/app/b\"\n"),
        ("b/b.go", "package b\n\nimport \"example.com/app/a\"\n"),
    ]);

    golayers()
        .arg("analyze")
        .arg(module.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency cycle detected"));

    assert!(!module.path().join("example.com_app.html").exists());
}

#[test]
fn analyze_without_go_mod_fails() {
    let temp_dir = TempDir::new().unwrap();

    golayers()
        .args(["analyze", "--no-render"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("go.mod"));
}

#[test]
fn analyze_invalid_directory_is_reported() {
    golayers()
        .args(["analyze", "--no-render", "/definitely/not/a/golayers/dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid directory"));
}

#[test]
fn rejects_out_of_range_log_level() {
    golayers()
        .args(["--log-level", "9", "version"])
        .assert()
        .failure();
}
