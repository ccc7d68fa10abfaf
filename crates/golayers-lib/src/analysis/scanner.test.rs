use super::*;
use std::fs;
use tempfile::TempDir;

fn touch(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_is_source_file() {
    assert!(SourceScanner::is_source_file(Path::new("/x/main.go")));
    assert!(!SourceScanner::is_source_file(Path::new("/x/main_test.go")));
    assert!(!SourceScanner::is_source_file(Path::new("/x/README.md")));
    assert!(!SourceScanner::is_source_file(Path::new("/x/go.mod")));
    assert!(!SourceScanner::is_source_file(Path::new("/x/gofile")));
}

#[test]
fn test_scan_excludes_tests_and_other_extensions() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "main.go", "package main");
    touch(root, "main_test.go", "package main");
    touch(root, "notes.txt", "");
    touch(root, "pkg/a/a.go", "package a");
    touch(root, "pkg/a/a_test.go", "package a");

    let files = SourceScanner::new(root).scan();

    assert_eq!(files.len(), 2);
    assert!(files.contains(&root.join("main.go")));
    assert!(files.contains(&root.join("pkg/a/a.go")));
}

#[test]
fn test_scan_order_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "z/z.go", "package z");
    touch(root, "a/b.go", "package a");
    touch(root, "a/a.go", "package a");

    let scanner = SourceScanner::new(root);
    let first = scanner.scan();
    let second = scanner.scan();

    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![root.join("a/a.go"), root.join("a/b.go"), root.join("z/z.go")]
    );
}

#[test]
fn test_scan_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    assert!(SourceScanner::new(temp_dir.path()).scan().is_empty());
}

#[test]
fn test_read_source_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("gone.go");

    let err = SourceScanner::read_source(&missing).unwrap_err();
    assert!(err.to_string().contains("gone.go"));
}

#[test]
fn test_read_source_invalid_utf8_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.go");
    fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

    assert!(SourceScanner::read_source(&path).is_err());
}
