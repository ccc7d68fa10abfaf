use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_simple_module_line() {
    let prefix = ModulePrefix::parse("module github.com/acme/widgets\n\ngo 1.22\n").unwrap();
    assert_eq!(prefix.as_str(), "github.com/acme/widgets");
}

#[test]
fn test_parse_skips_leading_comments_and_blank_lines() {
    let content = "// generated\n\n  module example.com/app // trailing note\n";
    let prefix = ModulePrefix::parse(content).unwrap();
    assert_eq!(prefix.as_str(), "example.com/app");
}

#[test]
fn test_parse_quoted_module_path() {
    let prefix = ModulePrefix::parse("module \"example.com/quoted\"\n").unwrap();
    assert_eq!(prefix.as_str(), "example.com/quoted");
}

#[test]
fn test_parse_requires_whole_word() {
    assert!(ModulePrefix::parse("modules example.com/app\n").is_none());
    assert!(ModulePrefix::parse("go 1.22\nrequire x v1.0.0\n").is_none());
    assert!(ModulePrefix::parse("module\n").is_none());
}

#[test]
fn test_new_trims_trailing_slash() {
    assert_eq!(ModulePrefix::new("root/").as_str(), "root");
    assert_eq!(ModulePrefix::new("root").to_string(), "root");
}

#[test]
fn test_from_root_reads_manifest() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(MANIFEST_FILE), "module root\n\ngo 1.21\n").unwrap();

    let prefix = ModulePrefix::from_root(temp_dir.path()).unwrap();
    assert_eq!(prefix.as_str(), "root");
}

#[test]
fn test_from_root_missing_manifest_is_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = ModulePrefix::from_root(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ManifestError::Unreadable { .. }));
}

#[test]
fn test_from_root_without_module_directive_is_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(MANIFEST_FILE), "go 1.21\n").unwrap();

    let err = ModulePrefix::from_root(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ManifestError::MissingModuleDirective { .. }));
    assert!(err.to_string().contains("go.mod"));
}
