use super::*;
use tempfile::TempDir;

fn namer(root: &Path) -> PackageNamer {
    PackageNamer::new(root, ModulePrefix::new("root"))
}

#[test]
fn test_root_file_maps_to_bare_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let namer = namer(temp_dir.path());

    assert_eq!(namer.package_for(&temp_dir.path().join("main.go")), "root");
}

#[test]
fn test_nested_file_is_qualified_with_slashes() {
    let temp_dir = TempDir::new().unwrap();
    let namer = namer(temp_dir.path());
    let file = temp_dir.path().join("internal").join("store").join("db.go");

    assert_eq!(namer.package_for(&file), "root/internal/store");
}

#[test]
fn test_files_in_same_directory_share_identifier() {
    let temp_dir = TempDir::new().unwrap();
    let namer = namer(temp_dir.path());
    let dir = temp_dir.path().join("a");

    assert_eq!(
        namer.package_for(&dir.join("one.go")),
        namer.package_for(&dir.join("two.go"))
    );
}

#[test]
fn test_outside_root_falls_back_to_parent_name() {
    let root = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let namer = namer(root.path());
    let file = elsewhere.path().join("stray").join("x.go");

    let id = namer.package_for(&file);
    assert_eq!(id, "stray");
    assert!(!id.is_empty());
}

#[test]
fn test_outside_root_without_parent_name_uses_prefix() {
    let root = TempDir::new().unwrap();
    let namer = namer(root.path());

    let id = namer.package_for(Path::new("/x.go"));
    assert_eq!(id, "root");
}

#[test]
fn test_prefix_with_path_segments() {
    let temp_dir = TempDir::new().unwrap();
    let namer = PackageNamer::new(temp_dir.path(), ModulePrefix::new("github.com/acme/app"));
    let file = temp_dir.path().join("cmd").join("server").join("main.go");

    assert_eq!(namer.package_for(&file), "github.com/acme/app/cmd/server");
    assert_eq!(namer.prefix().as_str(), "github.com/acme/app");
}
