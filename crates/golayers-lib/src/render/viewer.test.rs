use super::*;
use crate::application::session_mocks::MockProcessProvider;

#[test]
fn test_viewer_command_targets_path() {
    let (command, args) = viewer_command(Path::new("/out/app.html"));

    assert!(!command.is_empty());
    assert_eq!(args.last().map(String::as_str), Some("/out/app.html"));
}

#[test]
fn test_open_in_viewer_success() {
    let process = MockProcessProvider::new();
    assert!(open_in_viewer(&process, Path::new("/out/app.html")));

    let calls = process.get_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].working_dir, Path::new("/out"));
}

#[test]
fn test_open_in_viewer_failure_is_not_fatal() {
    let (command, _) = viewer_command(Path::new("/out/app.html"));
    let process = MockProcessProvider::new().with_result(command, Err("no display".to_string()));

    assert!(!open_in_viewer(&process, Path::new("/out/app.html")));
}
