use super::*;

#[test]
fn test_mock_filesystem_records_writes() {
    let provider = MockFileSystemProvider::new().with_current_dir(PathBuf::from("/custom/path"));

    assert_eq!(provider.current_dir().unwrap(), PathBuf::from("/custom/path"));
    assert!(provider.is_directory(Path::new("/custom/path")));

    provider
        .write_file(Path::new("/custom/path/out.html"), "<html>")
        .unwrap();
    assert_eq!(
        provider.written(Path::new("/custom/path/out.html")),
        Some("<html>".to_string())
    );
    assert_eq!(
        provider.written_paths(),
        vec![PathBuf::from("/custom/path/out.html")]
    );
}

#[test]
fn test_mock_filesystem_failing_write() {
    let provider =
        MockFileSystemProvider::new().with_failing_write(PathBuf::from("/out/graph.html"));

    assert!(provider
        .write_file(Path::new("/out/graph.html"), "x")
        .is_err());
    assert!(provider.written_paths().is_empty());
}

#[test]
fn test_mock_process_queues_results_per_command() {
    let working_dir = PathBuf::from("/test/workdir");
    let provider = MockProcessProvider::new()
        .with_stdout("dot", "<svg/>")
        .with_result("xdg-open", Err("no display".to_string()));

    let first = provider.execute("dot", &["-Tsvg", "a.dot"], &working_dir).unwrap();
    assert_eq!(first.stdout, "<svg/>");

    // Queue drained: default success with empty output
    let second = provider.execute("dot", &["-Tsvg", "a.dot"], &working_dir).unwrap();
    assert!(second.success && second.stdout.is_empty());

    assert!(provider.execute("xdg-open", &["a.html"], &working_dir).is_err());

    let calls = provider.get_calls_for_command("dot");
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].args, vec!["-Tsvg", "a.dot"]);
}

#[test]
fn test_mock_graphviz_availability() {
    assert!(MockProcessProvider::new().check_graphviz().unwrap().0);
    assert_eq!(
        MockProcessProvider::new()
            .with_graphviz_unavailable()
            .check_graphviz()
            .unwrap(),
        (false, String::new())
    );
}

#[test]
fn test_mock_interactive_responses() {
    let provider = MockInteractiveProvider::new().with_text_input("/src/app".to_string());
    assert_eq!(
        provider.text_input("Directory", ".".to_string()).unwrap(),
        "/src/app"
    );

    let yes = MockInteractiveProvider::new()
        .with_text_input("/ignored".to_string())
        .with_yes_mode(true);
    assert_eq!(yes.text_input("Directory", ".".to_string()).unwrap(), ".");
    assert_eq!(yes.get_text_input_calls().len(), 1);
}

#[test]
fn test_mock_session_workdir_falls_back_to_current_dir() {
    let session = MockCommandSession::new();
    assert_eq!(session.workdir().unwrap(), PathBuf::from("/test/workdir"));

    let session = MockCommandSession::new().with_config(MockConfigProvider::new(AppConfig {
        workdir: Some(PathBuf::from("/configured")),
        ..AppConfig::default()
    }));
    assert_eq!(session.workdir().unwrap(), PathBuf::from("/configured"));
}
