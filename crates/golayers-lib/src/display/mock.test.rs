use super::*;

#[test]
fn test_mock_records_status_calls_in_order() {
    let display = MockDisplayProvider::new();

    display.status().section("Layers");
    display.status().list(&["fmt", "root/a"]);
    display.status().error("./nope", "not a directory");

    assert_eq!(
        display.get_calls(),
        vec![
            DisplayCall::StatusSection {
                title: "Layers".to_string()
            },
            DisplayCall::StatusList {
                items: vec!["fmt".to_string(), "root/a".to_string()]
            },
            DisplayCall::StatusError {
                item: "./nope".to_string(),
                details: "not a directory".to_string()
            },
        ]
    );
}

#[test]
fn test_mock_records_spinner_lifecycle() {
    let display = MockDisplayProvider::new();

    let spinner = display.progress().spinner("Scanning");
    spinner.finish_clear();

    assert_eq!(display.count_calls("progress_spinner"), 1);
    assert!(display.has_call(&DisplayCall::ProgressFinishClear));
}

#[test]
fn test_transcript_flattens_text() {
    let display = MockDisplayProvider::new();

    display.status().info("No Go packages found");
    display
        .table()
        .table(&["Layer", "Packages"], &[vec!["0", "fmt"]]);

    let transcript = display.transcript();
    assert!(transcript.contains("No Go packages found"));
    assert!(transcript.contains("0 | fmt"));
}

#[test]
fn test_clones_share_the_call_log() {
    let display = MockDisplayProvider::new();
    let clone = display.clone();

    clone.status().message("hello");
    assert_eq!(display.count_calls("status_message"), 1);

    display.clear_calls();
    assert!(clone.get_calls().is_empty());
}
