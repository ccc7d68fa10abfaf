use super::*;
use crate::display::test_utils::create_test_styling;

#[test]
fn test_item_line_formatting() {
    assert_eq!(StatusDisplay::item_line("dot", "2.43.0"), "dot: 2.43.0");
    assert_eq!(StatusDisplay::item_line("dot", ""), "dot");
}

#[test]
fn test_status_message_kinds_do_not_panic() {
    let styling = create_test_styling();
    let status = StatusDisplay::new(&styling);

    status.success("root/a", "3 files");
    status.error("./missing", "not a directory");
    status.warning("cycle detected");
    status.info("no packages found");
    status.message("plain");
    status.emphasis("Layers");
    status.subtle("secondary");
    status.list(&["root/a", "root/b"]);
    status.tool_check("Graphviz", false, "");
    status.tool_check("Graphviz", true, "dot - graphviz version 2.43.0 (0)");
    status.section("Local packages");
}

#[test]
fn test_status_handles_empty_and_long_input() {
    let styling = create_test_styling();
    let status = StatusDisplay::new(&styling);

    status.list(&[]);
    status.message("");
    status.info(&"root/".repeat(200));
}
