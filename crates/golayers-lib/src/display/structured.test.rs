use super::*;
use crate::display::test_utils::create_test_styling;

#[test]
fn test_table_lines_are_aligned() {
    let styling = create_test_styling();
    let structured = StructuredDisplay::new(&styling);

    let lines = structured
        .table()
        .header(&["Layer", "Packages"])
        .row(&["0", "fmt, root/a"])
        .row(&["12", "root/b"])
        .lines();

    assert_eq!(
        lines,
        vec![
            "Layer | Packages".to_string(),
            "------+------------".to_string(),
            "0     | fmt, root/a".to_string(),
            "12    | root/b".to_string(),
        ]
    );
}

#[test]
fn test_table_without_header_has_no_separator() {
    let styling = create_test_styling();
    let structured = StructuredDisplay::new(&styling);

    let lines = structured.table().row(&["a", "b"]).row(&["ccc", "d"]).lines();

    assert_eq!(lines, vec!["a   | b".to_string(), "ccc | d".to_string()]);
}

#[test]
fn test_empty_table_renders_nothing() {
    let styling = create_test_styling();
    let structured = StructuredDisplay::new(&styling);

    assert!(structured.table().lines().is_empty());
    structured.table().render();
}

#[test]
fn test_pairs_do_not_panic() {
    let styling = create_test_styling();
    let structured = StructuredDisplay::new(&styling);

    structured.pairs(&[("Module", "example.com/app"), ("Packages", "12")]);
    structured.pairs(&[]);
}
