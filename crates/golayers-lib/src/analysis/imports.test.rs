use super::*;

fn extract(text: &str) -> Vec<String> {
    LexicalImportExtractor::new().extract(text).into_iter().collect()
}

#[test]
fn test_single_line_import() {
    let src = r#"package main

import "fmt"

func main() { fmt.Println("hi") }
"#;
    assert_eq!(extract(src), vec!["fmt"]);
}

#[test]
fn test_single_line_import_with_alias() {
    let src = "package main\n\nimport f \"fmt\"\nimport _ \"embed\"\n";
    assert_eq!(extract(src), vec!["embed", "fmt"]);
}

#[test]
fn test_grouped_imports() {
    let src = r#"package server

import (
    "net/http"
    "os"
    "root/internal/store"
)
"#;
    assert_eq!(extract(src), vec!["net/http", "os", "root/internal/store"]);
}

#[test]
fn test_grouped_block_with_discard_alias_blank_and_comment() {
    let src = r#"package db

import (
    // the driver registers itself
    _ "github.com/lib/pq"

    sq "github.com/Masterminds/squirrel"
    . "root/internal/testkit"
    "database/sql"
)
"#;
    assert_eq!(
        extract(src),
        vec![
            "database/sql",
            "github.com/Masterminds/squirrel",
            "github.com/lib/pq",
            "root/internal/testkit",
        ]
    );
}

#[test]
fn test_both_forms_are_unioned() {
    let src = r#"package mixed

import "errors"

import (
    "fmt"
    "errors"
)
"#;
    assert_eq!(extract(src), vec!["errors", "fmt"]);
}

#[test]
fn test_group_on_one_line() {
    assert_eq!(extract("import (\"fmt\")\n"), vec!["fmt"]);
    assert!(extract("import ()\n").is_empty());
}

#[test]
fn test_closing_paren_on_last_path_line() {
    let src = "import (\n  \"os\"\n  \"fmt\")\n\nvar x = \"not/an/import\"\n";
    assert_eq!(extract(src), vec!["fmt", "os"]);
}

#[test]
fn test_trailing_comment_with_paren_does_not_close_group() {
    let src = "import (\n  \"os\" // see (docs)\n  \"fmt\"\n)\n";
    assert_eq!(extract(src), vec!["fmt", "os"]);
}

#[test]
fn test_code_after_imports_is_ignored() {
    let src = r#"package main

import "fmt"

func main() {
    s := "import this"
    fmt.Println(s)
}
"#;
    assert_eq!(extract(src), vec!["fmt"]);
}

#[test]
fn test_keyword_must_be_whole_word() {
    assert!(extract("importer \"fmt\"\n").is_empty());
    assert!(extract("var importPath = \"fmt\"\n").is_empty());
}

#[test]
fn test_block_comment_lines_are_skipped() {
    let src = "/*\nimport \"hidden\"\n*/\nimport \"fmt\"\n/* import \"inline\" */\n";
    assert_eq!(extract(src), vec!["fmt"]);
}

#[test]
fn test_empty_text_has_no_imports() {
    assert!(extract("").is_empty());
    assert!(extract("package main\n").is_empty());
}

#[test]
fn test_quoted_text_in_trailing_comment_is_ignored() {
    let grouped = "import (\n\t\"fmt\" // was \"log\"\n\t\"os\"\n)\n";
    assert_eq!(extract(grouped), vec!["fmt", "os"]);

    let single = "import \"os\" // \"x\"\n";
    assert_eq!(extract(single), vec!["os"]);
}

#[test]
fn test_comment_on_opening_line_keeps_group_open() {
    let src = "import ( // stdlib \"only\"\n\t\"strings\"\n)\n";
    assert_eq!(extract(src), vec!["strings"]);
}

#[test]
fn test_double_slash_inside_path_is_kept() {
    assert_eq!(
        extract("import \"example.com//odd\" // note\n"),
        vec!["example.com//odd"]
    );
}
