//! Import declaration extraction
//!
//! [`LexicalImportExtractor`] is a line-oriented heuristic, not a parser:
//! import-like text hidden inside string literals can still be picked up.
//! Everything behind the [`ImportExtractor`] trait can be swapped for a real
//! grammar without touching the graph code.

use std::collections::BTreeSet;

const IMPORT_KEYWORD: &str = "import";

/// Extracts the set of import paths declared in one file's text
pub trait ImportExtractor {
    fn extract(&self, text: &str) -> BTreeSet<String>;
}

/// Best-effort lexical scanner for `import "x"` and `import ( ... )` forms
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalImportExtractor;

impl LexicalImportExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Line up to the first `//` that is not inside a quoted span
    fn strip_line_comment(line: &str) -> &str {
        let mut quoted = false;
        let mut prev = '\0';
        for (idx, ch) in line.char_indices() {
            match ch {
                '"' => quoted = !quoted,
                '/' if !quoted && prev == '/' => return &line[..idx - 1],
                _ => {}
            }
            prev = ch;
        }
        line
    }

    /// Text inside the first double-quoted span of a line
    fn quoted_path(line: &str) -> Option<&str> {
        let start = line.find('"')? + 1;
        let len = line[start..].find('"')?;
        if len == 0 {
            return None;
        }
        Some(&line[start..start + len])
    }

    /// Handle one line inside a grouped block; returns false once the block closes
    fn group_line(line: &str, imports: &mut BTreeSet<String>) -> bool {
        let line = Self::strip_line_comment(line.trim()).trim_end();
        if line.is_empty() {
            return true;
        }
        if line.starts_with(')') {
            return false;
        }

        if let Some(path) = Self::quoted_path(line) {
            imports.insert(path.to_string());
        }

        // `"fmt")` closes the block on the same line
        let tail = line.rfind('"').map_or(line, |idx| &line[idx + 1..]);
        !tail.contains(')')
    }

    /// Strip the `import` keyword when it starts a declaration
    fn after_keyword(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(IMPORT_KEYWORD)?;
        if rest.starts_with(char::is_whitespace) || rest.starts_with('(') {
            Some(rest.trim_start())
        } else {
            None
        }
    }
}

impl ImportExtractor for LexicalImportExtractor {
    fn extract(&self, text: &str) -> BTreeSet<String> {
        let mut imports = BTreeSet::new();
        let mut in_group = false;
        let mut in_block_comment = false;

        for raw in text.lines() {
            let line = raw.trim();

            if in_block_comment {
                in_block_comment = !line.contains("*/");
                continue;
            }
            if line.starts_with("/*") {
                in_block_comment = !line.contains("*/");
                continue;
            }

            if in_group {
                in_group = Self::group_line(line, &mut imports);
                continue;
            }

            let Some(rest) = Self::after_keyword(line) else {
                continue;
            };

            if let Some(group) = rest.strip_prefix('(') {
                // Anything after `(` on the opening line belongs to the group
                in_group = Self::group_line(group, &mut imports);
            } else if let Some(path) = Self::quoted_path(Self::strip_line_comment(rest)) {
                imports.insert(path.to_string());
            }
        }

        imports
    }
}

#[cfg(test)]
mod tests {
    include!("imports.test.rs");
}
