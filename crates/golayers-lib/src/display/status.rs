//! Status display for user feedback
//!
//! Semantic status lines written to stdout, styled by [`StyleManager`].

use super::styling::StyleManager;

/// Status display manager for semantic user feedback
pub struct StatusDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> StatusDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    fn item_line(item: &str, details: &str) -> String {
        if details.is_empty() {
            item.to_string()
        } else {
            format!("{}: {}", item, details)
        }
    }

    /// Output: `✓ dot: 2.43.0`
    pub fn success(&self, item: &str, details: &str) {
        println!(
            "{}",
            self.styling.format_success(&Self::item_line(item, details))
        );
    }

    /// Output: `✗ ./missing: not a directory`
    pub fn error(&self, item: &str, details: &str) {
        println!(
            "{}",
            self.styling.format_error(&Self::item_line(item, details))
        );
    }

    pub fn warning(&self, message: &str) {
        println!("{}", self.styling.format_warning(message));
    }

    pub fn info(&self, message: &str) {
        println!("{}", self.styling.format_info(message));
    }

    pub fn message(&self, text: &str) {
        println!("{}", text);
    }

    pub fn emphasis(&self, text: &str) {
        println!("{}", self.styling.style_emphasis(text));
    }

    pub fn subtle(&self, text: &str) {
        println!("{}", self.styling.style_subtle(text));
    }

    pub fn list(&self, items: &[&str]) {
        for item in items {
            println!("  {} {}", self.styling.bullet(), item);
        }
    }
}

/// Convenience functions for common status patterns
impl<'a> StatusDisplay<'a> {
    /// Report whether an external tool is available
    pub fn tool_check(&self, tool: &str, available: bool, version: &str) {
        if available {
            self.success(tool, version);
        } else {
            self.error(tool, "not found");
        }
    }

    /// Display a header for a section of work
    pub fn section(&self, title: &str) {
        println!();
        println!("{}", self.styling.style_emphasis(title));
    }
}

#[cfg(test)]
mod tests {
    include!("status.test.rs");
}
