//! Display provider traits for dependency injection
//!
//! Command handlers talk to the user only through these traits, so tests
//! can swap in [`MockDisplayProvider`](super::MockDisplayProvider) and
//! assert on what would have been shown.

/// Provider trait for all user-facing communication
pub trait DisplayProvider {
    fn status(&self) -> Box<dyn StatusProvider>;

    fn progress(&self) -> Box<dyn ProgressProvider>;

    fn table(&self) -> Box<dyn StructuredProvider>;
}

/// Provider trait for status updates and user feedback
pub trait StatusProvider {
    /// Display a success status with optional details
    fn success(&self, item: &str, details: &str);

    /// Display an error status with details
    fn error(&self, item: &str, details: &str);

    fn warning(&self, message: &str);

    fn info(&self, message: &str);

    /// Display a simple message without status symbols
    fn message(&self, text: &str);

    fn emphasis(&self, text: &str);

    fn subtle(&self, text: &str);

    /// Display a list of items with bullets
    fn list(&self, items: &[&str]);

    /// Check and report tool availability
    fn tool_check(&self, tool: &str, available: bool, version: &str);

    /// Display a header for a section of work
    fn section(&self, title: &str);
}

/// Provider trait for progress tracking
pub trait ProgressProvider {
    /// Create a spinner for operations with unknown duration
    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker>;
}

/// Individual progress tracker interface
pub trait ProgressTracker {
    /// Abandon with error message
    fn abandon(&self, message: &str);

    /// Finish and clear the spinner
    fn finish_clear(&self);
}

/// Provider trait for structured output
pub trait StructuredProvider {
    fn table(&self, headers: &[&str], rows: &[Vec<&str>]);

    /// Display key-value pairs
    fn properties(&self, pairs: &[(&str, &str)]);
}

/// Extension trait for common display patterns used in commands
pub trait DisplayProviderExt: DisplayProvider {
    /// Section header followed by a bulleted list, or a subtle "none" line
    fn display_group(&self, title: &str, items: &[&str]) {
        let status = self.status();
        status.section(&format!("{} ({})", title, items.len()));
        if items.is_empty() {
            status.subtle("  none");
        } else {
            status.list(items);
        }
    }
}

impl<T: DisplayProvider + ?Sized> DisplayProviderExt for T {}
