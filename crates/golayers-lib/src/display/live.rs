//! Live display provider implementation
//!
//! Production implementation backed by the global [`Display`] and
//! `indicatif` spinners owned by the command session.

use super::Display;
use super::providers::*;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";
const SPINNER_TICK: Duration = Duration::from_millis(80);

/// Live implementation of DisplayProvider that owns display state for command lifecycle
pub struct LiveDisplayProvider {
    multi_progress: MultiProgress,
}

impl LiveDisplayProvider {
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
        }
    }
}

impl Default for LiveDisplayProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayProvider for LiveDisplayProvider {
    fn status(&self) -> Box<dyn StatusProvider> {
        Box::new(LiveStatusProvider)
    }

    fn progress(&self) -> Box<dyn ProgressProvider> {
        Box::new(LiveProgressProvider {
            parent: self.multi_progress.clone(),
        })
    }

    fn table(&self) -> Box<dyn StructuredProvider> {
        Box::new(LiveStructuredProvider)
    }
}

/// Live implementation of StatusProvider
struct LiveStatusProvider;

impl StatusProvider for LiveStatusProvider {
    fn success(&self, item: &str, details: &str) {
        Display::status().success(item, details);
    }

    fn error(&self, item: &str, details: &str) {
        Display::status().error(item, details);
    }

    fn warning(&self, message: &str) {
        Display::status().warning(message);
    }

    fn info(&self, message: &str) {
        Display::status().info(message);
    }

    fn message(&self, text: &str) {
        Display::status().message(text);
    }

    fn emphasis(&self, text: &str) {
        Display::status().emphasis(text);
    }

    fn subtle(&self, text: &str) {
        Display::status().subtle(text);
    }

    fn list(&self, items: &[&str]) {
        Display::status().list(items);
    }

    fn tool_check(&self, tool: &str, available: bool, version: &str) {
        Display::status().tool_check(tool, available, version);
    }

    fn section(&self, title: &str) {
        Display::status().section(title);
    }
}

/// Live implementation of ProgressProvider
struct LiveProgressProvider {
    parent: MultiProgress,
}

impl ProgressProvider for LiveProgressProvider {
    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker> {
        let style = ProgressStyle::with_template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let bar = self
            .parent
            .add(ProgressBar::new_spinner().with_style(style));
        bar.set_message(message.to_string());
        bar.enable_steady_tick(SPINNER_TICK);

        Box::new(SpinnerTracker { bar })
    }
}

/// Progress tracker that wraps an indicatif spinner
struct SpinnerTracker {
    bar: ProgressBar,
}

impl ProgressTracker for SpinnerTracker {
    fn abandon(&self, message: &str) {
        self.bar.abandon_with_message(message.to_string());
    }

    fn finish_clear(&self) {
        self.bar.finish_and_clear();
    }
}

/// Live implementation of StructuredProvider
struct LiveStructuredProvider;

impl StructuredProvider for LiveStructuredProvider {
    fn table(&self, headers: &[&str], rows: &[Vec<&str>]) {
        let display = Display::table();
        let mut table = display.table().header(headers);
        for row in rows {
            table = table.row(row);
        }
        table.render();
    }

    fn properties(&self, pairs: &[(&str, &str)]) {
        Display::table().pairs(pairs);
    }
}
