//! Mock display provider implementation for testing
//!
//! Records every display call for assertion in unit and end-to-end tests.

use super::providers::*;
use std::sync::{Arc, Mutex};

type CallLog = Arc<Mutex<Vec<DisplayCall>>>;

fn record(calls: &CallLog, call: DisplayCall) {
    if let Ok(mut calls) = calls.lock() {
        calls.push(call);
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Mock implementation of DisplayProvider that records all calls
#[derive(Clone, Default)]
pub struct MockDisplayProvider {
    calls: CallLog,
}

impl MockDisplayProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded display calls for testing assertions
    pub fn get_calls(&self) -> Vec<DisplayCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn clear_calls(&self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.clear();
        }
    }

    /// Check if a specific call was made
    pub fn has_call(&self, expected: &DisplayCall) -> bool {
        self.get_calls().contains(expected)
    }

    /// Get count of calls of a specific type
    pub fn count_calls(&self, call_type: &str) -> usize {
        self.get_calls()
            .iter()
            .filter(|call| call.call_type() == call_type)
            .count()
    }

    /// Every text fragment shown, flattened, for substring assertions
    pub fn transcript(&self) -> String {
        self.get_calls()
            .iter()
            .map(DisplayCall::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DisplayProvider for MockDisplayProvider {
    fn status(&self) -> Box<dyn StatusProvider> {
        Box::new(MockStatusProvider {
            calls: self.calls.clone(),
        })
    }

    fn progress(&self) -> Box<dyn ProgressProvider> {
        Box::new(MockProgressProvider {
            calls: self.calls.clone(),
        })
    }

    fn table(&self) -> Box<dyn StructuredProvider> {
        Box::new(MockStructuredProvider {
            calls: self.calls.clone(),
        })
    }
}

/// Recorded display call for testing
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    StatusSuccess { item: String, details: String },
    StatusError { item: String, details: String },
    StatusWarning { message: String },
    StatusInfo { message: String },
    StatusMessage { text: String },
    StatusEmphasis { text: String },
    StatusSubtle { text: String },
    StatusList { items: Vec<String> },
    StatusToolCheck { tool: String, available: bool, version: String },
    StatusSection { title: String },

    ProgressSpinner { message: String },
    ProgressAbandon { message: String },
    ProgressFinishClear,

    StructuredTable { headers: Vec<String>, rows: Vec<Vec<String>> },
    StructuredProperties { pairs: Vec<(String, String)> },
}

impl DisplayCall {
    pub fn call_type(&self) -> &'static str {
        match self {
            Self::StatusSuccess { .. } => "status_success",
            Self::StatusError { .. } => "status_error",
            Self::StatusWarning { .. } => "status_warning",
            Self::StatusInfo { .. } => "status_info",
            Self::StatusMessage { .. } => "status_message",
            Self::StatusEmphasis { .. } => "status_emphasis",
            Self::StatusSubtle { .. } => "status_subtle",
            Self::StatusList { .. } => "status_list",
            Self::StatusToolCheck { .. } => "status_tool_check",
            Self::StatusSection { .. } => "status_section",
            Self::ProgressSpinner { .. } => "progress_spinner",
            Self::ProgressAbandon { .. } => "progress_abandon",
            Self::ProgressFinishClear => "progress_finish_clear",
            Self::StructuredTable { .. } => "structured_table",
            Self::StructuredProperties { .. } => "structured_properties",
        }
    }

    /// Human-visible text carried by the call
    pub fn text(&self) -> String {
        match self {
            Self::StatusSuccess { item, details } | Self::StatusError { item, details } => {
                format!("{}: {}", item, details)
            }
            Self::StatusWarning { message }
            | Self::StatusInfo { message }
            | Self::ProgressSpinner { message }
            | Self::ProgressAbandon { message } => message.clone(),
            Self::StatusMessage { text }
            | Self::StatusEmphasis { text }
            | Self::StatusSubtle { text } => text.clone(),
            Self::StatusList { items } => items.join("\n"),
            Self::StatusToolCheck { tool, version, .. } => format!("{} {}", tool, version),
            Self::StatusSection { title } => title.clone(),
            Self::ProgressFinishClear => String::new(),
            Self::StructuredTable { headers, rows } => std::iter::once(headers.join(" | "))
                .chain(rows.iter().map(|row| row.join(" | ")))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::StructuredProperties { pairs } => pairs
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

struct MockStatusProvider {
    calls: CallLog,
}

impl StatusProvider for MockStatusProvider {
    fn success(&self, item: &str, details: &str) {
        record(
            &self.calls,
            DisplayCall::StatusSuccess {
                item: item.to_string(),
                details: details.to_string(),
            },
        );
    }

    fn error(&self, item: &str, details: &str) {
        record(
            &self.calls,
            DisplayCall::StatusError {
                item: item.to_string(),
                details: details.to_string(),
            },
        );
    }

    fn warning(&self, message: &str) {
        record(&self.calls, DisplayCall::StatusWarning { message: message.to_string() });
    }

    fn info(&self, message: &str) {
        record(&self.calls, DisplayCall::StatusInfo { message: message.to_string() });
    }

    fn message(&self, text: &str) {
        record(&self.calls, DisplayCall::StatusMessage { text: text.to_string() });
    }

    fn emphasis(&self, text: &str) {
        record(&self.calls, DisplayCall::StatusEmphasis { text: text.to_string() });
    }

    fn subtle(&self, text: &str) {
        record(&self.calls, DisplayCall::StatusSubtle { text: text.to_string() });
    }

    fn list(&self, items: &[&str]) {
        record(&self.calls, DisplayCall::StatusList { items: owned(items) });
    }

    fn tool_check(&self, tool: &str, available: bool, version: &str) {
        record(
            &self.calls,
            DisplayCall::StatusToolCheck {
                tool: tool.to_string(),
                available,
                version: version.to_string(),
            },
        );
    }

    fn section(&self, title: &str) {
        record(&self.calls, DisplayCall::StatusSection { title: title.to_string() });
    }
}

struct MockProgressProvider {
    calls: CallLog,
}

impl ProgressProvider for MockProgressProvider {
    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker> {
        record(&self.calls, DisplayCall::ProgressSpinner { message: message.to_string() });
        Box::new(MockProgressTracker {
            calls: self.calls.clone(),
        })
    }
}

struct MockProgressTracker {
    calls: CallLog,
}

impl ProgressTracker for MockProgressTracker {
    fn abandon(&self, message: &str) {
        record(&self.calls, DisplayCall::ProgressAbandon { message: message.to_string() });
    }

    fn finish_clear(&self) {
        record(&self.calls, DisplayCall::ProgressFinishClear);
    }
}

struct MockStructuredProvider {
    calls: CallLog,
}

impl StructuredProvider for MockStructuredProvider {
    fn table(&self, headers: &[&str], rows: &[Vec<&str>]) {
        record(
            &self.calls,
            DisplayCall::StructuredTable {
                headers: owned(headers),
                rows: rows.iter().map(|row| owned(row)).collect(),
            },
        );
    }

    fn properties(&self, pairs: &[(&str, &str)]) {
        record(
            &self.calls,
            DisplayCall::StructuredProperties {
                pairs: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    include!("mock.test.rs");
}
