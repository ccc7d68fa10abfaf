//! Terminal-aware styling
//!
//! Semantic colors and symbols on top of `console`, with styling and
//! unicode symbols switched by the detected terminal capabilities.

use crate::terminal::TerminalCapabilities;
use console::{Style, measure_text_width};

/// Symbol set chosen once from unicode support
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Symbols {
    pub checkmark: &'static str,
    pub cross: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub bullet: &'static str,
}

const UNICODE_SYMBOLS: Symbols = Symbols {
    checkmark: "✓",
    cross: "✗",
    warning: "⚠",
    info: "ℹ",
    bullet: "•",
};

const ASCII_SYMBOLS: Symbols = Symbols {
    checkmark: "+",
    cross: "x",
    warning: "!",
    info: "i",
    bullet: "*",
};

/// Style manager shared by all display components
#[derive(Debug, Clone)]
pub struct StyleManager {
    colors: bool,
    symbols: Symbols,
}

impl StyleManager {
    pub fn new(capabilities: &TerminalCapabilities) -> Self {
        Self {
            colors: capabilities.color.is_enabled(),
            symbols: if capabilities.unicode {
                UNICODE_SYMBOLS
            } else {
                ASCII_SYMBOLS
            },
        }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        style.force_styling(self.colors).apply_to(text).to_string()
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn style_success(&self, text: &str) -> String {
        self.paint(Style::new().green(), text)
    }

    pub fn style_error(&self, text: &str) -> String {
        self.paint(Style::new().red().bold(), text)
    }

    pub fn style_warning(&self, text: &str) -> String {
        self.paint(Style::new().yellow(), text)
    }

    pub fn style_info(&self, text: &str) -> String {
        self.paint(Style::new().cyan(), text)
    }

    pub fn style_emphasis(&self, text: &str) -> String {
        self.paint(Style::new().bold(), text)
    }

    pub fn style_subtle(&self, text: &str) -> String {
        self.paint(Style::new().dim(), text)
    }

    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_success(self.symbols.checkmark), message)
    }

    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_error(self.symbols.cross), message)
    }

    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.style_warning(self.symbols.warning), message)
    }

    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.style_info(self.symbols.info), message)
    }

    pub fn bullet(&self) -> &'static str {
        self.symbols.bullet
    }

    /// Pad to `width` visible columns, ignoring escape sequences
    pub fn pad(&self, text: &str, width: usize) -> String {
        let visible = measure_text_width(text);
        format!("{}{}", text, " ".repeat(width.saturating_sub(visible)))
    }
}

#[cfg(test)]
mod tests {
    include!("styling.test.rs");
}
