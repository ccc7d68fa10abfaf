//! Structured output display (tables, key-value pairs)

use super::styling::StyleManager;
use console::measure_text_width;

/// Structured display manager for tables and lists
pub struct StructuredDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> StructuredDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    /// Start a table builder
    ///
    /// ```ignore
    /// Display::table()
    ///     .table()
    ///     .header(&["Layer", "Packages"])
    ///     .row(&["0", "fmt, root/a"])
    ///     .render();
    /// ```
    pub fn table(&self) -> TableDisplay<'a> {
        TableDisplay::new(self.styling)
    }

    /// Aligned `key | value` lines
    pub fn pairs(&self, pairs: &[(&str, &str)]) {
        let width = pairs
            .iter()
            .map(|(key, _)| measure_text_width(key))
            .max()
            .unwrap_or(0);

        for (key, value) in pairs {
            println!(
                "{} | {}",
                self.styling.pad(&self.styling.style_subtle(key), width),
                value
            );
        }
    }
}

/// Table display builder
pub struct TableDisplay<'a> {
    styling: &'a StyleManager,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl<'a> TableDisplay<'a> {
    fn new(styling: &'a StyleManager) -> Self {
        Self {
            styling,
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn header(mut self, headers: &[&str]) -> Self {
        self.headers = headers.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn row(mut self, cells: &[&str]) -> Self {
        self.rows.push(cells.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Column widths measured over header and rows
    fn column_widths(&self) -> Vec<usize> {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![0; columns];
        for line in std::iter::once(&self.headers).chain(self.rows.iter()) {
            for (i, cell) in line.iter().enumerate() {
                widths[i] = widths[i].max(measure_text_width(cell));
            }
        }
        widths
    }

    /// Table as printable lines; the last column is never padded
    pub fn lines(&self) -> Vec<String> {
        let widths = self.column_widths();
        if widths.is_empty() {
            return Vec::new();
        }

        let format_line = |cells: &[String], header: bool| -> String {
            let last = cells.len().saturating_sub(1);
            cells
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let cell = if header {
                        self.styling.style_emphasis(cell)
                    } else {
                        cell.clone()
                    };
                    if i == last {
                        cell
                    } else {
                        self.styling.pad(&cell, widths[i])
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ")
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        if !self.headers.is_empty() {
            lines.push(format_line(&self.headers, true));
            let separator = widths
                .iter()
                .map(|width| "-".repeat(*width))
                .collect::<Vec<_>>()
                .join("-+-");
            lines.push(self.styling.style_subtle(&separator));
        }
        for row in &self.rows {
            lines.push(format_line(row, false));
        }
        lines
    }

    pub fn render(self) {
        for line in self.lines() {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    include!("structured.test.rs");
}
