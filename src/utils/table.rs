//! Table rendering utilities for CLI outputs.
//!
//! Cells may hold ANSI colours; widths are measured on the visible text.
//! Columns with a `wrap` width are word-wrapped onto several lines.

use crate::utils::formatting::{pad_right, strip_ansi};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
    pub wrap: bool,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            wrap: false,
        }
    }

    pub fn wrapped(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            wrap: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Grow non-wrapped columns to fit their widest cell.
    pub fn fit_widths(&mut self) {
        for (i, col) in self.columns.iter_mut().enumerate() {
            if col.wrap {
                continue;
            }
            let widest = self
                .rows
                .iter()
                .filter_map(|r| r.get(i))
                .map(|c| UnicodeWidthStr::width(strip_ansi(c).as_str()))
                .max()
                .unwrap_or(0);
            col.width = col
                .width
                .max(widest)
                .max(UnicodeWidthStr::width(col.header.as_str()));
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"─".repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<Vec<String>> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let value = row.get(i).map(String::as_str).unwrap_or("");
                    if col.wrap && col.width > 0 {
                        textwrap::wrap(value, col.width)
                            .into_iter()
                            .map(|l| l.into_owned())
                            .collect()
                    } else {
                        vec![value.to_string()]
                    }
                })
                .collect();

            let height = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
            for line in 0..height {
                for (i, col) in self.columns.iter().enumerate() {
                    let text = cells[i].get(line).map(String::as_str).unwrap_or("");
                    out.push_str(&pad_right(text, col.width));
                    out.push(' ');
                }
                out.truncate(out.trim_end_matches(' ').len());
                out.push('\n');
            }
        }

        out
    }
}
