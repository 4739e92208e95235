//! Table rendering utilities for CLI outputs.
//!
//! Widths are terminal columns: wide glyphs count double and color codes
//! count zero, so colored or non-Latin cells stay aligned.

use crate::utils::colors::display_width;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    right_aligned: Vec<usize>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            right_aligned: Vec::new(),
        }
    }

    /// Right-align column `col` (numeric ids).
    pub fn align_right(mut self, col: usize) -> Self {
        self.right_aligned.push(col);
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Width of each column: the widest header or cell.
    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| display_width(c))
                    .chain(std::iter::once(display_width(h)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn push_cell(&self, out: &mut String, col: usize, cell: &str, width: usize) {
        let pad = " ".repeat(width.saturating_sub(display_width(cell)));
        if self.right_aligned.contains(&col) {
            out.push_str(&pad);
            out.push_str(cell);
        } else {
            out.push_str(cell);
            out.push_str(&pad);
        }
        out.push_str("  ");
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (i, (h, w)) in self.headers.iter().zip(&widths).enumerate() {
            self.push_cell(&mut out, i, h, *w);
        }
        out.push('\n');
        for w in &widths {
            out.push_str(&format!("{}  ", "-".repeat(*w)));
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                self.push_cell(&mut out, i, cell, *w);
            }
            out.push('\n');
        }

        out
    }
}
