//! Table rendering utilities for CLI outputs.
//!
//! Column widths are measured on the visible text, so cells may carry ANSI
//! color codes without breaking the alignment.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ANSI pattern is valid"));

/// Remove ANSI escape sequences from a string.
pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Display width of a cell, ignoring color codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_width: usize,
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
            max_width: 40,
        }
    }

    /// Cap on the width of a single column; longer cells are truncated.
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width.max(4);
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(visible_width(cell));
            }
        }
        widths.into_iter().map(|w| w.min(self.max_width)).collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (h, w) in self.headers.iter().zip(&widths) {
            out.push_str(&pad_cell(h, *w));
            out.push(' ');
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_cell(cell, *w));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad_cell(cell: &str, width: usize) -> String {
    let visible = visible_width(cell);
    if visible <= width {
        return format!("{cell}{}", " ".repeat(width - visible));
    }

    // truncate on the plain text; colors are dropped for overlong cells
    let plain = strip_ansi(cell);
    let mut out = String::new();
    let mut used = 0;
    for ch in plain.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width.saturating_sub(3) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    used += 3;
    format!("{out}{}", " ".repeat(width.saturating_sub(used)))
}
