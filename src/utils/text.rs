//! Text helpers: input sanitizing, tolerant number parsing, matching.

use regex::Regex;
use std::sync::LazyLock;

/// Leading decimal number, the way a spreadsheet cell is read as a float:
/// `"2.5h"` reads as 2.5, `"abc"` does not read at all.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("leading number pattern is valid")
});

/// Escape markup-significant characters and trim the result.
pub fn sanitize_input(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            c => out.push(c),
        }
    }
    out.trim().to_string()
}

/// Read an hours cell. Absent, non-numeric or non-finite values give 0.
pub fn parse_hours(cell: Option<&str>) -> f64 {
    let Some(raw) = cell else {
        return 0.0;
    };

    let value = LEADING_NUMBER
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);

    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// `Some(trimmed)` when the cell holds visible text.
pub fn non_blank(cell: Option<&str>) -> Option<&str> {
    cell.map(str::trim).filter(|s| !s.is_empty())
}
