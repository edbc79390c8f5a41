pub mod colors;
pub mod date;
pub mod path;
pub mod table;
pub mod text;

pub use text::{parse_hours, sanitize_input};

/// Hours as shown to people: no trailing zeros, at most two decimals.
pub fn format_hours(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    format!("{}", rounded)
}
