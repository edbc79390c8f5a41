/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Grey out empty cells ("" or "--"), leave the rest untouched.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Zero hours in grey, anything else in green.
pub fn colorize_hours(hours: f64, rendered: &str) -> String {
    if hours == 0.0 {
        format!("{GREY}{rendered}{RESET}")
    } else {
        format!("{GREEN}{rendered}{RESET}")
    }
}

/// Active flag: green for "Yes", red otherwise.
pub fn colorize_active(active: &str) -> String {
    if active == crate::models::garden::ACTIVE_YES {
        format!("{GREEN}{active}{RESET}")
    } else {
        format!("{RED}{active}{RESET}")
    }
}
