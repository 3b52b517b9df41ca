/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";

/// Wraps `value` in `color` … RESET.
pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey placeholder for empty cells, the value itself otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}—{RESET}")
    } else {
        value.to_string()
    }
}
