//! Formatting utilities used for CLI and export outputs.

use crate::utils::colors::{GREEN, GREY, RED};
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns (wide glyphs and emoji count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(strip_ansi(s).as_str());
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(strip_ansi(s).as_str());
    format!("{}{}", " ".repeat(width.saturating_sub(visible)), s)
}

pub fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// Percentage of `part` over `total`, one decimal; `0.0` for an empty total.
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 * 1000.0 / total as f64).round() / 10.0
    }
}

/// Display text and ANSI colour for a category label.
/// KEEP labels are green, everything else red, a missing label grey.
pub fn describe_category(label: &str) -> (String, &'static str) {
    if label.is_empty() {
        ("(none)".into(), GREY)
    } else if label.to_uppercase().contains(crate::core::classify::KEEP_MARKER) {
        (label.to_string(), GREEN)
    } else {
        (label.to_string(), RED)
    }
}
