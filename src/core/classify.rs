//! KEEP vs Change/Stop classification.

use crate::models::feedback::{FeedbackRow, FeedbackTable};
use crate::models::summary::Summary;

pub const KEEP_MARKER: &str = "KEEP";

/// Case-insensitive substring match on the category. Missing categories
/// never match.
pub fn is_keep(row: &FeedbackRow) -> bool {
    row.category
        .as_deref()
        .is_some_and(|c| c.to_uppercase().contains(KEEP_MARKER))
}

pub fn classify(table: &FeedbackTable) -> Summary {
    let total = table.len();
    let keep_count = table.iter().filter(|r| is_keep(r)).count();

    Summary {
        total,
        keep_count,
        other_count: total - keep_count,
    }
}

/// Row count per category label, in first-seen order.
pub fn breakdown(table: &FeedbackTable) -> Vec<(String, usize)> {
    let mut out: Vec<(String, usize)> = Vec::new();
    for row in table {
        let label = row.category_label();
        match out.iter_mut().find(|(l, _)| l == label) {
            Some((_, n)) => *n += 1,
            None => out.push((label.to_string(), 1)),
        }
    }
    out
}
