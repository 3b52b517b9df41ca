use crate::core::classify::{breakdown, classify};
use crate::core::filter::{Selection, filter};
use crate::models::feedback::FeedbackTable;
use crate::models::summary::Summary;

/// Everything the dashboard shows for one loaded table.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Labels present in the unfiltered table, for the category selector.
    pub categories: Vec<String>,
    pub filtered: FeedbackTable,
    pub summary: Summary,
    pub breakdown: Vec<(String, usize)>,
    pub recent: FeedbackTable,
}

pub struct Core;

impl Core {
    pub fn build_view(
        table: &FeedbackTable,
        selection: &Selection,
        recent_rows: usize,
    ) -> DashboardView {
        let filtered = filter(table, selection);
        let summary = classify(&filtered);
        let breakdown = breakdown(&filtered);
        let recent = filtered.tail(recent_rows);

        DashboardView {
            categories: table.categories(),
            filtered,
            summary,
            breakdown,
            recent,
        }
    }
}
