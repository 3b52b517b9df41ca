// src/export/model.rs

use crate::core::classify::is_keep;
use crate::models::feedback::FeedbackRow;
use serde::Serialize;

/// Flat row shape shared by every export format.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FeedbackExport {
    pub timestamp: String,
    pub category: String,
    pub bucket: String,
    pub comment: String,
}

impl From<&FeedbackRow> for FeedbackExport {
    fn from(row: &FeedbackRow) -> Self {
        Self {
            timestamp: row.timestamp.clone(),
            category: row.category_label().to_string(),
            bucket: if is_keep(row) { "KEEP" } else { "Change/Stop" }.to_string(),
            comment: row.comment_text().to_string(),
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["timestamp", "category", "bucket", "comment"]
}

pub(crate) fn export_to_row(e: &FeedbackExport) -> Vec<String> {
    vec![
        e.timestamp.clone(),
        e.category.clone(),
        e.bucket.clone(),
        e.comment.clone(),
    ]
}
