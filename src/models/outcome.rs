use crate::models::feedback::FeedbackTable;

/// Result of a feedback load.
///
/// `Empty` means the source answered with a valid sheet holding no rows;
/// `LoadFailed` carries the reason the table could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(FeedbackTable),
    Empty,
    LoadFailed(String),
}

impl LoadOutcome {
    pub fn from_table(table: FeedbackTable) -> Self {
        if table.is_empty() {
            LoadOutcome::Empty
        } else {
            LoadOutcome::Loaded(table)
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            LoadOutcome::Loaded(t) => t.len(),
            _ => 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadOutcome::LoadFailed(_))
    }
}
