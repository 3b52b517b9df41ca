//! Category filter.

use crate::models::feedback::FeedbackTable;
use std::collections::BTreeSet;

/// Which category labels to keep. `All` is the unfiltered default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl Selection {
    /// Build from CLI values; no values means no filtering.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        if set.is_empty() {
            Selection::All
        } else {
            Selection::Only(set)
        }
    }

    pub fn matches(&self, label: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(set) => set.contains(label),
        }
    }
}

/// Rows whose category label exactly equals a selected label.
/// A missing category has the label `""`.
pub fn filter(table: &FeedbackTable, selection: &Selection) -> FeedbackTable {
    table
        .iter()
        .filter(|row| selection.matches(row.category_label()))
        .cloned()
        .collect()
}
