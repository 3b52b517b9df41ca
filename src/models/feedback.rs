use serde::Serialize;

/// One spreadsheet record: timestamp, category label, free-text comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRow {
    /// Opaque, display only.
    pub timestamp: String,
    pub category: Option<String>,
    pub comment: Option<String>,
}

impl FeedbackRow {
    pub fn new(timestamp: &str, category: Option<&str>, comment: Option<&str>) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            category: category.map(str::to_string),
            comment: comment.map(str::to_string),
        }
    }

    /// Category used for filtering and grouping; `""` when missing.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Comment as rendered in tables and prompts; `""` when missing.
    pub fn comment_text(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }
}

/// Ordered feedback rows, in spreadsheet order.
///
/// Never mutated after construction: filtering and `tail` build new tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackTable {
    rows: Vec<FeedbackRow>,
}

impl FeedbackTable {
    pub fn new(rows: Vec<FeedbackRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[FeedbackRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeedbackRow> {
        self.rows.iter()
    }

    /// Last `n` rows, order preserved.
    pub fn tail(&self, n: usize) -> FeedbackTable {
        let start = self.rows.len().saturating_sub(n);
        FeedbackTable::new(self.rows[start..].to_vec())
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for row in &self.rows {
            let label = row.category_label();
            if !out.iter().any(|c| c == label) {
                out.push(label.to_string());
            }
        }
        out
    }
}

impl FromIterator<FeedbackRow> for FeedbackTable {
    fn from_iter<I: IntoIterator<Item = FeedbackRow>>(iter: I) -> Self {
        FeedbackTable::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FeedbackTable {
    type Item = &'a FeedbackRow;
    type IntoIter = std::slice::Iter<'a, FeedbackRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
