use serde::Serialize;

/// Bucket counts for a feedback table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub keep_count: usize,
    /// Every non-KEEP row, missing categories included.
    pub other_count: usize,
}
