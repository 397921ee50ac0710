use serde::{Deserialize, Serialize};

/// Counters for one pipeline run.
///
/// `rows_read - rows_written == duplicates_removed + rows_rejected` holds at
/// the end of every completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Data rows read from the source (header excluded).
    pub rows_read: u64,
    /// Rows written to the sink after normalization and dedup.
    pub rows_written: u64,
    /// Rows suppressed as exact repeats of an earlier output row.
    pub duplicates_removed: u64,
    /// Rows dropped for being shorter than the selected columns require.
    pub rows_rejected: u64,
}

impl RunStats {
    /// Rows that did not make it to the output, for any reason.
    pub fn rows_dropped(&self) -> u64 {
        self.rows_read.saturating_sub(self.rows_written)
    }
}
