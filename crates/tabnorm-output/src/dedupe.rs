use std::collections::HashSet;

/// Exact-duplicate filter over cleaned rows.
///
/// Every distinct row is kept for the lifetime of the filter, so memory
/// grows with the number of distinct rows offered. There is no expiry: a
/// row seen first can suppress a repeat arbitrarily far later.
#[derive(Debug, Default)]
pub struct RowDeduper {
    seen: HashSet<Vec<String>>,
    duplicates: u64,
}

impl RowDeduper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `row` and return true if it has not been seen before.
    pub fn first_occurrence(&mut self, row: &[String]) -> bool {
        if self.seen.contains(row) {
            self.duplicates += 1;
            return false;
        }
        self.seen.insert(row.to_vec());
        true
    }

    /// Number of distinct rows recorded.
    pub fn distinct(&self) -> usize {
        self.seen.len()
    }

    /// Number of rows rejected as repeats.
    pub fn duplicates(&self) -> u64 {
        self.duplicates
    }
}
