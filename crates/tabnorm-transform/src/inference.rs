//! Column type inference from a sample window.
//!
//! # Algorithm
//!
//! For each column, every non-blank sampled value (after control characters
//! are stripped) is counted once, and checked in priority order:
//!
//! 1. **Date shape** ([`classify_date`]) counts as a date candidate.
//! 2. Otherwise, a **boolean token** ([`classify_boolean`]) counts as a
//!    boolean candidate.
//!
//! The column is `date` when date candidates exceed [`DATE_THRESHOLD`] of its
//! non-blank values, else `boolean` when boolean candidates exceed
//! [`BOOLEAN_THRESHOLD`], else `string`. Both thresholds are exclusive.
//! Columns with no non-blank sampled value are left out of the table.

use tabnorm_model::{ColumnType, TypeTable};
use tracing::debug;

use crate::normalization::{classify_boolean, classify_date, is_blank, strip_control_chars};

/// Share of date candidates a column must exceed to be typed `date`.
pub const DATE_THRESHOLD: f64 = 0.7;

/// Share of boolean candidates a column must exceed to be typed `boolean`.
pub const BOOLEAN_THRESHOLD: f64 = 0.7;

#[derive(Debug, Default, Clone, Copy)]
struct ColumnTally {
    non_empty: usize,
    dates: usize,
    booleans: usize,
}

impl ColumnTally {
    fn record(&mut self, raw: &str) {
        let value = strip_control_chars(raw);
        if is_blank(&value) {
            return;
        }
        self.non_empty += 1;
        if classify_date(&value) {
            self.dates += 1;
        } else if classify_boolean(&value) {
            self.booleans += 1;
        }
    }

    fn date_ratio(self) -> f64 {
        if self.non_empty == 0 {
            0.0
        } else {
            self.dates as f64 / self.non_empty as f64
        }
    }

    fn boolean_ratio(self) -> f64 {
        if self.non_empty == 0 {
            0.0
        } else {
            self.booleans as f64 / self.non_empty as f64
        }
    }

    fn decide(self) -> Option<ColumnType> {
        if self.non_empty == 0 {
            return None;
        }
        if self.date_ratio() > DATE_THRESHOLD {
            Some(ColumnType::Date)
        } else if self.boolean_ratio() > BOOLEAN_THRESHOLD {
            Some(ColumnType::Boolean)
        } else {
            Some(ColumnType::String)
        }
    }
}

/// Build the type table for `header` from the sampled data rows.
///
/// Rows shorter than the header contribute only the cells they have.
/// Cells beyond the header are ignored.
pub fn infer_types<S: AsRef<str>>(sample_rows: &[Vec<String>], header: &[S]) -> TypeTable {
    let mut tallies = vec![ColumnTally::default(); header.len()];
    for row in sample_rows {
        for (tally, value) in tallies.iter_mut().zip(row) {
            tally.record(value);
        }
    }

    let mut table = TypeTable::new();
    for (name, tally) in header.iter().zip(tallies) {
        let name = name.as_ref();
        let Some(column_type) = tally.decide() else {
            debug!(column = %name, "no sampled values, defaulting to string");
            continue;
        };
        debug!(
            column = %name,
            non_empty = tally.non_empty,
            dates = tally.dates,
            booleans = tally.booleans,
            inferred = %column_type,
            "inferred column type"
        );
        table.insert(name, column_type);
    }
    table
}
