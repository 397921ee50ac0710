//! Configuration options for a normalization run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Number of leading data rows examined for type inference.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Rows between progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Single-byte encoding used when the primary encoding fails to decode.
pub const DEFAULT_FALLBACK_ENCODING: &str = "windows-1252";

/// What to do with a row that has fewer cells than the selected columns need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortRowPolicy {
    /// Drop the row. It only shows up in the read-vs-written delta.
    #[default]
    Reject,
    /// Fill the missing trailing cells with empty strings.
    Pad,
}

/// Options controlling one normalization run.
///
/// Every field has a default so a partial JSON config file deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Source table. `-` reads standard input.
    pub input: PathBuf,

    /// Destination table. `-` writes standard output.
    pub output: PathBuf,

    /// Field delimiter of the source table.
    pub delimiter: char,

    /// Quote character of the source table.
    pub quote: char,

    /// Encoding label of the source table (WHATWG label, e.g. `utf-8`).
    pub encoding: String,

    /// Encoding label used to restart the run when decoding fails.
    pub fallback_encoding: String,

    /// Allow-list of original column labels. Empty keeps every column.
    pub columns: Vec<String>,

    /// Number of leading data rows used for type inference.
    pub sample_size: usize,

    /// Handling of rows shorter than the selected columns require.
    pub short_rows: ShortRowPolicy,

    /// Rows between progress log lines. Zero disables progress logging.
    pub progress_interval: u64,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("-"),
            output: PathBuf::from("-"),
            delimiter: ',',
            quote: '"',
            encoding: "utf-8".to_string(),
            fallback_encoding: DEFAULT_FALLBACK_ENCODING.to_string(),
            columns: Vec::new(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            short_rows: ShortRowPolicy::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl NormalizeOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }

    #[must_use]
    pub fn with_short_rows(mut self, policy: ShortRowPolicy) -> Self {
        self.short_rows = policy;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Delimiter as the byte the CSV parser expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        single_byte("delimiter", self.delimiter)
    }

    /// Quote character as the byte the CSV parser expects.
    pub fn quote_byte(&self) -> Result<u8> {
        single_byte("quote", self.quote)
    }

    /// Check the options that cannot be verified by the type system.
    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte()?;
        self.quote_byte()?;
        if self.sample_size == 0 {
            return Err(ModelError::EmptySample);
        }
        Ok(())
    }

    /// True when an allow-list restricts the output columns.
    pub fn is_filtered(&self) -> bool {
        !self.columns.is_empty()
    }
}

fn single_byte(name: &'static str, value: char) -> Result<u8> {
    if value.is_ascii() {
        Ok(value as u8)
    } else {
        Err(ModelError::NotSingleByte { name, value })
    }
}
