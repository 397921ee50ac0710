//! Column identity and per-column type decisions.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type inferred for a column from the sample window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Values are reformatted to `YYYY-MM-DD` when a date template parses.
    Date,
    /// Values are mapped to `true` / `false`.
    Boolean,
    /// Values pass through unchanged.
    #[default]
    String,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::Date => "date",
            ColumnType::Boolean => "boolean",
            ColumnType::String => "string",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selected output column.
///
/// Identity is the original label as it appeared in the source header.
/// Sanitized names are not guaranteed to be unique across columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub original_name: String,
    pub sanitized_name: String,
    /// Position of the column in the raw source header.
    pub source_index: usize,
    pub inferred_type: ColumnType,
}

/// Frozen mapping from original column label to its inferred type.
///
/// Built once from the sample window and never revised. Columns without any
/// non-empty sampled value are absent and read back as [`ColumnType::String`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTable {
    decisions: BTreeMap<String, ColumnType>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, column_type: ColumnType) {
        self.decisions.insert(column.into(), column_type);
    }

    pub fn get(&self, column: &str) -> ColumnType {
        self.decisions.get(column).copied().unwrap_or_default()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.decisions.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}
