use std::path::Path;

use serde::Serialize;
use tabnorm_model::{Column, RunStats, TypeTable};

/// Result of a completed normalization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub columns: Vec<Column>,
    /// Allow-listed labels that were not in the source header.
    pub missing_columns: Vec<String>,
    pub stats: RunStats,
    /// Name of the encoding the successful attempt decoded with.
    pub encoding: &'static str,
    /// True when the primary encoding failed and the run was restarted.
    pub restarted: bool,
}

/// Column plan produced from the sample window only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub columns: Vec<Column>,
    pub missing_columns: Vec<String>,
    /// Decisions backed by sampled values; absent columns read as string.
    pub types: TypeTable,
    pub source_columns: usize,
    pub sampled_rows: usize,
    pub encoding: &'static str,
    pub restarted: bool,
}

/// Machine-readable run report written by `--report`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub encoding: &'static str,
    pub restarted: bool,
    pub columns: &'a [Column],
    pub missing_columns: &'a [String],
    pub stats: RunStats,
    pub elapsed_ms: u128,
}
