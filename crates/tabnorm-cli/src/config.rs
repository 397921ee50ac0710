//! Option resolution: defaults, then an optional JSON config file, then
//! command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tabnorm_model::{NormalizeOptions, ShortRowPolicy};
use tracing::debug;

/// Flag values that override the config file when present.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub delimiter: Option<char>,
    pub quote: Option<char>,
    pub encoding: Option<String>,
    pub fallback_encoding: Option<String>,
    pub columns: Vec<String>,
    pub sample_size: Option<usize>,
    pub short_rows: Option<ShortRowPolicy>,
    pub progress_interval: Option<u64>,
}

/// Read a JSON options file. Missing keys keep their defaults.
pub fn load_options_file(path: &Path) -> Result<NormalizeOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let options: NormalizeOptions = serde_json::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config file");
    Ok(options)
}

/// Merge flag values over `base` and validate the result.
pub fn resolve_options(base: NormalizeOptions, overrides: Overrides) -> Result<NormalizeOptions> {
    let mut options = base;
    options.input = overrides.input;
    if let Some(output) = overrides.output {
        options.output = output;
    }
    if let Some(delimiter) = overrides.delimiter {
        options.delimiter = delimiter;
    }
    if let Some(quote) = overrides.quote {
        options.quote = quote;
    }
    if let Some(encoding) = overrides.encoding {
        options.encoding = encoding;
    }
    if let Some(fallback) = overrides.fallback_encoding {
        options.fallback_encoding = fallback;
    }
    if !overrides.columns.is_empty() {
        options.columns = overrides.columns;
    }
    if let Some(size) = overrides.sample_size {
        options.sample_size = size;
    }
    if let Some(policy) = overrides.short_rows {
        options.short_rows = policy;
    }
    if let Some(interval) = overrides.progress_interval {
        options.progress_interval = interval;
    }
    options.validate().context("invalid options")?;
    Ok(options)
}
