use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing the normalized table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Destination could not be created or truncated.
    #[error("cannot write to {path}: {source}")]
    NotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A row was offered after the writer was closed.
    #[error("writer is closed")]
    WriterClosed,
}

pub type Result<T> = std::result::Result<T, OutputError>;
