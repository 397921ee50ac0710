//! Error types for tabnorm input.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while opening or reading the source table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the source.
    #[error("failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// Encoding label not known to the WHATWG encoding registry.
    #[error("unknown encoding label '{label}'")]
    UnknownEncoding { label: String },

    /// Encoding whose byte layout the CSV parser cannot split (UTF-16 and
    /// other non-ASCII-compatible encodings).
    #[error("unsupported encoding '{label}' ({encoding}): delimiters must be single ASCII bytes")]
    UnsupportedEncoding {
        label: String,
        encoding: &'static str,
    },

    /// A field could not be decoded with the active encoding.
    #[error("{source_name} is not valid {encoding} (record at line {line})")]
    Decode {
        source_name: String,
        encoding: &'static str,
        line: u64,
    },

    // === CSV Parsing Errors ===
    /// The CSV parser failed.
    #[error("failed to parse {source_name}: {source}")]
    CsvParse {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// Source has no header row.
    #[error("input is empty: {source_name}")]
    EmptyCsv { source_name: String },

    // === Configuration Errors ===
    /// Options could not be turned into a CSV dialect.
    #[error(transparent)]
    InvalidOptions(#[from] tabnorm_model::ModelError),
}

impl IngestError {
    /// True when a restart under another encoding may succeed.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "input file not found: /path/to/file.csv");
    }

    #[test]
    fn test_decode_error_is_restartable() {
        let err = IngestError::Decode {
            source_name: "in.csv".to_string(),
            encoding: "UTF-8",
            line: 3,
        };
        assert!(err.is_decode_error());
        assert_eq!(err.to_string(), "in.csv is not valid UTF-8 (record at line 3)");
        let err = IngestError::UnknownEncoding {
            label: "klingon".to_string(),
        };
        assert!(!err.is_decode_error());
    }

    #[test]
    fn test_unsupported_encoding_is_not_restartable() {
        let err = IngestError::UnsupportedEncoding {
            label: "utf-16le".to_string(),
            encoding: "UTF-16LE",
        };
        assert!(!err.is_decode_error());
        assert!(err.to_string().contains("utf-16le"));
    }
}
