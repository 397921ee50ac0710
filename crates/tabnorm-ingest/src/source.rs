//! Input sources.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

const STDIN_NAME: &str = "<stdin>";

/// Where the source table comes from.
///
/// Every variant can be opened more than once, which the encoding fallback
/// relies on. Standard input is read into memory up front for that reason.
#[derive(Debug, Clone)]
pub enum InputSource {
    File(PathBuf),
    Memory { name: String, bytes: Vec<u8> },
}

impl InputSource {
    /// Resolve a command-line argument: `-` is standard input, anything
    /// else a file path that must exist.
    pub fn from_arg(path: &Path) -> Result<Self> {
        if path == Path::new("-") {
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(|source| IngestError::Read {
                    source_name: STDIN_NAME.to_string(),
                    source,
                })?;
            return Ok(Self::from_bytes(STDIN_NAME, bytes));
        }
        if !path.is_file() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self::File(path.to_path_buf()))
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::Memory {
            name: name.into(),
            bytes,
        }
    }

    /// Human-readable name for logs and errors.
    pub fn name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Memory { name, .. } => name.clone(),
        }
    }

    /// Open a fresh byte stream positioned at the start of the source.
    pub fn open(&self) -> Result<Box<dyn Read + '_>> {
        match self {
            Self::File(path) => {
                let file = File::open(path).map_err(|e| {
                    if e.kind() == io::ErrorKind::NotFound {
                        IngestError::FileNotFound { path: path.clone() }
                    } else {
                        IngestError::Read {
                            source_name: path.display().to_string(),
                            source: e,
                        }
                    }
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            Self::Memory { bytes, .. } => Ok(Box::new(bytes.as_slice())),
        }
    }
}
