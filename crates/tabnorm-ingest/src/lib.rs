//! Delimited-text input for tabnorm.
//!
//! # Features
//!
//! - **Sources**: files, or standard input buffered in memory so a run can
//!   restart under a fallback encoding
//! - **Decoding**: strict per-field decoding through `encoding_rs`; failures
//!   surface as [`IngestError::Decode`] instead of replacement characters
//! - **Sample window**: the header plus the first N rows are materialized,
//!   then iteration continues on the same record cursor
//!
//! # Example
//!
//! ```ignore
//! use tabnorm_ingest::{InputSource, ReadOptions, SampledTable, TableReader};
//!
//! let source = InputSource::from_arg("data.csv".as_ref())?;
//! let reader = TableReader::open(&source, &ReadOptions::default())?;
//! let table = SampledTable::read(reader, 100)?;
//! for row in table.into_rows() {
//!     let row = row?;
//! }
//! ```

mod encoding;
mod error;
mod reader;
mod sample;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Decoding ===
pub use encoding::{decode_field, resolve_encoding};

// === Reading ===
pub use reader::{ReadOptions, TableReader};
pub use sample::{Rows, SampledTable};
pub use source::InputSource;
