//! Output side of tabnorm.
//!
//! - **dedupe**: run-wide exact-duplicate suppression over cleaned rows
//! - **writer**: CSV writer that only emits first occurrences
//! - **sink**: file or standard-output destinations

mod dedupe;
mod error;
mod sink;
mod writer;

pub use dedupe::RowDeduper;
pub use error::{OutputError, Result};
pub use sink::open_sink;
pub use writer::{DedupWriter, WriterState};
