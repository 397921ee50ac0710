//! Deduplicating CSV writer.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};
use tracing::{debug, trace};

use crate::dedupe::RowDeduper;
use crate::error::{OutputError, Result};

/// Lifecycle of a [`DedupWriter`]. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    Open,
    Closed,
}

/// Writes the header once, then every first occurrence of a cleaned row.
///
/// Output is comma-delimited UTF-8 with minimal quoting: only fields that
/// contain the delimiter, a quote, or a line break are quoted.
pub struct DedupWriter<W: Write> {
    writer: csv::Writer<W>,
    deduper: RowDeduper,
    state: WriterState,
    written: u64,
}

impl<W: Write> DedupWriter<W> {
    /// Create the writer and emit `header` immediately.
    pub fn new<S: AsRef<str>>(sink: W, header: &[S]) -> Result<Self> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .from_writer(sink);
        let header: Vec<&str> = header.iter().map(AsRef::as_ref).collect();
        writer.write_record(&header)?;
        Ok(Self {
            writer,
            deduper: RowDeduper::new(),
            state: WriterState::Open,
            written: 0,
        })
    }

    pub fn state(&self) -> WriterState {
        self.state
    }

    /// Offer a cleaned row. Returns `Ok(true)` when it was written and
    /// `Ok(false)` when it repeats an earlier row.
    pub fn offer(&mut self, row: &[String]) -> Result<bool> {
        if self.state == WriterState::Closed {
            return Err(OutputError::WriterClosed);
        }
        if !self.deduper.first_occurrence(row) {
            trace!(duplicates = self.deduper.duplicates(), "duplicate row suppressed");
            return Ok(false);
        }
        self.writer.write_record(row)?;
        self.written += 1;
        Ok(true)
    }

    /// Flush the sink and stop accepting rows. Closing twice is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if self.state == WriterState::Open {
            self.writer.flush()?;
            self.state = WriterState::Closed;
            debug!(
                rows_written = self.written,
                distinct = self.deduper.distinct(),
                duplicates = self.deduper.duplicates(),
                "writer closed"
            );
        }
        Ok(())
    }

    pub fn rows_written(&self) -> u64 {
        self.written
    }

    pub fn duplicates_removed(&self) -> u64 {
        self.deduper.duplicates()
    }

    /// Close the writer and hand back the sink.
    pub fn into_inner(mut self) -> Result<W> {
        self.close()?;
        self.writer
            .into_inner()
            .map_err(|error| OutputError::Io(error.into_error()))
    }
}
