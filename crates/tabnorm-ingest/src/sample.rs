//! Header plus sample window over a single record cursor.
//!
//! Type inference needs a look at the first rows before any row can be
//! normalized. Instead of re-reading the source, the sampled rows are kept in
//! memory and replayed ahead of the rest of the stream, so the same code
//! path works for files and for standard input.

use tracing::debug;

use crate::error::{IngestError, Result};
use crate::reader::TableReader;

/// A source with its header read and the first rows buffered.
pub struct SampledTable<'a> {
    header: Vec<String>,
    sample: Vec<Vec<String>>,
    reader: TableReader<'a>,
}

impl<'a> SampledTable<'a> {
    /// Read the header and up to `sample_size` data rows.
    ///
    /// Fails with [`IngestError::EmptyCsv`] when the source has no header.
    pub fn read(mut reader: TableReader<'a>, sample_size: usize) -> Result<Self> {
        let Some(header) = reader.read_header()? else {
            return Err(IngestError::EmptyCsv {
                source_name: reader.source_name().to_string(),
            });
        };

        let mut sample = Vec::with_capacity(sample_size.min(1024));
        while sample.len() < sample_size {
            match reader.next_row()? {
                Some(row) => sample.push(row),
                None => break,
            }
        }
        debug!(
            source = %reader.source_name(),
            columns = header.len(),
            sampled_rows = sample.len(),
            "sample window read"
        );

        Ok(Self {
            header,
            sample,
            reader,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn sample(&self) -> &[Vec<String>] {
        &self.sample
    }

    pub fn source_name(&self) -> &str {
        self.reader.source_name()
    }

    /// Every data row in source order: the buffered sample first, then the
    /// remainder of the stream.
    pub fn into_rows(self) -> Rows<'a> {
        Rows {
            buffered: self.sample.into_iter(),
            reader: self.reader,
            finished: false,
        }
    }
}

/// Iterator over all data rows of a [`SampledTable`].
///
/// Stops after the first error.
pub struct Rows<'a> {
    buffered: std::vec::IntoIter<Vec<String>>,
    reader: TableReader<'a>,
    finished: bool,
}

impl Iterator for Rows<'_> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(row) = self.buffered.next() {
            return Some(Ok(row));
        }
        if self.finished {
            return None;
        }
        match self.reader.next_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}
