//! Record-level reading with explicit decoding.

use std::io::Read;

use csv::{ByteRecord, ReaderBuilder};
use encoding_rs::{Encoding, UTF_8};
use tabnorm_model::NormalizeOptions;

use crate::encoding::{decode_field, resolve_encoding};
use crate::error::{IngestError, Result};
use crate::source::InputSource;

/// Dialect and encoding of the source table.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    pub delimiter: u8,
    pub quote: u8,
    pub encoding: &'static Encoding,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            encoding: UTF_8,
        }
    }
}

impl ReadOptions {
    /// Dialect and primary encoding from run options.
    pub fn from_options(options: &NormalizeOptions) -> Result<Self> {
        Ok(Self {
            delimiter: options.delimiter_byte()?,
            quote: options.quote_byte()?,
            encoding: resolve_encoding(&options.encoding)?,
        })
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Reads decoded rows from a source, one record at a time.
///
/// Rows are returned as they appear: no padding, no trimming. Ragged rows
/// are allowed.
pub struct TableReader<'a> {
    source_name: String,
    encoding: &'static Encoding,
    records: csv::Reader<Box<dyn Read + 'a>>,
    record: ByteRecord,
}

impl<'a> TableReader<'a> {
    pub fn open(source: &'a InputSource, options: &ReadOptions) -> Result<Self> {
        let records = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(options.delimiter)
            .quote(options.quote)
            .from_reader(source.open()?);
        Ok(Self {
            source_name: source.name(),
            encoding: options.encoding,
            records,
            record: ByteRecord::new(),
        })
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Read the header row, dropping a leading byte-order mark.
    pub fn read_header(&mut self) -> Result<Option<Vec<String>>> {
        let Some(mut header) = self.next_row()? else {
            return Ok(None);
        };
        if let Some(first) = header.first_mut() {
            if let Some(stripped) = first.strip_prefix('\u{feff}') {
                *first = stripped.to_string();
            }
        }
        Ok(Some(header))
    }

    /// Read the next row. `Ok(None)` at end of input.
    pub fn next_row(&mut self) -> Result<Option<Vec<String>>> {
        let has_record = match self.records.read_byte_record(&mut self.record) {
            Ok(has_record) => has_record,
            Err(source) => {
                return Err(IngestError::CsvParse {
                    source_name: self.source_name.clone(),
                    source,
                });
            }
        };
        if !has_record {
            return Ok(None);
        }

        let mut row = Vec::with_capacity(self.record.len());
        for field in &self.record {
            let Some(value) = decode_field(field, self.encoding) else {
                return Err(IngestError::Decode {
                    source_name: self.source_name.clone(),
                    encoding: self.encoding.name(),
                    line: self.record.position().map_or(0, csv::Position::line),
                });
            };
            row.push(value);
        }
        Ok(Some(row))
    }
}
