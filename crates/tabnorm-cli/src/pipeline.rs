//! Two-pass normalization driver.
//!
//! Pass one reads the sample window and freezes the column plan. Pass two
//! streams every data row (the sample replayed first) through the row
//! normalizer into the deduplicating writer. A decode failure anywhere
//! restarts the whole run once under the fallback encoding.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tabnorm_ingest::{
    IngestError, InputSource, ReadOptions, SampledTable, TableReader, resolve_encoding,
};
use tabnorm_model::{NormalizeOptions, RunStats, TypeTable};
use tabnorm_output::{DedupWriter, open_sink};
use tabnorm_transform::{ColumnPlan, RowNormalizer, infer_types, plan_columns};
use tracing::{debug, info, info_span, trace, warn};

use crate::logging::redact_row;
use crate::types::{Inspection, RunOutcome};

/// Run a full normalization described by `options`.
pub fn run(options: &NormalizeOptions) -> Result<RunOutcome> {
    options.validate().context("invalid options")?;
    let source = InputSource::from_arg(&options.input)?;
    run_source(&source, options)
}

/// Run a full normalization over an already resolved source.
pub fn run_source(source: &InputSource, options: &NormalizeOptions) -> Result<RunOutcome> {
    let span = info_span!("normalize", input = %source.name());
    let _guard = span.enter();
    let (outcome, restarted) = with_encoding_fallback(options, |read| {
        if options.output == Path::new("-") {
            // Held back until the attempt succeeds so a restart never
            // leaves a partial table on stdout.
            let (outcome, buffer) = normalize_stream(source, options, read, Vec::new())?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(&buffer).context("write stdout")?;
            stdout.flush().context("flush stdout")?;
            Ok(outcome)
        } else {
            let sink = open_sink(&options.output)?;
            let (outcome, _) = normalize_stream(source, options, read, sink)?;
            Ok(outcome)
        }
    })?;
    Ok(RunOutcome {
        restarted,
        ..outcome
    })
}

/// Normalize `source` into `sink` with a fixed encoding.
///
/// Returns the outcome together with the flushed sink.
pub fn normalize_stream<W: Write>(
    source: &InputSource,
    options: &NormalizeOptions,
    read: &ReadOptions,
    sink: W,
) -> Result<(RunOutcome, W)> {
    let reader = TableReader::open(source, read)?;
    let table = SampledTable::read(reader, options.sample_size)?;
    let (plan, _) = build_plan(&table, options);
    let missing_columns = plan.missing.clone();
    let normalizer = RowNormalizer::new(plan, options.short_rows);
    let mut writer = DedupWriter::new(sink, &normalizer.header())?;

    let mut stats = RunStats::default();
    for row in table.into_rows() {
        let row = row?;
        stats.rows_read += 1;
        match normalizer.normalize(&row) {
            Some(cleaned) => {
                writer.offer(&cleaned)?;
            }
            None => {
                stats.rows_rejected += 1;
                trace!(
                    row = stats.rows_read,
                    cells = row.len(),
                    required = normalizer.required_len(),
                    values = %redact_row(&row),
                    "short row rejected"
                );
            }
        }
        if options.progress_interval > 0 && stats.rows_read % options.progress_interval == 0 {
            info!(
                rows_read = stats.rows_read,
                rows_written = writer.rows_written(),
                "progress"
            );
        }
    }

    writer.close()?;
    stats.rows_written = writer.rows_written();
    stats.duplicates_removed = writer.duplicates_removed();
    info!(
        rows_read = stats.rows_read,
        rows_written = stats.rows_written,
        duplicates_removed = stats.duplicates_removed,
        rows_rejected = stats.rows_rejected,
        rows_dropped = stats.rows_dropped(),
        "normalization complete"
    );

    let outcome = RunOutcome {
        columns: normalizer.columns().to_vec(),
        missing_columns,
        stats,
        encoding: read.encoding.name(),
        restarted: false,
    };
    Ok((outcome, writer.into_inner()?))
}

/// Read only the sample window and report the plan a run would use.
pub fn inspect(options: &NormalizeOptions) -> Result<Inspection> {
    options.validate().context("invalid options")?;
    let source = InputSource::from_arg(&options.input)?;
    let span = info_span!("inspect", input = %source.name());
    let _guard = span.enter();
    let (inspection, restarted) = with_encoding_fallback(options, |read| {
        let reader = TableReader::open(&source, read)?;
        let table = SampledTable::read(reader, options.sample_size)?;
        let (plan, types) = build_plan(&table, options);
        Ok(Inspection {
            columns: plan.columns,
            missing_columns: plan.missing,
            types,
            source_columns: table.header().len(),
            sampled_rows: table.sample().len(),
            encoding: read.encoding.name(),
            restarted: false,
        })
    })?;
    Ok(Inspection {
        restarted,
        ..inspection
    })
}

fn build_plan(table: &SampledTable<'_>, options: &NormalizeOptions) -> (ColumnPlan, TypeTable) {
    let types = infer_types(table.sample(), table.header());
    let plan = plan_columns(table.header(), &options.columns, &types);
    debug!(
        filtered = options.is_filtered(),
        selected = plan.columns.len(),
        typed_from_sample = types.len(),
        source_columns = table.header().len(),
        "column plan frozen"
    );
    for column in &plan.columns {
        debug!(
            original = %column.original_name,
            sanitized = %column.sanitized_name,
            index = column.source_index,
            inferred = %column.inferred_type,
            "planned column"
        );
    }
    (plan, types)
}

/// Run `attempt` under the primary encoding, and once more under the
/// fallback encoding if the first attempt hit a decode error.
///
/// Returns the attempt's value and whether a restart happened.
fn with_encoding_fallback<T>(
    options: &NormalizeOptions,
    mut attempt: impl FnMut(&ReadOptions) -> Result<T>,
) -> Result<(T, bool)> {
    let read = ReadOptions::from_options(options)?;
    let fallback = resolve_encoding(&options.fallback_encoding)?;
    let error = match attempt(&read) {
        Ok(value) => return Ok((value, false)),
        Err(error) => error,
    };
    if !is_decode_error(&error) || fallback == read.encoding {
        return Err(error);
    }
    warn!(
        encoding = read.encoding.name(),
        fallback = fallback.name(),
        error = %error,
        "decode failed, restarting with fallback encoding"
    );
    let value = attempt(&read.with_encoding(fallback))
        .with_context(|| format!("retry with {}", fallback.name()))?;
    Ok((value, true))
}

fn is_decode_error(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<IngestError>()
        .is_some_and(IngestError::is_decode_error)
}
