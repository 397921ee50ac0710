use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tabnorm_cli::config::{Overrides, load_options_file, resolve_options};
use tabnorm_cli::pipeline;
use tabnorm_cli::types::{Inspection, RunOutcome, RunReport};
use tabnorm_model::NormalizeOptions;
use tracing::{info, info_span};

use crate::cli::{InspectArgs, NormalizeArgs};

pub fn run_normalize(args: &NormalizeArgs) -> Result<(RunOutcome, NormalizeOptions)> {
    let options = build_options(args.input.config.as_deref(), args.overrides())?;
    let span = info_span!("run", input = %options.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let outcome = pipeline::run(&options)?;
    let elapsed = start.elapsed();
    info!(elapsed_ms = elapsed.as_millis(), "run finished");

    if let Some(path) = &args.report {
        let report = RunReport {
            input: &options.input,
            output: &options.output,
            encoding: outcome.encoding,
            restarted: outcome.restarted,
            columns: &outcome.columns,
            missing_columns: &outcome.missing_columns,
            stats: outcome.stats,
            elapsed_ms: elapsed.as_millis(),
        };
        write_report(path, &report)?;
    }
    Ok((outcome, options))
}

pub fn run_inspect(args: &InspectArgs) -> Result<Inspection> {
    let options = build_options(args.input.config.as_deref(), args.input.overrides())?;
    pipeline::inspect(&options)
}

fn build_options(config: Option<&Path>, overrides: Overrides) -> Result<NormalizeOptions> {
    let base = match config {
        Some(path) => load_options_file(path)?,
        None => NormalizeOptions::default(),
    };
    resolve_options(base, overrides)
}

fn write_report(path: &Path, report: &RunReport<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), "wrote run report");
    Ok(())
}
