//! CLI argument definitions for tabnorm.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tabnorm_cli::config::Overrides;
use tabnorm_model::ShortRowPolicy;

#[derive(Parser)]
#[command(
    name = "tabnorm",
    version,
    about = "Normalize delimited tables into clean, deduplicated CSV",
    long_about = "Normalize a delimited table into clean CSV.\n\n\
                  Column names are sanitized to lowercase identifiers, date and boolean\n\
                  columns are inferred from a leading sample and converted to canonical\n\
                  form, and exact duplicate rows are dropped."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values in trace logs (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a table and write the cleaned CSV.
    Normalize(NormalizeArgs),

    /// Show the inferred column plan without writing output.
    Inspect(InspectArgs),
}

/// Options shared by every command that reads a table.
#[derive(Args)]
pub struct InputArgs {
    /// Source table, or `-` for standard input.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON file with run options; flags given here take precedence.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Field delimiter of the source table.
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Quote character of the source table.
    #[arg(long = "quote", value_name = "CHAR")]
    pub quote: Option<char>,

    /// Encoding of the source table (default: utf-8).
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Encoding used to restart the run when decoding fails (default: windows-1252).
    #[arg(long = "fallback-encoding", value_name = "LABEL")]
    pub fallback_encoding: Option<String>,

    /// Keep only this source column (repeatable; output follows flag order).
    #[arg(short = 'c', long = "column", value_name = "LABEL")]
    pub columns: Vec<String>,

    /// Leading data rows examined for type inference (default: 100).
    #[arg(long = "sample-size", value_name = "ROWS")]
    pub sample_size: Option<usize>,

    /// Handling of rows with too few cells for the selected columns.
    #[arg(long = "short-rows", value_enum)]
    pub short_rows: Option<ShortRowArg>,
}

#[derive(Args)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Destination file, or `-` for standard output (default).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Rows between progress log lines; 0 disables them.
    #[arg(long = "progress-interval", value_name = "ROWS")]
    pub progress_interval: Option<u64>,

    /// Write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl InputArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            output: None,
            delimiter: self.delimiter,
            quote: self.quote,
            encoding: self.encoding.clone(),
            fallback_encoding: self.fallback_encoding.clone(),
            columns: self.columns.clone(),
            sample_size: self.sample_size,
            short_rows: self.short_rows.map(ShortRowPolicy::from),
            progress_interval: None,
        }
    }
}

impl NormalizeArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            output: self.output.clone(),
            progress_interval: self.progress_interval,
            ..self.input.overrides()
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShortRowArg {
    /// Drop the row.
    Reject,
    /// Fill missing cells with empty strings.
    Pad,
}

impl From<ShortRowArg> for ShortRowPolicy {
    fn from(arg: ShortRowArg) -> Self {
        match arg {
            ShortRowArg::Reject => ShortRowPolicy::Reject,
            ShortRowArg::Pad => ShortRowPolicy::Pad,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
