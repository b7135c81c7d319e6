//! CLI argument definitions for the pharmacy counting tool.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rxcount",
    version,
    about = "Aggregate prescription records into a ranked per-drug cost report",
    long_about = "Read a comma-delimited file of prescription records, count\n\
                  distinct prescribers and sum drug costs per drug name, and\n\
                  write a report ranked by total cost.\n\n\
                  Malformed lines are skipped and counted, never fatal."
)]
pub struct Cli {
    /// Path to the input file of prescription records.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path the ranked report is written to.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Validate, aggregate, and rank without writing the report.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Number of top-ranked drugs shown in the console summary.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
