//! CLI argument definitions for the roster converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Office-hours roster converter - group CSV rosters into JSON schedules",
    long_about = "Convert an office-hours CSV export into a grouped JSON schedule.\n\n\
                  Rows are keyed by canonical course code (CS plus the course number)\n\
                  and bucketed per weekday, with sessions in a deterministic order."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a roster CSV into a grouped JSON schedule.
    Convert(ConvertArgs),

    /// List the recognized weekday labels in schedule order.
    Days,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the roster CSV export.
    #[arg(value_name = "INPUT", default_value = "office_hours.csv")]
    pub input: PathBuf,

    /// Output file (default: INPUT with a .json extension).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Keep the availability column instead of dropping it.
    #[arg(long = "no-strip-availability")]
    pub no_strip_availability: bool,

    /// Keep swipe-access notes in room values.
    #[arg(long = "no-clean-rooms")]
    pub no_clean_rooms: bool,

    /// Parse and summarize without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
