//! CLI argument definitions for inflammation analysis.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "inflammation",
    version,
    about = "Analyse patient inflammation data",
    long_about = "Analyse patient inflammation data.\n\n\
                  Input files hold one patient per line and one comma-separated\n\
                  reading per day. Directories are expanded to the CSV files they contain."
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

    /// Allow patient names to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the daily mean, max and min of each input.
    Stats(StatsArgs),

    /// Print each input normalised against every patient's own peak.
    Normalise(NormaliseArgs),

    /// Print an input's rows paired with patient names as JSON.
    Records(RecordsArgs),
}

#[derive(Args)]
pub struct StatsArgs {
    /// CSV files or directories of CSV files.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Decimal places to print.
    #[arg(long = "precision", default_value_t = 3)]
    pub precision: usize,
}

#[derive(Args)]
pub struct NormaliseArgs {
    /// CSV files or directories of CSV files.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Decimal places to print.
    #[arg(long = "precision", default_value_t = 3)]
    pub precision: usize,
}

#[derive(Args)]
pub struct RecordsArgs {
    /// CSV file with one patient per line.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Patient names, one per line of the input, comma-separated.
    #[arg(long = "names", value_delimiter = ',', required = true)]
    pub names: Vec<String>,

    /// Group the patients under a doctor and print the doctor instead.
    #[arg(long = "doctor", value_name = "NAME")]
    pub doctor: Option<String>,
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
