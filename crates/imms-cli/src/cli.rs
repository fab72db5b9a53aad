//! CLI argument definitions for the notice preparation tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "imms-notice",
    version,
    about = "Immunization notice preparation - structure client vaccination extracts",
    long_about = "Turn a per-client immunization extract into structured notice records.\n\n\
                  Validates the dataset schema against a run configuration, normalizes\n\
                  vaccine naming against reference tables, and groups same-date\n\
                  administration events into one entry per visit."
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
    /// Prepare the per-client notice document from an extract.
    Prepare(PrepareArgs),

    /// Split a dataset into one file per value of a group column.
    Split(SplitArgs),

    /// Convert a wide vaccine/disease matrix into the reference JSON map.
    ConvertReference(ConvertReferenceArgs),

    /// Scan a raw dataset for parse and quoting problems.
    Scan(ScanArgs),
}

#[derive(Parser)]
pub struct PrepareArgs {
    /// Path to the client vaccination extract (delimiter-separated).
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Path to the run configuration (YAML).
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Path to the disease-synonym map (JSON).
    #[arg(value_name = "DISEASE_MAP")]
    pub disease_map: PathBuf,

    /// Path to the vaccine-reference map (JSON).
    #[arg(value_name = "VACCINE_REFERENCE")]
    pub vaccine_reference: PathBuf,

    /// Output directory for the notices document (default: <DATASET dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Dataset field delimiter.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ";")]
    pub delimiter: char,

    /// Validate and summarize without writing the output document.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Path to the dataset to split (delimiter-separated).
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Column whose values define the groups (e.g. School).
    #[arg(value_name = "COLUMN")]
    pub column: String,

    /// Directory the per-group files are written into.
    #[arg(value_name = "OUT_DIR")]
    pub out_dir: PathBuf,

    /// Dataset field delimiter.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ";")]
    pub delimiter: char,
}

#[derive(Parser)]
pub struct ConvertReferenceArgs {
    /// Path to the wide coverage matrix (comma-separated, Vaccine column first).
    #[arg(value_name = "MATRIX_CSV")]
    pub matrix: PathBuf,

    /// Path the JSON reference map is written to.
    #[arg(value_name = "OUT_JSON")]
    pub out: PathBuf,
}

#[derive(Parser)]
pub struct ScanArgs {
    /// Path to the dataset to scan.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Dataset field delimiter.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ";")]
    pub delimiter: char,
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
