//! CLI argument definitions for MetaQuery.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "metaquery",
    version,
    about = "MetaQuery - Governed single-source SQL from a field dictionary",
    long_about = "Validate a field selection against a governed field dictionary.\n\n\
                  Allowed selections produce query.sql; every run produces\n\
                  audit.json and explain.txt.\n\n\
                  Exit codes: 0 = ALLOW, 1 = BLOCK, 2 = unreadable or malformed input."
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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a selection and generate query.sql, audit.json and explain.txt.
    Build(BuildArgs),

    /// List the fields defined in a field dictionary.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Path to the selection YAML (selected_field_ids).
    #[arg(value_name = "SELECTION")]
    pub selection: PathBuf,

    /// Path to the field dictionary YAML (fields).
    #[arg(long = "fields", value_name = "FIELDS")]
    pub fields: PathBuf,

    /// Directory for generated artifacts.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Validate and report without writing artifacts.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Path to the field dictionary YAML (fields).
    #[arg(long = "fields", value_name = "FIELDS")]
    pub fields: PathBuf,
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
