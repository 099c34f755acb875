//! CLI argument definitions for `bfd-export`.

use std::path::PathBuf;

use bfd_model::ExportCategory;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bfd-export",
    version,
    about = "Inspect and exercise the BFD field-values configuration",
    long_about = "Inspect and exercise the BFD field-values configuration.\n\n\
                  `check` reports which configuration cells are usable per export category.\n\
                  `resolve` evaluates one category for a synthetic encounter."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
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
    /// Load the configuration and report accepted and rejected cells.
    Check(CheckArgs),

    /// Resolve one category for an encounter and print the field map as JSON.
    Resolve(ResolveArgs),
}

/// Where the configuration and settings come from.
#[derive(Parser, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Field-values TSV (default: settings file, then $BFD_FIELD_VALUES,
    /// then the bundled configuration).
    #[arg(long = "field-values", value_name = "PATH")]
    pub field_values: Option<PathBuf>,

    /// TOML settings file with `field_values`, `sampling` and `seed`.
    #[arg(long = "settings", value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    /// Export category, e.g. `carrier` or `BENEFICIARY_HISTORY`.
    #[arg(value_name = "CATEGORY")]
    pub category: ExportCategory,

    /// Encounter start (RFC 3339).
    #[arg(long = "start", value_name = "RFC3339", value_parser = parse_instant)]
    pub start: DateTime<Utc>,

    /// Encounter stop (RFC 3339).
    #[arg(long = "stop", value_name = "RFC3339", value_parser = parse_instant)]
    pub stop: DateTime<Utc>,

    /// Sample distribution lists at random instead of taking the first entry.
    #[arg(long = "random")]
    pub random: bool,

    /// Seed for random sampling.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub source: SourceArgs,
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|err| format!("invalid RFC 3339 timestamp {value:?}: {err}"))
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
