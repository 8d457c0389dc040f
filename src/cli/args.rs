/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// optline — inspect an option table: render usage, trial-parse arguments.
#[derive(Debug, Parser)]
#[command(
    name = "optline",
    about = "Render usage text and trial-parse arguments against a JSON option table",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// JSON option table: an array of `{name, argument?, description}` objects.
    #[arg(long, global = true, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers.
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Print phase timings to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
    /// Bare values, one per line.
    Plain,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the two-column usage text for the table.
    Usage,
    /// Run the option parser over ARGS and report what it dispatched.
    Parse(ParseArgs),
    /// List registered options in display order.
    List,
    /// Validate the option table and report findings.
    Check,
}

/// Arguments for `optline parse`.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Tokens to scan, as they would appear after the program name.
    /// Put them after `--` so optline does not read them itself.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}
