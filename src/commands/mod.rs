/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod check;
pub mod list;
pub mod parse;
pub mod usage;

use std::convert::Infallible;
use std::path::Path;

use optline::{ParseError, UsageError};
use thiserror::Error;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::table::TableError;

/// Errors a command can end with.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The option table could not be loaded.
    #[error(transparent)]
    Table(#[from] TableError),

    /// The trial parse failed.
    #[error(transparent)]
    Parse(#[from] ParseError<Infallible>),

    /// Usage text could not be rendered.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// `check` found error-level problems.
    #[error("Option table has {errors} error(s)")]
    CheckFailed {
        /// Number of error-level findings.
        errors: usize,
    },
}

impl CommandError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Table(_) | Self::CheckFailed { .. } => 2,
            Self::Parse(_) => 4,
            Self::Usage(_) => 1,
        }
    }
}

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `CommandError` on any command failure.
pub fn dispatch(
    command: &Command,
    table: Option<&Path>,
    ctx: &OutputCtx,
) -> Result<(), CommandError> {
    match command {
        Command::Usage => usage::run(table, ctx),
        Command::Parse(args) => parse::run(args, table, ctx),
        Command::List => list::run(table, ctx),
        Command::Check => check::run(table, ctx),
    }
}
