#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! optline — render usage text and trial-parse arguments against an option table.

mod cli;
mod commands;
mod table;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);

    match commands::dispatch(&cli.command, cli.table.as_deref(), &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_command_error(&err);
            write_error(&error_output, &ctx);
            std::process::exit(err.exit_code());
        }
    }
}
