/// `parse` command: trial-run the option parser and report what it dispatched.
use std::convert::Infallible;
use std::path::Path;

use optline::{OptionHandler, OptionRegistry, ParseError};

use crate::cli::OutputCtx;
use crate::cli::args::ParseArgs;
use crate::cli::output::{write_parse, write_warnings};
use crate::commands::CommandError;
use crate::table;
use crate::types::{EventOutput, ParseOutput};

/// Handler that records every dispatched option.
#[derive(Debug, Default)]
struct Recorder {
    events: Vec<EventOutput>,
}

impl OptionHandler for Recorder {
    type Error = Infallible;

    fn handle_flag(&mut self, option: &str) -> Result<(), Infallible> {
        self.events.push(EventOutput {
            option: option.to_owned(),
            value: None,
        });
        Ok(())
    }

    fn handle_value(&mut self, option: &str, value: &str) -> Result<(), Infallible> {
        self.events.push(EventOutput {
            option: option.to_owned(),
            value: Some(value.to_owned()),
        });
        Ok(())
    }
}

/// Run `optline parse`.
///
/// # Errors
///
/// Returns `CommandError` if the table cannot be loaded or the arguments are
/// rejected by the parser.
pub fn run(args: &ParseArgs, table: Option<&Path>, ctx: &OutputCtx) -> Result<(), CommandError> {
    let _t_load = ctx.timer("load_table");
    let loaded = table::load(table)?;
    drop(_t_load);
    write_warnings(&loaded.warnings, ctx);
    let registry = loaded.registry;

    let _t_parse = ctx.timer("parse");
    let output = trial_parse(&registry, &args.args);
    drop(_t_parse);

    write_parse(&output?, ctx);
    Ok(())
}

fn trial_parse(
    registry: &OptionRegistry,
    args: &[String],
) -> Result<ParseOutput, ParseError<Infallible>> {
    let mut recorder = Recorder::default();
    let consumed = registry.parse(args, &mut recorder)?;
    Ok(ParseOutput {
        consumed,
        events: recorder.events,
        remaining: args[consumed..].to_vec(),
    })
}
