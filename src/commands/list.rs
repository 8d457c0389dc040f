/// `list` command: registered options in display order.
use std::path::Path;

use optline::OptionRegistry;

use crate::cli::OutputCtx;
use crate::cli::output::{write_options, write_warnings};
use crate::commands::CommandError;
use crate::table;
use crate::types::OptionOutput;

/// Run `optline list`.
///
/// # Errors
///
/// Returns `CommandError` if the table cannot be loaded.
pub fn run(table: Option<&Path>, ctx: &OutputCtx) -> Result<(), CommandError> {
    let _t_load = ctx.timer("load_table");
    let loaded = table::load(table)?;
    drop(_t_load);
    write_warnings(&loaded.warnings, ctx);
    let registry = loaded.registry;

    write_options(&options_output(&registry), ctx);
    Ok(())
}

fn options_output(registry: &OptionRegistry) -> Vec<OptionOutput> {
    registry
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let token = spec.display_token();
            OptionOutput {
                index,
                name: spec.name.to_owned(),
                argument: spec.argument.map(str::to_owned),
                description: spec.description.to_owned(),
                width: token.chars().count(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_output_widths() {
        let mut registry = OptionRegistry::new();
        registry.register_flag("-x", "disable X");
        registry.register_value_option("-o", "file", "output file");
        let out = options_output(&registry);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].width, 2);
        assert_eq!(out[1].width, 9);
        assert_eq!(out[1].argument.as_deref(), Some("file"));
        assert_eq!(out[1].index, 1);
    }
}
