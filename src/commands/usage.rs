/// `usage` command: print the two-column usage text.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::output::{write_usage, write_warnings};
use crate::commands::CommandError;
use crate::table;

/// Run `optline usage`.
///
/// # Errors
///
/// Returns `CommandError` if the table cannot be loaded or rendered.
pub fn run(table: Option<&Path>, ctx: &OutputCtx) -> Result<(), CommandError> {
    let _t_load = ctx.timer("load_table");
    let loaded = table::load(table)?;
    drop(_t_load);
    write_warnings(&loaded.warnings, ctx);
    let registry = loaded.registry;

    let _t_render = ctx.timer("render_usage");
    let text = registry.usage_string()?;
    drop(_t_render);

    write_usage(&text, registry.max_width() + 1, ctx);
    Ok(())
}
