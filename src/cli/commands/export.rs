use super::load_schedule;
use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::export::{ExportLogic, schedule_rows};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        input,
        file,
        format,
        force,
    } = cmd
    {
        let Some((_, assignments)) = load_schedule(ctx, input)? else {
            return Ok(());
        };

        let rows = schedule_rows(&ctx.config.days, &ctx.config.shift_table(), &assignments);
        let path = expand_tilde(file);
        let used = ExportLogic::export(&rows, *format, &path, *force)?;

        ctx.log(
            "export",
            used.as_str(),
            &format!("{} rows to {}", rows.len(), path.display()),
        );
    }
    Ok(())
}
