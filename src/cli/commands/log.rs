use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `log` command
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        let Some(path) = &ctx.log_path else {
            info("Test mode: the operation log is disabled.");
            return Ok(());
        };

        if *print {
            LogLogic::print_log(path)?;
        } else {
            info(format!("Operation log: {}", path.display()));
        }
    }
    Ok(())
}
