use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if !*print_config && !*edit_config {
            info(format!(
                "Configuration file: {}",
                ctx.config_path.display()
            ));
        }

        if *print_config {
            ConfigLogic::print(&ctx.config)?;
        }

        if *edit_config {
            ConfigLogic::edit(&ctx.config_path, editor)?;
        }
    }

    Ok(())
}
