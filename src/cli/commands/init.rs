use crate::config::Config;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the configuration file with default days, shifts, grid metrics
/// and palette. An existing file is kept as is.
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    info("Initializing shiftgrid…");

    let written = Config::init_all(&ctx.config_path, ctx.is_test)?;

    if written {
        success(format!("Config file: {}", ctx.config_path.display()));
    } else if ctx.is_test {
        info("Test mode: configuration file not written.");
    } else {
        info(format!(
            "Config file already present: {}",
            ctx.config_path.display()
        ));
    }

    ctx.log(
        "init",
        "config",
        &format!("configuration at {}", ctx.config_path.display()),
    );

    success("shiftgrid initialization completed!");
    Ok(())
}
