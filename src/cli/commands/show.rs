use super::load_schedule;
use crate::cli::parser::{Commands, ShowFormat};
use crate::context::AppContext;
use crate::core::layout::LayoutStats;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::{ensure_absolute, ensure_writable};
use crate::render::{TextOptions, compose, render_text, to_svg};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle the `show` command
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Show {
        input,
        person,
        format,
        out,
        no_color,
        force,
    } = cmd
    {
        let Some((_, assignments)) = load_schedule(ctx, input)? else {
            return Ok(());
        };

        let days = &ctx.config.days;
        let mut engine = ctx.config.layout_engine();

        let week = match person {
            Some(name) => {
                if !assignments.attendees().contains(name.as_str()) {
                    warning(format!("'{name}' has no assigned shift."));
                }
                Core::personal_view(&mut engine, days, &assignments, name)
            }
            None => Core::team_view(&mut engine, days, &assignments),
        };

        report_stats(&week.stats);

        let rendered = match format {
            ShowFormat::Text => {
                let opts = TextOptions {
                    // no ANSI escapes in files
                    color: !*no_color && out.is_none(),
                    separator: ctx.config.separator_char.clone(),
                    ..TextOptions::default()
                };
                render_text(days, &week.blocks, &opts)
            }
            ShowFormat::Svg => to_svg(&compose(&ctx.config.grid, days, &week.blocks)),
        };

        match out {
            Some(file) => {
                let path = expand_tilde(file);
                ensure_absolute(&path)?;
                ensure_writable(&path, *force)?;
                fs::write(&path, rendered)?;
                success(format!("Schedule written to {}", path.display()));
            }
            None => print!("{rendered}"),
        }

        let target = person.as_deref().unwrap_or("team");
        ctx.log(
            "render",
            target,
            &format!("{} blocks from {}", week.blocks.len(), input),
        );
    }

    Ok(())
}

fn report_stats(stats: &LayoutStats) {
    if stats.unknown_days > 0 {
        warning(format!(
            "{} assignment(s) on unknown days were skipped.",
            stats.unknown_days
        ));
    }
    if stats.defaulted_shifts > 0 {
        info(format!(
            "{} assignment(s) on unknown shifts use the default range.",
            stats.defaulted_shifts
        ));
    }
    if stats.dropped_continuations > 0 {
        info(format!(
            "{} overnight shift(s) on the last day continue past the end of the week.",
            stats.dropped_continuations
        ));
    }
}
