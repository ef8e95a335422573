use super::load_schedule;
use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::format_cost;
use crate::utils::table::Table;

/// Handle the `table` command
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Table { input } = cmd {
        let Some((result, assignments)) = load_schedule(ctx, input)? else {
            return Ok(());
        };

        let shifts = ctx.config.shift_table();
        let shift_names: Vec<&str> = shifts.names().collect();
        let sep = ctx.config.separator_char.chars().next().unwrap_or('-');

        // -----------------------------
        // Days × shifts
        // -----------------------------
        let mut headers = vec![""];
        headers.extend(shift_names.iter().copied());

        let rows = ctx
            .config
            .days
            .iter()
            .map(|day| {
                let mut row = vec![day.clone()];
                row.extend(shift_names.iter().map(|s| {
                    assignments
                        .get(day, s)
                        .map(|names| names.join(", "))
                        .unwrap_or_default()
                }));
                row
            })
            .collect();

        header("Schedule");
        print!("{}", Table::fitted(&headers, rows).render(sep));

        // -----------------------------
        // Hired staff
        // -----------------------------
        if !result.hired.is_empty() {
            println!();
            header("Hired");
            for id in &result.hired {
                let cost = result
                    .candidate(id)
                    .and_then(|c| c.hire_cost)
                    .map(format_cost)
                    .unwrap_or_else(|| "0".to_string());
                println!("{} - {} - cost {}", id, result.display_name(id), cost);
            }
        }

        println!();
        match result.objective {
            Some(obj) => println!(
                "Status: {} | Cost={}",
                result.status.as_str(),
                format_cost(obj)
            ),
            None => println!("Status: {}", result.status.as_str()),
        }
    }

    Ok(())
}
