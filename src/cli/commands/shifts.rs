use crate::context::AppContext;
use crate::core::layout::shifts::{DEFAULT_END_HOUR, DEFAULT_START_HOUR};
use crate::errors::AppResult;
use crate::utils::table::Table;

/// Handle the `shifts` command
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let table = ctx.config.shift_table();

    let rows = table
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                format!("{:02}:00", s.start_hour),
                format!("{:02}:00", s.end_hour),
                if s.wraps { "yes" } else { "no" }.to_string(),
                format!("{}h", s.total_hours()),
            ]
        })
        .collect();

    let sep = ctx.config.separator_char.chars().next().unwrap_or('-');
    print!(
        "{}",
        Table::fitted(&["shift", "start", "end", "overnight", "length"], rows).render(sep)
    );
    println!(
        "\nUnknown shift names use {:02}:00 - {:02}:00.",
        DEFAULT_START_HOUR, DEFAULT_END_HOUR
    );
    Ok(())
}
