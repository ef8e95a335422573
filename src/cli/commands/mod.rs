pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod shifts;
pub mod show;
pub mod table;

use crate::context::AppContext;
use crate::core::logic::{Core, Plan};
use crate::errors::AppResult;
use crate::models::assignment::Assignments;
use crate::models::solve_result::SolveResult;
use crate::ui::messages::{bullet_list, header, warning};
use crate::utils::path::expand_tilde;

/// Load a solver result and gate it.
///
/// Infeasible and interrupted results are reported here and yield `None`:
/// they never reach the layout engine.
pub(crate) fn load_schedule(
    ctx: &AppContext,
    input: &str,
) -> AppResult<Option<(SolveResult, Assignments)>> {
    let result = SolveResult::load(&expand_tilde(input))?;

    match Core::plan(&result) {
        Plan::Schedule(assignments) => Ok(Some((result, assignments))),
        Plan::Infeasible {
            summary,
            diagnostics,
        } => {
            warning(&summary);
            header("Diagnostics");
            println!("{}", bullet_list(&diagnostics));
            ctx.log("infeasible", input, &summary);
            Ok(None)
        }
        Plan::Interrupted(status) => {
            let msg = format!("Solve interrupted (status={})", status.as_str());
            warning(&msg);
            ctx.log("interrupted", input, &msg);
            Ok(None)
        }
    }
}
