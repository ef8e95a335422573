use crate::core::layout::{TimelineLayoutEngine, WeekLayout, filter_by_attendee};
use crate::models::assignment::Assignments;
use crate::models::solve_result::{SolveResult, SolveStatus};

pub const NO_DIAGNOSTICS: &str = "No diagnostic details available.";

/// What a solver result allows the caller to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// Feasible: the assignment map, ids already translated to names.
    Schedule(Assignments),
    /// Infeasible model; never reaches the layout engine.
    Infeasible {
        summary: String,
        diagnostics: Vec<String>,
    },
    /// The solve stopped for another reason.
    Interrupted(SolveStatus),
}

pub struct Core;

impl Core {
    /// Gate a solver result before layout.
    pub fn plan(result: &SolveResult) -> Plan {
        if result.status.is_infeasible() {
            let summary = if result.iis.is_empty() {
                "Infeasible model. Unable to identify the active constraints."
            } else {
                "Infeasible model. See details below."
            };
            let diagnostics = match result.diagnostics() {
                [] => vec![NO_DIAGNOSTICS.to_string()],
                d => d.to_vec(),
            };
            return Plan::Infeasible {
                summary: summary.to_string(),
                diagnostics,
            };
        }

        if !result.status.is_feasible() {
            return Plan::Interrupted(result.status.clone());
        }

        Plan::Schedule(result.assignments())
    }

    /// Everyone's shifts.
    pub fn team_view(
        engine: &mut TimelineLayoutEngine,
        days: &[String],
        assignments: &Assignments,
    ) -> WeekLayout {
        engine.layout_detailed(days, assignments)
    }

    /// Only the shifts `name` works.
    pub fn personal_view(
        engine: &mut TimelineLayoutEngine,
        days: &[String],
        assignments: &Assignments,
        name: &str,
    ) -> WeekLayout {
        engine.layout_detailed(days, &filter_by_attendee(assignments, name))
    }
}
