// src/export/model.rs

use crate::core::layout::ShiftTable;
use crate::models::assignment::Assignments;
use serde::Serialize;

/// One `(day, shift)` row of the exported schedule.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ScheduleRow {
    pub day: String,
    pub shift: String,
    /// Comma-joined attendee names, empty when nobody is assigned.
    pub assigned: String,
}

/// Every configured day × every configured shift, in display order.
///
/// Entries on unknown days or shifts have no row.
pub fn schedule_rows(
    days: &[String],
    shifts: &ShiftTable,
    assignments: &Assignments,
) -> Vec<ScheduleRow> {
    let mut rows = Vec::with_capacity(days.len() * shifts.names().count());
    for day in days {
        for shift in shifts.names() {
            let assigned = assignments
                .get(day, shift)
                .map(|names| names.join(", "))
                .unwrap_or_default();
            rows.push(ScheduleRow {
                day: day.clone(),
                shift: shift.to_string(),
                assigned,
            });
        }
    }
    rows
}
