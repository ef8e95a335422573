use crate::models::assignment::Assignments;

/// Entries whose attendee list contains `name` (exact, case-sensitive).
///
/// An empty name selects nothing, so the personal view shows an empty grid.
pub fn filter_by_attendee(assignments: &Assignments, name: &str) -> Assignments {
    if name.is_empty() {
        return Assignments::new();
    }

    let mut out = assignments.clone();
    out.retain(|_, names| names.iter().any(|n| n == name));
    out
}
