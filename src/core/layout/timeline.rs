use super::colors::ColorAssigner;
use super::shifts::ShiftTable;
use crate::models::assignment::{AssignmentKey, Assignments};
use crate::models::block::{LayoutBlock, SegmentKind};
use crate::models::shift::ShiftDefinition;

/// Counters for entries the layout could not place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LayoutStats {
    /// Entries whose day is not part of the week.
    pub unknown_days: usize,
    /// Entries with no attendee.
    pub empty_slots: usize,
    /// Entries whose shift name fell back to the default range.
    pub defaulted_shifts: usize,
    /// After-midnight parts of wrapping shifts on the last day.
    pub dropped_continuations: usize,
}

#[derive(Debug, Default, Clone)]
pub struct WeekLayout {
    pub blocks: Vec<LayoutBlock>,
    pub stats: LayoutStats,
}

/// Turns an assignment map into layout blocks.
///
/// Owns the shift table and the color cache of one view.
#[derive(Debug, Clone, Default)]
pub struct TimelineLayoutEngine {
    shifts: ShiftTable,
    colors: ColorAssigner,
}

impl TimelineLayoutEngine {
    pub fn new(shifts: ShiftTable, colors: ColorAssigner) -> Self {
        Self { shifts, colors }
    }

    pub fn shifts(&self) -> &ShiftTable {
        &self.shifts
    }

    pub fn colors_mut(&mut self) -> &mut ColorAssigner {
        &mut self.colors
    }

    pub fn layout(&mut self, days: &[String], assignments: &Assignments) -> Vec<LayoutBlock> {
        self.layout_detailed(days, assignments).blocks
    }

    /// Blocks come out ordered by day, then shift table position (unknown
    /// shifts last, by name). A wrapping entry yields its primary block
    /// followed by its continuation.
    pub fn layout_detailed(&mut self, days: &[String], assignments: &Assignments) -> WeekLayout {
        let mut out = WeekLayout::default();

        // -----------------------------
        // Keep entries on known days, in display order
        // -----------------------------
        let mut entries: Vec<(usize, &AssignmentKey, &[String])> = Vec::new();
        for (key, names) in assignments.iter() {
            let Some(day_index) = days.iter().position(|d| *d == key.day) else {
                out.stats.unknown_days += 1;
                continue;
            };
            if names.is_empty() {
                out.stats.empty_slots += 1;
                continue;
            }
            entries.push((day_index, key, names));
        }

        entries.sort_by(|a, b| {
            let sa = self.shifts.index_of(&a.1.shift).unwrap_or(usize::MAX);
            let sb = self.shifts.index_of(&b.1.shift).unwrap_or(usize::MAX);
            (a.0, sa, &a.1.shift).cmp(&(b.0, sb, &b.1.shift))
        });

        // -----------------------------
        // Emit blocks
        // -----------------------------
        for (day_index, key, names) in entries {
            if self.shifts.lookup(&key.shift).is_none() {
                out.stats.defaulted_shifts += 1;
            }
            let shift = self.shifts.resolve(&key.shift);
            let label = names.join(", ");
            let color = self.colors.color_for_group(names);

            let base = LayoutBlock {
                day: key.day.clone(),
                day_index,
                shift: key.shift.clone(),
                start_hour: shift.start_hour,
                end_hour: shift.end_hour,
                color,
                tooltip: String::new(),
                label,
                segment: SegmentKind::Primary,
            };

            if !shift.wraps {
                let range = format!("{}:00 - {}:00", shift.start_hour, shift.end_hour);
                out.blocks.push(LayoutBlock {
                    tooltip: tooltip(&base.label, &key.day, &shift, &range),
                    ..base
                });
                continue;
            }

            let next = days.get(day_index + 1);

            let range = format!("{}:00 - 24:00", shift.start_hour);
            out.blocks.push(LayoutBlock {
                end_hour: 24,
                tooltip: tooltip(&base.label, &key.day, &shift, &range),
                ..base.clone()
            });

            // Ends exactly at midnight: nothing on the next day.
            if shift.end_hour == 0 {
                continue;
            }

            // Last day of the week: the after-midnight part is dropped, not
            // wrapped around to the first day.
            match next {
                Some(next_day) => out.blocks.push(LayoutBlock {
                    day: next_day.clone(),
                    day_index: day_index + 1,
                    start_hour: 0,
                    tooltip: tooltip(
                        &base.label,
                        next_day,
                        &shift,
                        &format!("00:00 - {}:00", shift.end_hour),
                    ),
                    segment: SegmentKind::Continuation,
                    ..base
                }),
                None => out.stats.dropped_continuations += 1,
            }
        }

        out
    }
}

fn tooltip(label: &str, day: &str, shift: &ShiftDefinition, range: &str) -> String {
    format!("{label}\n{day} {}: {range}", shift.name)
}
