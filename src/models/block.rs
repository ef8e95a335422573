use super::color::Color;
use serde::Serialize;

/// Which part of an assignment a block draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// The whole shift, or the part before midnight of a wrapping one.
    Primary,
    /// The part after midnight, drawn on the following day.
    Continuation,
}

/// One rectangle of the weekly layout, in day/hour units.
///
/// The height is derived: `hours()` is the extent, `GridFrame::block_height`
/// the drawn size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutBlock {
    pub day: String,
    pub day_index: usize,
    pub shift: String,
    pub start_hour: u8,
    /// Exclusive; `24` for the part of a wrapping shift before midnight.
    pub end_hour: u8,
    pub color: Color,
    pub label: String,
    pub tooltip: String,
    pub segment: SegmentKind,
}

impl LayoutBlock {
    /// Extent in hours, before any visual flooring.
    pub fn hours(&self) -> u8 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    pub fn is_continuation(&self) -> bool {
        self.segment == SegmentKind::Continuation
    }

    /// Either side of a shift crossing midnight.
    pub fn is_overnight_part(&self) -> bool {
        self.is_continuation() || self.end_hour == 24
    }

    /// Whether the block covers `hour` (half-open range).
    pub fn covers(&self, hour: u8) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}
