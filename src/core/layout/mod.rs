//! Weekly layout: shift ranges, group colors, block placement and the grid
//! they are positioned against.

pub mod colors;
pub mod focus;
pub mod grid;
pub mod shifts;
pub mod timeline;

pub use colors::ColorAssigner;
pub use focus::filter_by_attendee;
pub use grid::GridFrame;
pub use shifts::ShiftTable;
pub use timeline::{LayoutStats, TimelineLayoutEngine, WeekLayout};
