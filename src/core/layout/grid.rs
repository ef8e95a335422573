//! Day/hour coordinate system of the weekly view.
//!
//! Columns are days, the vertical axis is 24 hours. All positions are in
//! scene units (pixels for SVG output).

use crate::models::block::LayoutBlock;
use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: u8 = 24;
/// Rulers are drawn every `RULER_STEP` hours, from 0 to 24 inclusive.
pub const RULER_STEP: u8 = 2;
/// Whole shifts are never drawn shorter than this. Parts of an overnight
/// shift keep their true height.
pub const MIN_BLOCK_HEIGHT: f64 = 12.0;
/// Horizontal inset of a block inside its day column.
pub const BLOCK_INSET: f64 = 5.0;
/// Space reserved under the grid.
pub const FOOTER_HEIGHT: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Grid metrics. Pure coordinate math; nothing here holds state between
/// renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridFrame {
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,
    #[serde(default = "default_hour_height")]
    pub hour_height: f64,
    #[serde(default = "default_left_margin")]
    pub left_margin: f64,
    #[serde(default = "default_top_margin")]
    pub top_margin: f64,
}

fn default_cell_width() -> f64 {
    110.0
}
fn default_hour_height() -> f64 {
    10.0
}
fn default_left_margin() -> f64 {
    50.0
}
fn default_top_margin() -> f64 {
    24.0
}

impl Default for GridFrame {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            hour_height: default_hour_height(),
            left_margin: default_left_margin(),
            top_margin: default_top_margin(),
        }
    }
}

impl GridFrame {
    /// Left edge of a day column.
    pub fn column_x(&self, day_index: usize) -> f64 {
        self.left_margin + day_index as f64 * self.cell_width
    }

    /// Vertical position of an hour line (`0..=24`).
    pub fn hour_y(&self, hour: u8) -> f64 {
        self.top_margin + f64::from(hour) * self.hour_height
    }

    pub fn grid_width(&self, days: usize) -> f64 {
        days as f64 * self.cell_width
    }

    pub fn grid_height(&self) -> f64 {
        f64::from(HOURS_PER_DAY) * self.hour_height
    }

    /// The area covered by the day columns, without headers and margins.
    pub fn grid_rect(&self, days: usize) -> Rect {
        Rect::new(
            self.left_margin,
            self.top_margin,
            self.grid_width(days),
            self.grid_height(),
        )
    }

    pub fn total_width(&self, days: usize) -> f64 {
        self.left_margin + self.grid_width(days)
    }

    pub fn total_height(&self) -> f64 {
        self.top_margin + self.grid_height() + FOOTER_HEIGHT
    }

    /// Hours at which a horizontal ruler is drawn.
    pub fn ruler_hours(&self) -> impl Iterator<Item = u8> {
        (0..=HOURS_PER_DAY).step_by(RULER_STEP as usize)
    }

    /// Visual height of a block.
    pub fn block_height(&self, block: &LayoutBlock) -> f64 {
        let height = f64::from(block.hours()) * self.hour_height;
        if block.is_overnight_part() {
            height
        } else {
            height.max(MIN_BLOCK_HEIGHT)
        }
    }

    /// Rectangle of a block inside its day column.
    pub fn block_rect(&self, block: &LayoutBlock) -> Rect {
        let height = self.block_height(block);
        Rect::new(
            self.column_x(block.day_index) + BLOCK_INSET,
            self.hour_y(block.start_hour),
            self.cell_width - 2.0 * BLOCK_INSET,
            height,
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cell_width <= 2.0 * BLOCK_INSET {
            return Err(format!(
                "grid.cell_width must be greater than {}",
                2.0 * BLOCK_INSET
            ));
        }
        if self.hour_height <= 0.0 {
            return Err("grid.hour_height must be positive".to_string());
        }
        if self.left_margin < 0.0 || self.top_margin < 0.0 {
            return Err("grid margins must not be negative".to_string());
        }
        Ok(())
    }
}
