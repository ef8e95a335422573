//! Paint instructions for the weekly view.
//!
//! `compose` rebuilds the whole scene on every call: grid first, then one
//! rectangle and one label per block. Sinks replay the ops in order.

use crate::core::layout::GridFrame;
use crate::core::layout::grid::Rect;
use crate::models::block::LayoutBlock;
use crate::models::color::Color;
use crate::utils::formatting::hour_label;

pub const BACKGROUND: Color = Color::rgb(250, 250, 250);
pub const COLUMN_LINE: Color = Color::rgb(210, 210, 210);
pub const RULER_LINE: Color = Color::rgb(230, 230, 230);
pub const GRID_BORDER: Color = Color::rgb(180, 180, 180);
pub const BLOCK_OUTLINE: Color = Color::rgb(80, 80, 80);
pub const TEXT: Color = Color::rgb(0, 0, 0);
pub const BLOCK_OPACITY: f64 = 0.9;

pub const HEADER_FONT_SIZE: f64 = 8.0;
pub const RULER_FONT_SIZE: f64 = 7.0;
pub const LABEL_FONT_SIZE: f64 = 8.0;
/// Extra room around the scene bounds.
pub const SCENE_PADDING: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Rect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Color>,
        opacity: f64,
        tooltip: Option<String>,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
    },
    /// `at` is the top-left corner of the text.
    Text {
        at: (f64, f64),
        text: String,
        size: f64,
        color: Color,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<PaintOp>,
}

/// Receives paint instructions, one at a time.
pub trait PaintSink {
    fn begin(&mut self, width: f64, height: f64);
    fn paint(&mut self, op: &PaintOp);
    fn finish(&mut self);
}

impl Scene {
    pub fn replay<S: PaintSink>(&self, sink: &mut S) {
        sink.begin(self.width, self.height);
        for op in &self.ops {
            sink.paint(op);
        }
        sink.finish();
    }

    /// Rectangles carrying a tooltip, i.e. the layout blocks.
    pub fn block_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PaintOp::Rect { tooltip: Some(_), .. }))
            .count()
    }
}

/// Build the full scene: background, day headers, column lines, hour
/// rulers, border, then the blocks in the order given.
pub fn compose(frame: &GridFrame, days: &[String], blocks: &[LayoutBlock]) -> Scene {
    let cols = days.len();
    let total_width = frame.total_width(cols);
    let total_height = frame.total_height();
    let grid_top = frame.hour_y(0);
    let grid_bottom = frame.hour_y(24);

    let mut ops = vec![PaintOp::Rect {
        rect: Rect::new(0.0, 0.0, total_width, total_height),
        fill: Some(BACKGROUND),
        stroke: None,
        opacity: 1.0,
        tooltip: None,
    }];

    // -----------------------------
    // Day headers and column lines
    // -----------------------------
    for (i, day) in days.iter().enumerate() {
        let x = frame.column_x(i);
        ops.push(PaintOp::Text {
            at: (x + 6.0, 2.0),
            text: day.clone(),
            size: HEADER_FONT_SIZE,
            color: TEXT,
        });
        ops.push(PaintOp::Line {
            from: (x, grid_top),
            to: (x, grid_bottom),
            color: COLUMN_LINE,
        });
    }
    let x_end = frame.column_x(cols);
    ops.push(PaintOp::Line {
        from: (x_end, grid_top),
        to: (x_end, grid_bottom),
        color: COLUMN_LINE,
    });

    // -----------------------------
    // Hour rulers
    // -----------------------------
    for hour in frame.ruler_hours() {
        let y = frame.hour_y(hour);
        ops.push(PaintOp::Line {
            from: (frame.left_margin, y),
            to: (x_end, y),
            color: RULER_LINE,
        });
        ops.push(PaintOp::Text {
            at: (2.0, y - 7.0),
            text: hour_label(hour),
            size: RULER_FONT_SIZE,
            color: TEXT,
        });
    }

    ops.push(PaintOp::Rect {
        rect: frame.grid_rect(cols),
        fill: None,
        stroke: Some(GRID_BORDER),
        opacity: 1.0,
        tooltip: None,
    });

    // -----------------------------
    // Blocks
    // -----------------------------
    for block in blocks {
        let rect = frame.block_rect(block);
        ops.push(PaintOp::Rect {
            rect,
            fill: Some(block.color),
            stroke: Some(BLOCK_OUTLINE),
            opacity: BLOCK_OPACITY,
            tooltip: Some(block.tooltip.clone()),
        });
        ops.push(PaintOp::Text {
            at: (rect.x + 4.0, rect.y + 2.0),
            text: block.label.clone(),
            size: LABEL_FONT_SIZE,
            color: Color::WHITE,
        });
    }

    Scene {
        width: total_width + SCENE_PADDING,
        height: total_height + SCENE_PADDING,
        ops,
    }
}
