//! Terminal rendering of a week: one row per hour, one column per day.

use crate::core::layout::grid::HOURS_PER_DAY;
use crate::models::block::LayoutBlock;
use crate::utils::formatting::{hour_label, pad_to_width};
use ansi_term::{Colour, Style};

#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Display columns per day.
    pub cell_width: usize,
    /// Paint block backgrounds with 24-bit ANSI colors.
    pub color: bool,
    /// Character repeated for the line under the header.
    pub separator: String,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            cell_width: 14,
            color: true,
            separator: "-".to_string(),
        }
    }
}

/// Fill used below a block's first row when colors are off.
const PLAIN_FILL: char = '░';
const GUTTER: usize = 4;

/// Whole shifts spanning zero hours still take one row.
fn covers_row(block: &LayoutBlock, hour: u8) -> bool {
    if block.hours() == 0 && !block.is_overnight_part() {
        block.start_hour == hour
    } else {
        block.covers(hour)
    }
}

pub fn render_text(days: &[String], blocks: &[LayoutBlock], opts: &TextOptions) -> String {
    let w = opts.cell_width.max(3);
    let mut out = String::new();

    // -----------------------------
    // Header
    // -----------------------------
    out.push_str(&" ".repeat(GUTTER));
    for day in days {
        out.push('|');
        out.push_str(&pad_to_width(&format!(" {day}"), w));
    }
    out.push_str("|\n");

    let sep = opts.separator.chars().next().unwrap_or('-');
    out.push_str(&sep.to_string().repeat(GUTTER + days.len() * (w + 1) + 1));
    out.push('\n');

    // -----------------------------
    // Hour rows
    // -----------------------------
    for hour in 0..HOURS_PER_DAY {
        out.push_str(&pad_to_width(&hour_label(hour), GUTTER));
        for day_index in 0..days.len() {
            out.push('|');
            let covering: Vec<&LayoutBlock> = blocks
                .iter()
                .filter(|b| b.day_index == day_index && covers_row(b, hour))
                .collect();
            out.push_str(&render_cell(&covering, hour, w, opts.color));
        }
        out.push_str("|\n");
    }

    out
}

fn render_cell(covering: &[&LayoutBlock], hour: u8, width: usize, color: bool) -> String {
    let Some(first) = covering.first() else {
        return " ".repeat(width);
    };

    let text = if first.start_hour == hour {
        let extra = covering.len() - 1;
        if extra > 0 {
            format!("{} +{}", first.label, extra)
        } else {
            first.label.clone()
        }
    } else if color {
        String::new()
    } else {
        PLAIN_FILL.to_string().repeat(width)
    };

    let cell = pad_to_width(&text, width);
    if !color {
        return cell;
    }

    let c = first.color;
    Style::new()
        .on(Colour::RGB(c.r, c.g, c.b))
        .fg(Colour::Black)
        .paint(cell)
        .to_string()
}
