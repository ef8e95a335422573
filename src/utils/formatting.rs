//! Formatting utilities used for terminal and SVG output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ruler label for an hour: `"08h"`.
pub fn hour_label(hour: u8) -> String {
    format!("{hour:02}h")
}

/// Cut `s` to at most `width` display columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Left-align `s` in `width` display columns, truncating if needed.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let cut = truncate_to_width(s, width);
    let pad = width.saturating_sub(cut.width());
    format!("{cut}{}", " ".repeat(pad))
}

/// Money / objective value with one decimal.
pub fn format_cost(value: f64) -> String {
    format!("{value:.1}")
}
