use super::scene::{PaintOp, PaintSink, Scene};
use std::fmt::Write;

/// Writes a standalone SVG document. Block tooltips become `<title>`
/// children of their rectangles.
#[derive(Debug, Default)]
pub struct SvgSink {
    out: String,
}

impl SvgSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

/// Render a scene to an SVG string.
pub fn to_svg(scene: &Scene) -> String {
    let mut sink = SvgSink::new();
    scene.replay(&mut sink);
    sink.into_string()
}

impl PaintSink for SvgSink {
    fn begin(&mut self, width: f64, height: f64) {
        self.out.clear();
        let _ = writeln!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = num(width),
            h = num(height)
        );
    }

    fn paint(&mut self, op: &PaintOp) {
        let _ = match op {
            PaintOp::Rect {
                rect,
                fill,
                stroke,
                opacity,
                tooltip,
            } => {
                let fill = fill.map(|c| c.to_hex()).unwrap_or_else(|| "none".into());
                let stroke = stroke.map(|c| c.to_hex()).unwrap_or_else(|| "none".into());
                let head = format!(
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" opacity="{}""#,
                    num(rect.x),
                    num(rect.y),
                    num(rect.width),
                    num(rect.height),
                    fill,
                    stroke,
                    num(*opacity)
                );
                match tooltip {
                    Some(t) => writeln!(self.out, "{head}><title>{}</title></rect>", escape(t)),
                    None => writeln!(self.out, "{head}/>"),
                }
            }
            PaintOp::Line { from, to, color } => writeln!(
                self.out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
                num(from.0),
                num(from.1),
                num(to.0),
                num(to.1),
                color.to_hex()
            ),
            PaintOp::Text {
                at,
                text,
                size,
                color,
            } => writeln!(
                self.out,
                r#"  <text x="{}" y="{}" font-size="{}" fill="{}" dominant-baseline="hanging">{}</text>"#,
                num(at.0),
                num(at.1),
                num(*size),
                color.to_hex(),
                escape(text)
            ),
        };
    }

    fn finish(&mut self) {
        self.out.push_str("</svg>\n");
    }
}

/// Integral values without a trailing `.0`.
fn num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.2}")
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
