//! Turning layout blocks into something visible: paint scenes (SVG) and
//! terminal grids.

pub mod scene;
pub mod svg;
pub mod text;

pub use scene::{PaintOp, PaintSink, Scene, compose};
pub use svg::{SvgSink, to_svg};
pub use text::{TextOptions, render_text};
