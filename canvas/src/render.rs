//! Stroke rendering: the only module that touches
//! [`web_sys::CanvasRenderingContext2d`].
//!
//! It receives finished [`Segment`] values from the engine and produces
//! pixels — it does not mutate any application state.

use web_sys::CanvasRenderingContext2d;

use crate::stroke::Segment;

/// Apply the context defaults strokes rely on. Round caps and joins make
/// consecutive segments of one gesture meet smoothly. Must be reapplied
/// after every canvas resize (resizing resets context state).
pub fn configure(ctx: &CanvasRenderingContext2d) {
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
}

/// Draw one stroke segment with its captured style.
pub fn draw_segment(ctx: &CanvasRenderingContext2d, segment: &Segment) {
    ctx.begin_path();
    ctx.set_stroke_style_str(&segment.color);
    ctx.set_line_width(f64::from(segment.width));
    ctx.move_to(segment.from.x, segment.from.y);
    ctx.line_to(segment.to.x, segment.to.y);
    ctx.stroke();
}

/// Clear the full surface back to transparent.
pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}
