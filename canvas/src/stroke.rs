//! Stroke style and the pointer gesture state machine.
//!
//! `StrokeStyle` captures the user's intent at the time of a pointer event:
//! the selected swatch, erase mode, and brush width. `StrokeState` is the
//! active gesture tracked between pointer-down and pointer-up, carrying the
//! previous point so each pointer-move emits one drawable [`Segment`].

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use crate::bbox::Point;
use crate::consts::{BACKGROUND_COLOR, BRUSH_WIDTH_DEFAULT, BRUSH_WIDTH_MAX, BRUSH_WIDTH_MIN, SWATCHES};

/// Active stroke styling, read by every segment at draw time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrokeStyle {
    color: String,
    width: u32,
    erasing: bool,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: SWATCHES[0].to_owned(),
            width: BRUSH_WIDTH_DEFAULT,
            erasing: false,
        }
    }
}

impl StrokeStyle {
    /// Select a draw color. Picking a swatch leaves erase mode.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        self.erasing = false;
    }

    /// Set the brush width, clamped to the 5–30 slider range.
    pub fn set_width(&mut self, width: u32) {
        self.width = width.clamp(BRUSH_WIDTH_MIN, BRUSH_WIDTH_MAX);
    }

    pub fn set_erasing(&mut self, erasing: bool) {
        self.erasing = erasing;
    }

    pub fn toggle_erasing(&mut self) {
        self.erasing = !self.erasing;
    }

    /// The selected swatch, regardless of erase mode.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn erasing(&self) -> bool {
        self.erasing
    }

    /// The color a new segment paints with: the background color in erase
    /// mode (erasing is opaque overpainting, not transparency).
    #[must_use]
    pub fn paint_color(&self) -> &str {
        if self.erasing { BACKGROUND_COLOR } else { &self.color }
    }
}

/// One drawable stroke segment between two pointer positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: String,
    pub width: u32,
}

/// Pointer gesture state: drawing is active between pointer-down and the next
/// pointer-up or pointer-leave.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A stroke is in progress.
    Drawing {
        /// Surface-local position of the previous pointer event; the start of
        /// the next segment.
        last: Point,
    },
}

impl StrokeState {
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}
