//! Shared constants for the canvas crate.

// ── Palette ─────────────────────────────────────────────────────

/// Fixed swatch palette offered by the color picker.
pub const SWATCHES: [&str; 11] = [
    "#ffffff", // white
    "#ee3333", // red
    "#e64980", // pink
    "#be4bdb", // purple
    "#893200", // brown
    "#228be6", // blue
    "#3333ee", // dark blue
    "#40c057", // green
    "#00aa00", // dark green
    "#fab005", // yellow
    "#fd7e14", // orange
];

/// Surface background. Erase strokes paint this color opaquely, so erased
/// pixels still carry alpha > 0 and participate in the bounding-box scan.
pub const BACKGROUND_COLOR: &str = "#1e1e1e";

// ── Brush ───────────────────────────────────────────────────────

/// Minimum brush width in pixels.
pub const BRUSH_WIDTH_MIN: u32 = 5;

/// Maximum brush width in pixels.
pub const BRUSH_WIDTH_MAX: u32 = 30;

/// Brush width before the user touches the slider.
pub const BRUSH_WIDTH_DEFAULT: u32 = 10;

// ── Annotations ─────────────────────────────────────────────────

/// Delay before annotations from one recognition response appear. Every item
/// shares the same delay, so a multi-item response lands all at once after a
/// single interval rather than one by one.
pub const ANNOTATION_RENDER_DELAY_MS: u32 = 1_000;
