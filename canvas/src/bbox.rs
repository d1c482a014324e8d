//! Bounding-box scan over raw RGBA pixel data.
//!
//! The scan visits every pixel once and folds drawn pixels (alpha > 0) into a
//! running min/max accumulator. It is the one performance-relevant operation
//! in the system: a full-viewport surface means a multi-megapixel linear pass
//! per recognition call. The scan is a pure function over a byte slice so it
//! runs identically against browser `ImageData` bytes and the in-memory
//! [`crate::raster::Raster`] used by tests.

#[cfg(test)]
#[path = "bbox_test.rs"]
mod bbox_test;

/// A point in surface-local pixel coordinates, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds of the drawn region of a surface.
///
/// The accumulator starts at `(width, height, 0, 0)`, so a surface with no
/// drawn pixels collapses to a degenerate box with `min_x > max_x`. That
/// degenerate box yields an anchor outside the drawing area; callers treat it
/// as accepted behavior rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Bounds {
    /// Scan RGBA bytes (4 bytes per pixel, row-major) for the drawn bounds.
    ///
    /// A slice shorter than `width * height * 4` is tolerated; missing pixels
    /// read as transparent.
    #[must_use]
    pub fn scan(data: &[u8], width: u32, height: u32) -> Self {
        let mut bounds = Self {
            min_x: width,
            min_y: height,
            max_x: 0,
            max_y: 0,
        };
        if width == 0 || height == 0 {
            return bounds;
        }

        let pixels = (width as usize) * (height as usize);
        for (idx, pixel) in data.chunks_exact(4).take(pixels).enumerate() {
            if pixel[3] == 0 {
                continue;
            }
            #[allow(clippy::cast_possible_truncation)]
            let x = (idx % width as usize) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let y = (idx / width as usize) as u32;
            bounds.min_x = bounds.min_x.min(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_x = bounds.max_x.max(x);
            bounds.max_y = bounds.max_y.max(y);
        }
        bounds
    }

    /// Whether the scan saw no drawn pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Centroid of the bounds — the shared anchor for every annotation
    /// produced by one recognition call. For an empty box this lands outside
    /// the surface.
    #[must_use]
    pub fn anchor(&self) -> Point {
        Point::new(
            f64::from(self.min_x + self.max_x) / 2.0,
            f64::from(self.min_y + self.max_y) / 2.0,
        )
    }
}
