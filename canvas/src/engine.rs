use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::annotate::{Annotation, Generation, PendingAnnotation, annotation_text};
use crate::bbox::{Bounds, Point};
use crate::bindings::VariableBindings;
use crate::raster::Raster;
use crate::render;
use crate::stroke::{Segment, StrokeState, StrokeStyle};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so the bounding-box scan, bindings upserts, and
/// response application can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub style: StrokeStyle,
    pub input: StrokeState,
    pub bindings: VariableBindings,
    pub annotations: Vec<Annotation>,
    generation: Generation,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            style: StrokeStyle::default(),
            input: StrokeState::default(),
            bindings: VariableBindings::new(),
            annotations: Vec::new(),
            generation: Generation::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Stroke style ---

    /// Select a swatch color (leaves erase mode).
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.style.set_color(color);
    }

    /// Set the brush width, clamped to the slider range.
    pub fn set_brush_width(&mut self, width: u32) {
        self.style.set_width(width);
    }

    pub fn set_erasing(&mut self, erasing: bool) {
        self.style.set_erasing(erasing);
    }

    // --- Stroke capture ---

    /// Begin a stroke at the given surface-local point.
    pub fn pointer_down(&mut self, pt: Point) {
        self.input = StrokeState::Drawing { last: pt };
    }

    /// Extend the active stroke to `pt`. Returns the segment to draw, styled
    /// with the paint color and width current at this event. No gesture in
    /// progress means no segment.
    pub fn pointer_move(&mut self, pt: Point) -> Option<Segment> {
        let StrokeState::Drawing { last } = self.input else {
            return None;
        };
        self.input = StrokeState::Drawing { last: pt };
        Some(Segment {
            from: last,
            to: pt,
            color: self.style.paint_color().to_owned(),
            width: self.style.width(),
        })
    }

    /// End the active stroke (pointer-up or pointer-leave).
    pub fn pointer_up(&mut self) {
        self.input = StrokeState::Idle;
    }

    // --- Response application ---

    /// Apply one recognition result item, in response order: assignments
    /// upsert the bindings; every item yields a pending render at the shared
    /// anchor, stamped with the current generation.
    pub fn apply_result(&mut self, expr: &str, result: &str, assign: bool, anchor: Point) -> PendingAnnotation {
        if assign {
            self.bindings.upsert(expr, result);
        }
        PendingAnnotation {
            text: annotation_text(expr, result),
            anchor,
            generation: self.generation,
        }
    }

    /// Land a previously scheduled render. Returns the committed annotation,
    /// or `None` when a reset has moved the generation on since scheduling.
    pub fn commit_annotation(&mut self, pending: PendingAnnotation) -> Option<Annotation> {
        if pending.generation != self.generation {
            return None;
        }
        let annotation = Annotation {
            id: uuid::Uuid::new_v4(),
            text: pending.text,
            anchor: pending.anchor,
        };
        self.annotations.push(annotation.clone());
        Some(annotation)
    }

    /// Clear bindings and annotations, drop any active gesture, and bump the
    /// generation so pending renders are cancelled. Idempotent.
    pub fn reset(&mut self) {
        self.input = StrokeState::Idle;
        self.bindings.clear();
        self.annotations.clear();
        self.generation.bump();
    }

    // --- Queries ---

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

/// The full surface engine. Wraps `EngineCore` and owns the browser canvas
/// element plus its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element. A missing 2D
    /// context leaves the engine alive but makes capture and scan no-ops.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => match obj.dyn_into::<CanvasRenderingContext2d>() {
                Ok(ctx) => Some(ctx),
                Err(_) => None,
            },
            Ok(None) | Err(_) => None,
        };
        Self { canvas, ctx, core: EngineCore::new() }
    }

    // --- Viewport ---

    /// Size the surface to the viewport. Resizing resets 2D context state,
    /// so the round caps/joins are reapplied here. The raster is implicitly
    /// cleared by the browser on resize.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.core.viewport_width = f64::from(width);
        self.core.viewport_height = f64::from(height);
        if let Some(ctx) = self.ctx.as_ref() {
            render::configure(ctx);
        }
    }

    // --- Stroke capture ---

    pub fn on_pointer_down(&mut self, pt: Point) {
        if self.ctx.is_none() {
            return;
        }
        self.core.pointer_down(pt);
    }

    pub fn on_pointer_move(&mut self, pt: Point) {
        let Some(ctx) = self.ctx.as_ref() else {
            return;
        };
        if let Some(segment) = self.core.pointer_move(pt) {
            render::draw_segment(ctx, &segment);
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.core.pointer_up();
    }

    // --- Surface I/O ---

    /// Serialize the surface to a PNG data URI.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser refuses to encode the canvas.
    pub fn to_png_data_url(&self) -> Result<String, JsValue> {
        self.canvas.to_data_url()
    }

    /// Scan the live surface for its drawn bounds. Without a context the
    /// result is the degenerate empty box.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the pixel readback fails.
    pub fn scan_bounds(&self) -> Result<Bounds, JsValue> {
        let width = self.canvas.width();
        let height = self.canvas.height();
        let Some(ctx) = self.ctx.as_ref() else {
            return Ok(Bounds::scan(&[], width, height));
        };
        let image = ctx.get_image_data(0.0, 0.0, f64::from(width), f64::from(height))?;
        let raster = Raster::from_parts(width, height, image.data().0);
        Ok(raster.bounds())
    }

    /// Clear every drawn stroke, leaving the raster fully transparent.
    pub fn clear_strokes(&self) {
        if let Some(ctx) = self.ctx.as_ref() {
            render::clear(ctx, self.core.viewport_width, self.core.viewport_height);
        }
    }

    // --- Annotations / reset ---

    /// Land a scheduled render; the strokes disappear once any annotation
    /// actually renders.
    pub fn commit_annotation(&mut self, pending: PendingAnnotation) -> Option<Annotation> {
        let committed = self.core.commit_annotation(pending);
        if committed.is_some() {
            self.clear_strokes();
        }
        committed
    }

    /// Full reset: raster, annotations, bindings, pending renders.
    pub fn reset(&mut self) {
        self.core.reset();
        self.clear_strokes();
    }
}
