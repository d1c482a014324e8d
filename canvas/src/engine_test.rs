#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{BACKGROUND_COLOR, BRUSH_WIDTH_DEFAULT, BRUSH_WIDTH_MAX, BRUSH_WIDTH_MIN};

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Drive a full response through the core: apply every item against one
/// shared anchor, then commit every pending render.
fn apply_and_commit(core: &mut EngineCore, items: &[(&str, &str, bool)], anchor: Point) -> Vec<Annotation> {
    let pending: Vec<_> = items
        .iter()
        .map(|(expr, result, assign)| core.apply_result(expr, result, *assign, anchor))
        .collect();
    pending
        .into_iter()
        .filter_map(|p| core.commit_annotation(p))
        .collect()
}

// =============================================================
// EngineCore: construction and defaults
// =============================================================

#[test]
fn core_new_is_idle_and_empty() {
    let core = EngineCore::new();
    assert!(!core.input.is_drawing());
    assert!(core.bindings.is_empty());
    assert!(core.annotations.is_empty());
    assert_eq!(core.viewport_width, 0.0);
    assert_eq!(core.viewport_height, 0.0);
}

#[test]
fn core_default_style_matches_stroke_defaults() {
    let core = EngineCore::new();
    assert_eq!(core.style.width(), BRUSH_WIDTH_DEFAULT);
    assert!(!core.style.erasing());
}

// =============================================================
// Stroke capture
// =============================================================

#[test]
fn pointer_move_without_pointer_down_emits_nothing() {
    let mut core = EngineCore::new();
    assert_eq!(core.pointer_move(pt(5.0, 5.0)), None);
}

#[test]
fn pointer_down_then_move_emits_a_styled_segment() {
    let mut core = EngineCore::new();
    core.set_color("#228be6");
    core.set_brush_width(14);
    core.pointer_down(pt(1.0, 2.0));
    let segment = core.pointer_move(pt(3.0, 4.0)).expect("segment while drawing");
    assert_eq!(segment.from, pt(1.0, 2.0));
    assert_eq!(segment.to, pt(3.0, 4.0));
    assert_eq!(segment.color, "#228be6");
    assert_eq!(segment.width, 14);
}

#[test]
fn consecutive_moves_chain_segments() {
    let mut core = EngineCore::new();
    core.pointer_down(pt(0.0, 0.0));
    let first = core.pointer_move(pt(1.0, 1.0)).expect("first segment");
    let second = core.pointer_move(pt(2.0, 0.0)).expect("second segment");
    assert_eq!(first.to, second.from);
}

#[test]
fn pointer_up_ends_the_gesture() {
    let mut core = EngineCore::new();
    core.pointer_down(pt(0.0, 0.0));
    core.pointer_up();
    assert_eq!(core.pointer_move(pt(9.0, 9.0)), None);
}

#[test]
fn erase_segments_paint_the_background_color() {
    let mut core = EngineCore::new();
    core.set_erasing(true);
    core.pointer_down(pt(0.0, 0.0));
    let segment = core.pointer_move(pt(1.0, 0.0)).expect("segment while erasing");
    assert_eq!(segment.color, BACKGROUND_COLOR);
}

#[test]
fn brush_width_clamps_at_the_engine_surface() {
    let mut core = EngineCore::new();
    core.set_brush_width(0);
    assert_eq!(core.style.width(), BRUSH_WIDTH_MIN);
    core.set_brush_width(1000);
    assert_eq!(core.style.width(), BRUSH_WIDTH_MAX);
}

// =============================================================
// Response application
// =============================================================

#[test]
fn assignment_item_upserts_bindings() {
    let mut core = EngineCore::new();
    core.apply_result("x", "5", true, pt(0.0, 0.0));
    assert_eq!(core.bindings.get("x"), Some("5"));
}

#[test]
fn repeated_assignment_overwrites_last_write_wins() {
    let mut core = EngineCore::new();
    core.apply_result("x", "5", true, pt(0.0, 0.0));
    core.apply_result("x", "7", true, pt(0.0, 0.0));
    assert_eq!(core.bindings.get("x"), Some("7"));
    assert_eq!(core.bindings.len(), 1);
}

#[test]
fn non_assignment_item_leaves_bindings_untouched() {
    let mut core = EngineCore::new();
    core.apply_result("1+1", "2", false, pt(0.0, 0.0));
    assert!(core.bindings.is_empty());
}

#[test]
fn mixed_response_anchors_every_annotation_at_the_shared_point() {
    let mut core = EngineCore::new();
    let anchor = pt(30.0, 30.0);
    let committed = apply_and_commit(
        &mut core,
        &[("1+1", "2", false), ("y", "3", true)],
        anchor,
    );
    assert_eq!(committed.len(), 2);
    assert!(committed.iter().all(|a| a.anchor == anchor));
    assert_eq!(committed[0].text, "1+1 = 2");
    assert_eq!(committed[1].text, "y = 3");
    assert_eq!(core.bindings.get("y"), Some("3"));
    assert_eq!(core.bindings.len(), 1);
}

#[test]
fn annotations_append_in_order_without_dedup() {
    let mut core = EngineCore::new();
    let anchor = pt(10.0, 10.0);
    apply_and_commit(&mut core, &[("x", "1", false), ("x", "1", false)], anchor);
    assert_eq!(core.annotations.len(), 2);
    assert_eq!(core.annotations[0].text, core.annotations[1].text);
    assert_ne!(core.annotations[0].id, core.annotations[1].id);
}

// =============================================================
// Generation: stale scheduled renders
// =============================================================

#[test]
fn commit_with_current_generation_lands() {
    let mut core = EngineCore::new();
    let pending = core.apply_result("1+1", "2", false, pt(5.0, 5.0));
    assert!(core.commit_annotation(pending).is_some());
    assert_eq!(core.annotations.len(), 1);
}

#[test]
fn reset_drops_renders_scheduled_before_it() {
    let mut core = EngineCore::new();
    let pending = core.apply_result("1+1", "2", false, pt(5.0, 5.0));
    core.reset();
    assert!(core.commit_annotation(pending).is_none());
    assert!(core.annotations.is_empty());
}

#[test]
fn renders_scheduled_after_a_reset_still_land() {
    let mut core = EngineCore::new();
    core.reset();
    let pending = core.apply_result("z", "9", true, pt(1.0, 1.0));
    assert!(core.commit_annotation(pending).is_some());
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_empties_bindings_annotations_and_gesture() {
    let mut core = EngineCore::new();
    core.pointer_down(pt(0.0, 0.0));
    let pending = core.apply_result("x", "5", true, pt(0.0, 0.0));
    core.commit_annotation(pending);
    core.reset();
    assert!(!core.input.is_drawing());
    assert!(core.bindings.is_empty());
    assert!(core.annotations.is_empty());
}

#[test]
fn reset_is_idempotent() {
    let mut core = EngineCore::new();
    let pending = core.apply_result("x", "5", true, pt(0.0, 0.0));
    core.commit_annotation(pending);
    core.reset();
    core.reset();
    assert!(core.bindings.is_empty());
    assert!(core.annotations.is_empty());
    assert!(!core.input.is_drawing());
}

// =============================================================
// End to end: drawn rectangle to anchor
// =============================================================

#[test]
fn rectangle_sketch_anchors_at_its_center() {
    // Pixels drawn only within (10,10)-(50,50) inclusive.
    let mut raster = Raster::new(640, 480);
    raster.fill_rect(10, 10, 41, 41, [255, 255, 255, 255]);

    let anchor = raster.bounds().anchor();
    assert_eq!(anchor, pt(30.0, 30.0));

    let mut core = EngineCore::new();
    let committed = apply_and_commit(&mut core, &[("40+2", "42", false)], anchor);
    assert_eq!(committed[0].anchor, pt(30.0, 30.0));
}
