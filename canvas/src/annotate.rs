//! Annotation types and the render generation stamp.
//!
//! Annotations land on an ordered, append-only list: never reordered, never
//! deduped. Because renders from one recognition call are deferred, each
//! pending render carries the generation current when it was scheduled; a
//! reset bumps the generation so stale renders are dropped instead of
//! repopulating the freshly cleared list.

#[cfg(test)]
#[path = "annotate_test.rs"]
mod annotate_test;

use uuid::Uuid;

use crate::bbox::Point;

/// A typeset label placed over the canvas at its anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub id: Uuid,
    pub text: String,
    pub anchor: Point,
}

/// Monotonic stamp tying a scheduled render to the engine state that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Generation(u64);

impl Generation {
    /// Invalidate everything scheduled under the current stamp.
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// A render scheduled for later; committed only if its generation still
/// matches the engine's.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAnnotation {
    pub text: String,
    pub anchor: Point,
    pub generation: Generation,
}

/// Label text for one recognition result item.
#[must_use]
pub fn annotation_text(expr: &str, result: &str) -> String {
    format!("{expr} = {result}")
}
