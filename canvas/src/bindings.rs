//! Variable bindings accumulated from assignment-type recognition results.
//!
//! The map grows monotonically across recognition calls within a session and
//! is sent back to the service with every request so later sketches can
//! reference earlier assignments. Only a full reset empties it.

#[cfg(test)]
#[path = "bindings_test.rs"]
mod bindings_test;

use std::collections::BTreeMap;

use serde::Serialize;

/// Expression-name → resolved-value map. Upserts are last-write-wins.
///
/// Serializes as a plain JSON object (the `dict_of_vars` request field);
/// `BTreeMap` keeps the wire order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableBindings {
    entries: BTreeMap<String, String>,
}

impl VariableBindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a binding.
    pub fn upsert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every binding. Only reset calls this.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
