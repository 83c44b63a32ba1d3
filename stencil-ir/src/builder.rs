//! Fluent construction of ordered maps.

use crate::{OrderedMap, Renderable};

/// Builder for keyed [`Renderable::Map`] values.
///
/// Entries are emitted in the order they are added. Adding a key twice
/// replaces the value but keeps the original position.
///
/// ```
/// use stencil_ir::{MapBuilder, Renderable};
///
/// let definition = MapBuilder::new()
///     .string("id", "cat")
///     .string_opt("label", Some("Cat"))
///     .string_opt("description", None::<&str>)
///     .raw("class", "\\Drupal\\pets\\Cat")
///     .build();
///
/// assert!(matches!(definition, Renderable::Map(ref m) if m.len() == 3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapBuilder {
    entries: OrderedMap,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry with any renderable value.
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<Renderable>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Add an entry with a string value (will be quoted).
    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entry(key, Renderable::string(value))
    }

    /// Add an entry with a raw expression value (will not be quoted).
    pub fn raw(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entry(key, Renderable::raw(value))
    }

    /// Conditionally add an entry.
    pub fn entry_if(
        self,
        condition: bool,
        key: impl Into<String>,
        value: impl Into<Renderable>,
    ) -> Self {
        if condition {
            self.entry(key, value)
        } else {
            self
        }
    }

    /// Add an entry if the value is Some.
    pub fn entry_opt(self, key: impl Into<String>, value: Option<impl Into<Renderable>>) -> Self {
        match value {
            Some(v) => self.entry(key, v),
            None => self,
        }
    }

    /// Add a string entry if the value is Some.
    pub fn string_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.string(key, v),
            None => self,
        }
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish the map.
    pub fn build(self) -> Renderable {
        Renderable::Map(self.entries)
    }
}
