//! Insertion-ordered registries and the [`Catalog`] dependency-injection
//! context.
//!
//! Registries are populated once at startup (or lazily on first engine use)
//! and treated as read-only for the remainder of the process. Concurrent
//! reads need no coordination; concurrent *registration* (hot-reloading a
//! component) is unsynchronized and must be serialized by the caller.
//!
//! The [`Catalog`] replaces what would otherwise be process-wide singleton
//! maps: it is constructed once and passed to every engine call, keeping
//! rendering pure and testable in isolation.

use std::collections::HashMap;

use crate::domain::entities::{
    component::ComponentDefinition, template::TemplateDefinition, theme::ThemeDefinition,
};

/// Anything stored in a [`Registry`] exposes its unique key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// A name-keyed store that remembers insertion order.
///
/// Order is significant for UI listing but not for rendering correctness.
/// `register` on an existing key overwrites the definition but keeps its
/// original position.
#[derive(Debug, Clone)]
pub struct Registry<T: Keyed> {
    order: Vec<String>,
    entries: HashMap<String, T>,
}

// Manual impl: the derive would bound `T: Default`, which the definition
// types never implement.
impl<T: Keyed> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> Registry<T> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Add or overwrite by key.
    pub fn register(&mut self, definition: T) {
        let key = definition.key().to_string();
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.entries.insert(key, definition);
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All entries in insertion order.
    pub fn list(&self) -> Vec<&T> {
        self.order
            .iter()
            .filter_map(|k| self.entries.get(k))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The explicit registry context handed to every engine call.
///
/// Seeding lives in the adapters crate (`builtin_catalog`); extensions use
/// the `register_*` methods rather than any directory-scanning import, so
/// the set of registered definitions stays statically analyzable.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub components: Registry<ComponentDefinition>,
    pub themes: Registry<ThemeDefinition>,
    pub templates: Registry<TemplateDefinition>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            components: Registry::new(),
            themes: Registry::new(),
            templates: Registry::new(),
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_component(&mut self, definition: ComponentDefinition) {
        self.components.register(definition);
    }

    pub fn register_theme(&mut self, definition: ThemeDefinition) {
        self.themes.register(definition);
    }

    pub fn register_template(&mut self, definition: TemplateDefinition) {
        self.templates.register(definition);
    }
}
