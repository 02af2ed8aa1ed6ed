//! Theme definitions: named design-token sets rendered as CSS variables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::registry::Keyed;

/// Theme name that triggers the hard-coded glass utility styles.
///
/// This is a special case keyed on the name, not a per-theme style-injection
/// mechanism; see `domain::render`.
pub const GLASS_THEME: &str = "glassmorphism";

/// A named set of design tokens.
///
/// Three flat mappings (colors, fonts, spacing) emitted as `:root` custom
/// properties namespaced by category prefix (`--color-*`, `--font-*`,
/// `--spacing-*`). Immutable once registered.
///
/// `BTreeMap` keeps token iteration order deterministic so the emitted
/// `:root` block is byte-stable across renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    /// Unique registry key (e.g. "midnight").
    pub name: String,

    /// Named color tokens (name -> CSS color value).
    #[serde(default)]
    pub colors: BTreeMap<String, String>,

    /// Named font-stack tokens.
    #[serde(default)]
    pub fonts: BTreeMap<String, String>,

    /// Named spacing/length tokens.
    #[serde(default)]
    pub spacing: BTreeMap<String, String>,
}

impl ThemeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: BTreeMap::new(),
            fonts: BTreeMap::new(),
            spacing: BTreeMap::new(),
        }
    }

    pub fn color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(name.into(), value.into());
        self
    }

    pub fn font(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fonts.insert(name.into(), value.into());
        self
    }

    pub fn space(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.spacing.insert(name.into(), value.into());
        self
    }

    /// True when this theme carries the glass aesthetic.
    pub fn is_glass(&self) -> bool {
        self.name == GLASS_THEME
    }
}

impl Keyed for ThemeDefinition {
    fn key(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_tokens() {
        let t = ThemeDefinition::new("midnight")
            .color("primary", "#4f46e5")
            .font("body", "Inter, sans-serif")
            .space("md", "1rem");

        assert_eq!(t.colors.get("primary").map(String::as_str), Some("#4f46e5"));
        assert_eq!(t.fonts.len(), 1);
        assert_eq!(t.spacing.len(), 1);
    }

    #[test]
    fn glass_detection_is_by_name() {
        assert!(ThemeDefinition::new(GLASS_THEME).is_glass());
        assert!(!ThemeDefinition::new("midnight").is_glass());
    }
}
