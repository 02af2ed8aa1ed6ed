//! Component definitions: the reusable markup+style+prop-schema units that
//! pages are assembled from.
//!
//! A [`ComponentDefinition`] is immutable once registered. Its markup may
//! contain `{{propName}}` scalar placeholders and single-level
//! `{{#each arrayProp}}...{{/each}}` blocks; see `domain::interpolate` for the
//! exact substitution semantics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::registry::Keyed;

/// Coarse grouping tag used for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Layout,
    Content,
    Navigation,
    Media,
}

impl std::fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Layout => "layout",
            Self::Content => "content",
            Self::Navigation => "navigation",
            Self::Media => "media",
        };
        write!(f, "{s}")
    }
}

/// Expected type of a component prop.
///
/// Only used for declaration/validation purposes; actual prop values travel
/// as [`serde_json::Value`] so instances coming from JSON need no conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

/// Declaration of a single prop: expected type plus the default value used
/// when a template instance does not override it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropSpec {
    pub prop_type: PropType,
    pub default: Value,
}

impl PropSpec {
    pub fn new(prop_type: PropType, default: Value) -> Self {
        Self { prop_type, default }
    }

    /// Shorthand for the common string-valued prop.
    pub fn string(default: impl Into<String>) -> Self {
        Self::new(PropType::String, Value::String(default.into()))
    }

    pub fn array(default: Value) -> Self {
        Self::new(PropType::Array, default)
    }
}

/// A named, reusable UI component: markup template, stylesheet, and the prop
/// schema declaring what the markup expects.
///
/// ## Invariants
///
/// - `name` is the registry key and must be non-empty.
/// - Immutable once registered; re-registering the same name replaces the
///   definition wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// Unique registry key (e.g. "hero").
    pub name: String,

    /// Listing/grouping tag.
    pub category: ComponentCategory,

    /// Prop name -> declaration. `BTreeMap` keeps default-prop iteration
    /// deterministic, which keeps rendered previews byte-stable.
    #[serde(default)]
    pub props: BTreeMap<String, PropSpec>,

    /// Markup template with `{{prop}}` and `{{#each prop}}` placeholders.
    pub markup: String,

    /// Raw stylesheet text appended once per distinct component in a page.
    pub styles: String,
}

impl ComponentDefinition {
    pub fn new(
        name: impl Into<String>,
        category: ComponentCategory,
        markup: impl Into<String>,
        styles: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            props: BTreeMap::new(),
            markup: markup.into(),
            styles: styles.into(),
        }
    }

    /// Declare a prop, builder-style.
    pub fn with_prop(mut self, name: impl Into<String>, spec: PropSpec) -> Self {
        self.props.insert(name.into(), spec);
        self
    }

    /// Prop values with every prop set to its declared default.
    pub fn default_props(&self) -> serde_json::Map<String, Value> {
        self.props
            .iter()
            .map(|(k, spec)| (k.clone(), spec.default.clone()))
            .collect()
    }
}

impl Keyed for ComponentDefinition {
    fn key(&self) -> &str {
        &self.name
    }
}
