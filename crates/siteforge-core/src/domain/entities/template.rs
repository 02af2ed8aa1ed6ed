//! Page templates: ordered arrangements of component instances plus a theme
//! reference, used to instantiate designs.
//!
//! A [`TemplateDefinition`] is declarative only; it carries component *names*
//! and prop values, not resolved definitions. Resolution against the
//! [`crate::domain::registry::Catalog`] happens at render time, where a name
//! absent from the component registry is silently skipped (best-effort
//! partial output is preferred over a blank page).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::registry::Keyed;

/// One component slot inside a template: the component name plus the prop
/// values the template supplies for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    /// Component registry key.
    pub component: String,

    /// Prop values for this instance. Keys not declared by the component are
    /// ignored at render time; declared props absent here render empty.
    #[serde(default)]
    pub props: Map<String, Value>,
}

impl ComponentInstance {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            props: Map::new(),
        }
    }

    pub fn prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }
}

/// A named page template.
///
/// ## Invariants
///
/// - `id` is the unique external reference key.
/// - `components` order is significant: instances render in sequence.
/// - `theme` references exactly one [`super::theme::ThemeDefinition`] by name;
///   the reference is copied into each design at creation time and never
///   re-looked-up afterwards.
/// - Immutable once registered; the template registry is seeded once per
///   process and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    /// Unique registry key (e.g. "aurora-glass-07").
    pub id: String,

    /// Human-readable display name.
    pub name: String,

    /// Longer description for listings.
    #[serde(default)]
    pub description: String,

    /// Ordered component instances.
    #[serde(default)]
    pub components: Vec<ComponentInstance>,

    /// Theme registry key.
    pub theme: String,
}

impl TemplateDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            components: Vec::new(),
            theme: theme.into(),
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Append a component instance, builder-style.
    pub fn with_component(mut self, instance: ComponentInstance) -> Self {
        self.components.push(instance);
        self
    }
}

impl Keyed for TemplateDefinition {
    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn components_keep_insertion_order() {
        let t = TemplateDefinition::new("landing", "Landing", "midnight")
            .with_component(ComponentInstance::new("header"))
            .with_component(ComponentInstance::new("hero"))
            .with_component(ComponentInstance::new("footer"));

        let names: Vec<_> = t.components.iter().map(|c| c.component.as_str()).collect();
        assert_eq!(names, ["header", "hero", "footer"]);
    }

    #[test]
    fn instance_props_round_trip_json() {
        let inst = ComponentInstance::new("hero").prop("title", json!("Hi"));
        let back: ComponentInstance =
            serde_json::from_str(&serde_json::to_string(&inst).unwrap()).unwrap();
        assert_eq!(back, inst);
    }
}
