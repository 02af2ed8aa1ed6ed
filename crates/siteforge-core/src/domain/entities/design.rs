//! Design documents: concrete, persistable instantiations of a template.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::template::{ComponentInstance, TemplateDefinition};

/// A component instance inside a design: a deep copy of the template's
/// instance plus a per-document unique id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignComponent {
    /// Instance id, unique within the document (time-based plus random
    /// suffix; collision probability negligible but not guaranteed).
    pub id: String,

    /// Component registry key.
    pub component: String,

    /// Prop values, copied from the template at creation time.
    pub props: Map<String, Value>,
}

/// A concrete instantiation of a template for one project.
///
/// ## Mutability
///
/// `customizations` and `updated_at` may change via an update operation;
/// `template_id` and `theme` are fixed at creation. The theme name is copied
/// from the template when the design is created and is *not* re-looked-up
/// later, so a template edit never retroactively changes existing designs.
///
/// `customizations` is an opaque, instance-specific override map. It is
/// stored and passed through verbatim; the renderer does not merge it into
/// component props (no merge policy is specified).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDocument {
    /// Generated document id.
    pub id: String,

    /// Owning project reference; deferred designs carry `None`.
    pub project_ref: Option<String>,

    /// Template this design was instantiated from.
    pub template_id: String,

    /// Theme name resolved at creation time.
    pub theme: String,

    /// Deep-copied component instances with fresh ids.
    pub components: Vec<DesignComponent>,

    /// Opaque per-instance overrides; never merged by the renderer.
    pub customizations: Map<String, Value>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DesignDocument {
    /// Instantiate a design from a template definition.
    ///
    /// Deep-copies every component instance, assigning each a fresh unique
    /// id, and snapshots the template's theme reference.
    pub fn from_template(
        template: &TemplateDefinition,
        project_ref: Option<String>,
        customizations: Map<String, Value>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: generated_id("design"),
            project_ref,
            template_id: template.id.clone(),
            theme: template.theme.clone(),
            components: template.components.iter().map(instantiate).collect(),
            customizations,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stamp the document as modified.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn instantiate(instance: &ComponentInstance) -> DesignComponent {
    DesignComponent {
        id: generated_id("inst"),
        component: instance.component.clone(),
        props: instance.props.clone(),
    }
}

/// Millisecond timestamp plus a random suffix.
///
/// Uniqueness is probabilistic, not enforced: two ids generated in the same
/// millisecond still differ in the UUID-derived suffix.
fn generated_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{millis}-{}", &suffix[..8])
}
