//! The design renderer: turns a [`DesignDocument`] into HTML and CSS.
//!
//! Rendering is a pure function of the document plus catalog state — no side
//! effects, no persistence, deterministic output. Recoverable mismatches
//! (a component or theme name absent from its registry) degrade silently by
//! omission: in a visual-builder UX a broken single component should not
//! blank the whole page.

use tracing::debug;

use crate::domain::{
    entities::design::DesignDocument, entities::theme::ThemeDefinition, interpolate,
    registry::Catalog,
};

/// Rendered page output: one HTML document plus its stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub css: String,
}

/// Fixed responsive block appended to every stylesheet regardless of theme.
const RESPONSIVE_BLOCK: &str = "\
@media (max-width: 768px) {
  .container { padding: 0 1rem; }
  h1 { font-size: 1.75rem; }
  nav ul { flex-direction: column; gap: 0.5rem; }
}
";

/// Utility styles appended only when the document's theme is the designated
/// glass aesthetic. Hard-coded special case keyed on theme name, not a
/// generalized per-theme style-injection mechanism.
const GLASS_UTILITIES: &str = "\
.frosted-panel {
  background: rgba(255, 255, 255, 0.08);
  backdrop-filter: blur(14px);
  -webkit-backdrop-filter: blur(14px);
  border: 1px solid rgba(255, 255, 255, 0.18);
  border-radius: 16px;
}
header, .hero, .card {
  background: rgba(255, 255, 255, 0.08);
  backdrop-filter: blur(14px);
  -webkit-backdrop-filter: blur(14px);
  border: 1px solid rgba(255, 255, 255, 0.18);
}
body {
  background:
    radial-gradient(circle at 20% 20%, rgba(120, 90, 240, 0.35), transparent 40%),
    linear-gradient(135deg, #12101f 0%, #1c1b33 100%);
  background-attachment: fixed;
}
";

/// Render a design document to HTML + CSS.
///
/// Idempotent: the same document renders to byte-identical output.
pub fn render(catalog: &Catalog, document: &DesignDocument) -> RenderedPage {
    RenderedPage {
        html: render_html(catalog, document),
        css: render_css(catalog, document),
    }
}

fn render_html(catalog: &Catalog, document: &DesignDocument) -> String {
    let mut body = String::new();

    for instance in &document.components {
        let Some(definition) = catalog.components.get(&instance.component) else {
            // Documented lossy behavior: unknown components are skipped with
            // no error and no placeholder output.
            debug!(component = %instance.component, "component not registered, skipping");
            continue;
        };
        body.push_str(&interpolate::render(&definition.markup, &instance.props));
        body.push('\n');
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <link rel=\"stylesheet\" href=\"styles.css\">\n\
         </head>\n\
         <body>\n{body}</body>\n\
         </html>\n"
    )
}

fn render_css(catalog: &Catalog, document: &DesignDocument) -> String {
    let mut css = String::new();

    let theme = catalog.themes.get(&document.theme);
    if let Some(theme) = theme {
        css.push_str(&root_variables(theme));
        css.push('\n');
    } else {
        // Missing theme: the :root block is omitted, everything else renders.
        debug!(theme = %document.theme, "theme not registered, omitting :root block");
    }

    // Per-component styles, one block per distinct component type in
    // first-occurrence order.
    let mut seen: Vec<&str> = Vec::new();
    for instance in &document.components {
        if seen.contains(&instance.component.as_str()) {
            continue;
        }
        seen.push(&instance.component);
        if let Some(definition) = catalog.components.get(&instance.component) {
            css.push_str(&definition.styles);
            if !definition.styles.ends_with('\n') {
                css.push('\n');
            }
        }
    }

    if theme.is_some_and(ThemeDefinition::is_glass) {
        css.push_str(GLASS_UTILITIES);
    }

    css.push_str(RESPONSIVE_BLOCK);
    css
}

/// Emit the `:root` custom-property block for a theme, one property per
/// token, namespaced by category prefix.
fn root_variables(theme: &ThemeDefinition) -> String {
    let mut block = String::from(":root {\n");
    for (name, value) in &theme.colors {
        block.push_str(&format!("  --color-{name}: {value};\n"));
    }
    for (name, value) in &theme.fonts {
        block.push_str(&format!("  --font-{name}: {value};\n"));
    }
    for (name, value) in &theme.spacing {
        block.push_str(&format!("  --spacing-{name}: {value};\n"));
    }
    block.push_str("}\n");
    block
}
