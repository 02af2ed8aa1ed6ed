//! Built-in catalog seeding.
//!
//! This module provides [`builtin_catalog`], the single entry-point for the
//! components, themes, and templates that ship with Siteforge. Seeding is
//! explicit: callers receive a fully-populated [`Catalog`] value and can keep
//! registering their own definitions on top of it. There is no process-wide
//! registry.
//!
//! # What ships
//!
//! - **Components**: `header`, `hero`, `card`, `feature-list` (with a
//!   repeating `{{#each}}` block), `footer`.
//! - **Themes**: `clean-light`, `midnight`, and `glassmorphism` (the glass
//!   theme gets extra utility CSS at render time).
//! - **Templates**: two hand-authored pages (`landing-01`,
//!   `portfolio-01`) plus the generated `aurora-glass-NN` family, fifty
//!   near-identical glass variants produced by [`family_template`].
//!
//! The family exists because template count is a storefront metric; the
//! variants differ only in display name and hero copy, and regenerating the
//! family with the same count always yields the same definitions.

use tracing::{debug, instrument};

use siteforge_core::domain::{
    Catalog, ComponentCategory, ComponentDefinition, ComponentInstance, GLASS_THEME, PropSpec,
    TemplateDefinition, ThemeDefinition,
};

use serde_json::json;

/// Number of generated glass-family templates seeded by default.
pub const FAMILY_SIZE: usize = 50;

// ── Public API ────────────────────────────────────────────────────────────────

/// Build the catalog that ships with Siteforge.
///
/// Deterministic: every call returns the same definitions in the same order.
#[instrument]
pub fn builtin_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    for component in builtin_components() {
        catalog.register_component(component);
    }
    for theme in builtin_themes() {
        catalog.register_theme(theme);
    }
    for template in builtin_templates() {
        catalog.register_template(template);
    }

    debug!(
        components = catalog.components.len(),
        themes = catalog.themes.len(),
        templates = catalog.templates.len(),
        "Built-in catalog seeded"
    );

    catalog
}

/// The generated glass template family, `aurora-glass-01` through
/// `aurora-glass-NN`.
pub fn family_templates(count: usize) -> Vec<TemplateDefinition> {
    (1..=count).map(family_template).collect()
}

/// One member of the glass family. `index` is 1-based and becomes the
/// zero-padded id suffix.
pub fn family_template(index: usize) -> TemplateDefinition {
    let id = format!("aurora-glass-{index:02}");
    let name = format!("Aurora Glass {index:02}");

    TemplateDefinition::new(&id, &name, GLASS_THEME)
        .description("Frosted-glass landing page with a gradient backdrop")
        .with_component(
            ComponentInstance::new("header")
                .prop("brand", json!(format!("Aurora {index:02}")))
                .prop("tagline", json!("Build in minutes")),
        )
        .with_component(
            ComponentInstance::new("hero")
                .prop("title", json!(format!("Launch faster, vol. {index}")))
                .prop("subtitle", json!("A glassmorphism starting point")),
        )
        .with_component(
            ComponentInstance::new("card")
                .prop("heading", json!("Why Aurora"))
                .prop("body", json!("Translucent panels over a soft gradient.")),
        )
}

// ── Components ────────────────────────────────────────────────────────────────

fn builtin_components() -> Vec<ComponentDefinition> {
    vec![
        ComponentDefinition::new(
            "header",
            ComponentCategory::Navigation,
            "<header class=\"site-header\">\n  \
             <span class=\"brand\">{{brand}}</span>\n  \
             <span class=\"tagline\">{{tagline}}</span>\n\
             </header>",
            ".site-header {\n  display: flex;\n  justify-content: space-between;\n  \
             align-items: center;\n  padding: var(--spacing-sm) var(--spacing-md);\n}\n\
             .site-header .brand {\n  font-family: var(--font-heading);\n  \
             font-weight: 700;\n  color: var(--color-primary);\n}",
        )
        .with_prop("brand", PropSpec::string("Siteforge"))
        .with_prop("tagline", PropSpec::string("")),
        ComponentDefinition::new(
            "hero",
            ComponentCategory::Content,
            "<section class=\"hero\">\n  \
             <h1>{{title}}</h1>\n  \
             <p>{{subtitle}}</p>\n  \
             <a class=\"cta\" href=\"{{ctaHref}}\">{{ctaLabel}}</a>\n\
             </section>",
            ".hero {\n  text-align: center;\n  padding: var(--spacing-lg) var(--spacing-md);\n}\n\
             .hero h1 {\n  font-family: var(--font-heading);\n  color: var(--color-primary);\n}\n\
             .hero .cta {\n  display: inline-block;\n  padding: var(--spacing-sm) var(--spacing-md);\n  \
             background: var(--color-accent);\n  color: var(--color-surface);\n  \
             border-radius: 6px;\n  text-decoration: none;\n}",
        )
        .with_prop("title", PropSpec::string("Welcome"))
        .with_prop("subtitle", PropSpec::string(""))
        .with_prop("ctaLabel", PropSpec::string("Get started"))
        .with_prop("ctaHref", PropSpec::string("#")),
        ComponentDefinition::new(
            "card",
            ComponentCategory::Content,
            "<article class=\"card\">\n  \
             <h2>{{heading}}</h2>\n  \
             <p>{{body}}</p>\n\
             </article>",
            ".card {\n  padding: var(--spacing-md);\n  border-radius: 8px;\n  \
             background: var(--color-surface);\n  margin: var(--spacing-sm) 0;\n}",
        )
        .with_prop("heading", PropSpec::string(""))
        .with_prop("body", PropSpec::string("")),
        ComponentDefinition::new(
            "feature-list",
            ComponentCategory::Content,
            "<section class=\"features\">\n  \
             <h2>{{heading}}</h2>\n  \
             <ul>{{#each items}}<li><strong>{{label}}</strong> {{detail}}</li>{{/each}}</ul>\n\
             </section>",
            ".features ul {\n  list-style: none;\n  padding: 0;\n}\n\
             .features li {\n  padding: var(--spacing-sm) 0;\n  \
             border-bottom: 1px solid var(--color-muted);\n}",
        )
        .with_prop("heading", PropSpec::string("Features"))
        .with_prop("items", PropSpec::array(json!([]))),
        ComponentDefinition::new(
            "footer",
            ComponentCategory::Layout,
            "<footer class=\"site-footer\">\n  <p>{{copyright}}</p>\n</footer>",
            ".site-footer {\n  text-align: center;\n  padding: var(--spacing-md);\n  \
             color: var(--color-muted);\n  font-size: 0.875rem;\n}",
        )
        .with_prop("copyright", PropSpec::string("")),
    ]
}

// ── Themes ────────────────────────────────────────────────────────────────────

fn builtin_themes() -> Vec<ThemeDefinition> {
    vec![
        ThemeDefinition::new("clean-light")
            .color("primary", "#2563eb")
            .color("accent", "#f59e0b")
            .color("surface", "#ffffff")
            .color("muted", "#e5e7eb")
            .font("heading", "'Plus Jakarta Sans', sans-serif")
            .font("body", "Inter, sans-serif")
            .space("sm", "0.5rem")
            .space("md", "1rem")
            .space("lg", "3rem"),
        ThemeDefinition::new("midnight")
            .color("primary", "#93c5fd")
            .color("accent", "#f472b6")
            .color("surface", "#111827")
            .color("muted", "#374151")
            .font("heading", "'Space Grotesk', sans-serif")
            .font("body", "'IBM Plex Sans', sans-serif")
            .space("sm", "0.5rem")
            .space("md", "1rem")
            .space("lg", "3rem"),
        ThemeDefinition::new(GLASS_THEME)
            .color("primary", "#a78bfa")
            .color("accent", "#67e8f9")
            .color("surface", "rgba(255, 255, 255, 0.08)")
            .color("muted", "rgba(255, 255, 255, 0.35)")
            .font("heading", "'Sora', sans-serif")
            .font("body", "'Work Sans', sans-serif")
            .space("sm", "0.5rem")
            .space("md", "1rem")
            .space("lg", "3rem"),
    ]
}

// ── Templates ─────────────────────────────────────────────────────────────────

fn builtin_templates() -> Vec<TemplateDefinition> {
    let mut templates = vec![
        TemplateDefinition::new("landing-01", "Product Landing", "clean-light")
            .description("Single-page product pitch with a feature rundown")
            .with_component(
                ComponentInstance::new("header")
                    .prop("brand", json!("Acme"))
                    .prop("tagline", json!("Ship it today")),
            )
            .with_component(
                ComponentInstance::new("hero")
                    .prop("title", json!("Your product, online"))
                    .prop("subtitle", json!("From idea to site without the yak-shaving"))
                    .prop("ctaLabel", json!("Start free"))
                    .prop("ctaHref", json!("#signup")),
            )
            .with_component(
                ComponentInstance::new("feature-list")
                    .prop("heading", json!("Everything included"))
                    .prop(
                        "items",
                        json!([
                            { "label": "Fast", "detail": "Static output, no runtime" },
                            { "label": "Themed", "detail": "Swap palettes in one line" },
                            { "label": "Portable", "detail": "Plain HTML and CSS" }
                        ]),
                    ),
            )
            .with_component(
                ComponentInstance::new("footer").prop("copyright", json!("© Acme Inc.")),
            ),
        TemplateDefinition::new("portfolio-01", "Minimal Portfolio", "midnight")
            .description("Dark single-column portfolio")
            .with_component(
                ComponentInstance::new("header")
                    .prop("brand", json!("J. Doe"))
                    .prop("tagline", json!("Design + code")),
            )
            .with_component(
                ComponentInstance::new("hero")
                    .prop("title", json!("Selected work"))
                    .prop("subtitle", json!("Ten years of small, sharp tools")),
            )
            .with_component(
                ComponentInstance::new("card")
                    .prop("heading", json!("Latest project"))
                    .prop("body", json!("A deterministic site generator.")),
            )
            .with_component(
                ComponentInstance::new("footer").prop("copyright", json!("© J. Doe")),
            ),
    ];

    templates.extend(family_templates(FAMILY_SIZE));
    templates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_fully_seeded() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.components.len(), 5);
        assert_eq!(catalog.themes.len(), 3);
        assert_eq!(catalog.templates.len(), 2 + FAMILY_SIZE);
    }

    #[test]
    fn family_ids_are_zero_padded_and_sequential() {
        let family = family_templates(FAMILY_SIZE);
        assert_eq!(family[0].id, "aurora-glass-01");
        assert_eq!(family[49].id, "aurora-glass-50");
        assert!(family.iter().all(|t| t.theme == GLASS_THEME));
        assert!(family.iter().all(|t| t.components.len() == 3));
    }

    #[test]
    fn family_generation_is_deterministic() {
        assert_eq!(family_templates(10), family_templates(10));
    }

    #[test]
    fn every_template_references_registered_definitions() {
        let catalog = builtin_catalog();
        for template in catalog.templates.list() {
            assert!(
                catalog.themes.contains(&template.theme),
                "template {} references unknown theme {}",
                template.id,
                template.theme
            );
            for instance in &template.components {
                assert!(
                    catalog.components.contains(&instance.component),
                    "template {} references unknown component {}",
                    template.id,
                    instance.component
                );
            }
        }
    }

    #[test]
    fn default_props_leave_no_unresolved_tokens() {
        use serde_json::Map;
        use siteforge_core::domain::{DesignDocument, render};

        let catalog = builtin_catalog();
        for template in catalog.templates.list() {
            let document = DesignDocument::from_template(template, None, Map::new());
            let page = render(&catalog, &document);
            assert!(
                !page.html.contains("{{"),
                "template {} leaves tokens: {}",
                template.id,
                page.html
            );
        }
    }
}
