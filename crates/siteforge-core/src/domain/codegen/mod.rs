//! The code template engine: turns a [`CanonicalSchema`] into Express-style
//! project source text.
//!
//! `generate` is a pure, deterministic function of its inputs: same schema
//! and options give a byte-identical [`ArtifactSet`]. Emission order is
//! fixed: shared server file, per-model routes and model files in schema
//! order, middleware, manifest, README.

mod templates;

use serde_json::{Map, Value};

use crate::domain::{
    entities::artifact::ArtifactSet,
    entities::schema::{CanonicalSchema, Endpoint, Model},
    interpolate,
};

/// Options shared by every generation entry point.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Project name used in the manifest and server banner.
    pub project_name: String,
    /// Manifest version string.
    pub version: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            project_name: "generated-api".to_string(),
            version: "0.1.0".to_string(),
        }
    }
}

/// Generate the full artifact set for a schema.
pub fn generate(schema: &CanonicalSchema, options: &GenerateOptions) -> ArtifactSet {
    let mut artifacts = ArtifactSet::new();

    artifacts.insert("server.js", server_file(schema, options));

    for model in &schema.models {
        artifacts.insert(format!("routes/{}.js", model.plural()), routes_file(model));
        artifacts.insert(format!("models/{}.js", model.name), model_file(model));
    }

    artifacts.insert("middleware/auth.js", templates::AUTH_MIDDLEWARE);
    artifacts.insert("middleware/validation.js", templates::VALIDATION_MIDDLEWARE);
    artifacts.insert("package.json", manifest_file(options));
    artifacts.insert("README.md", readme_file(schema, options));

    artifacts
}

/// Derive the endpoint list without generating any files. Five endpoints per
/// model, in schema order.
pub fn extract_endpoints(schema: &CanonicalSchema) -> Vec<Endpoint> {
    let mut endpoints = Vec::with_capacity(schema.models.len() * 5);
    for model in &schema.models {
        let base = model.route_base();
        let lower = model.name.to_lowercase();
        endpoints.push(Endpoint {
            method: "GET".into(),
            path: base.clone(),
            description: format!("List all {}", model.plural()),
        });
        endpoints.push(Endpoint {
            method: "GET".into(),
            path: format!("{base}/:id"),
            description: format!("Get a single {lower} by id"),
        });
        endpoints.push(Endpoint {
            method: "POST".into(),
            path: base.clone(),
            description: format!("Create a new {lower}"),
        });
        endpoints.push(Endpoint {
            method: "PUT".into(),
            path: format!("{base}/:id"),
            description: format!("Update an existing {lower}"),
        });
        endpoints.push(Endpoint {
            method: "DELETE".into(),
            path: format!("{base}/:id"),
            description: format!("Delete a {lower}"),
        });
    }
    endpoints
}

fn props(entries: &[(&str, String)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.clone())))
        .collect()
}

fn routes_file(model: &Model) -> String {
    let p = props(&[
        ("model", model.name.clone()),
        ("lower", model.name.to_lowercase()),
        ("plural", model.plural()),
    ]);
    interpolate::render(templates::ROUTES, &p)
}

fn model_file(model: &Model) -> String {
    // One Joi rule per required field; optional fields are validated only
    // when schema-aware middleware is mounted.
    let rules: String = model
        .fields
        .iter()
        .filter(|f| f.required)
        .map(|f| {
            format!(
                "  {}: {}.required(),\n",
                f.name,
                f.field_type.validator_primitive()
            )
        })
        .collect();

    let p = props(&[
        ("model", model.name.clone()),
        ("lower", model.name.to_lowercase()),
        ("validation_rules", rules),
    ]);
    interpolate::render(templates::MODEL, &p)
}

fn server_file(schema: &CanonicalSchema, options: &GenerateOptions) -> String {
    let requires: String = schema
        .models
        .iter()
        .map(|m| {
            format!(
                "const {}Routes = require('./routes/{}');\n",
                m.name.to_lowercase(),
                m.plural()
            )
        })
        .collect();

    let mounts: String = schema
        .models
        .iter()
        .map(|m| {
            format!(
                "app.use('{}', auth, {}Routes);\n",
                m.route_base(),
                m.name.to_lowercase()
            )
        })
        .collect();

    let p = props(&[
        ("project_name", options.project_name.clone()),
        ("requires", requires),
        ("mounts", mounts),
    ]);
    interpolate::render(templates::SERVER, &p)
}

fn manifest_file(options: &GenerateOptions) -> String {
    let p = props(&[
        ("project_name", options.project_name.clone()),
        ("version", options.version.clone()),
    ]);
    interpolate::render(templates::MANIFEST, &p)
}

fn readme_file(schema: &CanonicalSchema, options: &GenerateOptions) -> String {
    let mut readme = format!(
        "# {}\n\nGenerated REST API.\n\n## Endpoints\n\n| Method | Path | Description |\n|--------|------|-------------|\n",
        options.project_name
    );
    for endpoint in extract_endpoints(schema) {
        readme.push_str(&format!(
            "| {} | {} | {} |\n",
            endpoint.method, endpoint.path, endpoint.description
        ));
    }
    readme.push_str("\n## Running\n\n```\nnpm install\nnpm start\n```\n");
    readme
}
