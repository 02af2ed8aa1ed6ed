//! Filesystem-based catalog loader.
//!
//! Discovers and parses `*.toml` catalog files from a directory tree and
//! registers their definitions into an existing [`Catalog`]. This is an
//! opt-in extension stage layered on top of [`crate::builtin_catalog`];
//! nothing scans directories unless the caller asks for it.
//!
//! # Directory layout expected
//!
//! ```text
//! catalog/
//! ├── marketing.toml       ← any *.toml file, any nesting depth
//! └── themes/
//!     └── brand.toml
//! ```
//!
//! # Catalog file format
//!
//! Each file may carry any mix of the three definition kinds:
//!
//! ```toml
//! [[components]]
//! name     = "banner"
//! category = "content"
//! markup   = "<div class=\"banner\">{{text}}</div>"
//! styles   = ".banner { padding: 1rem; }"
//!
//! [components.props.text]
//! prop_type = "string"
//! default   = "Hello"
//!
//! [[themes]]
//! name = "brand"
//! [themes.colors]
//! primary = "#cc0044"
//!
//! [[templates]]
//! id    = "brand-landing"
//! name  = "Brand Landing"
//! theme = "brand"
//! [[templates.components]]
//! component = "banner"
//! ```
//!
//! Definitions registered later win: a loaded component with the same name as
//! a built-in replaces it (at its original position in listings).
//!
//! Files that fail to parse are skipped with a warning rather than aborting
//! the load; an unreadable directory is an error.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use siteforge_core::domain::{
    Catalog, ComponentDefinition, DomainError, TemplateDefinition, ThemeDefinition,
};

/// Deserialized representation of one catalog TOML file.
#[derive(Debug, Deserialize, Default)]
struct CatalogFile {
    #[serde(default)]
    components: Vec<ComponentDefinition>,
    #[serde(default)]
    themes: Vec<ThemeDefinition>,
    #[serde(default)]
    templates: Vec<TemplateDefinition>,
}

/// Counts of definitions registered by a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub components: usize,
    pub themes: usize,
    pub templates: usize,
    /// Files that failed to parse and were skipped.
    pub skipped_files: usize,
}

/// Load every `*.toml` catalog file under `dir` into `catalog`.
#[instrument(skip(catalog), fields(dir = %dir.display()))]
pub fn load_dir(catalog: &mut Catalog, dir: &Path) -> Result<LoadSummary, DomainError> {
    if !dir.is_dir() {
        return Err(DomainError::Validation(format!(
            "catalog path is not a directory: {}",
            dir.display()
        )));
    }

    let mut summary = LoadSummary::default();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            DomainError::Validation(format!("failed to walk {}: {}", dir.display(), e))
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "toml") {
            continue;
        }

        match load_file(path) {
            Ok(file) => {
                debug!(
                    path = %path.display(),
                    components = file.components.len(),
                    themes = file.themes.len(),
                    templates = file.templates.len(),
                    "Loaded catalog file"
                );
                summary.components += file.components.len();
                summary.themes += file.themes.len();
                summary.templates += file.templates.len();
                for component in file.components {
                    catalog.register_component(component);
                }
                for theme in file.themes {
                    catalog.register_theme(theme);
                }
                for template in file.templates {
                    catalog.register_template(template);
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping invalid catalog file");
                summary.skipped_files += 1;
            }
        }
    }

    Ok(summary)
}

fn load_file(path: &Path) -> Result<CatalogFile, DomainError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| DomainError::Validation(format!("read failed: {e}")))?;
    toml::from_str(&raw).map_err(|e| DomainError::Validation(format!("parse failed: {e}")))
}
