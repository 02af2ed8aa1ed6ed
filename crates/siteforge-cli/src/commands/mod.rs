//! Command handlers.
//!
//! Each submodule implements one subcommand. Handlers translate CLI
//! arguments into service calls and display results; no business logic
//! lives here.

pub mod completions;
pub mod config;
pub mod export;
pub mod generate;
pub mod list;

use std::sync::Arc;

use tracing::info;

use siteforge_adapters::{builtin_catalog, catalog_loader};
use siteforge_core::domain::Catalog;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Build the catalog for this invocation: built-ins plus any extra directory
/// from `--catalog` or the config file (the flag wins).
pub(crate) fn resolve_catalog(global: &GlobalArgs, config: &AppConfig) -> CliResult<Arc<Catalog>> {
    let mut catalog = builtin_catalog();

    let extra = global
        .catalog
        .as_ref()
        .or(config.catalog.local_path.as_ref());

    if let Some(dir) = extra {
        let summary = catalog_loader::load_dir(&mut catalog, dir)
            .map_err(|e| CliError::Core(e.into()))?;
        info!(
            dir = %dir.display(),
            components = summary.components,
            themes = summary.themes,
            templates = summary.templates,
            skipped = summary.skipped_files,
            "Loaded extra catalog directory"
        );
    }

    Ok(Arc::new(catalog))
}
