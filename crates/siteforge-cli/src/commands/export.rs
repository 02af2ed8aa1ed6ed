//! Implementation of the `siteforge export` command.
//!
//! Responsibility: build a design from the requested template, run the
//! export pipeline, and display the result. No business logic lives here.

use serde_json::{Map, Value};
use tracing::{info, instrument};

use siteforge_adapters::{InMemoryDesignStore, LocalFilesystem};
use siteforge_core::application::{
    CreateDesign, DesignService, ExportFormat, ExportOptions, ExportOutcome, ExportService,
};

use crate::{
    cli::{ExportArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `siteforge export` command.
///
/// Dispatch sequence:
/// 1. Parse the format string and `--customizations` payload
/// 2. Instantiate a design from the template
/// 3. Early-exit if `--dry-run`
/// 4. Run the export pipeline
/// 5. Print what was written
#[instrument(skip_all, fields(template = %args.template))]
pub fn execute(
    args: ExportArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate inputs before touching any service. The format flag falls
    //    back to the config file's `defaults.format`.
    let format: ExportFormat = args
        .format
        .as_deref()
        .unwrap_or(&config.defaults.format)
        .parse()
        .map_err(|e: siteforge_core::domain::DomainError| CliError::Core(e.into()))?;
    let customizations = parse_customizations(args.customizations.as_deref())?;

    let catalog = super::resolve_catalog(&global, &config)?;

    // 2. Instantiate the design.
    let design_service = DesignService::new(catalog.clone(), Box::new(InMemoryDesignStore::new()));
    let created = design_service.create_from_template(
        &args.template,
        CreateDesign {
            project_ref: args.project.clone(),
            customizations,
        },
    )?;

    info!(design_id = %created.document.id, "Design instantiated");

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would export '{}' as {}",
            args.template, format
        ))?;
        output.info(&format!(
            "  Components: {}",
            created.document.components.len()
        ))?;
        output.info(&format!("  Theme:      {}", created.document.theme))?;
        output.info(&format!(
            "  HTML bytes: {}, CSS bytes: {}",
            created.preview.html.len(),
            created.preview.css.len()
        ))?;
        return Ok(());
    }

    // 4. Export.
    let export_service = ExportService::new(catalog, Box::new(LocalFilesystem::new()));
    let outcome = export_service.export(
        &created.document,
        format,
        &ExportOptions {
            output_dir: args.output.clone(),
            name: args.project,
        },
    )?;

    // 5. Report.
    match outcome {
        ExportOutcome::Written { output_dir, files } => {
            output.success(&format!("Exported to {}", output_dir.display()))?;
            for file in &files {
                output.print(&format!("  {}", file.display()))?;
            }
        }
        ExportOutcome::Unsupported { format, message } => {
            output.warning(&format!("Export format '{format}' is not available yet"))?;
            output.print(&format!("  {message}"))?;
        }
    }

    Ok(())
}

/// Parse the `--customizations` JSON payload. Must be a JSON object; the
/// contents are stored on the design verbatim.
fn parse_customizations(raw: Option<&str>) -> CliResult<Map<String, Value>> {
    let Some(raw) = raw else {
        return Ok(Map::new());
    };

    let value: Value =
        serde_json::from_str(raw).map_err(|e| CliError::InvalidCustomizations {
            reason: e.to_string(),
        })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(CliError::InvalidCustomizations {
            reason: format!("expected a JSON object, got {}", kind_of(&other)),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
