//! Implementation of the `siteforge generate` command.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, instrument};

use siteforge_adapters::{FixtureSchemaSource, LocalFilesystem};
use siteforge_core::application::{ConnectionDescriptor, GenerationReport, GeneratorService};
use siteforge_core::domain::GenerateOptions;

use crate::{
    cli::{GenerateArgs, SchemaKind, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `siteforge generate` command.
#[instrument(skip_all, fields(from = %args.from, source = %args.source))]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // The name flag falls back to the config file's `defaults.package_name`.
    let options = GenerateOptions {
        project_name: args
            .name
            .clone()
            .unwrap_or_else(|| config.defaults.package_name.clone()),
        version: args.package_version.clone(),
    };

    // Dry run reports artifact paths and endpoints without any writes; the
    // service does the same when no output directory is passed.
    let output_dir: Option<&Path> = if args.dry_run {
        None
    } else {
        args.output.as_deref()
    };

    let service = GeneratorService::new(
        Box::new(FixtureSchemaSource::with_builtin()),
        Box::new(LocalFilesystem::new()),
    );

    let report = match args.from {
        SchemaKind::Database => service.generate_from_database(
            &ConnectionDescriptor::new(&args.source),
            &options,
            output_dir,
        )?,
        SchemaKind::Openapi => {
            let document = read_schema_file(Path::new(&args.source))?;
            service.generate_from_openapi(&document, &options, output_dir)?
        }
        SchemaKind::Config => {
            let document = read_schema_file(Path::new(&args.source))?;
            service.generate_from_config(&document, &options, output_dir)?
        }
    };

    info!(
        models = report.schema.models.len(),
        files = report.files.len(),
        endpoints = report.endpoints.len(),
        "Generation finished"
    );

    report_result(&report, args.dry_run, &output)?;
    Ok(())
}

fn report_result(
    report: &GenerationReport,
    dry_run: bool,
    output: &OutputManager,
) -> CliResult<()> {
    match (&report.output_dir, dry_run) {
        (Some(dir), _) => {
            output.success(&format!(
                "Generated {} files in {}",
                report.files.len(),
                dir.display()
            ))?;
        }
        (None, true) => {
            output.info(&format!(
                "Dry run: would generate {} files",
                report.files.len()
            ))?;
        }
        (None, false) => {
            output.info(&format!(
                "No output directory given; {} files were planned but not written",
                report.files.len()
            ))?;
        }
    }

    for file in &report.files {
        output.print(&format!("  {}", file.display()))?;
    }

    output.print("")?;
    output.header(&format!(
        "Endpoints ({} models, {} routes):",
        report.schema.models.len(),
        report.endpoints.len()
    ))?;
    for endpoint in &report.endpoints {
        output.print(&format!(
            "  {:6} {:24} {}",
            endpoint.method, endpoint.path, endpoint.description
        ))?;
    }

    Ok(())
}

/// Read and parse a JSON schema document from disk.
fn read_schema_file(path: &Path) -> CliResult<Value> {
    let raw = std::fs::read_to_string(path).map_err(|e| CliError::SchemaFile {
        path: PathBuf::from(path),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| CliError::SchemaFile {
        path: PathBuf::from(path),
        reason: format!("invalid JSON: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_schema_file_is_a_user_error() {
        let err = read_schema_file(Path::new("/no/such/schema.json")).unwrap_err();
        assert!(matches!(err, CliError::SchemaFile { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn invalid_json_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = read_schema_file(&path).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }
}
