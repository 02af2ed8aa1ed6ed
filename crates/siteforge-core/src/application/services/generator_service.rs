//! Generator Service - API code generation orchestrator.
//!
//! Three entry points, one per schema source, all funneling into the same
//! pipeline: normalize to a `CanonicalSchema`, generate the artifact set,
//! optionally write it through the `Filesystem` port.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{ConnectionDescriptor, Filesystem, SchemaSource},
        services::FileEmitter,
    },
    domain::{
        CanonicalSchema, Endpoint, GenerateOptions,
        codegen::{extract_endpoints, generate},
        normalize,
    },
    error::SiteforgeResult,
};

/// Summary of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// The canonical schema the code was generated from.
    pub schema: CanonicalSchema,
    /// Relative paths of every artifact, in emission order.
    pub files: Vec<PathBuf>,
    /// Every endpoint the generated API exposes.
    pub endpoints: Vec<Endpoint>,
    /// Where the files were written, if anywhere.
    pub output_dir: Option<PathBuf>,
}

/// API generation orchestration service.
pub struct GeneratorService {
    schema_source: Box<dyn SchemaSource>,
    filesystem: Box<dyn Filesystem>,
}

impl GeneratorService {
    pub fn new(schema_source: Box<dyn SchemaSource>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            schema_source,
            filesystem,
        }
    }

    /// Generate from a live database, introspected through the schema source
    /// port. Introspection failures surface as `ApplicationError::Upstream`.
    #[instrument(skip_all, fields(target = %conn.target))]
    pub fn generate_from_database(
        &self,
        conn: &ConnectionDescriptor,
        options: &GenerateOptions,
        output_dir: Option<&Path>,
    ) -> SiteforgeResult<GenerationReport> {
        let raw = self.schema_source.introspect(conn)?;
        let schema = normalize::from_database(&raw);
        self.run(schema, options, output_dir)
    }

    /// Generate from an OpenAPI document.
    #[instrument(skip_all)]
    pub fn generate_from_openapi(
        &self,
        document: &Value,
        options: &GenerateOptions,
        output_dir: Option<&Path>,
    ) -> SiteforgeResult<GenerationReport> {
        let schema = normalize::from_openapi(document);
        self.run(schema, options, output_dir)
    }

    /// Generate from an already-canonical config document.
    #[instrument(skip_all)]
    pub fn generate_from_config(
        &self,
        document: &Value,
        options: &GenerateOptions,
        output_dir: Option<&Path>,
    ) -> SiteforgeResult<GenerationReport> {
        let schema = normalize::from_config(document)?;
        self.run(schema, options, output_dir)
    }

    /// Shared tail of every entry point.
    fn run(
        &self,
        schema: CanonicalSchema,
        options: &GenerateOptions,
        output_dir: Option<&Path>,
    ) -> SiteforgeResult<GenerationReport> {
        let artifacts = generate(&schema, options);
        let endpoints = extract_endpoints(&schema);

        let (files, output_dir) = match output_dir {
            Some(dir) => {
                let written = FileEmitter::write(&artifacts, dir, self.filesystem.as_ref())?;
                info!(output_dir = %dir.display(), files = written.len(), "Generated API written");
                (written, Some(dir.to_path_buf()))
            }
            None => (artifacts.paths(), None),
        };

        Ok(GenerationReport {
            schema,
            files,
            endpoints,
            output_dir,
        })
    }
}
