//! Integration tests for siteforge-core.
//!
//! The port traits are implemented with small in-memory doubles so the full
//! service workflows run without the adapters crate.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde_json::{Map, json};

use siteforge_core::{
    application::{
        ApplicationError, CreateDesign, DesignService, ExportFormat, ExportOptions, ExportOutcome,
        ExportService, GeneratorService,
        ports::{ConnectionDescriptor, DesignStore, Filesystem, SchemaSource},
    },
    domain::{
        Catalog, ComponentCategory, ComponentDefinition, ComponentInstance, DesignDocument,
        GenerateOptions, PropSpec, RawColumn, RawDatabaseSchema, RawTable, TemplateDefinition,
        ThemeDefinition,
    },
    error::{SiteforgeError, SiteforgeResult},
};

// ─── test doubles ───────────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct MemoryFilesystem {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    dirs: Arc<Mutex<Vec<PathBuf>>>,
}

impl MemoryFilesystem {
    fn new() -> Self {
        Self::default()
    }

    fn read(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SiteforgeResult<()> {
        self.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SiteforgeResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
            || self.dirs.lock().unwrap().iter().any(|d| d == path)
    }
}

#[derive(Clone, Default)]
struct MemoryDesignStore {
    designs: Arc<Mutex<BTreeMap<String, DesignDocument>>>,
}

impl MemoryDesignStore {
    fn new() -> Self {
        Self::default()
    }

    fn len(&self) -> usize {
        self.designs.lock().unwrap().len()
    }
}

impl DesignStore for MemoryDesignStore {
    fn insert(&self, design: DesignDocument) -> SiteforgeResult<()> {
        self.designs
            .lock()
            .unwrap()
            .insert(design.id.clone(), design);
        Ok(())
    }

    fn update(&self, design: DesignDocument) -> SiteforgeResult<()> {
        self.designs
            .lock()
            .unwrap()
            .insert(design.id.clone(), design);
        Ok(())
    }

    fn get(&self, id: &str) -> SiteforgeResult<DesignDocument> {
        self.designs
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| ApplicationError::StoreLockError.into())
    }

    fn list_ids(&self) -> SiteforgeResult<Vec<String>> {
        Ok(self.designs.lock().unwrap().keys().cloned().collect())
    }
}

struct FixtureSchemaSource {
    schema: RawDatabaseSchema,
}

impl SchemaSource for FixtureSchemaSource {
    fn introspect(&self, _conn: &ConnectionDescriptor) -> SiteforgeResult<RawDatabaseSchema> {
        Ok(self.schema.clone())
    }
}

struct FailingSchemaSource;

impl SchemaSource for FailingSchemaSource {
    fn introspect(&self, conn: &ConnectionDescriptor) -> SiteforgeResult<RawDatabaseSchema> {
        Err(ApplicationError::Upstream {
            reason: format!("connection refused: {}", conn.target),
        }
        .into())
    }
}

// ─── fixtures ───────────────────────────────────────────────────────────────

fn test_catalog() -> Arc<Catalog> {
    let mut catalog = Catalog::new();

    catalog.register_component(
        ComponentDefinition::new(
            "hero",
            ComponentCategory::Content,
            "<section class=\"hero\"><h1>{{title}}</h1></section>",
            ".hero { text-align: center; }",
        )
        .with_prop("title", PropSpec::string("Welcome")),
    );

    catalog.register_theme(
        ThemeDefinition::new("clean-light")
            .color("primary", "#2563eb")
            .font("body", "Inter, sans-serif")
            .space("md", "1rem"),
    );

    catalog.register_template(
        TemplateDefinition::new("landing-01", "Landing Page", "clean-light")
            .with_component(ComponentInstance::new("hero").prop("title", json!("Launch"))),
    );

    Arc::new(catalog)
}

// ─── design workflow ────────────────────────────────────────────────────────

#[test]
fn create_design_renders_and_persists() {
    let store = MemoryDesignStore::new();
    let service = DesignService::new(test_catalog(), Box::new(store.clone()));

    let created = service
        .create_from_template("landing-01", CreateDesign::default())
        .unwrap();

    assert_eq!(created.document.template_id, "landing-01");
    assert!(created.preview.html.contains("<h1>Launch</h1>"));
    assert!(created.preview.css.contains("--color-primary: #2563eb;"));
    assert_eq!(store.len(), 1);
}

#[test]
fn create_design_with_unknown_template_fails() {
    let service = DesignService::new(test_catalog(), Box::new(MemoryDesignStore::new()));

    let err = service
        .create_from_template("no-such-template", CreateDesign::default())
        .unwrap_err();

    assert!(matches!(err, SiteforgeError::Domain(_)));
    assert!(err.to_string().contains("no-such-template"));
}

#[test]
fn update_design_stamps_and_persists() {
    let store = MemoryDesignStore::new();
    let service = DesignService::new(test_catalog(), Box::new(store.clone()));

    let created = service
        .create_from_template("landing-01", CreateDesign::default())
        .unwrap();
    let before = created.document.updated_at;

    let mut doc = created.document;
    doc.components[0].props.insert("title".into(), json!("V2"));
    let updated = service.update_design(doc).unwrap();

    assert!(updated.document.updated_at >= before);
    assert!(updated.preview.html.contains("<h1>V2</h1>"));
    assert_eq!(store.len(), 1);

    let stored = service.get_design(&updated.document.id).unwrap();
    assert_eq!(stored.components[0].props["title"], json!("V2"));
}

#[test]
fn customizations_travel_with_the_document() {
    let service = DesignService::new(test_catalog(), Box::new(MemoryDesignStore::new()));

    let mut customizations = Map::new();
    customizations.insert("accent".into(), json!("#fff"));
    let created = service
        .create_from_template(
            "landing-01",
            CreateDesign {
                project_ref: Some("proj-7".into()),
                customizations: customizations.clone(),
            },
        )
        .unwrap();

    assert_eq!(created.document.project_ref.as_deref(), Some("proj-7"));
    assert_eq!(created.document.customizations, customizations);
}

// ─── export workflow ────────────────────────────────────────────────────────

#[test]
fn html_export_writes_page_and_styles() {
    let fs = MemoryFilesystem::new();
    let catalog = test_catalog();
    let design_service = DesignService::new(catalog.clone(), Box::new(MemoryDesignStore::new()));
    let export_service = ExportService::new(catalog, Box::new(fs.clone()));

    let created = design_service
        .create_from_template("landing-01", CreateDesign::default())
        .unwrap();

    let outcome = export_service
        .export(
            &created.document,
            ExportFormat::Html,
            &ExportOptions {
                output_dir: Some(PathBuf::from("/out/site")),
                name: None,
            },
        )
        .unwrap();

    match outcome {
        ExportOutcome::Written { output_dir, files } => {
            assert_eq!(output_dir, PathBuf::from("/out/site"));
            assert_eq!(files, vec![PathBuf::from("index.html"), PathBuf::from("styles.css")]);
        }
        other => panic!("expected Written, got {other:?}"),
    }

    let html = fs.read(Path::new("/out/site/index.html")).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Launch</h1>"));
    assert!(fs.read(Path::new("/out/site/styles.css")).is_some());
}

#[test]
fn static_export_adds_manifest() {
    let fs = MemoryFilesystem::new();
    let catalog = test_catalog();
    let design_service = DesignService::new(catalog.clone(), Box::new(MemoryDesignStore::new()));
    let export_service = ExportService::new(catalog, Box::new(fs.clone()));

    let created = design_service
        .create_from_template("landing-01", CreateDesign::default())
        .unwrap();

    export_service
        .export(
            &created.document,
            ExportFormat::Static,
            &ExportOptions {
                output_dir: Some(PathBuf::from("/out/bundle")),
                name: Some("demo-site".into()),
            },
        )
        .unwrap();

    let manifest = fs.read(Path::new("/out/bundle/manifest.json")).unwrap();
    assert!(manifest.contains("\"demo-site\""));
    assert!(manifest.contains("index.html"));
}

#[test]
fn react_export_is_reported_unsupported_without_writes() {
    let fs = MemoryFilesystem::new();
    let catalog = test_catalog();
    let design_service = DesignService::new(catalog.clone(), Box::new(MemoryDesignStore::new()));
    let export_service = ExportService::new(catalog, Box::new(fs.clone()));

    let created = design_service
        .create_from_template("landing-01", CreateDesign::default())
        .unwrap();

    let outcome = export_service
        .export(&created.document, ExportFormat::React, &ExportOptions::default())
        .unwrap();

    assert!(matches!(outcome, ExportOutcome::Unsupported { ref format, .. } if format == "react"));
    assert_eq!(fs.file_count(), 0);
}

// ─── generation workflow ────────────────────────────────────────────────────

fn user_fixture() -> RawDatabaseSchema {
    RawDatabaseSchema {
        tables: vec![RawTable {
            name: "User".into(),
            columns: vec![
                RawColumn {
                    name: "id".into(),
                    data_type: "serial".into(),
                    nullable: false,
                    unique: true,
                },
                RawColumn {
                    name: "email".into(),
                    data_type: "varchar".into(),
                    nullable: false,
                    unique: true,
                },
            ],
        }],
    }
}

#[test]
fn generate_from_database_writes_full_project() {
    let fs = MemoryFilesystem::new();
    let service = GeneratorService::new(
        Box::new(FixtureSchemaSource {
            schema: user_fixture(),
        }),
        Box::new(fs.clone()),
    );

    let report = service
        .generate_from_database(
            &ConnectionDescriptor::new("fixture"),
            &GenerateOptions::default(),
            Some(Path::new("/gen/api")),
        )
        .unwrap();

    assert_eq!(report.schema.models[0].name, "User");
    assert_eq!(report.endpoints.len(), 5);
    assert_eq!(report.output_dir, Some(PathBuf::from("/gen/api")));

    let server = fs.read(Path::new("/gen/api/server.js")).unwrap();
    assert!(server.contains("app.use('/api/users'"));
    let model = fs.read(Path::new("/gen/api/models/User.js")).unwrap();
    assert!(model.contains("Joi"));
    assert!(fs.read(Path::new("/gen/api/package.json")).is_some());
    assert!(fs.read(Path::new("/gen/api/README.md")).is_some());
}

#[test]
fn generate_without_output_dir_only_reports() {
    let fs = MemoryFilesystem::new();
    let service = GeneratorService::new(
        Box::new(FixtureSchemaSource {
            schema: user_fixture(),
        }),
        Box::new(fs.clone()),
    );

    let report = service
        .generate_from_database(
            &ConnectionDescriptor::new("fixture"),
            &GenerateOptions::default(),
            None,
        )
        .unwrap();

    assert!(report.files.iter().any(|p| p == Path::new("server.js")));
    assert_eq!(report.output_dir, None);
    assert_eq!(fs.file_count(), 0);
}

#[test]
fn generate_from_config_validates_shape() {
    let service = GeneratorService::new(
        Box::new(FailingSchemaSource),
        Box::new(MemoryFilesystem::new()),
    );

    let good = json!({
        "models": [
            { "name": "Post", "fields": [ { "name": "title", "type": "String", "isRequired": true } ] }
        ]
    });
    let report = service
        .generate_from_config(&good, &GenerateOptions::default(), None)
        .unwrap();
    assert_eq!(report.schema.models.len(), 1);
    assert_eq!(report.endpoints[0].path, "/api/posts");

    let err = service
        .generate_from_config(&json!({"models": "nope"}), &GenerateOptions::default(), None)
        .unwrap_err();
    assert!(matches!(err, SiteforgeError::Domain(_)));
}

#[test]
fn upstream_failure_surfaces_as_application_error() {
    let service = GeneratorService::new(
        Box::new(FailingSchemaSource),
        Box::new(MemoryFilesystem::new()),
    );

    let err = service
        .generate_from_database(
            &ConnectionDescriptor::new("postgres://down"),
            &GenerateOptions::default(),
            None,
        )
        .unwrap_err();

    assert!(matches!(
        err,
        SiteforgeError::Application(ApplicationError::Upstream { .. })
    ));
    assert!(err.to_string().contains("postgres://down"));
}

#[test]
fn generate_from_openapi_extracts_object_schemas() {
    let service = GeneratorService::new(
        Box::new(FailingSchemaSource),
        Box::new(MemoryFilesystem::new()),
    );

    let document = json!({
        "components": {
            "schemas": {
                "Order": {
                    "type": "object",
                    "required": ["total"],
                    "properties": {
                        "total": { "type": "number" },
                        "note": { "type": "string" }
                    }
                },
                "Ignored": { "type": "string" }
            }
        }
    });

    let report = service
        .generate_from_openapi(&document, &GenerateOptions::default(), None)
        .unwrap();

    assert_eq!(report.schema.models.len(), 1);
    assert_eq!(report.schema.models[0].name, "Order");
}
