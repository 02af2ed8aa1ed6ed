//! Siteforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Siteforge
//! website and API generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          siteforge-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (DesignService, ExportService,          │
//! │  GeneratorService)                      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, DesignStore,       │
//! │  SchemaSource)                          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    siteforge-adapters (Infrastructure)  │
//! │ (LocalFilesystem, InMemoryDesignStore,  │
//! │  builtin catalog, fixtures)             │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Catalog, DesignDocument, render,       │
//! │  normalize, codegen)                    │
//! │        No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use siteforge_core::{
//!     application::{CreateDesign, DesignService},
//!     domain::Catalog,
//! };
//!
//! // 1. Build (or load) a catalog of components, themes, and templates
//! let catalog = Arc::new(Catalog::new());
//!
//! // 2. Use application services (with injected adapters)
//! let service = DesignService::new(catalog, store);
//! let created = service.create_from_template("landing-01", CreateDesign::default()).unwrap();
//! println!("{}", created.preview.html);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CreateDesign, DesignService, ExportFormat, ExportOptions, ExportOutcome, ExportService,
        FileEmitter, GenerationReport, GeneratorService,
        ports::{ConnectionDescriptor, DesignStore, Filesystem, SchemaSource},
    };
    pub use crate::domain::{
        ArtifactSet, CanonicalSchema, Catalog, ComponentDefinition, ComponentInstance,
        DesignDocument, GenerateOptions, RenderedPage, TemplateDefinition, ThemeDefinition, render,
    };
    pub use crate::error::{SiteforgeError, SiteforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
