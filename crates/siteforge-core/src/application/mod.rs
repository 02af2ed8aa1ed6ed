//! Application layer for Siteforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DesignService, ExportService, GeneratorService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CreateDesign, DesignService, DesignWithPreview, ExportFormat, ExportOptions, ExportOutcome,
    ExportService, FileEmitter, GenerationReport, GeneratorService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ConnectionDescriptor, DesignStore, Filesystem, SchemaSource};

pub use error::ApplicationError;
