//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `siteforge-adapters` crate provides implementations.

use crate::domain::{DesignDocument, RawDatabaseSchema};
use crate::error::SiteforgeResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `siteforge_adapters::filesystem::LocalFilesystem` (production)
/// - `siteforge_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SiteforgeResult<()>;

    /// Write content to a file, creating it if absent and truncating otherwise.
    fn write_file(&self, path: &Path, content: &str) -> SiteforgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for design document persistence.
///
/// Implemented by:
/// - `siteforge_adapters::design_store::InMemoryDesignStore`
///
/// Persistence is best-effort: services report store failures but never roll
/// back the document they hand to the caller.
pub trait DesignStore: Send + Sync {
    /// Insert a new design document.
    fn insert(&self, design: DesignDocument) -> SiteforgeResult<()>;

    /// Replace an existing design document.
    fn update(&self, design: DesignDocument) -> SiteforgeResult<()>;

    /// Fetch a design document by id.
    fn get(&self, id: &str) -> SiteforgeResult<DesignDocument>;

    /// List all stored design ids, in insertion order.
    fn list_ids(&self) -> SiteforgeResult<Vec<String>>;
}

/// Descriptor for an upstream data source to introspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    /// Connection string or fixture name; interpretation is adapter-specific.
    pub target: String,
}

impl ConnectionDescriptor {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// Port for database schema introspection.
///
/// Implemented by:
/// - `siteforge_adapters::schema_source::FixtureSchemaSource` (testing/demo)
///
/// Production implementations would speak to a live database; failures map to
/// `ApplicationError::Upstream`.
pub trait SchemaSource: Send + Sync {
    /// Introspect the source and return its raw table layout.
    fn introspect(&self, conn: &ConnectionDescriptor) -> SiteforgeResult<RawDatabaseSchema>;
}
