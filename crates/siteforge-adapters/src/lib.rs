//! Infrastructure adapters for Siteforge.
//!
//! This crate implements the ports defined in `siteforge-core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the built-in
//! catalog of components, themes, and templates.

pub mod builtin_catalog;
pub mod catalog_loader;
pub mod design_store;
pub mod filesystem;
pub mod schema_source;

// Re-export commonly used adapters
pub use builtin_catalog::{builtin_catalog, family_templates};
pub use design_store::InMemoryDesignStore;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use schema_source::FixtureSchemaSource;
