// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Siteforge.
//!
//! This module contains pure business logic with ZERO external dependencies
//! beyond serialization. All I/O and persistence concerns are handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Deterministic**: Same catalog + same inputs produce the same output
//!   (document ids and timestamps aside)
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod codegen;
pub mod entities;
pub mod error;
pub mod interpolate;
pub mod normalize;
pub mod registry;
pub mod render;

// Re-exports for convenience
pub use entities::{
    artifact::ArtifactSet,
    component::{ComponentCategory, ComponentDefinition, PropSpec, PropType},
    design::{DesignComponent, DesignDocument},
    schema::{CanonicalSchema, Endpoint, Field, FieldType, Model},
    template::{ComponentInstance, TemplateDefinition},
    theme::{GLASS_THEME, ThemeDefinition},
};

pub use codegen::GenerateOptions;
pub use error::{DomainError, ErrorCategory};
pub use normalize::{RawColumn, RawDatabaseSchema, RawTable};
pub use registry::{Catalog, Keyed, Registry};
pub use render::{RenderedPage, render};
