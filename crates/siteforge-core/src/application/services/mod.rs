//! Application services - use case orchestration.

pub mod design_service;
pub mod export_service;
pub mod file_emitter;
pub mod generator_service;

pub use design_service::{CreateDesign, DesignService, DesignWithPreview};
pub use export_service::{ExportFormat, ExportOptions, ExportOutcome, ExportService};
pub use file_emitter::FileEmitter;
pub use generator_service::{GenerationReport, GeneratorService};
