//! Design Service - design instantiation and preview orchestration.
//!
//! This service coordinates the design workflow:
//! 1. Resolve template from the catalog
//! 2. Instantiate a design document
//! 3. Render a preview
//! 4. Persist via the `DesignStore` port
//!
//! Rendering itself is pure and lives in `crate::domain::render`.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use crate::{
    application::ports::DesignStore,
    domain::{Catalog, DesignDocument, DomainError, RenderedPage, render},
    error::SiteforgeResult,
};

/// Inputs for creating a design from a template.
#[derive(Debug, Clone, Default)]
pub struct CreateDesign {
    /// Optional owning project reference, carried verbatim.
    pub project_ref: Option<String>,
    /// Free-form overrides. Stored on the document, never interpreted or
    /// merged into component props by the render pipeline.
    pub customizations: Map<String, Value>,
}

/// A freshly created design together with its rendered preview.
#[derive(Debug, Clone)]
pub struct DesignWithPreview {
    pub document: DesignDocument,
    pub preview: RenderedPage,
}

/// Main design orchestration service.
pub struct DesignService {
    catalog: Arc<Catalog>,
    store: Box<dyn DesignStore>,
}

impl DesignService {
    /// Create a new design service with the given catalog and store adapter.
    pub fn new(catalog: Arc<Catalog>, store: Box<dyn DesignStore>) -> Self {
        Self { catalog, store }
    }

    /// Instantiate a design from a registered template.
    ///
    /// Persistence is best-effort: if the store rejects the insert, the
    /// failure is logged and the document is still returned to the caller.
    #[instrument(skip_all, fields(template_id = %template_id))]
    pub fn create_from_template(
        &self,
        template_id: &str,
        request: CreateDesign,
    ) -> SiteforgeResult<DesignWithPreview> {
        let template = self
            .catalog
            .templates
            .get(template_id)
            .ok_or_else(|| DomainError::not_found("template", template_id))?;

        let document =
            DesignDocument::from_template(template, request.project_ref, request.customizations);
        info!(design_id = %document.id, "Design instantiated");

        let preview = render(&self.catalog, &document);

        if let Err(e) = self.store.insert(document.clone()) {
            warn!(error = %e, design_id = %document.id, "Failed to persist design");
        }

        Ok(DesignWithPreview { document, preview })
    }

    /// Render a preview for an existing document. Pure delegation.
    pub fn render_preview(&self, document: &DesignDocument) -> RenderedPage {
        render(&self.catalog, document)
    }

    /// Replace a stored design wholesale and re-render it.
    #[instrument(skip_all, fields(design_id = %document.id))]
    pub fn update_design(&self, mut document: DesignDocument) -> SiteforgeResult<DesignWithPreview> {
        document.touch();
        let preview = render(&self.catalog, &document);

        if let Err(e) = self.store.update(document.clone()) {
            warn!(error = %e, design_id = %document.id, "Failed to persist design update");
        }

        Ok(DesignWithPreview { document, preview })
    }

    /// Fetch a stored design by id.
    pub fn get_design(&self, id: &str) -> SiteforgeResult<DesignDocument> {
        self.store.get(id)
    }
}
