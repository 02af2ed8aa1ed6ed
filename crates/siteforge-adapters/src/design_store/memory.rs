//! In-memory design document store.
//!
//! Process-lifetime persistence. Durable backends would implement the same
//! `DesignStore` port.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use siteforge_core::{
    application::{ApplicationError, ports::DesignStore},
    domain::{DesignDocument, DomainError},
    error::SiteforgeResult,
};

/// Thread-safe in-memory store, keyed by design id.
///
/// Insertion order is tracked separately so listings stay stable.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDesignStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Debug, Default)]
struct StoreInner {
    order: Vec<String>,
    designs: HashMap<String, DesignDocument>,
}

impl InMemoryDesignStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|i| i.designs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DesignStore for InMemoryDesignStore {
    fn insert(&self, design: DesignDocument) -> SiteforgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !inner.designs.contains_key(&design.id) {
            inner.order.push(design.id.clone());
        }
        inner.designs.insert(design.id.clone(), design);
        Ok(())
    }

    fn update(&self, design: DesignDocument) -> SiteforgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !inner.designs.contains_key(&design.id) {
            return Err(DomainError::not_found("design", &design.id).into());
        }
        inner.designs.insert(design.id.clone(), design);
        Ok(())
    }

    fn get(&self, id: &str) -> SiteforgeResult<DesignDocument> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .designs
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("design", id).into())
    }

    fn list_ids(&self) -> SiteforgeResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.order.clone())
    }
}
