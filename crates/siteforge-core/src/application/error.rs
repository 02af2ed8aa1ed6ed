//! Application layer errors.
//!
//! These errors represent failures in orchestration and at the I/O boundary,
//! not business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed. Propagated immediately; prior writes are
    /// left in place (no transactional rollback).
    #[error("I/O error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// Data-source introspection failed.
    #[error("Upstream data source error: {reason}")]
    Upstream { reason: String },

    /// Design persistence failed. Reported but never rolls back the
    /// in-memory document.
    #[error("Failed to persist design: {reason}")]
    PersistFailed { reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::Upstream { reason } => vec![
                format!("The data source could not be introspected: {}", reason),
                "Check the connection descriptor and that the source is reachable".into(),
            ],
            Self::PersistFailed { .. } => vec![
                "The design was created but could not be saved".into(),
                "Retry the save once the store is available".into(),
            ],
            Self::StoreLockError => vec![
                "The store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io { .. } => ErrorCategory::Io,
            Self::Upstream { .. } => ErrorCategory::Upstream,
            Self::PersistFailed { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
