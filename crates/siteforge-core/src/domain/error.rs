//! Domain error types.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic in outer layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A registry lookup failed where the miss is not recoverable locally
    /// (e.g. instantiating a design from an unknown template id). Render-time
    /// component/theme misses never raise this; they degrade by omission.
    #[error("{kind} not found: '{name}'")]
    NotFound { kind: &'static str, name: String },

    /// Malformed input (bad config shape, malformed per-field schema).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown export format string.
    #[error("Unsupported export format: '{format}'")]
    UnsupportedFormat { format: String },

    /// A definition is structurally unusable (empty name, no components).
    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { kind, name } => vec![
                format!("No {} named '{}' is registered", kind, name),
                "Try: siteforge list to see registered templates".into(),
            ],
            Self::Validation(msg) => vec![
                format!("Input rejected: {}", msg),
                "A config document needs a 'models' list where every model has a 'name' and a 'fields' list".into(),
            ],
            Self::UnsupportedFormat { format } => vec![
                format!("'{}' is not an export format", format),
                "Supported formats: html, static, react, vue".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Validation(_) | Self::UnsupportedFormat { .. } => ErrorCategory::Validation,
            Self::InvalidDefinition(_) | Self::MissingRequiredField { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
