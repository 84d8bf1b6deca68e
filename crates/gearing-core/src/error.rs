//! Unified error handling for Gearing Core.
//!
//! Wraps domain errors together with caller mistakes detected by the
//! application layer, with user-actionable suggestions.

use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for Gearing Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GearingError {
    /// Errors from the domain layer (arithmetic or missing collaborator).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl GearingError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Gearing".into(),
                "Please report this issue at: https://github.com/cosecruz/gearing/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Arithmetic => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Collaborator => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type GearingResult<T> = Result<T, GearingError>;
