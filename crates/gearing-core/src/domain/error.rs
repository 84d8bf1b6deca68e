// ============================================================================
// domain/error.rs - GEARING ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Arithmetic Errors
    // ========================================================================
    #[error("cannot divide chainring of {chainring} teeth by a cog of 0 teeth")]
    DivisionByZero { chainring: u32 },

    // ========================================================================
    // Collaborator Errors
    // ========================================================================
    #[error("gear has no {collaborator} to take a diameter from")]
    MissingCollaborator { collaborator: &'static str },

    // ========================================================================
    // Validation Errors (opt-in, never raised at construction)
    // ========================================================================
    #[error("invalid {field} of {value}: {reason}")]
    InvalidMeasurement {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DivisionByZero { .. } => vec![
                "A cog needs at least one tooth".into(),
                "Pass a positive --cog, or omit it to use the default of 18".into(),
            ],
            Self::MissingCollaborator { collaborator } => vec![
                format!("Gear inches need a {}", collaborator),
                "Pass --rim and --tire, or add a [wheel] table to your config file".into(),
                "Example: gearing inches --rim 26 --tire 1.5".into(),
            ],
            Self::InvalidMeasurement { field, .. } => vec![
                format!("Check the value given for {}", field),
                "Rims must be positive; tires must not be negative".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DivisionByZero { .. } => ErrorCategory::Arithmetic,
            Self::MissingCollaborator { .. } => ErrorCategory::Collaborator,
            Self::InvalidMeasurement { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Collaborator,
    Validation,
}
