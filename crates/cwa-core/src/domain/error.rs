// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("unknown overwrite policy '{value}' (expected abort, delete or ignore)")]
    UnknownOverwritePolicy { value: String },

    // ========================================================================
    // Catalog inconsistencies
    // ========================================================================
    #[error("external command template '{template}' is empty")]
    EmptyCommand { template: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownOverwritePolicy { .. } => {
                vec!["Valid values: abort, delete, ignore".into()]
            }
            Self::EmptyCommand { .. } => vec![
                "The template catalog is inconsistent".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownOverwritePolicy { .. } => ErrorCategory::Validation,
            Self::EmptyCommand { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
