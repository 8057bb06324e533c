//! Unified error handling for the create-web-app core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, plus the cancellation signal the prompt flow raises.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum CwaError {
    /// Errors from the domain layer (rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and I/O failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// The user backed out of a prompt or chose to abort. Not a failure.
    #[error("Operation cancelled")]
    Cancelled,
}

impl CwaError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Cancelled => Vec::new(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Cancelled => ErrorCategory::Cancelled,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
    Cancelled,
}

/// Convenient result type alias.
pub type CwaResult<T> = Result<T, CwaError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn cancellation_has_its_own_category() {
        assert_eq!(CwaError::Cancelled.category(), ErrorCategory::Cancelled);
        assert!(CwaError::Cancelled.is_cancelled());
        assert!(CwaError::Cancelled.suggestions().is_empty());
    }

    #[test]
    fn missing_template_is_internal() {
        let err: CwaError = ApplicationError::TemplateMissing {
            variant: "vue-ts".into(),
            path: PathBuf::from("/opt/cwa/template-vue-ts"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("vue-ts"));
    }

    #[test]
    fn domain_errors_keep_their_category() {
        let err: CwaError = DomainError::UnknownOverwritePolicy { value: "x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
