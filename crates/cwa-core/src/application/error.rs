//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not naming or
//! catalog rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while collecting answers or writing the project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A bundled template directory is missing or empty.
    #[error("invalid template '{variant}': {} is missing or empty", .path.display())]
    TemplateMissing { variant: String, path: PathBuf },

    /// The template's package manifest could not be read or rewritten.
    #[error("manifest error at {}: {reason}", .path.display())]
    ManifestError { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {}: {reason}", .path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// The terminal prompt could not be shown or read.
    #[error("prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// The external generator could not be started.
    #[error("failed to run '{command}': {reason}")]
    SpawnFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateMissing { path, .. } => vec![
                format!("Expected bundled template at {}", path.display()),
                "Set templates.root in the config file or CWA_TEMPLATES__ROOT".into(),
                "Reinstall create-web-app if the templates were removed".into(),
            ],
            Self::ManifestError { path, .. } => vec![
                format!("Check that {} is valid JSON", path.display()),
                "The manifest must be a JSON object with a name field".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Interactive prompts need a terminal".into(),
                "Pass a directory and --template to skip the prompts".into(),
            ],
            Self::SpawnFailed { .. } => vec![
                "Ensure the package manager is installed and in your PATH".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateMissing { .. } | Self::ManifestError { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } | Self::SpawnFailed { .. } => ErrorCategory::Internal,
            Self::PromptFailed { .. } => ErrorCategory::Validation,
        }
    }
}
