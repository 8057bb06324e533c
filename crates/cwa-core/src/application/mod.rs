//! Application layer for create-web-app.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SelectionFlow, ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or catalog rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{FlowInputs, ScaffoldOutcome, ScaffoldService, SelectionFlow};

// Re-export port traits (for adapter implementation)
pub use ports::{Choice, Filesystem, InputRule, ProcessRunner, Prompter, TemplateStore};

pub use error::ApplicationError;
