//! Infrastructure adapters for create-web-app.
//!
//! This crate implements the ports defined in `cwa_core::application::ports`.
//! It contains all disk and process I/O.

pub mod filesystem;
pub mod process;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::LocalFilesystem;
pub use process::SystemProcessRunner;
pub use template_store::{DirectoryTemplateStore, default_candidates};
