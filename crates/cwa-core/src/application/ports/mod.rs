//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world. Adapters
//! in `cwa-adapters` and the CLI's terminal prompter implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Prompter`: Interactive questions
//!   - `Filesystem`: Directory checks, copy, clear
//!   - `TemplateStore`: Bundled template lookup and manifest rewrite
//!   - `ProcessRunner`: External generator delegation

pub mod output;

pub use output::{Choice, Filesystem, InputRule, ProcessRunner, Prompter, TemplateStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockProcessRunner, MockPrompter, MockTemplateStore};
