//! create-web-app core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the
//! create-web-app scaffolder, following ports and adapters architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           cwa-cli (binary)              │
//! │   argument parsing, terminal prompts    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (SelectionFlow, ScaffoldService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ Prompter, Filesystem, TemplateStore,    │
//! │ ProcessRunner                           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      cwa-adapters (Infrastructure)      │
//! │ LocalFilesystem, DirectoryTemplateStore │
//! │ SystemProcessRunner                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cwa_core::prelude::*;
//!
//! let selection = SelectionFlow::new(&prompter, &filesystem).run(&inputs)?;
//! let root = inputs.cwd.join(&selection.target_dir);
//! let outcome = ScaffoldService::new(&filesystem, &templates, &runner)
//!     .scaffold(&selection, &root, &manager)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

/// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, Choice, FlowInputs, InputRule, ScaffoldOutcome, ScaffoldService,
        SelectionFlow,
        ports::{Filesystem, ProcessRunner, Prompter, TemplateStore},
    };
    pub use crate::domain::{
        ExternalCommand, FRAMEWORKS, Framework, OverwritePolicy, PackageManager,
        PackageManagerInfo, Selection, StyleTag, Variant, VariantSource,
    };
    pub use crate::error::{CwaError, CwaResult, ErrorCategory};
}
