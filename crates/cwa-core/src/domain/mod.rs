//! Core domain layer for create-web-app.
//!
//! Pure logic only: naming rules, the template catalog, package-manager
//! detection and command rewriting. All I/O is reached through the ports in
//! [`crate::application::ports`].
//!
//! - **No I/O**: no filesystem, terminal, or process calls
//! - **No async**: everything here is synchronous
//! - **Static catalog**: frameworks and variants are `'static` data

pub mod catalog;
pub mod command;
pub mod error;
pub mod next_steps;
pub mod package_manager;
pub mod package_name;
pub mod selection;

pub use catalog::{
    FRAMEWORKS, Framework, MANIFEST_FILE, RENAMED_FILES, StyleTag, TEMPLATE_DIR_PREFIX, Variant,
    VariantSource, all_variants, find_variant, framework_of, output_name, template_ids,
};
pub use command::{ExternalCommand, TARGET_DIR_PLACEHOLDER};
pub use error::{DomainError, ErrorCategory};
pub use next_steps::{DEV_SCRIPT, next_steps};
pub use package_manager::{PackageManager, PackageManagerInfo, USER_AGENT_ENV};
pub use package_name::{is_valid_package_name, to_valid_package_name};
pub use selection::{OverwritePolicy, Selection, format_target_dir, project_name_of, resolve_target};
