//! Template store adapters.

mod directory;

pub use directory::{DirectoryTemplateStore, default_candidates};
