//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! `cwa-adapters` provides the filesystem, template store and process runner;
//! the CLI provides the terminal prompter.

use std::path::{Path, PathBuf};

use crate::domain::{ExternalCommand, StyleTag, Variant, is_valid_package_name};
use crate::error::CwaResult;

/// One entry of a single-select prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    /// Catalog colour, if the entry has one.
    pub style: Option<StyleTag>,
}

impl Choice {
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: None,
        }
    }

    pub fn styled(label: impl Into<String>, style: StyleTag) -> Self {
        Self {
            label: label.into(),
            style: Some(style),
        }
    }
}

/// Validation applied to a free-text answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRule {
    Any,
    PackageName,
}

impl InputRule {
    /// `Err` carries the message to show before asking again.
    pub fn check(self, input: &str) -> Result<(), String> {
        match self {
            Self::Any => Ok(()),
            Self::PackageName if is_valid_package_name(input) => Ok(()),
            Self::PackageName => Err(format!("Invalid package name: {input}")),
        }
    }
}

/// Port for interactive questions.
///
/// Every method returns `Ok(None)` when the user cancels the prompt.
///
/// Implemented by:
/// - `cwa_cli::prompt::TerminalPrompter` (dialoguer)
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Free-text answer. Implementations should keep asking until `rule`
    /// accepts the input, showing the rejection message in between.
    fn text(&self, message: &str, default: &str, rule: InputRule) -> CwaResult<Option<String>>;

    /// Index of the chosen entry.
    fn select(&self, message: &str, choices: &[Choice], default: usize)
    -> CwaResult<Option<usize>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cwa_adapters::LocalFilesystem` (production)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    fn exists(&self, path: &Path) -> bool;

    /// No entries, or nothing but the VCS metadata directory.
    fn is_empty_dir(&self, path: &Path) -> CwaResult<bool>;

    /// Exists and is not [`Filesystem::is_empty_dir`].
    fn dir_has_content(&self, path: &Path) -> CwaResult<bool>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CwaResult<()>;

    /// Remove every entry except the VCS metadata directory. No-op if `dir`
    /// does not exist; never recreates it.
    fn clear_dir(&self, dir: &Path) -> CwaResult<()>;

    /// Recursive copy of a file or directory, overwriting files at `dest`.
    fn copy_entry(&self, src: &Path, dest: &Path) -> CwaResult<()>;

    /// Names of the direct children of `dir`, in host listing order.
    fn list_dir(&self, dir: &Path) -> CwaResult<Vec<String>>;

    fn write_file(&self, path: &Path, content: &str) -> CwaResult<()>;
}

/// Port for the bundled template set.
///
/// Implemented by:
/// - `cwa_adapters::DirectoryTemplateStore`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore {
    /// Directory holding `variant`'s files. Fails if it is missing or empty.
    fn template_dir(&self, variant: &Variant) -> CwaResult<PathBuf>;

    /// The template's manifest with its name field replaced, serialised
    /// with two-space indentation and a trailing newline.
    fn patched_manifest(&self, template_dir: &Path, package_name: &str) -> CwaResult<String>;
}

/// Port for running an external generator.
///
/// Implemented by:
/// - `cwa_adapters::SystemProcessRunner`
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner {
    /// Run to completion with inherited stdio. `None` if the child reported
    /// no exit code (e.g. killed by a signal).
    fn run(&self, command: &ExternalCommand) -> CwaResult<Option<i32>>;
}
