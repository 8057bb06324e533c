//! The answers collected by the prompt flow.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::{
    catalog::{Framework, Variant},
    error::DomainError,
};

/// What to do with a target directory that already has files in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverwritePolicy {
    /// Stop without touching anything.
    #[default]
    Abort,
    /// Remove everything except VCS metadata, then scaffold.
    DeleteExisting,
    /// Scaffold on top, overwriting conflicting files.
    Merge,
}

impl OverwritePolicy {
    /// Prompt order; the first entry is the default.
    pub const CHOICES: [Self; 3] = [Self::Abort, Self::DeleteExisting, Self::Merge];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::DeleteExisting => "delete",
            Self::Merge => "ignore",
        }
    }

    /// Prompt wording.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Abort => "Cancel operation",
            Self::DeleteExisting => "Remove existing files and continue",
            Self::Merge => "Ignore files and continue",
        }
    }
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverwritePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" | "no" => Ok(Self::Abort),
            "delete" | "yes" => Ok(Self::DeleteExisting),
            "ignore" | "merge" => Ok(Self::Merge),
            other => Err(DomainError::UnknownOverwritePolicy {
                value: other.to_owned(),
            }),
        }
    }
}

/// Everything needed to scaffold, resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Basename of the resolved target directory.
    pub project_name: String,
    /// Normalised target directory as typed (relative to the working dir).
    pub target_dir: String,
    pub overwrite: OverwritePolicy,
    pub package_name: String,
    #[serde(serialize_with = "framework_id")]
    pub framework: &'static Framework,
    pub variant: &'static Variant,
}

fn framework_id<S: Serializer>(fw: &&'static Framework, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(fw.id)
}

/// Trim whitespace and trailing slashes. `None` if nothing is left.
pub fn format_target_dir(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Basename of `target_dir` once resolved against `cwd`.
///
/// Resolution is lexical: `.` and `..` are folded without touching the
/// filesystem, so `.` yields the name of `cwd` itself.
pub fn project_name_of(cwd: &Path, target_dir: &str) -> String {
    resolve_target(cwd, target_dir)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Absolute project root for `target_dir`, folded lexically like
/// [`project_name_of`]. An absolute `target_dir` replaces `cwd`.
pub fn resolve_target(cwd: &Path, target_dir: &str) -> PathBuf {
    normalize(&cwd.join(target_dir))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_target_dir_trims_and_strips_slashes() {
        assert_eq!(format_target_dir("  my-app// ").as_deref(), Some("my-app"));
        assert_eq!(format_target_dir("nested/dir/").as_deref(), Some("nested/dir"));
        assert_eq!(format_target_dir("."), Some(".".into()));
        assert_eq!(format_target_dir("   "), None);
        assert_eq!(format_target_dir("///"), None);
    }

    #[test]
    fn project_name_is_basename_of_resolved_path() {
        let cwd = Path::new("/work/projects");
        assert_eq!(project_name_of(cwd, "my-app"), "my-app");
        assert_eq!(project_name_of(cwd, "nested/My App"), "My App");
        assert_eq!(project_name_of(cwd, "."), "projects");
        assert_eq!(project_name_of(cwd, "../sibling"), "sibling");
        assert_eq!(project_name_of(cwd, "/abs/elsewhere"), "elsewhere");
    }

    #[test]
    fn resolve_target_folds_dots() {
        let cwd = Path::new("/work/projects");
        assert_eq!(resolve_target(cwd, "."), cwd);
        assert_eq!(resolve_target(cwd, "../app"), Path::new("/work/app"));
        assert_eq!(resolve_target(cwd, "/tmp/app"), Path::new("/tmp/app"));
    }

    #[test]
    fn overwrite_policy_parses_both_vocabularies() {
        assert_eq!("abort".parse::<OverwritePolicy>().unwrap(), OverwritePolicy::Abort);
        assert_eq!("yes".parse::<OverwritePolicy>().unwrap(), OverwritePolicy::DeleteExisting);
        assert_eq!("IGNORE".parse::<OverwritePolicy>().unwrap(), OverwritePolicy::Merge);
        assert!("maybe".parse::<OverwritePolicy>().is_err());
    }

    #[test]
    fn abort_is_the_default_choice() {
        assert_eq!(OverwritePolicy::CHOICES[0], OverwritePolicy::default());
    }
}
