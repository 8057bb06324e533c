//! Package-manager detection from the invoking client's user agent.
//!
//! npm-compatible clients export `npm_config_user_agent` when they run a
//! package binary, e.g. `pnpm/8.6.0 npm/? node/v18.0.0 darwin arm64`. Only the
//! first `<name>/<version>` token is interesting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable set by npm, pnpm, yarn and bun for child processes.
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// A JavaScript package manager.
///
/// The command rewrites in [`crate::domain::command`] match on this enum, so a
/// new manager only needs a variant here and the compiler lists what is left.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
    /// Any other npm-compatible client, kept by name.
    Other(String),
}

impl PackageManager {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PackageManager {
    fn from(name: &str) -> Self {
        match name {
            "npm" => Self::Npm,
            "pnpm" => Self::Pnpm,
            "yarn" => Self::Yarn,
            "bun" => Self::Bun,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Detected manager plus the version it reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManagerInfo {
    pub manager: PackageManager,
    pub version: String,
}

impl PackageManagerInfo {
    /// Info for a manager whose version is unknown (configured fallback).
    pub fn fallback(manager: PackageManager) -> Self {
        Self {
            manager,
            version: String::new(),
        }
    }

    /// Parse a user-agent string.
    ///
    /// Splits on the first space, then on the first `/`. Returns `None` when
    /// the input is absent or either token is missing.
    pub fn from_user_agent(user_agent: Option<&str>) -> Option<Self> {
        let spec = user_agent?.split(' ').next()?;
        let (name, version) = spec.split_once('/')?;
        if name.is_empty() || version.is_empty() {
            return None;
        }
        Some(Self {
            manager: PackageManager::from(name),
            version: version.to_owned(),
        })
    }

    /// Yarn classic (1.x) predates `yarn dlx` and `@version` in `yarn create`.
    pub fn is_yarn_legacy(&self) -> bool {
        self.manager == PackageManager::Yarn && self.version.starts_with("1.")
    }
}
