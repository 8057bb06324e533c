//! External generator commands.
//!
//! Catalog entries store their command in npm form, e.g.
//! `npm create vue@latest TARGET_DIR`. Before running it we rewrite the
//! invocation for whichever package manager launched us, then split it into a
//! program and arguments and substitute the target directory.

use std::fmt;

use crate::domain::{
    error::DomainError,
    package_manager::{PackageManager, PackageManagerInfo},
};

/// Token standing for the target directory inside a command template.
pub const TARGET_DIR_PLACEHOLDER: &str = "TARGET_DIR";

const CREATE_PREFIX: &str = "npm create ";
const EXEC_PREFIX: &str = "npm exec";
const LATEST_TAG: &str = "@latest";

type Rule = fn(&str, &PackageManagerInfo) -> String;

/// Rewrites applied in order. Each one touches a different part of the
/// template so the order only matters for readability.
const RULES: [Rule; 3] = [rewrite_create, rewrite_latest_tag, rewrite_exec];

/// A program plus its arguments, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalCommand {
    /// Build the manager-specific command for `template`.
    ///
    /// The placeholder is substituted per argument after splitting, so a
    /// `target_dir` containing spaces stays a single argument.
    pub fn synthesize(
        template: &str,
        manager: &PackageManagerInfo,
        target_dir: &str,
    ) -> Result<Self, DomainError> {
        let rewritten = RULES
            .iter()
            .fold(template.to_owned(), |acc, rule| rule(&acc, manager));

        let mut tokens = rewritten.split_whitespace();
        let program = tokens
            .next()
            .ok_or_else(|| DomainError::EmptyCommand {
                template: template.to_owned(),
            })?
            .to_owned();
        let args = tokens
            .map(|arg| arg.replace(TARGET_DIR_PLACEHOLDER, target_dir))
            .collect();

        Ok(Self { program, args })
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// `npm create <pkg>` → the manager's own `create`.
///
/// `bun create` resolves its own template set, so bun runs the
/// `create-<pkg>` package directly instead.
fn rewrite_create(command: &str, info: &PackageManagerInfo) -> String {
    let Some(rest) = command.strip_prefix(CREATE_PREFIX) else {
        return command.to_owned();
    };
    let prefix = match &info.manager {
        PackageManager::Bun => "bun x create-".to_owned(),
        PackageManager::Npm | PackageManager::Pnpm | PackageManager::Yarn => {
            format!("{} create ", info.manager)
        }
        PackageManager::Other(name) => format!("{name} create "),
    };
    format!("{prefix}{rest}")
}

/// Yarn 1.x rejects `@version` in `yarn create`.
fn rewrite_latest_tag(command: &str, info: &PackageManagerInfo) -> String {
    if info.is_yarn_legacy() {
        command.replacen(LATEST_TAG, "", 1)
    } else {
        command.to_owned()
    }
}

/// `npm exec` → `pnpm dlx` / `yarn dlx` / `bun x`; anything else keeps
/// `npm exec`, including Yarn 1.x.
fn rewrite_exec(command: &str, info: &PackageManagerInfo) -> String {
    let Some(rest) = command.strip_prefix(EXEC_PREFIX) else {
        return command.to_owned();
    };
    let prefix = match &info.manager {
        PackageManager::Pnpm => "pnpm dlx",
        PackageManager::Yarn if !info.is_yarn_legacy() => "yarn dlx",
        PackageManager::Bun => "bun x",
        PackageManager::Npm | PackageManager::Yarn | PackageManager::Other(_) => EXEC_PREFIX,
    };
    format!("{prefix}{rest}")
}
