//! Follow-up instructions printed once a project has been written.

use std::path::{Component, Path, PathBuf};

use crate::domain::package_manager::PackageManager;

/// Script every bundled template defines for local development.
pub const DEV_SCRIPT: &str = "dev";

/// Commands the user should run next, one per line.
///
/// Starts with a `cd` into the project unless it was created in `cwd`
/// itself; the path is quoted when it contains a space.
pub fn next_steps(cwd: &Path, root: &Path, manager: &PackageManager) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);

    if root != cwd {
        let relative = relative_path(cwd, root);
        let shown = relative.to_string_lossy();
        if shown.contains(' ') {
            lines.push(format!("cd \"{shown}\""));
        } else {
            lines.push(format!("cd {shown}"));
        }
    }

    match manager {
        // A bare `yarn` installs, and scripts run without `run`.
        PackageManager::Yarn => {
            lines.push("yarn".to_owned());
            lines.push(format!("yarn {DEV_SCRIPT}"));
        }
        PackageManager::Npm | PackageManager::Pnpm | PackageManager::Bun | PackageManager::Other(_) => {
            lines.push(format!("{manager} install"));
            lines.push(format!("{manager} run {DEV_SCRIPT}"));
        }
    }

    lines
}

/// Lexical path from `from` to `to`. Both are expected to be absolute.
fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..from.len() {
        out.push("..");
    }
    for component in &to[common..] {
        out.push(component);
    }
    out
}
