//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CWA_<SECTION>__<KEY>`, e.g.
//!    `CWA_DEFAULTS__PACKAGE_MANAGER=pnpm`
//! 3. Config file: `--config FILE`, else the platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "CWA";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallbacks for answers the user did not give.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Where bundled templates live.
    pub templates: TemplateConfig,
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Offered at the project-name prompt.
    pub target_dir: String,
    /// Used when the invoking package manager cannot be detected.
    pub package_manager: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            target_dir: "web-app-project".into(),
            package_manager: "npm".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Overrides template root discovery.
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Scratch directory for `--debug full`, relative to the working directory.
    pub output_dir: PathBuf,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(".output"),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path passed via `--config` and must exist; the
    /// default location is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).required(required))
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.create-web-app.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "create-web-app", "create-web-app")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".create-web-app.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use tempfile::TempDir;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    #[test]
    fn defaults_match_interactive_fallbacks() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.target_dir, "web-app-project");
        assert_eq!(cfg.defaults.package_manager, "npm");
        assert_eq!(cfg.debug.output_dir, PathBuf::from(".output"));
        assert!(!cfg.output.no_color);
        assert!(cfg.templates.root.is_none());
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&temp.path().join("absent.toml"), false, no_env()).unwrap();
        assert_eq!(cfg.defaults.target_dir, "web-app-project");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(AppConfig::load_from(&temp.path().join("absent.toml"), true, no_env()).is_err());
    }

    #[test]
    fn file_overrides_defaults_partially() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\npackage_manager = \"pnpm\"\n\n[templates]\nroot = \"/opt/templates\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert_eq!(cfg.defaults.package_manager, "pnpm");
        assert_eq!(cfg.defaults.target_dir, "web-app-project");
        assert_eq!(cfg.templates.root, Some(PathBuf::from("/opt/templates")));
    }

    #[test]
    fn environment_beats_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[output]\nno_color = false\n").unwrap();

        let env = Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::from([
            ("CWA_OUTPUT__NO_COLOR".to_string(), "true".to_string()),
            ("CWA_DEFAULTS__TARGET_DIR".to_string(), "site".to_string()),
        ])));
        let cfg = AppConfig::load_from(&path, true, env).unwrap();
        assert!(cfg.output.no_color);
        assert_eq!(cfg.defaults.target_dir, "site");
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
