//! Directory-backed template store.
//!
//! Bundled templates ship as sibling directories named `template-<id>`:
//!
//! ```text
//! <root>/
//! ├── template-vue-ts/
//! │   ├── package.json     ← rewritten, never copied
//! │   ├── _gitignore       ← renamed to .gitignore
//! │   └── src/
//! └── template-react/
//! ```
//!
//! The root is the first candidate directory that holds at least one
//! `template-*` entry.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::{debug, instrument, warn};

use cwa_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{MANIFEST_FILE, TEMPLATE_DIR_PREFIX, Variant},
    error::CwaResult,
};

/// Field rewritten in the template manifest.
const NAME_FIELD: &str = "name";

/// Candidate roots in lookup order: the configured root, the executable's
/// directory and its parent, then the source tree this binary was built from.
pub fn default_candidates(configured: Option<PathBuf>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = configured.into_iter().collect();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        if let Some(parent) = exe_dir.parent() {
            let parent = parent.to_path_buf();
            candidates.push(exe_dir);
            candidates.push(parent);
        } else {
            candidates.push(exe_dir);
        }
    }
    candidates.push(PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../..")));
    candidates
}

/// Serves bundled templates from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    candidates: Vec<PathBuf>,
}

impl DirectoryTemplateStore {
    /// Store rooted at exactly `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![root.into()],
        }
    }

    /// Store that picks its root from `candidates`, first match wins.
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// The directory templates are served from. Falls back to the first
    /// candidate so error messages still name a concrete path.
    pub fn root(&self) -> PathBuf {
        self.candidates
            .iter()
            .find(|dir| holds_templates(dir))
            .or_else(|| self.candidates.first())
            .cloned()
            .unwrap_or_default()
    }
}

fn holds_templates(dir: &Path) -> bool {
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };
    entries.flatten().any(|entry| {
        entry.path().is_dir()
            && entry
                .file_name()
                .to_string_lossy()
                .starts_with(TEMPLATE_DIR_PREFIX)
    })
}

impl TemplateStore for DirectoryTemplateStore {
    #[instrument(skip(self), fields(variant = variant.id))]
    fn template_dir(&self, variant: &Variant) -> CwaResult<PathBuf> {
        let missing = |path: PathBuf| ApplicationError::TemplateMissing {
            variant: variant.id.to_string(),
            path,
        };

        let root = self.root();
        let Some(dir_name) = variant.template_dir_name() else {
            return Err(missing(root).into());
        };
        let dir = root.join(dir_name);

        let has_entries = fs::read_dir(&dir)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false);
        if !has_entries {
            warn!(dir = %dir.display(), "Bundled template missing");
            return Err(missing(dir).into());
        }

        debug!(dir = %dir.display(), "Template directory found");
        Ok(dir)
    }

    fn patched_manifest(&self, template_dir: &Path, package_name: &str) -> CwaResult<String> {
        let path = template_dir.join(MANIFEST_FILE);
        let manifest_error = |reason: String| ApplicationError::ManifestError {
            path: path.clone(),
            reason,
        };

        let raw = fs::read_to_string(&path).map_err(|e| manifest_error(e.to_string()))?;
        let mut manifest: Value =
            serde_json::from_str(&raw).map_err(|e| manifest_error(e.to_string()))?;

        let Some(fields) = manifest.as_object_mut() else {
            return Err(manifest_error("top-level value is not an object".into()).into());
        };
        fields.insert(NAME_FIELD.to_string(), Value::String(package_name.to_string()));

        let mut out =
            serde_json::to_string_pretty(&manifest).map_err(|e| manifest_error(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cwa_core::{
        domain::find_variant,
        error::CwaError,
    };
    use tempfile::TempDir;

    fn write_template(root: &Path, id: &str, manifest: &str) -> PathBuf {
        let dir = root.join(format!("{TEMPLATE_DIR_PREFIX}{id}"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MANIFEST_FILE), manifest).unwrap();
        dir
    }

    #[test]
    fn finds_bundled_template_directory() {
        let temp = TempDir::new().unwrap();
        let expected = write_template(temp.path(), "vue-ts", "{}");
        let store = DirectoryTemplateStore::new(temp.path());

        let dir = store
            .template_dir(find_variant("vue-ts").unwrap())
            .unwrap();
        assert_eq!(dir, expected);
    }

    #[test]
    fn missing_template_is_reported_with_its_path() {
        let temp = TempDir::new().unwrap();
        let store = DirectoryTemplateStore::new(temp.path());

        let err = store
            .template_dir(find_variant("react").unwrap())
            .unwrap_err();
        match err {
            CwaError::Application(ApplicationError::TemplateMissing { variant, path }) => {
                assert_eq!(variant, "react");
                assert_eq!(path, temp.path().join("template-react"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_template_directory_is_missing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("template-react-ts")).unwrap();
        let store = DirectoryTemplateStore::new(temp.path());

        assert!(
            store
                .template_dir(find_variant("react-ts").unwrap())
                .is_err()
        );
    }

    #[test]
    fn first_candidate_with_templates_wins() {
        let empty = TempDir::new().unwrap();
        let bundled = TempDir::new().unwrap();
        write_template(bundled.path(), "react", "{}");

        let store = DirectoryTemplateStore::with_candidates(vec![
            empty.path().join("missing"),
            empty.path().to_path_buf(),
            bundled.path().to_path_buf(),
        ]);
        assert_eq!(store.root(), bundled.path());
    }

    #[test]
    fn manifest_name_is_replaced_and_key_order_kept() {
        let temp = TempDir::new().unwrap();
        let dir = write_template(
            temp.path(),
            "vue-ts",
            r#"{"name":"vite-vue-typescript-starter","private":true,"scripts":{"dev":"vite"}}"#,
        );
        let store = DirectoryTemplateStore::new(temp.path());

        let out = store.patched_manifest(&dir, "my-app").unwrap();
        assert_eq!(
            out,
            "{\n  \"name\": \"my-app\",\n  \"private\": true,\n  \"scripts\": {\n    \"dev\": \"vite\"\n  }\n}\n"
        );
    }

    #[test]
    fn manifest_without_name_gains_one() {
        let temp = TempDir::new().unwrap();
        let dir = write_template(temp.path(), "react", r#"{"private":true}"#);
        let out = DirectoryTemplateStore::new(temp.path())
            .patched_manifest(&dir, "@scope/app")
            .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[NAME_FIELD], "@scope/app");
    }

    #[test]
    fn malformed_manifest_is_a_manifest_error() {
        let temp = TempDir::new().unwrap();
        let dir = write_template(temp.path(), "react", "not json");
        let err = DirectoryTemplateStore::new(temp.path())
            .patched_manifest(&dir, "app")
            .unwrap_err();
        assert!(matches!(
            err,
            CwaError::Application(ApplicationError::ManifestError { .. })
        ));
    }
}
