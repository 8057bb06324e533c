//! End-to-end runs of the core services over the real adapters.

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;

use cwa_adapters::{DirectoryTemplateStore, LocalFilesystem, SystemProcessRunner};
use cwa_core::domain::{PackageManager, resolve_target};
use cwa_core::prelude::*;

/// Replays canned answers; `None` simulates the user cancelling.
#[derive(Default)]
struct ScriptedPrompter {
    texts: RefCell<VecDeque<Option<String>>>,
    selects: RefCell<VecDeque<Option<usize>>>,
}

impl ScriptedPrompter {
    fn answer_text(self, answer: Option<&str>) -> Self {
        self.texts.borrow_mut().push_back(answer.map(str::to_owned));
        self
    }

    fn answer_select(self, answer: Option<usize>) -> Self {
        self.selects.borrow_mut().push_back(answer);
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, message: &str, _: &str, _: InputRule) -> CwaResult<Option<String>> {
        Ok(self
            .texts
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected text prompt: {message}")))
    }

    fn select(&self, message: &str, _: &[Choice], _: usize) -> CwaResult<Option<usize>> {
        Ok(self
            .selects
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected select prompt: {message}")))
    }
}

fn template_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn inputs(cwd: &Path, dir: Option<&str>, template: Option<&str>) -> FlowInputs {
    FlowInputs {
        target_dir: dir.map(str::to_owned),
        template: template.map(str::to_owned),
        overwrite: None,
        default_target_dir: "web-app-project".into(),
        cwd: cwd.to_path_buf(),
    }
}

fn files_under(dir: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

#[test]
fn prompted_run_materialises_bundled_variant() {
    let work = TempDir::new().unwrap();
    let filesystem = LocalFilesystem::new();
    let templates = DirectoryTemplateStore::new(template_root());
    let runner = SystemProcessRunner::new();

    // Blank name takes the default; then React, then its TypeScript variant.
    let prompter = ScriptedPrompter::default()
        .answer_text(Some(""))
        .answer_select(Some(1))
        .answer_select(Some(0));
    let selection = SelectionFlow::new(&prompter, &filesystem)
        .run(&inputs(work.path(), None, None))
        .unwrap();
    assert_eq!(selection.target_dir, "web-app-project");
    assert_eq!(selection.variant.id, "react-ts");

    let root = resolve_target(work.path(), &selection.target_dir);
    let outcome = ScaffoldService::new(&filesystem, &templates, &runner)
        .scaffold(
            &selection,
            &root,
            &PackageManagerInfo::fallback(PackageManager::Npm),
        )
        .unwrap();
    assert!(matches!(outcome, ScaffoldOutcome::Materialized { .. }));

    let written = files_under(&root);
    assert!(written.contains(Path::new(".gitignore")));
    assert!(!written.contains(Path::new("_gitignore")));
    assert!(written.contains(Path::new("src/main.tsx")));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "web-app-project");
}

#[test]
fn invalid_directory_name_asks_for_package_name() {
    let work = TempDir::new().unwrap();
    let filesystem = LocalFilesystem::new();

    let prompter = ScriptedPrompter::default().answer_text(Some("my-shop"));
    let selection = SelectionFlow::new(&prompter, &filesystem)
        .run(&inputs(work.path(), Some("My Shop"), Some("vue-ts")))
        .unwrap();

    assert_eq!(selection.project_name, "My Shop");
    assert_eq!(selection.package_name, "my-shop");
}

#[test]
fn abort_on_non_empty_target_writes_nothing() {
    let work = TempDir::new().unwrap();
    let target = work.path().join("taken");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("README.md"), "existing").unwrap();
    let filesystem = LocalFilesystem::new();

    // Abort is the first overwrite choice.
    let prompter = ScriptedPrompter::default().answer_select(Some(0));
    let err = SelectionFlow::new(&prompter, &filesystem)
        .run(&inputs(work.path(), Some("taken"), Some("vue-ts")))
        .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(files_under(&target), BTreeSet::from([PathBuf::from("README.md")]));
}

#[test]
fn cancelled_variant_prompt_is_a_cancellation() {
    let work = TempDir::new().unwrap();
    let filesystem = LocalFilesystem::new();

    let prompter = ScriptedPrompter::default()
        .answer_select(Some(0))
        .answer_select(None);
    let err = SelectionFlow::new(&prompter, &filesystem)
        .run(&inputs(work.path(), Some("app"), None))
        .unwrap_err();

    assert!(matches!(err, CwaError::Cancelled));
    assert!(!work.path().join("app").exists());
}
