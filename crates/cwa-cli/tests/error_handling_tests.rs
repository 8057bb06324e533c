//! Tests for error reporting and exit codes.

use std::fs;
use std::path::Path;

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;

fn cwa(cwd: &Path, templates: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("create-web-app");
    cmd.current_dir(cwd)
        .env("CWA_TEMPLATES__ROOT", templates)
        .env("NO_COLOR", "1")
        .env_remove("npm_config_user_agent")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_bundled_template_is_internal_error() {
    let work = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    // Only react is bundled in this root.
    let react = templates.path().join("template-react");
    fs::create_dir_all(&react).unwrap();
    fs::write(react.join("package.json"), "{\"name\":\"x\"}").unwrap();

    cwa(work.path(), templates.path())
        .args(["my-app", "-t", "vue-ts"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("vue-ts"))
        .stderr(predicate::str::contains("missing or empty"));
}

#[test]
fn test_unknown_overwrite_value_is_usage_error() {
    let work = TempDir::new().unwrap();

    cwa(work.path(), work.path())
        .args(["my-app", "--overwrite", "sometimes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--overwrite"));
}

#[test]
fn test_missing_config_file_is_configuration_error() {
    let work = TempDir::new().unwrap();

    cwa(work.path(), work.path())
        .args(["-c", "absent.toml", "my-app", "-t", "react"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(!work.path().join("my-app").exists());
}

#[test]
fn test_prompt_without_terminal_fails_cleanly() {
    let work = TempDir::new().unwrap();

    // "Bad Name" is not a valid package name, so a prompt is required.
    cwa(work.path(), work.path())
        .args(["Bad Name", "-t", "react"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("prompt failed"));
}

#[test]
fn test_failure_is_reported_once() {
    let work = TempDir::new().unwrap();

    let output = cwa(work.path(), work.path())
        .args(["Bad Name", "-t", "react"])
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr.matches("prompt failed").count(), 1, "{stderr}");
    assert!(!stderr.contains("WARN"), "{stderr}");
}
