//! Local filesystem adapter using std::fs.

use std::fs;
use std::io;
use std::path::Path;

use tracing::trace;
use walkdir::WalkDir;

use cwa_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CwaError, CwaResult},
};

/// Entry that never counts as content and survives a clear.
const VCS_DIR: &str = ".git";

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_empty_dir(&self, path: &Path) -> CwaResult<bool> {
        let names = self.list_dir(path)?;
        Ok(match names.as_slice() {
            [] => true,
            [only] => only == VCS_DIR,
            _ => false,
        })
    }

    fn dir_has_content(&self, path: &Path) -> CwaResult<bool> {
        if !path.exists() {
            return Ok(false);
        }
        if !path.is_dir() {
            return Ok(true);
        }
        Ok(!self.is_empty_dir(path)?)
    }

    fn create_dir_all(&self, path: &Path) -> CwaResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn clear_dir(&self, dir: &Path) -> CwaResult<()> {
        if !dir.exists() {
            return Ok(());
        }
        for name in self.list_dir(dir)? {
            if name == VCS_DIR {
                continue;
            }
            let path = dir.join(&name);
            trace!(path = %path.display(), "Removing");
            let result = if path.is_dir() && !path.is_symlink() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            match result {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(map_io_error(&path, e, "remove entry")),
            }
        }
        Ok(())
    }

    fn copy_entry(&self, src: &Path, dest: &Path) -> CwaResult<()> {
        if !src.is_dir() {
            return copy_file(src, dest);
        }
        for entry in WalkDir::new(src).follow_links(true) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(src).to_path_buf();
                map_io_error(&path, e.into(), "walk template")
            })?;
            let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
            let target = dest.join(relative);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)
                    .map_err(|e| map_io_error(&target, e, "create directory"))?;
            } else {
                copy_file(entry.path(), &target)?;
            }
        }
        Ok(())
    }

    fn list_dir(&self, dir: &Path) -> CwaResult<Vec<String>> {
        let entries = fs::read_dir(dir).map_err(|e| map_io_error(dir, e, "read directory"))?;
        entries
            .map(|entry| {
                entry
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .map_err(|e| map_io_error(dir, e, "read directory"))
            })
            .collect()
    }

    fn write_file(&self, path: &Path, content: &str) -> CwaResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn copy_file(src: &Path, dest: &Path) -> CwaResult<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
    }
    fs::copy(src, dest).map_err(|e| map_io_error(src, e, "copy file"))?;
    Ok(())
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CwaError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
