//! Scaffold Service - turns a [`Selection`] into files on disk.
//!
//! This service coordinates the materialisation workflow:
//! 1. Apply the overwrite policy to the target root
//! 2. Delegate to the external generator, if the variant has one
//! 3. Otherwise copy the bundled template and write the patched manifest
//!
//! No rollback is attempted on failure; a half-written directory is reported,
//! not repaired.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, ProcessRunner, TemplateStore},
    domain::{
        ExternalCommand, MANIFEST_FILE, OverwritePolicy, PackageManagerInfo, Selection,
        VariantSource, output_name,
    },
    error::CwaResult,
};

/// What happened after the selection was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// The bundled template was written to `root`.
    Materialized {
        root: PathBuf,
        /// Top-level entries written, manifest included.
        entries: usize,
    },
    /// An external generator ran; its exit code is ours.
    Delegated {
        command: ExternalCommand,
        exit_code: i32,
    },
}

/// Main scaffolding service.
pub struct ScaffoldService<'a> {
    filesystem: &'a dyn Filesystem,
    templates: &'a dyn TemplateStore,
    runner: &'a dyn ProcessRunner,
}

impl<'a> ScaffoldService<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        templates: &'a dyn TemplateStore,
        runner: &'a dyn ProcessRunner,
    ) -> Self {
        Self {
            filesystem,
            templates,
            runner,
        }
    }

    /// Apply `selection` with `root` as the resolved project directory.
    ///
    /// `manager` decides how an external generator is invoked.
    #[instrument(
        skip_all,
        fields(variant = selection.variant.id, root = %root.display())
    )]
    pub fn scaffold(
        &self,
        selection: &Selection,
        root: &Path,
        manager: &PackageManagerInfo,
    ) -> CwaResult<ScaffoldOutcome> {
        self.prepare_root(selection.overwrite, root)?;

        match selection.variant.source {
            VariantSource::External(template) => {
                let command =
                    ExternalCommand::synthesize(template, manager, &selection.target_dir)?;
                info!(%command, "Delegating to external generator");
                let exit_code = self.runner.run(&command)?.unwrap_or(0);
                debug!(exit_code, "External generator finished");
                Ok(ScaffoldOutcome::Delegated { command, exit_code })
            }
            VariantSource::Bundled => self.materialize(selection, root),
        }
    }

    fn prepare_root(&self, policy: OverwritePolicy, root: &Path) -> CwaResult<()> {
        match policy {
            OverwritePolicy::DeleteExisting => {
                info!(root = %root.display(), "Clearing existing files");
                self.filesystem.clear_dir(root)?;
                if !self.filesystem.exists(root) {
                    self.filesystem.create_dir_all(root)?;
                }
            }
            OverwritePolicy::Merge | OverwritePolicy::Abort => {
                if !self.filesystem.exists(root) {
                    self.filesystem.create_dir_all(root)?;
                }
            }
        }
        Ok(())
    }

    fn materialize(&self, selection: &Selection, root: &Path) -> CwaResult<ScaffoldOutcome> {
        let template_dir = self.templates.template_dir(selection.variant)?;
        debug!(template_dir = %template_dir.display(), "Template resolved");

        let mut entries = 0;
        for name in self.filesystem.list_dir(&template_dir)? {
            if name == MANIFEST_FILE {
                continue;
            }
            let dest = root.join(output_name(&name));
            self.filesystem.copy_entry(&template_dir.join(&name), &dest)?;
            entries += 1;
        }

        let manifest = self
            .templates
            .patched_manifest(&template_dir, &selection.package_name)?;
        self.filesystem.write_file(&root.join(MANIFEST_FILE), &manifest)?;
        entries += 1;

        info!(entries, "Template written");
        Ok(ScaffoldOutcome::Materialized {
            root: root.to_path_buf(),
            entries,
        })
    }
}
