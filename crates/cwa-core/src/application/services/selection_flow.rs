//! Selection flow - the interactive question sequence.
//!
//! Five steps, each resolved from the command line when possible and asked
//! otherwise:
//!
//! 1. Project name (target directory)
//! 2. Overwrite policy, only when the target already has files
//! 3. Abort checkpoint
//! 4. Package name, only when the directory name is not a valid one
//! 5. Framework, then variant, unless `--template` named a known variant
//!
//! Nothing here touches the disk beyond read-only checks; the overwrite
//! policy is applied later by [`super::ScaffoldService`].

use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::{
    application::ports::{Choice, Filesystem, InputRule, Prompter},
    domain::{
        FRAMEWORKS, Framework, OverwritePolicy, Selection, Variant, find_variant,
        format_target_dir, framework_of, is_valid_package_name, project_name_of,
        to_valid_package_name,
    },
    error::{CwaError, CwaResult},
};

/// What the command line already decided.
#[derive(Debug, Clone)]
pub struct FlowInputs {
    /// Positional directory argument, raw.
    pub target_dir: Option<String>,
    /// `--template` value, raw.
    pub template: Option<String>,
    /// `--overwrite` value.
    pub overwrite: Option<OverwritePolicy>,
    /// Used when the project-name prompt is left empty.
    pub default_target_dir: String,
    /// Directory relative paths are resolved against.
    pub cwd: PathBuf,
}

/// Runs the question sequence against a [`Prompter`].
pub struct SelectionFlow<'a> {
    prompter: &'a dyn Prompter,
    filesystem: &'a dyn Filesystem,
}

impl<'a> SelectionFlow<'a> {
    pub fn new(prompter: &'a dyn Prompter, filesystem: &'a dyn Filesystem) -> Self {
        Self {
            prompter,
            filesystem,
        }
    }

    /// Resolve every answer, or fail with [`CwaError::Cancelled`].
    #[instrument(skip_all)]
    pub fn run(&self, inputs: &FlowInputs) -> CwaResult<Selection> {
        let target_dir = self.resolve_target_dir(inputs)?;
        let overwrite = self.resolve_overwrite(inputs, &target_dir)?;

        if overwrite == OverwritePolicy::Abort {
            debug!(%target_dir, "Abort chosen for non-empty target");
            return Err(CwaError::Cancelled);
        }

        let project_name = project_name_of(&inputs.cwd, &target_dir);
        let package_name = self.resolve_package_name(&project_name)?;
        let (framework, variant) = self.resolve_variant(inputs.template.as_deref())?;

        debug!(
            %target_dir,
            %package_name,
            variant = variant.id,
            overwrite = %overwrite,
            "Selection resolved"
        );

        Ok(Selection {
            project_name,
            target_dir,
            overwrite,
            package_name,
            framework,
            variant,
        })
    }

    // ── Step 1 ────────────────────────────────────────────────────────────────

    fn resolve_target_dir(&self, inputs: &FlowInputs) -> CwaResult<String> {
        if let Some(dir) = inputs.target_dir.as_deref().and_then(format_target_dir) {
            return Ok(dir);
        }

        let answer = self
            .prompter
            .text("Project name:", &inputs.default_target_dir, InputRule::Any)?
            .ok_or(CwaError::Cancelled)?;

        Ok(format_target_dir(&answer).unwrap_or_else(|| inputs.default_target_dir.clone()))
    }

    // ── Step 2 ────────────────────────────────────────────────────────────────

    fn resolve_overwrite(&self, inputs: &FlowInputs, target_dir: &str) -> CwaResult<OverwritePolicy> {
        if !self.filesystem.dir_has_content(&inputs.cwd.join(target_dir))? {
            // Nothing to clobber; proceed as if files were ignored.
            return Ok(OverwritePolicy::Merge);
        }

        if let Some(policy) = inputs.overwrite {
            return Ok(policy);
        }

        let message = if target_dir == "." {
            "Current directory is not empty. How would you like to proceed?".to_owned()
        } else {
            format!("Target directory \"{target_dir}\" is not empty. How would you like to proceed?")
        };
        let choices: Vec<Choice> = OverwritePolicy::CHOICES
            .iter()
            .map(|policy| Choice::plain(policy.label()))
            .collect();

        let index = self
            .prompter
            .select(&message, &choices, 0)?
            .ok_or(CwaError::Cancelled)?;

        Ok(OverwritePolicy::CHOICES
            .get(index)
            .copied()
            .unwrap_or_default())
    }

    // ── Step 4 ────────────────────────────────────────────────────────────────

    fn resolve_package_name(&self, project_name: &str) -> CwaResult<String> {
        if is_valid_package_name(project_name) {
            return Ok(project_name.to_owned());
        }

        let default = to_valid_package_name(project_name);
        loop {
            let answer = self
                .prompter
                .text("Package name:", &default, InputRule::PackageName)?
                .ok_or(CwaError::Cancelled)?;
            if is_valid_package_name(&answer) {
                return Ok(answer);
            }
            debug!(%answer, "Rejected package name, asking again");
        }
    }

    // ── Step 5 ────────────────────────────────────────────────────────────────

    fn resolve_variant(
        &self,
        template: Option<&str>,
    ) -> CwaResult<(&'static Framework, &'static Variant)> {
        if let Some(variant) = template.and_then(find_variant) {
            if let Some(framework) = framework_of(variant.id) {
                return Ok((framework, variant));
            }
        }

        let message = match template {
            Some(t) => format!("\"{t}\" isn't a valid template. Please choose from below:"),
            None => "Select a framework:".to_owned(),
        };
        let frameworks: Vec<Choice> = FRAMEWORKS
            .iter()
            .map(|fw| Choice::styled(fw.display, fw.style))
            .collect();
        let framework = self
            .prompter
            .select(&message, &frameworks, 0)?
            .and_then(|i| FRAMEWORKS.get(i))
            .ok_or(CwaError::Cancelled)?;

        let variants: Vec<Choice> = framework
            .variants
            .iter()
            .map(|v| Choice::styled(v.display, v.style))
            .collect();
        let variant = self
            .prompter
            .select("Select a variant:", &variants, 0)?
            .and_then(|i| framework.variants.get(i))
            .ok_or(CwaError::Cancelled)?;

        Ok((framework, variant))
    }
}
