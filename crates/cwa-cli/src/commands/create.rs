//! The scaffolding run: prompts, then materialise or delegate.
//!
//! Responsibility: wire adapters into the core services, pick the target
//! root, and display results. No scaffolding rules live here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use cwa_adapters::{DirectoryTemplateStore, LocalFilesystem, SystemProcessRunner, default_candidates};
use cwa_core::{
    application::{FlowInputs, ScaffoldOutcome, ScaffoldService, SelectionFlow},
    domain::{
        PackageManager, PackageManagerInfo, Selection, USER_AGENT_ENV, next_steps, resolve_target,
    },
    error::CwaError,
};

use crate::{
    cli::{CreateArgs, DebugMode},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    prompt::TerminalPrompter,
};

/// Execute a scaffolding run and return the process exit code.
///
/// Dispatch sequence:
/// 1. Collect a selection (cancellation exits 0 with a notice)
/// 2. Early-exit with a JSON dump for `--debug prompts`
/// 3. Resolve the project root and the invoking package manager
/// 4. Scaffold, or hand over to the external generator
/// 5. Print next steps
#[instrument(skip_all)]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<u8> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;

    let filesystem = LocalFilesystem::new();
    let prompter = TerminalPrompter::new(!output.supports_color());

    // 1. Prompts
    let inputs = FlowInputs {
        target_dir: args.dir,
        template: args.template,
        overwrite: args.overwrite.map(Into::into),
        default_target_dir: config.defaults.target_dir.clone(),
        cwd: cwd.clone(),
    };
    let selection = match SelectionFlow::new(&prompter, &filesystem).run(&inputs) {
        Ok(selection) => selection,
        Err(CwaError::Cancelled) => {
            info!("Cancelled by user");
            output.cancelled(&CwaError::Cancelled.to_string())?;
            return Ok(0);
        }
        Err(e) => return Err(e.into()),
    };

    // 2. Answers only
    if args.debug == Some(DebugMode::Prompts) {
        output.data(&serde_json::to_string_pretty(&selection)?)?;
        return Ok(0);
    }

    // 3. Where and with what
    let root = project_root(&cwd, &selection, args.debug, &config);
    let user_agent = std::env::var(USER_AGENT_ENV).ok();
    let manager = detect_manager(user_agent.as_deref(), &config.defaults.package_manager);
    debug!(
        root = %root.display(),
        manager = %manager.manager,
        version = %manager.version,
        "Scaffold target resolved"
    );

    // 4. Scaffold
    let templates =
        DirectoryTemplateStore::with_candidates(default_candidates(config.templates.root.clone()));
    let runner = SystemProcessRunner::new();
    let service = ScaffoldService::new(&filesystem, &templates, &runner);

    if selection.variant.external_command().is_none() {
        output.print(&format!("\nScaffolding project in {}...", root.display()))?;
    }

    match service.scaffold(&selection, &root, &manager)? {
        ScaffoldOutcome::Delegated { command, exit_code } => {
            info!(%command, exit_code, "External generator finished");
            Ok(exit_status(exit_code))
        }
        ScaffoldOutcome::Materialized { root, entries } => {
            info!(root = %root.display(), entries, "Project created");
            // 5. Next steps
            output.steps(
                "Done. Now run:",
                &next_steps(&cwd, &root, &manager.manager),
            )?;
            Ok(0)
        }
    }
}

/// `--debug full` redirects output into the scratch directory.
fn project_root(
    cwd: &Path,
    selection: &Selection,
    debug: Option<DebugMode>,
    config: &AppConfig,
) -> PathBuf {
    match debug {
        Some(DebugMode::Full) => cwd
            .join(&config.debug.output_dir)
            .join(&selection.package_name),
        Some(DebugMode::Prompts) | None => resolve_target(cwd, &selection.target_dir),
    }
}

/// Invoking manager from its user agent, else the configured fallback.
fn detect_manager(user_agent: Option<&str>, fallback: &str) -> PackageManagerInfo {
    PackageManagerInfo::from_user_agent(user_agent)
        .unwrap_or_else(|| PackageManagerInfo::fallback(PackageManager::from(fallback)))
}

/// Child exit codes outside `0..=255` (Windows) collapse to a generic failure.
fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
