//! Child-process adapter for external generators.

use std::process::Command;

use tracing::{debug, instrument};

use cwa_core::{
    application::{ApplicationError, ports::ProcessRunner},
    domain::ExternalCommand,
    error::CwaResult,
};

/// Runs generators as blocking child processes sharing this terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, command: &ExternalCommand) -> CwaResult<Option<i32>> {
        let spawn_failed = |reason: String| ApplicationError::SpawnFailed {
            command: command.to_string(),
            reason,
        };

        // Resolves `.cmd` shims on Windows as well as plain PATH lookups.
        let program = which::which(&command.program).map_err(|e| spawn_failed(e.to_string()))?;
        debug!(program = %program.display(), "Resolved generator");

        let status = Command::new(&program)
            .args(&command.args)
            .status()
            .map_err(|e| spawn_failed(e.to_string()))?;

        debug!(?status, "Generator exited");
        Ok(status.code())
    }
}
