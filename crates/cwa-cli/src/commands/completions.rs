//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::{BIN_NAME, Cli};

pub fn execute(shell: Shell) -> crate::error::CliResult<u8> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
    Ok(0)
}
