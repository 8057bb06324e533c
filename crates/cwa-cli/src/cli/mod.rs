//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No scaffolding logic lives here.

use clap::{ArgAction, Args, Parser, ValueEnum};
use clap_complete::Shell;
use owo_colors::{OwoColorize, Stream};

use cwa_core::domain::{FRAMEWORKS, OverwritePolicy};

use crate::output::paint;

pub mod global;
pub use global::GlobalArgs;

/// Name the binary is invoked as.
pub const BIN_NAME: &str = "create-web-app";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = BIN_NAME,
    bin_name = BIN_NAME,
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a new Vite project in JavaScript or TypeScript.",
    long_about = "Create a new Vite project in JavaScript or TypeScript.\n\
                  With no arguments, starts the CLI in interactive mode.",
    after_help = template_help(),
    disable_version_flag = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub create: CreateArgs,

    /// Print a shell completion script and exit.
    ///
    /// Only conflicts with the create arguments; global flags may come from
    /// the environment.
    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_enum,
        conflicts_with_all = ["dir", "template", "overwrite", "debug"]
    )]
    pub completions: Option<Shell>,

    #[arg(
        short = 'v',
        long = "version",
        help = "Print version",
        action = ArgAction::Version,
    )]
    version: Option<bool>,
}

// ── create ────────────────────────────────────────────────────────────────────

/// What to create and where.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Target directory. Prompted for when omitted.
    #[arg(value_name = "DIR")]
    pub dir: Option<String>,

    /// Variant to use, skipping the framework and variant prompts.
    #[arg(short = 't', long = "template", value_name = "NAME")]
    pub template: Option<String>,

    /// What to do when the target directory already has files.
    #[arg(long = "overwrite", value_name = "POLICY", value_enum)]
    pub overwrite: Option<OverwriteArg>,

    #[arg(
        long = "debug",
        value_name = "MODE",
        value_enum,
        help = "Print the answers and stop (prompts), or write into a scratch directory (full)"
    )]
    pub debug: Option<DebugMode>,
}

/// `--overwrite` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverwriteArg {
    /// Stop without touching anything.
    #[value(alias = "no")]
    Abort,
    /// Remove existing files first.
    #[value(alias = "yes")]
    Delete,
    /// Write over existing files and keep the rest.
    #[value(alias = "merge")]
    Ignore,
}

impl From<OverwriteArg> for OverwritePolicy {
    fn from(arg: OverwriteArg) -> Self {
        match arg {
            OverwriteArg::Abort => Self::Abort,
            OverwriteArg::Delete => Self::DeleteExisting,
            OverwriteArg::Ignore => Self::Merge,
        }
    }
}

/// `--debug` modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DebugMode {
    /// Dump the resolved answers as JSON and exit before writing anything.
    Prompts,
    /// Run everything, but write under the scratch output directory.
    Full,
}

/// "Available templates" block appended to `--help`.
fn template_help() -> String {
    let mut out = String::from("Available templates:\n");
    for framework in FRAMEWORKS {
        for variant in framework.variants {
            let line = format!("{:<28}{}", variant.id, framework.id);
            let style = variant.style;
            out.push_str("  ");
            out.push_str(
                &line
                    .if_supports_color(Stream::Stdout, |text| paint(text, style))
                    .to_string(),
            );
            out.push('\n');
        }
    }
    out
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_positional_and_template() {
        let cli = Cli::parse_from([BIN_NAME, "my-app", "-t", "vue-ts"]);
        assert_eq!(cli.create.dir.as_deref(), Some("my-app"));
        assert_eq!(cli.create.template.as_deref(), Some("vue-ts"));
        assert_eq!(cli.create.debug, None);
    }

    #[test]
    fn no_arguments_is_interactive() {
        let cli = Cli::parse_from([BIN_NAME]);
        assert!(cli.create.dir.is_none());
        assert!(cli.create.template.is_none());
    }

    #[test]
    fn overwrite_accepts_aliases() {
        let cli = Cli::parse_from([BIN_NAME, "--overwrite", "yes"]);
        assert_eq!(
            cli.create.overwrite.map(OverwritePolicy::from),
            Some(OverwritePolicy::DeleteExisting)
        );
        let cli = Cli::parse_from([BIN_NAME, "--overwrite", "ignore"]);
        assert_eq!(
            cli.create.overwrite.map(OverwritePolicy::from),
            Some(OverwritePolicy::Merge)
        );
    }

    #[test]
    fn debug_modes_parse() {
        let cli = Cli::parse_from([BIN_NAME, "--debug", "prompts"]);
        assert_eq!(cli.create.debug, Some(DebugMode::Prompts));
        assert!(Cli::try_parse_from([BIN_NAME, "--debug", "everything"]).is_err());
    }

    #[test]
    fn short_v_is_version() {
        let err = Cli::try_parse_from([BIN_NAME, "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from([BIN_NAME, "--quiet", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn help_lists_every_template() {
        let help = template_help();
        for id in cwa_core::domain::template_ids() {
            assert!(help.contains(id), "missing {id}");
        }
    }
}
