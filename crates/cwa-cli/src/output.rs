//! Output management and formatting.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use cwa_core::domain::StyleTag;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Render `text` in a catalog colour.
pub fn paint(text: &str, style: StyleTag) -> String {
    match style {
        StyleTag::Blue => text.blue().to_string(),
        StyleTag::Cyan => text.cyan().to_string(),
        StyleTag::Green => text.green().to_string(),
        StyleTag::GreenBright => text.bright_green().to_string(),
        StyleTag::Yellow => text.yellow().to_string(),
        StyleTag::Reset => text.to_owned(),
    }
}

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Machine-readable payload. Never suppressed.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    /// Cancellation notice: `✖ <msg>`. Printed even in quiet mode.
    pub fn cancelled(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2716} {msg}") // ✖
        } else {
            format!("{} {msg}", "\u{2716}".red())
        };
        self.term.write_line(&line)
    }

    /// Bold header line followed by indented commands.
    pub fn steps(&self, header: &str, lines: &[String]) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let header = if self.no_color {
            header.to_owned()
        } else {
            header.bold().to_string()
        };
        self.term.write_line("")?;
        self.term.write_line(&header)?;
        self.term.write_line("")?;
        for line in lines {
            self.term.write_line(&format!("  {line}"))?;
        }
        self.term.write_line("")
    }

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
