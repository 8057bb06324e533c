//! Terminal implementation of the [`Prompter`] port.
//!
//! Built on `dialoguer` when the `interactive` feature is enabled. Without
//! it every question fails, so only fully specified invocations work.

use cwa_core::{
    application::{ApplicationError, Choice, InputRule, Prompter},
    error::CwaResult,
};

#[cfg(feature = "interactive")]
pub use interactive::TerminalPrompter;

#[cfg(not(feature = "interactive"))]
pub use headless::TerminalPrompter;

fn prompt_failed(reason: impl ToString) -> cwa_core::error::CwaError {
    ApplicationError::PromptFailed {
        reason: reason.to_string(),
    }
    .into()
}

/// Choice label as shown in the list.
fn render_label(choice: &Choice, no_color: bool) -> String {
    match choice.style {
        Some(style) if !no_color => crate::output::paint(&choice.label, style),
        _ => choice.label.clone(),
    }
}

#[cfg(feature = "interactive")]
mod interactive {
    use std::io;

    use dialoguer::{Input, Select, theme::ColorfulTheme};
    use tracing::debug;

    use super::*;

    pub struct TerminalPrompter {
        theme: ColorfulTheme,
        no_color: bool,
    }

    impl TerminalPrompter {
        pub fn new(no_color: bool) -> Self {
            if no_color {
                console::set_colors_enabled(false);
                console::set_colors_enabled_stderr(false);
            }
            Self {
                theme: ColorfulTheme::default(),
                no_color,
            }
        }
    }

    /// Ctrl-C surfaces as an interrupted read; treat it as a cancel.
    fn cancel_or_fail<T>(err: dialoguer::Error) -> CwaResult<Option<T>> {
        match err {
            dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
                debug!("Prompt interrupted");
                Ok(None)
            }
            other => Err(prompt_failed(other)),
        }
    }

    impl Prompter for TerminalPrompter {
        fn text(
            &self,
            message: &str,
            default: &str,
            rule: InputRule,
        ) -> CwaResult<Option<String>> {
            let answer = Input::<String>::with_theme(&self.theme)
                .with_prompt(message)
                .default(default.to_owned())
                .validate_with(move |input: &String| rule.check(input))
                .interact_text();
            match answer {
                Ok(text) => Ok(Some(text)),
                Err(e) => cancel_or_fail(e),
            }
        }

        fn select(
            &self,
            message: &str,
            choices: &[Choice],
            default: usize,
        ) -> CwaResult<Option<usize>> {
            let labels: Vec<String> = choices
                .iter()
                .map(|choice| render_label(choice, self.no_color))
                .collect();
            Select::with_theme(&self.theme)
                .with_prompt(message)
                .items(&labels)
                .default(default)
                .interact_opt()
                .or_else(cancel_or_fail)
        }
    }
}

#[cfg(not(feature = "interactive"))]
mod headless {
    use super::*;

    const REASON: &str = "this build has no interactive prompts; \
                          pass a directory and --template instead";

    pub struct TerminalPrompter;

    impl TerminalPrompter {
        pub fn new(_no_color: bool) -> Self {
            Self
        }
    }

    impl Prompter for TerminalPrompter {
        fn text(&self, message: &str, _: &str, _: InputRule) -> CwaResult<Option<String>> {
            tracing::debug!(prompt = message, "Prompt requested without a terminal UI");
            Err(prompt_failed(REASON))
        }

        fn select(&self, message: &str, choices: &[Choice], _: usize) -> CwaResult<Option<usize>> {
            tracing::debug!(
                prompt = message,
                choices = ?choices.iter().map(|c| render_label(c, true)).collect::<Vec<_>>(),
                "Prompt requested without a terminal UI"
            );
            Err(prompt_failed(REASON))
        }
    }
}
