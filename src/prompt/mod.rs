//! Asking the operator questions.
//!
//! The packaging code decides *what* to ask and what the default is; a
//! [`Prompter`] decides *how*. [`TerminalPrompter`] talks to a terminal,
//! [`DefaultsPrompter`] answers every question with its default for
//! non-interactive runs (`--yes`, CI, piped stdin).

mod terminal;

pub use terminal::TerminalPrompter;

use anyhow::Result;
use tracing::info;

pub trait Prompter {
    fn ask_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool>;

    fn ask_text(&mut self, prompt: &str, default: &str) -> Result<String>;

    /// Pick one of `options`; `default` is an index into `options`.
    fn ask_choice(&mut self, prompt: &str, options: &[String], default: usize) -> Result<String>;
}

/// Answers every question with its default.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn ask_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool> {
        info!("{prompt} -> {}", if default { "yes" } else { "no" });
        Ok(default)
    }

    fn ask_text(&mut self, prompt: &str, default: &str) -> Result<String> {
        info!("{prompt} -> {default}");
        Ok(default.to_string())
    }

    fn ask_choice(&mut self, prompt: &str, options: &[String], default: usize) -> Result<String> {
        let choice = options
            .get(default)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No option #{default} for: {prompt}"))?;
        info!("{prompt} -> {choice}");
        Ok(choice)
    }
}
