//! Line-based prompts on a terminal.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

use super::Prompter;

/// Prompts written to `output`, answers read line by line from `input`.
///
/// An empty line selects the default. End of input also selects the default
/// so a closed stdin can never loop forever.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    /// `None` on end of input.
    fn read_answer(&mut self) -> Result<Option<String>> {
        self.output.flush().context("Failed to flush prompt")?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read answer")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            write!(self.output, "{} {} ", prompt.green(), hint)?;
            let Some(answer) = self.read_answer()? else {
                writeln!(self.output)?;
                return Ok(default);
            };
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "{}", "Please answer yes or no.".yellow())?,
            }
        }
    }

    fn ask_text(&mut self, prompt: &str, default: &str) -> Result<String> {
        write!(self.output, "{} [{}] ", prompt.green(), default.cyan())?;
        match self.read_answer()? {
            Some(answer) if !answer.is_empty() => Ok(answer),
            _ => Ok(default.to_string()),
        }
    }

    fn ask_choice(&mut self, prompt: &str, options: &[String], default: usize) -> Result<String> {
        if options.is_empty() {
            anyhow::bail!("No options to choose from for: {prompt}");
        }
        let default = default.min(options.len() - 1);

        writeln!(self.output, "{}", prompt.green())?;
        for (i, option) in options.iter().enumerate() {
            let marker = if i == default { "*" } else { " " };
            writeln!(self.output, " {marker} {}) {option}", i + 1)?;
        }

        loop {
            write!(self.output, "Choice [{}] ", default + 1)?;
            let Some(answer) = self.read_answer()? else {
                writeln!(self.output)?;
                return Ok(options[default].clone());
            };
            if answer.is_empty() {
                return Ok(options[default].clone());
            }
            if let Ok(n) = answer.parse::<usize>()
                && (1..=options.len()).contains(&n)
            {
                return Ok(options[n - 1].clone());
            }
            if let Some(option) = options.iter().find(|o| **o == answer) {
                return Ok(option.clone());
            }
            writeln!(self.output, "{}", format!("Enter a number between 1 and {}.", options.len()).yellow())?;
        }
    }
}
