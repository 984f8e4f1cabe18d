//! Command-line interface for the OSGi bundle tooling.
//!
//! # Available Commands
//!
//! - `setup` - turn the project into a bundle: packaging, bundle plugin,
//!   manifest instructions, optional activator and OSGi libraries
//! - `add-service-component` - register a class as `Service-Component`
//! - `install-felix-dm` - add Felix DependencyManager and optionally a DM activator
//! - `show` - print the bundle plugin configuration
//!
//! # Basic Workflow
//!
//! ```bash
//! osgi setup --context-path /shop
//! osgi add-service-component --class com.acme.shop.OrderService
//! osgi show
//! ```
//!
//! Every command works on the `osgi-project.toml` in the current directory
//! (or `--project <dir>`). Questions are asked on the terminal; with `--yes`
//! or when stdin is not a terminal every question takes its default.

mod add_service_component;
mod common;
mod install_felix_dm;
mod setup;
mod show;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::prompt::{DefaultsPrompter, Prompter, TerminalPrompter};

pub use common::CommandContext;

/// Settings shared by every command, derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter. `None` falls back to `RUST_LOG`, then to `warn`.
    pub log_level: Option<String>,

    /// Global configuration file; `None` uses the default location.
    pub config_path: Option<PathBuf>,

    /// Project directory holding `osgi-project.toml`.
    pub project_dir: PathBuf,

    /// Take the default for every question.
    pub assume_yes: bool,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            ..Self::default()
        }
    }

    /// Install the tracing subscriber. Output goes to stderr.
    ///
    /// Safe to call more than once; only the first call installs anything.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// The prompter commands should ask their questions with.
    pub fn prompter(&self) -> Box<dyn Prompter> {
        if self.assume_yes || !std::io::stdin().is_terminal() {
            tracing::debug!("Not interactive, every question takes its default");
            Box::new(DefaultsPrompter)
        } else {
            Box::new(TerminalPrompter::stdio())
        }
    }
}

#[derive(Parser)]
#[command(
    name = "osgi",
    about = "Package a build project as an OSGi bundle",
    version,
    long_about = "Adds the bundle plugin, manifest instructions, activators and OSGi libraries to a project described by osgi-project.toml."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the global configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Project directory containing osgi-project.toml
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    project: PathBuf,

    /// Accept the default answer for every question
    #[arg(short, long, global = true)]
    yes: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the project up as an OSGi bundle
    Setup(setup::SetupCommand),

    /// Register a class as a Service-Component of the bundle
    AddServiceComponent(add_service_component::AddServiceComponentCommand),

    /// Add Felix DependencyManager and optionally a DM activator
    InstallFelixDm(install_felix_dm::InstallFelixDmCommand),

    /// Show the bundle plugin configuration
    Show(show::ShowCommand),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config)
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
            project_dir: self.project.clone(),
            assume_yes: self.yes,
        }
    }

    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Setup(cmd) => cmd.execute(&config),
            Commands::AddServiceComponent(cmd) => cmd.execute(&config),
            Commands::InstallFelixDm(cmd) => cmd.execute(&config),
            Commands::Show(cmd) => cmd.execute(&config),
        }
    }
}

/// `--flag` / `--no-flag` pair to a pre-answer.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
