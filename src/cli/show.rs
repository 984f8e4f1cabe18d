//! `osgi show`

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;

use super::CliConfig;
use super::common::CommandContext;
use crate::core::OsgiError;
use crate::models::{BuildPlugin, Coordinate};
use crate::project::{DependencyRegistry, ProjectModel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl ShowCommand {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let ctx = CommandContext::load(config)?;
        let coordinate = Coordinate::bundle_plugin();
        let plugin = ctx.project.get_build_plugin(&coordinate).ok_or_else(|| {
            OsgiError::ConfigurationUnavailable {
                plugin: coordinate.to_string(),
            }
        })?;

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&plugin).context("Failed to serialize bundle plugin")?;
                println!("{json}");
            }
            OutputFormat::Text => print!("{}", render_text(&ctx.project.packaging().to_string(), &plugin)),
        }
        Ok(())
    }
}

fn render_text(packaging: &str, plugin: &BuildPlugin) -> String {
    let mut out = format!("{} {}\n", "packaging:".cyan(), packaging);
    out.push_str(&format!("{} {}\n", "plugin:".cyan(), plugin.coordinate));
    out.push_str(&plugin.configuration.render_outline());
    for execution in &plugin.executions {
        out.push_str(&format!(
            "{} {} @ {} -> {}\n",
            "execution:".cyan(),
            execution.id,
            execution.phase,
            execution.goals.join(", ")
        ));
    }
    out
}
