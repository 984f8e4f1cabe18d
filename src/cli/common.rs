//! State every command loads before doing anything.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use tracing::debug;

use super::CliConfig;
use crate::config::GlobalConfig;
use crate::plan::PromptDefaults;
use crate::project::{Project, ProjectModel};

/// The loaded project plus the prompt defaults from the global configuration.
pub struct CommandContext {
    pub project: Project,
    pub defaults: PromptDefaults,
}

impl CommandContext {
    pub fn load(config: &CliConfig) -> Result<Self> {
        let global = GlobalConfig::load_with_optional(config.config_path.clone())?;
        let catalog = global.version_catalog()?;
        let project = Project::load(&config.project_dir, catalog)
            .with_context(|| format!("Failed to load project from {}", config.project_dir.display()))?;
        let defaults = PromptDefaults::for_project(&project.base_package(), &global.defaults);
        debug!("Prompt defaults: {defaults:?}");

        Ok(Self {
            project,
            defaults,
        })
    }

    /// Write the project descriptor back.
    pub fn save(&self) -> Result<()> {
        self.project.save()?;
        println!("{} Updated {}", "✓".green(), self.project.descriptor_path().display());
        Ok(())
    }
}

/// Print a path relative to the project when possible.
pub fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
