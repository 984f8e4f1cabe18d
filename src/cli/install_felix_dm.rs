//! `osgi install-felix-dm`

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::{CommandContext, display_relative};
use super::{CliConfig, flag_pair};
use crate::java::FsSourcePersistence;
use crate::plan::{ActivatorOptions, FelixDmOptions, Session, install_felix_dm};
use crate::templating::TeraSourceRenderer;

#[derive(Args, Debug, Default)]
pub struct InstallFelixDmCommand {
    /// Create a DependencyManager activator
    #[arg(long, conflicts_with = "no_activator")]
    activator: bool,

    /// Only add the dependency
    #[arg(long)]
    no_activator: bool,

    /// Package of the activator class
    #[arg(long, value_name = "PACKAGE")]
    activator_package: Option<String>,

    /// Name of the activator class
    #[arg(long, value_name = "CLASS")]
    activator_class: Option<String>,

    /// Package of the DM component
    #[arg(long, value_name = "PACKAGE")]
    dm_package: Option<String>,

    /// Name of the DM component class
    #[arg(long, value_name = "CLASS")]
    dm_class: Option<String>,

    /// Do not wire the LogService into the generated classes
    #[arg(long)]
    no_log_service: bool,
}

impl InstallFelixDmCommand {
    fn options(&self) -> FelixDmOptions {
        FelixDmOptions {
            create_activator: flag_pair(self.activator, self.no_activator),
            activator: ActivatorOptions {
                package: self.activator_package.clone(),
                class_name: self.activator_class.clone(),
                use_dm: Some(true),
                use_log_service: self.no_log_service.then_some(false),
                dm_component_package: self.dm_package.clone(),
                dm_component_class: self.dm_class.clone(),
            },
        }
    }

    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let mut ctx = CommandContext::load(config)?;
        let renderer = TeraSourceRenderer::new()?;
        let mut sources = FsSourcePersistence::new(ctx.project.root());
        let mut prompter = config.prompter();

        let outcome = {
            let mut session = Session::new(prompter.as_mut(), &renderer, &mut sources);
            install_felix_dm(&mut ctx.project, &mut session, &self.options(), &ctx.defaults)?
        };

        for path in &outcome.generated_sources {
            println!("{} Created {}", "✓".green(), display_relative(ctx.project.root(), path));
        }
        if let Some(activator) = &outcome.activator {
            println!("{} Bundle-Activator set to {}", "✓".green(), activator.bright_white());
        }
        if outcome.added_dependencies.is_empty() && outcome.activator.is_none() {
            println!("{} Felix DependencyManager is already installed", "!".yellow());
            return Ok(());
        }
        for dependency in &outcome.added_dependencies {
            println!("{} Added dependency {}", "✓".green(), dependency.to_string().cyan());
        }

        ctx.save()
    }
}
