//! `osgi setup`

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::{CommandContext, display_relative};
use super::{CliConfig, flag_pair};
use crate::java::FsSourcePersistence;
use crate::plan::{ActivatorOptions, Session, SetupOptions, setup};
use crate::templating::TeraSourceRenderer;

#[derive(Args, Debug, Default)]
pub struct SetupCommand {
    /// Web-ContextPath for web projects
    #[arg(long, value_name = "PATH")]
    context_path: Option<String>,

    /// Add javax.servlet and javax.servlet.http to Import-Package
    #[arg(long)]
    servlet_imports: bool,

    /// Create an activator class
    #[arg(long, conflicts_with = "no_activator")]
    activator: bool,

    /// Do not create an activator class
    #[arg(long)]
    no_activator: bool,

    /// Use a Felix DependencyManager activator
    #[arg(long)]
    dm: bool,

    /// Add the OSGi core libraries when no activator is created
    #[arg(long)]
    core_libs: bool,

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

    /// Do not wire the LogService into DM classes
    #[arg(long)]
    no_log_service: bool,
}

impl SetupCommand {
    fn options(&self) -> SetupOptions {
        SetupOptions {
            context_path: self.context_path.clone(),
            servlet_imports: self.servlet_imports.then_some(true),
            create_activator: flag_pair(self.activator, self.no_activator),
            core_libraries: self.core_libs.then_some(true),
            activator: ActivatorOptions {
                package: self.activator_package.clone(),
                class_name: self.activator_class.clone(),
                use_dm: self.dm.then_some(true),
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

        let plan = {
            let mut session = Session::new(prompter.as_mut(), &renderer, &mut sources);
            setup(&ctx.project, &mut session, &self.options(), &ctx.defaults)?
        };

        for path in &plan.generated_sources {
            println!("{} Created {}", "✓".green(), display_relative(ctx.project.root(), path));
        }
        for dependency in &plan.extra_dependencies {
            println!("{} Added dependency {}", "✓".green(), dependency.to_string().cyan());
        }

        plan.apply(&mut ctx.project);
        ctx.save()?;
        println!("{} Packaging type changed to {}", "✓".green(), "bundle".bright_white());
        Ok(())
    }
}
