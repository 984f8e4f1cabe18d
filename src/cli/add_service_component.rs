//! `osgi add-service-component`

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::CliConfig;
use super::common::CommandContext;
use crate::instructions::MergeOutcome;
use crate::java::FsSourcePersistence;
use crate::plan::add_service_component;

#[derive(Args, Debug)]
pub struct AddServiceComponentCommand {
    /// Qualified class name or path to a .java file
    #[arg(long = "class", value_name = "CLASS")]
    class: String,
}

impl AddServiceComponentCommand {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let mut ctx = CommandContext::load(config)?;
        let sources = FsSourcePersistence::new(ctx.project.root());

        let (edit, outcome) = add_service_component(&mut ctx.project, &sources, &self.class)?;

        if outcome == MergeOutcome::AlreadyPresent {
            println!(
                "{} {} is already a Service-Component",
                "!".yellow(),
                edit.qualified_name.bright_white()
            );
            return Ok(());
        }

        ctx.save()?;
        println!("{} Added Service-Component {}", "✓".green(), edit.qualified_name.bright_white());
        Ok(())
    }
}
