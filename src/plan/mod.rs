//! Packaging plans and the commands that build them.
//!
//! A `setup` run never touches the project while it asks questions. It
//! collects everything into a [`PackagingPlan`] which is applied in one go
//! once every question was answered and every generated class was saved:
//!
//! ```text
//! detect capabilities -> type instructions (web | jpa | none)
//!     -> activator (create | core libraries only | none)
//!     -> manifest execution -> plan
//! ```
//!
//! The edit commands (`add-service-component`, `install-felix-dm`) work on
//! the plugin a previous `setup` persisted instead: fetch it whole, merge,
//! put it back.

pub mod activator;
pub mod edit;
pub mod libraries;
pub mod options;
pub mod setup;

pub use activator::{ActivatorStyle, GeneratedActivator, create_activator};
pub use edit::{FelixDmOutcome, ServiceComponentEdit, add_service_component, install_felix_dm};
pub use libraries::{CORE_LIBRARIES, FELIX_DEPENDENCY_MANAGER, Library, OSGI_COMPENDIUM, OSGI_CORE, request_library};
pub use options::{ActivatorOptions, FelixDmOptions, PromptDefaults, SetupOptions};
pub use setup::{ActivatorDecision, TypeInstructions, detect_type_instructions, setup};

use std::path::PathBuf;
use tracing::info;

use crate::constants::INSTRUCTIONS;
use crate::java::SourcePersistence;
use crate::models::{BuildPlugin, ConfigElement, Coordinate, Dependency, Execution, PackagingType};
use crate::project::BuildProject;
use crate::prompt::Prompter;
use crate::templating::SourceTemplateRenderer;

/// The collaborators a command talks to besides the project.
pub struct Session<'a> {
    pub prompter: &'a mut dyn Prompter,
    pub renderer: &'a dyn SourceTemplateRenderer,
    pub sources: &'a mut dyn SourcePersistence,
}

impl<'a> Session<'a> {
    pub fn new(
        prompter: &'a mut dyn Prompter,
        renderer: &'a dyn SourceTemplateRenderer,
        sources: &'a mut dyn SourcePersistence,
    ) -> Self {
        Self {
            prompter,
            renderer,
            sources,
        }
    }
}

/// Everything a `setup` run decided, ready to be applied to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagingPlan {
    pub packaging: PackagingType,
    pub plugin: Coordinate,
    /// Always present, possibly empty.
    pub instructions: ConfigElement,
    /// Top-level configuration elements placed after `instructions`.
    pub configuration_extras: Vec<ConfigElement>,
    pub executions: Vec<Execution>,
    /// No two entries share a coordinate.
    pub extra_dependencies: Vec<Dependency>,
    /// Sources written while building the plan.
    pub generated_sources: Vec<PathBuf>,
}

impl Default for PackagingPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl PackagingPlan {
    pub fn new() -> Self {
        Self {
            packaging: PackagingType::Bundle,
            plugin: Coordinate::bundle_plugin(),
            instructions: ConfigElement::new(INSTRUCTIONS),
            configuration_extras: Vec::new(),
            executions: Vec::new(),
            extra_dependencies: Vec::new(),
            generated_sources: Vec::new(),
        }
    }

    /// The bundle plugin entry this plan produces.
    pub fn to_plugin(&self) -> BuildPlugin {
        let mut plugin = BuildPlugin::new(self.plugin.clone());
        plugin.extensions = true;
        plugin.configuration.add_child(self.instructions.clone());
        for extra in &self.configuration_extras {
            plugin.configuration.add_child(extra.clone());
        }
        plugin.executions = self.executions.clone();
        plugin
    }

    /// Write the plan into `project`.
    ///
    /// Sets the packaging, replaces any existing bundle plugin entry with the
    /// planned one and adds the extra dependencies.
    pub fn apply<P: BuildProject + ?Sized>(self, project: &mut P) {
        let plugin = self.to_plugin();

        project.set_packaging(self.packaging.clone());
        project.remove_build_plugin(&plugin.coordinate);
        project.add_build_plugin(plugin);
        for dependency in self.extra_dependencies {
            info!("Adding dependency {dependency}");
            project.add_dependency(dependency);
        }
        info!("Packaging type changed to {}", self.packaging);
    }
}
