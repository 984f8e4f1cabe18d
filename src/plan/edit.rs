//! Edits to a bundle plugin that an earlier `setup` persisted.
//!
//! Both commands fetch the whole plugin, merge into the copy and swap it
//! back in. A project without a bundle plugin fails with
//! [`OsgiError::ConfigurationUnavailable`]; nothing is created on the fly.

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

use super::Session;
use super::activator::{ActivatorStyle, create_activator};
use super::libraries::{FELIX_DEPENDENCY_MANAGER, request_library};
use super::options::{FelixDmOptions, PromptDefaults, answer_yes_no};
use crate::core::OsgiError;
use crate::instructions::{Instruction, MergeOutcome, merge_instruction};
use crate::java::SourcePersistence;
use crate::models::{BuildPlugin, Coordinate, Dependency};
use crate::project::{BuildProject, DependencyRegistry};

fn fetch_bundle_plugin<R: DependencyRegistry + ?Sized>(registry: &R) -> Result<BuildPlugin, OsgiError> {
    let coordinate = Coordinate::bundle_plugin();
    registry.get_build_plugin(&coordinate).ok_or_else(|| OsgiError::ConfigurationUnavailable {
        plugin: coordinate.to_string(),
    })
}

fn replace_bundle_plugin<R: DependencyRegistry + ?Sized>(registry: &mut R, plugin: BuildPlugin) {
    registry.remove_build_plugin(&plugin.coordinate);
    registry.add_build_plugin(plugin);
}

/// Add one `Service-Component` entry to the persisted bundle plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceComponentEdit {
    pub qualified_name: String,
}

impl ServiceComponentEdit {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
        }
    }

    /// Merge the entry into the registry's bundle plugin.
    ///
    /// The plugin is only written back when the merge changed it.
    pub fn apply<R: DependencyRegistry + ?Sized>(&self, registry: &mut R) -> Result<MergeOutcome, OsgiError> {
        let mut plugin = fetch_bundle_plugin(registry)?;
        let outcome =
            merge_instruction(&mut plugin.configuration, &Instruction::service_component(&self.qualified_name));

        if outcome == MergeOutcome::AlreadyPresent {
            debug!("Bundle plugin unchanged");
        } else {
            replace_bundle_plugin(registry, plugin);
            info!("Added Service-Component {}", self.qualified_name);
        }
        Ok(outcome)
    }
}

/// `add-service-component`: resolve `class_reference` and register it.
pub fn add_service_component<R: DependencyRegistry + ?Sized>(
    registry: &mut R,
    sources: &dyn SourcePersistence,
    class_reference: &str,
) -> Result<(ServiceComponentEdit, MergeOutcome)> {
    let class = sources.load_class(class_reference)?;
    let edit = ServiceComponentEdit::new(class.qualified_name());
    let outcome = edit.apply(registry)?;
    Ok((edit, outcome))
}

/// What `install-felix-dm` changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FelixDmOutcome {
    pub added_dependencies: Vec<Dependency>,
    /// Qualified name of the generated activator, if one was created.
    pub activator: Option<String>,
    pub generated_sources: Vec<PathBuf>,
}

/// `install-felix-dm`: add DependencyManager and optionally a DM activator.
///
/// The project is only modified after every question was answered and every
/// class was saved.
pub fn install_felix_dm<P: BuildProject + ?Sized>(
    project: &mut P,
    session: &mut Session<'_>,
    options: &FelixDmOptions,
    defaults: &PromptDefaults,
) -> Result<FelixDmOutcome> {
    let mut requested = Vec::new();
    request_library(&*project, session.prompter, &FELIX_DEPENDENCY_MANAGER, &mut requested)?;

    let create = answer_yes_no(
        session.prompter,
        options.create_activator,
        "Do you want to create an Activator class?",
        defaults.create_activator,
    )?;

    let mut updated_plugin = None;
    let mut activator = None;
    let mut generated_sources = Vec::new();
    if create {
        let mut plugin = fetch_bundle_plugin(&*project)?;
        let generated = create_activator(
            &*project,
            session,
            &options.activator,
            defaults,
            ActivatorStyle::DependencyManager,
            &mut requested,
        )?;
        merge_instruction(&mut plugin.configuration, &Instruction::bundle_activator(&generated.qualified_name));
        updated_plugin = Some(plugin);
        activator = Some(generated.qualified_name);
        generated_sources = generated.sources;
    }

    if let Some(plugin) = updated_plugin {
        replace_bundle_plugin(project, plugin);
    }
    for dependency in &requested {
        info!("Adding dependency {dependency}");
        project.add_dependency(dependency.clone());
    }

    Ok(FelixDmOutcome {
        added_dependencies: requested,
        activator,
        generated_sources,
    })
}
