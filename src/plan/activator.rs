//! Activator and DM component generation.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::Session;
use super::libraries::{FELIX_DEPENDENCY_MANAGER, request_library};
use super::options::{ActivatorOptions, PromptDefaults, answer_class_name, answer_package, answer_yes_no};
use crate::java::JavaClass;
use crate::models::Dependency;
use crate::project::BuildProject;
use crate::templating::{TemplateId, TemplateParams};

/// Which activator flavour to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivatorStyle {
    /// Ask the operator whether to use Felix DependencyManager.
    Ask,
    /// Always generate a DependencyManager activator.
    DependencyManager,
}

/// Result of generating an activator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedActivator {
    /// Value for `Bundle-Activator`.
    pub qualified_name: String,
    /// Files written, DM component first.
    pub sources: Vec<PathBuf>,
}

/// Ask for the activator details, render it and save it.
///
/// With DependencyManager the component is generated and saved before the
/// activator that refers to it, and the DependencyManager library is queued
/// in `requested`.
pub fn create_activator<P: BuildProject + ?Sized>(
    project: &P,
    session: &mut Session<'_>,
    options: &ActivatorOptions,
    defaults: &PromptDefaults,
    style: ActivatorStyle,
    requested: &mut Vec<Dependency>,
) -> Result<GeneratedActivator> {
    let package = answer_package(
        session.prompter,
        options.package.as_deref(),
        "What package do you want to use for the Activator class?",
        &defaults.activator_package,
    )?;
    let class_name = answer_class_name(
        session.prompter,
        options.class_name.as_deref(),
        "How do you want to name the Activator class?",
        &defaults.activator_class,
    )?;

    let use_dm = match style {
        ActivatorStyle::DependencyManager => true,
        ActivatorStyle::Ask => answer_yes_no(
            session.prompter,
            options.use_dm,
            "Do you want to use Felix Dependency Manager?",
            defaults.use_dm,
        )?,
    };

    let mut sources = Vec::new();
    let mut params = TemplateParams::new().with("package", package.as_str()).with("className", class_name.as_str());

    let template = if use_dm {
        let use_log_service = answer_yes_no(
            session.prompter,
            options.use_log_service,
            "Do you want to use the LogService?",
            defaults.use_log_service,
        )?;
        let component = create_dm_component(session, options, defaults, use_log_service)?;
        params = params
            .with("dmComponentPackage", component.package())
            .with("dmComponentName", component.name())
            .with("useLogService", use_log_service);
        sources.push(session.sources.save(&component)?);

        request_library(project, session.prompter, &FELIX_DEPENDENCY_MANAGER, requested)?;
        TemplateId::DmActivator
    } else {
        TemplateId::Activator
    };

    let activator = render_class(session, template, &params)?;
    sources.push(
        session
            .sources
            .save(&activator)
            .with_context(|| format!("Failed to save activator {}", activator.qualified_name()))?,
    );
    info!("Created activator {}", activator.qualified_name());

    Ok(GeneratedActivator {
        qualified_name: activator.qualified_name(),
        sources,
    })
}

fn create_dm_component(
    session: &mut Session<'_>,
    options: &ActivatorOptions,
    defaults: &PromptDefaults,
    use_log_service: bool,
) -> Result<JavaClass> {
    let package = answer_package(
        session.prompter,
        options.dm_component_package.as_deref(),
        "What package do you want to use for the DM component?",
        &defaults.dm_component_package,
    )?;
    let class_name = answer_class_name(
        session.prompter,
        options.dm_component_class.as_deref(),
        "How do you want to name the DM component class?",
        &defaults.dm_component_class,
    )?;

    let params = TemplateParams::new()
        .with("package", package.as_str())
        .with("className", class_name.as_str())
        .with("useLogService", use_log_service);
    let component = render_class(session, TemplateId::DmComponent, &params)?;
    info!("Created DM component {}", component.qualified_name());
    Ok(component)
}

/// Render `template` and parse the text back into a class.
fn render_class(session: &Session<'_>, template: TemplateId, params: &TemplateParams) -> Result<JavaClass> {
    let text = session.renderer.render(template, params)?;
    let class = session
        .sources
        .parse_class(&text)
        .with_context(|| format!("Template '{template}' produced an unparseable class"))?;

    match class.lifecycle_hooks() {
        Some(hooks) => debug!("{} declares {hooks}", class.qualified_name()),
        None => warn!("{} declares no lifecycle methods", class.qualified_name()),
    }
    Ok(class)
}
