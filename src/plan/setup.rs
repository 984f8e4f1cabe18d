//! The `setup` run.

use anyhow::Result;
use tracing::debug;

use super::activator::{ActivatorStyle, create_activator};
use super::libraries::{CORE_LIBRARIES, request_library};
use super::options::{PromptDefaults, SetupOptions, answer_text, answer_yes_no};
use super::{PackagingPlan, Session};
use crate::constants::{
    BUNDLE_CLASSPATH, IMPORT_PACKAGE, META_PERSISTENCE, PERSISTENCE_DESCRIPTOR, SERVLET_IMPORTS,
    SUPPORTED_PROJECT_TYPE, SUPPORTED_PROJECT_TYPES, WEB_CONTEXT_PATH,
};
use crate::instructions::{Instruction, append_instruction, web_bundle_classpath};
use crate::models::{ConfigElement, Execution, PackagingType};
use crate::project::{BuildProject, Capability, ProjectModel};

/// Instruction set chosen from the project's capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeInstructions {
    Web,
    Jpa,
    None,
}

/// What happened at the activator step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivatorDecision {
    /// An activator was generated; its qualified name.
    Create(String),
    /// No activator, but the core libraries were requested.
    CoreLibrariesOnly,
    None,
}

/// Web resources win over persistence; persistence is only looked at when
/// the project has no web resources.
pub fn detect_type_instructions<P: ProjectModel + ?Sized>(project: &P) -> TypeInstructions {
    if project.has_capability(Capability::WebResources) {
        TypeInstructions::Web
    } else if project.has_capability(Capability::Persistence) {
        TypeInstructions::Jpa
    } else {
        TypeInstructions::None
    }
}

/// Ask the setup questions and build the plan.
///
/// Generated classes are saved as they are created; the project itself is
/// not modified. Apply the returned plan with [`PackagingPlan::apply`].
pub fn setup<P: BuildProject + ?Sized>(
    project: &P,
    session: &mut Session<'_>,
    options: &SetupOptions,
    defaults: &PromptDefaults,
) -> Result<PackagingPlan> {
    let mut plan = PackagingPlan::new();

    let kind = detect_type_instructions(project);
    debug!("Type instructions: {kind:?}");
    match kind {
        TypeInstructions::Web => install_web_instructions(project, session, options, defaults, &mut plan)?,
        TypeInstructions::Jpa => install_jpa_instructions(&mut plan),
        TypeInstructions::None => {}
    }

    let decision = decide_activator(project, session, options, defaults, &mut plan)?;
    debug!("Activator: {decision:?}");

    plan.executions.push(Execution::bundle_manifest());
    Ok(plan)
}

fn install_web_instructions<P: BuildProject + ?Sized>(
    project: &P,
    session: &mut Session<'_>,
    options: &SetupOptions,
    defaults: &PromptDefaults,
    plan: &mut PackagingPlan,
) -> Result<()> {
    let context_path = answer_text(
        session.prompter,
        options.context_path.as_deref(),
        "What context path do you want to use?",
        &defaults.context_path,
    )?;

    plan.instructions.add_child(ConfigElement::new(WEB_CONTEXT_PATH)).set_text(context_path);
    plan.instructions
        .add_child(ConfigElement::new(BUNDLE_CLASSPATH))
        .set_text(web_bundle_classpath(&project.list_direct()));
    plan.configuration_extras.push(
        ConfigElement::new(SUPPORTED_PROJECT_TYPES)
            .with_child(ConfigElement::new(SUPPORTED_PROJECT_TYPE).with_text(PackagingType::War.to_string())),
    );

    let add_imports = answer_yes_no(
        session.prompter,
        options.servlet_imports,
        "Do you want to add javax.servlet and javax.servlet.http to Import-Package?",
        defaults.servlet_imports,
    )?;
    if add_imports {
        plan.instructions.add_child(ConfigElement::new(IMPORT_PACKAGE)).set_text(SERVLET_IMPORTS);
    }
    Ok(())
}

fn install_jpa_instructions(plan: &mut PackagingPlan) {
    plan.instructions.add_child(ConfigElement::new(META_PERSISTENCE)).set_text(PERSISTENCE_DESCRIPTOR);
}

fn decide_activator<P: BuildProject + ?Sized>(
    project: &P,
    session: &mut Session<'_>,
    options: &SetupOptions,
    defaults: &PromptDefaults,
    plan: &mut PackagingPlan,
) -> Result<ActivatorDecision> {
    let create = answer_yes_no(
        session.prompter,
        options.create_activator,
        "Do you want to create an Activator class?",
        defaults.create_activator,
    )?;

    if create {
        let generated = create_activator(
            project,
            session,
            &options.activator,
            defaults,
            ActivatorStyle::Ask,
            &mut plan.extra_dependencies,
        )?;
        append_instruction(&mut plan.instructions, &Instruction::bundle_activator(&generated.qualified_name));
        plan.generated_sources.extend(generated.sources);
        install_core_libraries(project, session, plan)?;
        return Ok(ActivatorDecision::Create(generated.qualified_name));
    }

    let core_libraries = answer_yes_no(
        session.prompter,
        options.core_libraries,
        "Do you want to add the OSGi core libraries?",
        defaults.core_libraries,
    )?;
    if core_libraries {
        install_core_libraries(project, session, plan)?;
        Ok(ActivatorDecision::CoreLibrariesOnly)
    } else {
        Ok(ActivatorDecision::None)
    }
}

fn install_core_libraries<P: BuildProject + ?Sized>(
    project: &P,
    session: &mut Session<'_>,
    plan: &mut PackagingPlan,
) -> Result<()> {
    for library in &CORE_LIBRARIES {
        request_library(project, session.prompter, library, &mut plan.extra_dependencies)?;
    }
    Ok(())
}
