//! Pre-answered questions and computed prompt defaults.
//!
//! Every question the packaging code asks can be answered up front (from the
//! command line) through the `Option` fields here. A `None` means "ask", and
//! the question is then asked with the matching [`PromptDefaults`] value.

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::PromptDefaultsConfig;
use crate::core::OsgiError;
use crate::java::names::{validate_class_name, validate_package};
use crate::prompt::Prompter;

/// Answers about the generated activator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivatorOptions {
    pub package: Option<String>,
    pub class_name: Option<String>,
    /// Only consulted by `setup`; `install-felix-dm` always generates a DM activator.
    pub use_dm: Option<bool>,
    pub use_log_service: Option<bool>,
    pub dm_component_package: Option<String>,
    pub dm_component_class: Option<String>,
}

/// Answers for a `setup` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupOptions {
    pub context_path: Option<String>,
    pub servlet_imports: Option<bool>,
    pub create_activator: Option<bool>,
    pub core_libraries: Option<bool>,
    pub activator: ActivatorOptions,
}

/// Answers for an `install-felix-dm` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FelixDmOptions {
    pub create_activator: Option<bool>,
    pub activator: ActivatorOptions,
}

/// Default answers, computed from the project and the global configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDefaults {
    pub context_path: String,
    pub servlet_imports: bool,
    pub create_activator: bool,
    pub core_libraries: bool,
    pub activator_package: String,
    pub activator_class: String,
    pub use_dm: bool,
    pub use_log_service: bool,
    pub dm_component_package: String,
    pub dm_component_class: String,
}

impl PromptDefaults {
    /// Defaults for a project rooted at `base_package`.
    ///
    /// The activator goes to `<base_package>.<suffix>` (`.osgi` unless
    /// configured otherwise), the DM component to `base_package` itself.
    pub fn for_project(base_package: &str, config: &PromptDefaultsConfig) -> Self {
        let activator_package = match (base_package.is_empty(), config.activator_package_suffix.is_empty()) {
            (_, true) => base_package.to_string(),
            (true, false) => config.activator_package_suffix.clone(),
            (false, false) => format!("{base_package}.{}", config.activator_package_suffix),
        };

        Self {
            context_path: "/".to_string(),
            servlet_imports: false,
            create_activator: false,
            core_libraries: false,
            activator_package,
            activator_class: config.activator_class.clone(),
            use_dm: false,
            use_log_service: config.use_log_service,
            dm_component_package: base_package.to_string(),
            dm_component_class: config.dm_component_class.clone(),
        }
    }
}

/// Use the pre-answer if there is one, otherwise ask.
pub(crate) fn answer_yes_no(
    prompter: &mut dyn Prompter,
    preset: Option<bool>,
    prompt: &str,
    default: bool,
) -> Result<bool> {
    match preset {
        Some(answer) => {
            debug!("{prompt} -> {answer} (preset)");
            Ok(answer)
        }
        None => prompter.ask_yes_no(prompt, default),
    }
}

pub(crate) fn answer_text(
    prompter: &mut dyn Prompter,
    preset: Option<&str>,
    prompt: &str,
    default: &str,
) -> Result<String> {
    match preset {
        Some(answer) => {
            debug!("{prompt} -> {answer} (preset)");
            Ok(answer.to_string())
        }
        None => prompter.ask_text(prompt, default),
    }
}

pub(crate) fn answer_package(
    prompter: &mut dyn Prompter,
    preset: Option<&str>,
    prompt: &str,
    default: &str,
) -> Result<String> {
    answer_validated(prompter, preset, prompt, default, validate_package)
}

pub(crate) fn answer_class_name(
    prompter: &mut dyn Prompter,
    preset: Option<&str>,
    prompt: &str,
    default: &str,
) -> Result<String> {
    answer_validated(prompter, preset, prompt, default, validate_class_name)
}

/// Like [`answer_text`], but the answer must pass `validate`.
///
/// A preset that fails is an error. A prompted answer that fails is asked
/// again, unless it is the default itself.
fn answer_validated(
    prompter: &mut dyn Prompter,
    preset: Option<&str>,
    prompt: &str,
    default: &str,
    validate: fn(&str) -> Result<(), OsgiError>,
) -> Result<String> {
    if let Some(answer) = preset {
        validate(answer)?;
        debug!("{prompt} -> {answer} (preset)");
        return Ok(answer.to_string());
    }

    loop {
        let answer = prompter.ask_text(prompt, default)?;
        match validate(&answer) {
            Ok(()) => return Ok(answer),
            Err(e) if answer == default => return Err(e.into()),
            Err(e) => warn!("{e}, please try again"),
        }
    }
}
