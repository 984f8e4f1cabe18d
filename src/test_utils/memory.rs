//! In-memory collaborators.

use anyhow::{Result, bail};
use std::collections::VecDeque;
use std::path::PathBuf;

use crate::config::VersionCatalog;
use crate::constants::JAVA_SOURCE_ROOT;
use crate::core::OsgiError;
use crate::java::{JavaClass, SourcePersistence};
use crate::models::{BuildPlugin, Coordinate, Dependency, PackagingType};
use crate::project::{Capability, DependencyRegistry, ProjectModel};
use crate::prompt::Prompter;

/// A project that lives entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryProject {
    base_package: String,
    packaging: PackagingType,
    capabilities: Vec<Capability>,
    dependencies: Vec<Dependency>,
    plugins: Vec<BuildPlugin>,
    catalog: VersionCatalog,
}

impl MemoryProject {
    /// A jar project with no capabilities, dependencies or known versions.
    pub fn new(base_package: &str) -> Self {
        Self {
            base_package: base_package.to_string(),
            packaging: PackagingType::Jar,
            capabilities: Vec::new(),
            dependencies: Vec::new(),
            plugins: Vec::new(),
            catalog: VersionCatalog::empty(),
        }
    }

    #[must_use]
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.push(capability);
        self
    }

    #[must_use]
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    #[must_use]
    pub fn with_versions(mut self, coordinate: Coordinate, versions: &[&str]) -> Self {
        self.catalog.insert(coordinate, versions.iter().map(|v| (*v).to_string()).collect());
        self
    }

    pub fn plugins(&self) -> &[BuildPlugin] {
        &self.plugins
    }
}

impl ProjectModel for MemoryProject {
    fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    fn base_package(&self) -> String {
        self.base_package.clone()
    }

    fn packaging(&self) -> PackagingType {
        self.packaging.clone()
    }

    fn set_packaging(&mut self, packaging: PackagingType) {
        self.packaging = packaging;
    }
}

impl DependencyRegistry for MemoryProject {
    fn list_direct(&self) -> Vec<Dependency> {
        self.dependencies.clone()
    }

    fn has_direct(&self, coordinate: &Coordinate) -> bool {
        self.dependencies.iter().any(|d| d.matches(coordinate))
    }

    fn resolve_available_versions(&self, coordinate: &Coordinate) -> Vec<String> {
        self.catalog.available(coordinate)
    }

    fn add_dependency(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }

    fn remove_build_plugin(&mut self, coordinate: &Coordinate) {
        self.plugins.retain(|p| &p.coordinate != coordinate);
    }

    fn add_build_plugin(&mut self, plugin: BuildPlugin) {
        self.plugins.push(plugin);
    }

    fn get_build_plugin(&self, coordinate: &Coordinate) -> Option<BuildPlugin> {
        self.plugins.iter().find(|p| &p.coordinate == coordinate).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer {
    YesNo(bool),
    Text(String),
    Choice(String),
}

/// Answers questions from a fixed script.
///
/// Each question consumes the next answer, which must be of the matching
/// kind. Running out of answers or a kind mismatch is an error, so a test
/// notices when the flow asks something unexpected.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn yes_no(mut self, answer: bool) -> Self {
        self.script.push_back(Answer::YesNo(answer));
        self
    }

    #[must_use]
    pub fn text(mut self, answer: &str) -> Self {
        self.script.push_back(Answer::Text(answer.to_string()));
        self
    }

    #[must_use]
    pub fn choice(mut self, answer: &str) -> Self {
        self.script.push_back(Answer::Choice(answer.to_string()));
        self
    }

    /// Prompts seen so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Panics if scripted answers are left over.
    pub fn assert_exhausted(&self) {
        assert!(self.script.is_empty(), "unused scripted answers: {:?} (asked: {:?})", self.script, self.asked);
    }

    fn next(&mut self, prompt: &str) -> Result<Answer> {
        self.asked.push(prompt.to_string());
        match self.script.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("no scripted answer for: {prompt}"),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_yes_no(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next(prompt)? {
            Answer::YesNo(answer) => Ok(answer),
            other => bail!("expected a yes/no answer for '{prompt}', script has {other:?}"),
        }
    }

    fn ask_text(&mut self, prompt: &str, _default: &str) -> Result<String> {
        match self.next(prompt)? {
            Answer::Text(answer) => Ok(answer),
            other => bail!("expected a text answer for '{prompt}', script has {other:?}"),
        }
    }

    fn ask_choice(&mut self, prompt: &str, options: &[String], _default: usize) -> Result<String> {
        match self.next(prompt)? {
            Answer::Choice(answer) if options.contains(&answer) => Ok(answer),
            other => bail!("expected one of {options:?} for '{prompt}', script has {other:?}"),
        }
    }
}

/// Sources kept in memory: known classes can be loaded, saved ones are recorded.
#[derive(Debug, Default)]
pub struct MemorySources {
    known: Vec<JavaClass>,
    saved: Vec<JavaClass>,
}

impl MemorySources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a class available to `load_class`. Panics if `source` does not parse.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        let class = JavaClass::parse(source).unwrap_or_else(|e| panic!("test source does not parse: {e}"));
        self.known.push(class);
        self
    }

    /// Classes saved so far, in order.
    pub fn saved(&self) -> &[JavaClass] {
        &self.saved
    }
}

impl SourcePersistence for MemorySources {
    fn parse_class(&self, text: &str) -> Result<JavaClass, OsgiError> {
        JavaClass::parse(text)
    }

    fn save(&mut self, class: &JavaClass) -> Result<PathBuf> {
        self.saved.push(class.clone());
        Ok(PathBuf::from(JAVA_SOURCE_ROOT).join(class.relative_path()))
    }

    fn load_class(&self, reference: &str) -> Result<JavaClass> {
        self.known
            .iter()
            .chain(&self.saved)
            .find(|c| c.qualified_name() == reference || reference.ends_with(&*c.relative_path().to_string_lossy()))
            .cloned()
            .ok_or_else(|| {
                OsgiError::ClassNotFound {
                    reference: reference.to_string(),
                }
                .into()
            })
    }
}
