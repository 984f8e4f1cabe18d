//! The build project as seen by the packaging code.
//!
//! Packaging logic never touches files directly. It reads capabilities and
//! dependencies and writes plugins and dependencies through two traits:
//!
//! - [`ProjectModel`] - what kind of project this is
//! - [`DependencyRegistry`] - direct dependencies and build plugins
//!
//! [`Project`] implements both on top of the `osgi-project.toml` descriptor.
//! Tests use in-memory implementations from `test_utils`.

pub mod descriptor;

pub use descriptor::{BuildSection, Project, ProjectDescriptor, ProjectInfo};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{BuildPlugin, Coordinate, Dependency, PackagingType};

/// Detectable project traits that decide which instructions `setup` installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// The project ships web resources (`src/main/webapp`).
    WebResources,
    /// The project declares a JPA persistence unit.
    Persistence,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::WebResources => f.write_str("web-resources"),
            Capability::Persistence => f.write_str("persistence"),
        }
    }
}

pub trait ProjectModel {
    fn has_capability(&self, capability: Capability) -> bool;

    /// Root Java package of the project, e.g. `com.acme`.
    fn base_package(&self) -> String;

    fn packaging(&self) -> PackagingType;

    fn set_packaging(&mut self, packaging: PackagingType);
}

/// Direct dependencies and build plugins of a project.
///
/// Plugins are handed out and taken back whole: callers fetch a copy with
/// [`get_build_plugin`](Self::get_build_plugin), edit it, then remove the old
/// entry and add the edited one.
pub trait DependencyRegistry {
    /// Direct dependencies in declaration order.
    fn list_direct(&self) -> Vec<Dependency>;

    fn has_direct(&self, coordinate: &Coordinate) -> bool;

    /// Versions that can be offered for `coordinate`, oldest first.
    fn resolve_available_versions(&self, coordinate: &Coordinate) -> Vec<String>;

    fn add_dependency(&mut self, dependency: Dependency);

    fn remove_build_plugin(&mut self, coordinate: &Coordinate);

    fn add_build_plugin(&mut self, plugin: BuildPlugin);

    fn get_build_plugin(&self, coordinate: &Coordinate) -> Option<BuildPlugin>;
}

/// Anything that is both a project model and a dependency registry.
pub trait BuildProject: ProjectModel + DependencyRegistry {}

impl<T: ProjectModel + DependencyRegistry + ?Sized> BuildProject for T {}
