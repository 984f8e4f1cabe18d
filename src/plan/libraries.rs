//! Libraries the packaging commands add to a project.
//!
//! All of them are compile-time APIs supplied by the OSGi container at
//! runtime, so they are always added with `provided` scope.

use anyhow::Result;
use tracing::{debug, info};

use crate::models::{Coordinate, Dependency, Scope};
use crate::project::DependencyRegistry;
use crate::prompt::Prompter;

/// A library the installer knows how to add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Library {
    /// Name shown to the operator.
    pub display_name: &'static str,
    pub group_id: &'static str,
    pub artifact_id: &'static str,
}

impl Library {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.group_id, self.artifact_id)
    }
}

pub const OSGI_CORE: Library = Library {
    display_name: "org.osgi.core",
    group_id: "org.osgi",
    artifact_id: "org.osgi.core",
};

pub const OSGI_COMPENDIUM: Library = Library {
    display_name: "org.osgi.compendium",
    group_id: "org.osgi",
    artifact_id: "org.osgi.compendium",
};

pub const FELIX_DEPENDENCY_MANAGER: Library = Library {
    display_name: "Felix DependencyManager",
    group_id: "org.apache.felix",
    artifact_id: "org.apache.felix.dependencymanager",
};

/// The OSGi framework and compendium APIs.
pub const CORE_LIBRARIES: [Library; 2] = [OSGI_CORE, OSGI_COMPENDIUM];

/// Queue `library` for installation into `requested`.
///
/// Nothing is queued if the project already depends on it directly or it is
/// already queued. When the registry knows versions the operator picks one,
/// newest by default; otherwise the dependency is added without a version.
///
/// Returns whether the library was queued.
pub fn request_library<R: DependencyRegistry + ?Sized>(
    registry: &R,
    prompter: &mut dyn Prompter,
    library: &Library,
    requested: &mut Vec<Dependency>,
) -> Result<bool> {
    let coordinate = library.coordinate();
    if registry.has_direct(&coordinate) {
        info!("{} is already installed", library.display_name);
        return Ok(false);
    }
    if requested.iter().any(|d| d.matches(&coordinate)) {
        debug!("{} is already queued", library.display_name);
        return Ok(false);
    }

    let mut dependency = Dependency::new(library.group_id, library.artifact_id).with_scope(Scope::Provided);

    let versions = registry.resolve_available_versions(&coordinate);
    if let Some(newest) = versions.len().checked_sub(1) {
        let version = prompter.ask_choice(
            &format!("Which version of {} do you want to install?", library.display_name),
            &versions,
            newest,
        )?;
        dependency = dependency.with_version(version);
    } else {
        debug!("No known versions for {coordinate}, adding it unversioned");
    }

    info!("{} dependency will be added as {dependency}", library.display_name);
    requested.push(dependency);
    Ok(true)
}
