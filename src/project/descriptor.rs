//! The `osgi-project.toml` project descriptor.
//!
//! ```toml
//! [project]
//! group_id = "com.acme"
//! artifact_id = "shop"
//! version = "1.0.0"
//! packaging = "war"
//! base_package = "com.acme.shop"     # defaults to group_id
//! capabilities = ["web-resources"]   # optional, detected from the tree otherwise
//!
//! [[dependencies]]
//! group_id = "com.acme"
//! artifact_id = "foo"
//! version = "1.0"
//! scope = "compile"
//!
//! [[build.plugins]]
//! group_id = "org.apache.felix"
//! artifact_id = "maven-bundle-plugin"
//! extensions = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{Capability, DependencyRegistry, ProjectModel};
use crate::config::VersionCatalog;
use crate::constants::{PERSISTENCE_MARKER, PROJECT_DESCRIPTOR, WEBAPP_DIR};
use crate::core::{FileOperation, FileResultExt, OsgiError};
use crate::java::names::package_from_group_id;
use crate::models::{BuildPlugin, Coordinate, Dependency, PackagingType};

/// `[project]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub packaging: PackagingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_package: Option<String>,
    /// Overrides capability detection when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<Capability>>,
}

/// `[build]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSection {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<BuildPlugin>,
}

impl BuildSection {
    fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

/// Parsed contents of `osgi-project.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub project: ProjectInfo,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
    #[serde(default, skip_serializing_if = "BuildSection::is_empty")]
    pub build: BuildSection,
}

impl ProjectDescriptor {
    /// Descriptor for a fresh jar project.
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            project: ProjectInfo {
                group_id: group_id.into(),
                artifact_id: artifact_id.into(),
                version: None,
                packaging: PackagingType::Jar,
                base_package: None,
                capabilities: None,
            },
            dependencies: Vec::new(),
            build: BuildSection::default(),
        }
    }

    pub fn parse(content: &str, file: &Path) -> Result<Self, OsgiError> {
        toml::from_str(content).map_err(|e| OsgiError::DescriptorParseError {
            file: file.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize project descriptor")
    }
}

/// A project directory with its loaded descriptor.
///
/// Changes stay in memory until [`save`](Self::save) is called, so a command
/// that fails half-way leaves the descriptor on disk untouched.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    descriptor: ProjectDescriptor,
    catalog: VersionCatalog,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>, descriptor: ProjectDescriptor, catalog: VersionCatalog) -> Self {
        Self {
            root: root.into(),
            descriptor,
            catalog,
        }
    }

    /// Load `osgi-project.toml` from `root`.
    pub fn load(root: &Path, catalog: VersionCatalog) -> Result<Self> {
        let path = root.join(PROJECT_DESCRIPTOR);
        if !path.exists() {
            return Err(OsgiError::DescriptorNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(&path).with_file_context(
            FileOperation::Read,
            &path,
            "reading the project descriptor",
        )?;
        let descriptor = ProjectDescriptor::parse(&content, &path)?;
        debug!(
            "Loaded {} with {} dependencies and {} plugins",
            path.display(),
            descriptor.dependencies.len(),
            descriptor.build.plugins.len()
        );

        Ok(Self::new(root, descriptor, catalog))
    }

    /// Write the descriptor back to `osgi-project.toml`.
    pub fn save(&self) -> Result<()> {
        let path = self.descriptor_path();
        let content = self.descriptor.to_toml()?;
        crate::utils::atomic_write(&path, content.as_bytes())
            .with_context(|| format!("Failed to save project descriptor {}", path.display()))?;
        debug!("Saved {}", path.display());
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.root.join(PROJECT_DESCRIPTOR)
    }

    pub fn descriptor(&self) -> &ProjectDescriptor {
        &self.descriptor
    }

    fn detect_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::WebResources => self.root.join(WEBAPP_DIR).is_dir(),
            Capability::Persistence => self.root.join(PERSISTENCE_MARKER).is_file(),
        }
    }
}

impl ProjectModel for Project {
    fn has_capability(&self, capability: Capability) -> bool {
        match &self.descriptor.project.capabilities {
            Some(declared) => declared.contains(&capability),
            None => self.detect_capability(capability),
        }
    }

    /// The declared `base_package`, otherwise the group id made into a package.
    fn base_package(&self) -> String {
        self.descriptor
            .project
            .base_package
            .clone()
            .unwrap_or_else(|| package_from_group_id(&self.descriptor.project.group_id))
    }

    fn packaging(&self) -> PackagingType {
        self.descriptor.project.packaging.clone()
    }

    fn set_packaging(&mut self, packaging: PackagingType) {
        self.descriptor.project.packaging = packaging;
    }
}

impl DependencyRegistry for Project {
    fn list_direct(&self) -> Vec<Dependency> {
        self.descriptor.dependencies.clone()
    }

    fn has_direct(&self, coordinate: &Coordinate) -> bool {
        self.descriptor.dependencies.iter().any(|d| d.matches(coordinate))
    }

    fn resolve_available_versions(&self, coordinate: &Coordinate) -> Vec<String> {
        self.catalog.available(coordinate)
    }

    fn add_dependency(&mut self, dependency: Dependency) {
        let coordinate = dependency.coordinate();
        match self.descriptor.dependencies.iter_mut().find(|d| d.matches(&coordinate)) {
            Some(existing) => *existing = dependency,
            None => self.descriptor.dependencies.push(dependency),
        }
    }

    fn remove_build_plugin(&mut self, coordinate: &Coordinate) {
        self.descriptor.build.plugins.retain(|p| &p.coordinate != coordinate);
    }

    fn add_build_plugin(&mut self, plugin: BuildPlugin) {
        self.descriptor.build.plugins.push(plugin);
    }

    fn get_build_plugin(&self, coordinate: &Coordinate) -> Option<BuildPlugin> {
        self.descriptor.build.plugins.iter().find(|p| &p.coordinate == coordinate).cloned()
    }
}
