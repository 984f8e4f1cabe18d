//! Dependency coordinates, scopes and packaging kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `groupId` + `artifactId`, displayed as `group:artifact`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
}

impl Coordinate {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    /// Coordinate of the bundle-building plugin.
    pub fn bundle_plugin() -> Self {
        Self::new(crate::constants::BUNDLE_PLUGIN_GROUP, crate::constants::BUNDLE_PLUGIN_ARTIFACT)
    }

    /// Parse `group:artifact`. Both halves must be non-empty.
    pub fn parse(value: &str) -> Option<Self> {
        let (group, artifact) = value.split_once(':')?;
        let (group, artifact) = (group.trim(), artifact.trim());
        if group.is_empty() || artifact.is_empty() || artifact.contains(':') {
            return None;
        }
        Some(Self::new(group, artifact))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// Dependency scope. An absent scope is modelled as `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Compile,
    Runtime,
    Provided,
    Test,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::Compile => "compile",
            Scope::Runtime => "runtime",
            Scope::Provided => "provided",
            Scope::Test => "test",
        };
        f.write_str(name)
    }
}

/// Archive kind of a project or dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PackagingType {
    #[default]
    Jar,
    War,
    Bundle,
    Pom,
    Other(String),
}

impl From<String> for PackagingType {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "jar" => Self::Jar,
            "war" => Self::War,
            "bundle" => Self::Bundle,
            "pom" => Self::Pom,
            _ => Self::Other(value),
        }
    }
}

impl From<PackagingType> for String {
    fn from(value: PackagingType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for PackagingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackagingType::Jar => f.write_str("jar"),
            PackagingType::War => f.write_str("war"),
            PackagingType::Bundle => f.write_str("bundle"),
            PackagingType::Pom => f.write_str("pom"),
            PackagingType::Other(other) => f.write_str(other),
        }
    }
}

/// A direct dependency as listed in the project descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(default, rename = "type")]
    pub packaging: PackagingType,
}

impl Dependency {
    /// A jar dependency with no version and no scope.
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            scope: None,
            packaging: PackagingType::Jar,
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    #[must_use]
    pub fn with_packaging(mut self, packaging: PackagingType) -> Self {
        self.packaging = packaging;
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group_id, &self.artifact_id)
    }

    pub fn matches(&self, coordinate: &Coordinate) -> bool {
        self.group_id == coordinate.group_id && self.artifact_id == coordinate.artifact_id
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
        }
        if let Some(scope) = &self.scope {
            write!(f, " ({scope})")?;
        }
        Ok(())
    }
}
