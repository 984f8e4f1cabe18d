//! Build plugin entries of the project descriptor.

use serde::{Deserialize, Serialize};

use super::{ConfigElement, Coordinate};
use crate::constants;

/// A goal bound to a build phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    pub id: String,
    pub phase: String,
    #[serde(default)]
    pub goals: Vec<String>,
}

impl Execution {
    /// The `manifest` goal bound to `process-classes`.
    pub fn bundle_manifest() -> Self {
        Self {
            id: constants::MANIFEST_EXECUTION_ID.to_string(),
            phase: constants::MANIFEST_EXECUTION_PHASE.to_string(),
            goals: vec![constants::MANIFEST_GOAL.to_string()],
        }
    }
}

fn default_configuration() -> ConfigElement {
    ConfigElement::new(constants::CONFIGURATION)
}

/// One `[[build.plugins]]` entry.
///
/// `configuration` is the root element; its children are the top-level
/// configuration elements such as `instructions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlugin {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub extensions: bool,
    #[serde(default = "default_configuration")]
    pub configuration: ConfigElement,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub executions: Vec<Execution>,
}

impl BuildPlugin {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            version: None,
            extensions: false,
            configuration: default_configuration(),
            executions: Vec::new(),
        }
    }

    /// The `instructions` container, if this plugin has one.
    pub fn instructions(&self) -> Option<&ConfigElement> {
        self.configuration.child_named(constants::INSTRUCTIONS)
    }
}
