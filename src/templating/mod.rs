//! Source templates for generated classes.
//!
//! Packaging code asks for a [`TemplateId`] rendered with a parameter map and
//! gets Java source text back. It does not know which engine produced the
//! text; [`TeraSourceRenderer`] is the implementation shipped with the binary.
//!
//! # Parameters
//!
//! | name                 | used by                    |
//! |----------------------|----------------------------|
//! | `package`            | all                        |
//! | `className`          | all                        |
//! | `useLogService`      | `dm-activator`, `dm-component` |
//! | `dmComponentPackage` | `dm-activator`             |
//! | `dmComponentName`    | `dm-activator`             |

mod renderer;

pub use renderer::TeraSourceRenderer;

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::core::OsgiError;

/// The templates available for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// Plain `BundleActivator` with `start`/`stop`.
    Activator,
    /// `DependencyActivatorBase` subclass registering a DM component.
    DmActivator,
    /// The component registered by a DM activator.
    DmComponent,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Activator, TemplateId::DmActivator, TemplateId::DmComponent];

    pub fn name(self) -> &'static str {
        match self {
            TemplateId::Activator => "activator",
            TemplateId::DmActivator => "dm-activator",
            TemplateId::DmComponent => "dm-component",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named template parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplateParams(BTreeMap<String, Value>);

impl TemplateParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

pub trait SourceTemplateRenderer {
    fn render(&self, template: TemplateId, params: &TemplateParams) -> Result<String, OsgiError>;
}
