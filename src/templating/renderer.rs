//! Template rendering with Tera.

use std::error::Error as _;
use tera::{Context as TeraContext, Tera};

use super::{SourceTemplateRenderer, TemplateId, TemplateParams};
use crate::core::OsgiError;

const ACTIVATOR: &str = include_str!("templates/activator.java.tera");
const DM_ACTIVATOR: &str = include_str!("templates/dm_activator.java.tera");
const DM_COMPONENT: &str = include_str!("templates/dm_component.java.tera");

/// Renders the embedded Java templates.
///
/// Autoescaping is off: the output is Java, not HTML. Referencing a parameter
/// that was not supplied is an error rather than an empty string.
pub struct TeraSourceRenderer {
    tera: Tera,
}

impl TeraSourceRenderer {
    pub fn new() -> Result<Self, OsgiError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(TemplateId::ALL.map(|id| (id.name(), Self::source(id))))
            .map_err(|e| OsgiError::TemplateError {
                template: "embedded".to_string(),
                reason: describe(&e),
            })?;
        Ok(Self {
            tera,
        })
    }

    /// Raw template text.
    pub fn source(template: TemplateId) -> &'static str {
        match template {
            TemplateId::Activator => ACTIVATOR,
            TemplateId::DmActivator => DM_ACTIVATOR,
            TemplateId::DmComponent => DM_COMPONENT,
        }
    }
}

impl SourceTemplateRenderer for TeraSourceRenderer {
    fn render(&self, template: TemplateId, params: &TemplateParams) -> Result<String, OsgiError> {
        tracing::debug!("Rendering template '{template}'");
        for (key, value) in params.iter() {
            tracing::trace!("  {key} = {value}");
        }

        let context = TeraContext::from_serialize(params).map_err(|e| OsgiError::TemplateError {
            template: template.to_string(),
            reason: describe(&e),
        })?;

        self.tera.render(template.name(), &context).map_err(|e| OsgiError::TemplateError {
            template: template.to_string(),
            reason: describe(&e),
        })
    }
}

/// Tera puts the useful part of a message in the source chain.
fn describe(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
