//! Global configuration for the OSGi tooling.
//!
//! Stored at `~/.osgi/config.toml` (`%LOCALAPPDATA%\osgi\config.toml` on
//! Windows). The location can be overridden with the `OSGI_CONFIG_PATH`
//! environment variable or the `--config` flag. A missing file means "all
//! defaults".
//!
//! # File Format
//!
//! ```toml
//! # Versions offered when a library is installed, oldest first
//! [versions]
//! "org.osgi:org.osgi.core" = ["4.3.1", "5.0.0", "6.0.0"]
//!
//! # Defaults proposed by the setup prompts
//! [defaults]
//! activator_package_suffix = "osgi"
//! activator_class = "Activator"
//! dm_component_class = "DmComponent"
//! use_log_service = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::versions::VersionCatalog;
use crate::constants::CONFIG_PATH_ENV;

fn default_activator_package_suffix() -> String {
    "osgi".to_string()
}

fn default_activator_class() -> String {
    "Activator".to_string()
}

fn default_dm_component_class() -> String {
    "DmComponent".to_string()
}

const fn default_use_log_service() -> bool {
    true
}

/// Defaults offered by the interactive prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDefaultsConfig {
    /// Appended to the project's base package to form the activator package.
    #[serde(default = "default_activator_package_suffix")]
    pub activator_package_suffix: String,

    #[serde(default = "default_activator_class")]
    pub activator_class: String,

    #[serde(default = "default_dm_component_class")]
    pub dm_component_class: String,

    #[serde(default = "default_use_log_service")]
    pub use_log_service: bool,
}

impl Default for PromptDefaultsConfig {
    fn default() -> Self {
        Self {
            activator_package_suffix: default_activator_package_suffix(),
            activator_class: default_activator_class(),
            dm_component_class: default_dm_component_class(),
            use_log_service: default_use_log_service(),
        }
    }
}

/// Global configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Extra or replacement version lists keyed by `group:artifact`.
    ///
    /// Entries here replace the built-in list for the same coordinate.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub versions: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub defaults: PromptDefaultsConfig,
}

impl GlobalConfig {
    /// Load from `path`, falling back to the default location.
    ///
    /// A missing file yields the default configuration; an unreadable or
    /// malformed file is an error.
    pub fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };
        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!("No global config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read global config from {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| crate::core::OsgiError::ConfigError {
                message: format!("{}: {e}", path.display()),
            })
            .with_context(|| format!("Failed to parse global config from {}", path.display()))
    }

    /// Location of the global configuration file.
    ///
    /// `OSGI_CONFIG_PATH` wins over the platform default.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("osgi")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".osgi")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Built-in version catalog overlaid with the `[versions]` table.
    pub fn version_catalog(&self) -> Result<VersionCatalog> {
        let mut catalog = VersionCatalog::builtin();
        for (key, versions) in &self.versions {
            let coordinate = crate::models::Coordinate::parse(key).ok_or_else(|| {
                crate::core::OsgiError::ConfigError {
                    message: format!("'{key}' in [versions] is not a group:artifact coordinate"),
                }
            })?;
            catalog.insert(coordinate, versions.clone());
        }
        Ok(catalog)
    }
}
