//! Configuration management
//!
//! - `global` - `~/.osgi/config.toml`: prompt defaults and version lists
//! - `versions` - the version catalog consulted when installing libraries
//!
//! Per-project state lives in the project descriptor (see [`crate::project`]),
//! not here.

pub mod global;
pub mod versions;

pub use global::{GlobalConfig, PromptDefaultsConfig};
pub use versions::VersionCatalog;
