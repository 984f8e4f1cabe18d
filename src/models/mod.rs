//! Shared data models for bundle packaging
//!
//! These types describe the part of a build project the packaging code reads
//! and writes: the configuration tree, dependency coordinates and the build
//! plugin entries that carry the tree.

pub mod dependency;
pub mod element;
pub mod plugin;

pub use dependency::{Coordinate, Dependency, PackagingType, Scope};
pub use element::ConfigElement;
pub use plugin::{BuildPlugin, Execution};
