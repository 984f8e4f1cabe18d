//! osgi-plugin - turn a build project into an OSGi bundle
//!
//! The crate edits a project descriptor (`osgi-project.toml`) so that the
//! project is packaged as a bundle: it sets the packaging, adds the bundle
//! plugin with manifest instructions and a manifest execution, generates
//! activator classes and adds the OSGi libraries they need.
//!
//! # Architecture Overview
//!
//! The packaging logic is small and works on an in-memory configuration tree:
//!
//! - [`models`] - the [`ConfigElement`](models::ConfigElement) tree, dependencies, build plugins
//! - [`instructions`] - merging instructions into a tree, deriving `Bundle-ClassPath`
//! - [`plan`] - the `setup` run and the edit commands built on top of it
//!
//! Everything it talks to is behind a trait so it can be swapped in tests:
//!
//! - [`project`] - `ProjectModel` / `DependencyRegistry`, implemented by the descriptor
//! - [`prompt`] - asking the operator, on a terminal or not at all
//! - [`templating`] - rendering Java sources from embedded Tera templates
//! - [`java`] - parsing generated classes and saving them below `src/main/java`
//!
//! Supporting modules:
//!
//! - [`cli`] - the `osgi` command line
//! - [`config`] - `~/.osgi/config.toml`: prompt defaults and version lists
//! - [`core`] - error types and operator-facing error reporting
//! - [`utils`] - file helpers
//!
//! # Project Descriptor
//!
//! ```toml
//! [project]
//! group_id = "com.acme"
//! artifact_id = "shop"
//! version = "1.0.0"
//! packaging = "war"
//!
//! [[dependencies]]
//! group_id = "com.acme"
//! artifact_id = "foo"
//! version = "1.0"
//! scope = "compile"
//! ```
//!
//! After `osgi setup` the packaging is `bundle` and a `[[build.plugins]]`
//! entry for `org.apache.felix:maven-bundle-plugin` holds the instructions.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod instructions;
pub mod java;
pub mod models;
pub mod plan;
pub mod project;
pub mod prompt;
pub mod templating;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
