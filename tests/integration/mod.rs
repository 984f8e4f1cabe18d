//! Integration test suite for the `osgi` binary
//!
//! Each test builds a project in a temporary directory, runs the binary with
//! `--yes` and inspects the rewritten `osgi-project.toml` and generated sources.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **setup**: packaging, type instructions, activators and libraries
//! - **service_component**: `add-service-component`
//! - **felix_dm**: `install-felix-dm`
//! - **show**: text and JSON output
//! - **error_scenarios**: exit codes and error reporting

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod error_scenarios;
mod felix_dm;
mod service_component;
mod setup;
mod show;
