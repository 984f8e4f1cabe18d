//! Common test utilities for the `osgi` integration tests
//!
//! Every [`TestProject`] lives in its own temporary directory with a private
//! global config path, so tests never read `~/.osgi/config.toml`.

// Not every helper is used by every test module
#![allow(dead_code)]

mod descriptor_builder;

pub use descriptor_builder::DescriptorBuilder;

use anyhow::{Context, Result};
use osgi_plugin::models::{BuildPlugin, Coordinate, Dependency};
use osgi_plugin::project::ProjectDescriptor;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A project directory plus an isolated global config location.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
    config_path: PathBuf,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        let config_path = temp_dir.path().join(".osgi").join("config.toml");
        fs::create_dir_all(&project_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
            config_path,
        })
    }

    /// Project with `osgi-project.toml` already written.
    pub fn with_descriptor(descriptor: &str) -> Result<Self> {
        let project = Self::new()?;
        project.write_descriptor(descriptor)?;
        Ok(project)
    }

    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.project_dir.join("osgi-project.toml")
    }

    pub fn write_descriptor(&self, content: &str) -> Result<()> {
        fs::write(self.descriptor_path(), content).context("Failed to write osgi-project.toml")
    }

    pub fn write_global_config(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.config_path, content).context("Failed to write global config")
    }

    /// Create a file below the project directory, parents included.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.project_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Mark the project as carrying web resources.
    pub fn add_webapp_dir(&self) -> Result<()> {
        fs::create_dir_all(self.project_dir.join("src/main/webapp"))?;
        Ok(())
    }

    pub fn read_file(&self, relative: &str) -> Result<String> {
        let path = self.project_dir.join(relative);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    pub fn descriptor(&self) -> Result<ProjectDescriptor> {
        let path = self.descriptor_path();
        let content = fs::read_to_string(&path)?;
        Ok(ProjectDescriptor::parse(&content, &path)?)
    }

    pub fn bundle_plugin(&self) -> Result<BuildPlugin> {
        let coordinate = Coordinate::bundle_plugin();
        self.descriptor()?
            .build
            .plugins
            .into_iter()
            .find(|p| p.coordinate == coordinate)
            .context("No bundle plugin in osgi-project.toml")
    }

    /// Text of `name` below the plugin's `instructions` element.
    pub fn instruction(&self, name: &str) -> Result<Option<String>> {
        let plugin = self.bundle_plugin()?;
        Ok(plugin
            .instructions()
            .and_then(|i| i.child_named(name))
            .and_then(|e| e.text())
            .map(str::to_string))
    }

    pub fn dependency(&self, group_id: &str, artifact_id: &str) -> Result<Option<Dependency>> {
        let coordinate = Coordinate::new(group_id, artifact_id);
        Ok(self.descriptor()?.dependencies.into_iter().find(|d| d.matches(&coordinate)))
    }

    /// Run `osgi` non-interactively against this project.
    pub fn run_osgi(&self, args: &[&str]) -> Result<CommandOutput> {
        let osgi_binary = env!("CARGO_BIN_EXE_osgi");
        let output = Command::new(osgi_binary)
            .args(args)
            .arg("--yes")
            .arg("--project")
            .arg(&self.project_dir)
            .arg("--config")
            .arg(&self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .context("Failed to run osgi command")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn assert_success(&self) -> &Self {
        assert!(self.success, "Command failed with code {:?}\nStderr: {}", self.code, self.stderr);
        self
    }

    pub fn assert_failure(&self) -> &Self {
        assert!(!self.success, "Command unexpectedly succeeded\nStdout: {}", self.stdout);
        self
    }

    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Expected stdout to contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Expected stderr to contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }
}
