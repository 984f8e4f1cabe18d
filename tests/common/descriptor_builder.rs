//! Fluent builder for `osgi-project.toml` contents
//!
//! ```rust,ignore
//! let descriptor = DescriptorBuilder::new("com.acme", "shop")
//!     .packaging("war")
//!     .dependency("com.acme", "foo", Some("1.0"), Some("compile"))
//!     .build();
//! ```

use std::fmt::Write;

pub struct DescriptorBuilder {
    group_id: String,
    artifact_id: String,
    packaging: String,
    base_package: Option<String>,
    capabilities: Option<Vec<String>>,
    dependencies: Vec<String>,
    plugins: Vec<String>,
}

impl DescriptorBuilder {
    pub fn new(group_id: &str, artifact_id: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            packaging: "jar".to_string(),
            base_package: None,
            capabilities: None,
            dependencies: Vec::new(),
            plugins: Vec::new(),
        }
    }

    pub fn packaging(mut self, packaging: &str) -> Self {
        self.packaging = packaging.to_string();
        self
    }

    pub fn base_package(mut self, package: &str) -> Self {
        self.base_package = Some(package.to_string());
        self
    }

    /// Declare capabilities instead of letting the tool detect them.
    pub fn capabilities(mut self, capabilities: &[&str]) -> Self {
        self.capabilities = Some(capabilities.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn dependency(mut self, group_id: &str, artifact_id: &str, version: Option<&str>, scope: Option<&str>) -> Self {
        let mut entry = format!("[[dependencies]]\ngroup_id = \"{group_id}\"\nartifact_id = \"{artifact_id}\"\n");
        if let Some(version) = version {
            let _ = writeln!(entry, "version = \"{version}\"");
        }
        if let Some(scope) = scope {
            let _ = writeln!(entry, "scope = \"{scope}\"");
        }
        self.dependencies.push(entry);
        self
    }

    /// Bundle plugin entry with an empty configuration.
    pub fn bundle_plugin(mut self) -> Self {
        self.plugins.push(
            "[[build.plugins]]\n\
             group_id = \"org.apache.felix\"\n\
             artifact_id = \"maven-bundle-plugin\"\n\
             extensions = true\n\
             \n\
             [build.plugins.configuration]\n\
             name = \"configuration\"\n"
                .to_string(),
        );
        self
    }

    pub fn build(&self) -> String {
        let mut out = String::from("[project]\n");
        let _ = writeln!(out, "group_id = \"{}\"", self.group_id);
        let _ = writeln!(out, "artifact_id = \"{}\"", self.artifact_id);
        out.push_str("version = \"1.0.0\"\n");
        let _ = writeln!(out, "packaging = \"{}\"", self.packaging);
        if let Some(base) = &self.base_package {
            let _ = writeln!(out, "base_package = \"{base}\"");
        }
        if let Some(capabilities) = &self.capabilities {
            let quoted: Vec<String> = capabilities.iter().map(|c| format!("\"{c}\"")).collect();
            let _ = writeln!(out, "capabilities = [{}]", quoted.join(", "));
        }
        for dependency in &self.dependencies {
            out.push('\n');
            out.push_str(dependency);
        }
        for plugin in &self.plugins {
            out.push('\n');
            out.push_str(plugin);
        }
        out
    }
}
