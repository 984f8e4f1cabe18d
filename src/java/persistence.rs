//! Saving and loading Java sources below `src/main/java`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::class::JavaClass;
use super::names::{split_qualified, validate_class_name, validate_package};
use crate::constants::JAVA_SOURCE_ROOT;
use crate::core::{FileOperation, FileResultExt, OsgiError};

/// Where generated classes go and where referenced classes come from.
pub trait SourcePersistence {
    /// Parse source text into a class. Fails on malformed source.
    fn parse_class(&self, text: &str) -> Result<JavaClass, OsgiError>;

    /// Persist `class` and return where it was written.
    fn save(&mut self, class: &JavaClass) -> Result<PathBuf>;

    /// Find an existing class by qualified name or by `.java` path.
    fn load_class(&self, reference: &str) -> Result<JavaClass>;
}

/// Sources on disk, laid out by package below `<project>/src/main/java`.
#[derive(Debug, Clone)]
pub struct FsSourcePersistence {
    project_root: PathBuf,
    source_root: PathBuf,
}

impl FsSourcePersistence {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let source_root = project_root.join(JAVA_SOURCE_ROOT);
        Self {
            project_root,
            source_root,
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    fn locate(&self, reference: &str) -> Result<PathBuf, OsgiError> {
        if reference.ends_with(".java") {
            let given = Path::new(reference);
            let candidates = if given.is_absolute() {
                vec![given.to_path_buf()]
            } else {
                vec![self.project_root.join(given), self.source_root.join(given), given.to_path_buf()]
            };
            return candidates.into_iter().find(|p| p.is_file()).ok_or_else(|| OsgiError::ClassNotFound {
                reference: reference.to_string(),
            });
        }

        let (package, class_name) = split_qualified(reference);
        validate_class_name(class_name)?;
        if !package.is_empty() {
            validate_package(package)?;
        }

        let mut path = self.source_root.clone();
        path.extend(package.split('.').filter(|s| !s.is_empty()));
        path.push(format!("{class_name}.java"));
        if path.is_file() {
            Ok(path)
        } else {
            debug!("No source at {}", path.display());
            Err(OsgiError::ClassNotFound {
                reference: reference.to_string(),
            })
        }
    }
}

impl SourcePersistence for FsSourcePersistence {
    fn parse_class(&self, text: &str) -> Result<JavaClass, OsgiError> {
        JavaClass::parse(text)
    }

    fn save(&mut self, class: &JavaClass) -> Result<PathBuf> {
        let path = self.source_root.join(class.relative_path());
        if path.exists() {
            warn!("Overwriting existing source {}", path.display());
        }
        crate::utils::atomic_write(&path, class.source().as_bytes())
            .with_context(|| format!("Failed to save class {}", class.qualified_name()))?;
        info!("Wrote {}", path.display());
        Ok(path)
    }

    fn load_class(&self, reference: &str) -> Result<JavaClass> {
        let path = self.locate(reference)?;
        let text = std::fs::read_to_string(&path).with_file_context(
            FileOperation::Read,
            &path,
            "reading a Java source file",
        )?;
        let class = JavaClass::parse(&text).with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!("Loaded {} from {}", class.qualified_name(), path.display());
        Ok(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SERVICE: &str = "package com.acme;\n\npublic class Service {\n    public void start() {\n    }\n    public void stop() {\n    }\n}\n";

    #[test]
    fn test_save_lays_out_by_package() {
        let temp = TempDir::new().unwrap();
        let mut persistence = FsSourcePersistence::new(temp.path());
        let class = persistence.parse_class(SERVICE).unwrap();

        let path = persistence.save(&class).unwrap();

        assert_eq!(path, temp.path().join("src/main/java/com/acme/Service.java"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), SERVICE);
    }

    #[test]
    fn test_load_by_qualified_name_and_path() {
        let temp = TempDir::new().unwrap();
        let mut persistence = FsSourcePersistence::new(temp.path());
        let class = persistence.parse_class(SERVICE).unwrap();
        persistence.save(&class).unwrap();

        let by_name = persistence.load_class("com.acme.Service").unwrap();
        assert_eq!(by_name.qualified_name(), "com.acme.Service");

        let by_path = persistence.load_class("src/main/java/com/acme/Service.java").unwrap();
        assert_eq!(by_path, by_name);

        let relative_to_sources = persistence.load_class("com/acme/Service.java").unwrap();
        assert_eq!(relative_to_sources.name(), "Service");
    }

    #[test]
    fn test_missing_class_is_class_not_found() {
        let temp = TempDir::new().unwrap();
        let persistence = FsSourcePersistence::new(temp.path());

        let err = persistence.load_class("com.acme.Missing").unwrap_err();
        assert!(matches!(err.downcast_ref::<OsgiError>(), Some(OsgiError::ClassNotFound { .. })));

        let err = persistence.load_class("Missing.java").unwrap_err();
        assert!(matches!(err.downcast_ref::<OsgiError>(), Some(OsgiError::ClassNotFound { .. })));
    }

    #[test]
    fn test_malformed_reference_rejected() {
        let temp = TempDir::new().unwrap();
        let persistence = FsSourcePersistence::new(temp.path());

        let err = persistence.load_class("com.acme.not a class").unwrap_err();
        assert!(matches!(err.downcast_ref::<OsgiError>(), Some(OsgiError::InvalidClassName { .. })));
    }

    #[test]
    fn test_parse_failure_surfaces() {
        let temp = TempDir::new().unwrap();
        let persistence = FsSourcePersistence::new(temp.path());

        let err = persistence.parse_class("package a;\nclass A {").unwrap_err();
        assert!(matches!(err, OsgiError::SourceParseError { .. }));
    }
}
