//! Structured file system errors.
//!
//! Captures what was being done to which file, and why, at the call site, so
//! the CLI can print something better than a bare `No such file or directory`.

use std::path::PathBuf;
use thiserror::Error;

/// Types of file operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    /// Reading a file completely
    Read,
    /// Writing a file
    Write,
    /// Creating a directory
    CreateDir,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Read => write!(f, "reading"),
            FileOperation::Write => write!(f, "writing"),
            FileOperation::CreateDir => write!(f, "creating directory"),
        }
    }
}

/// File operation error with the context it happened in
#[derive(Error, Debug)]
#[error("File operation failed: {operation} {file_path}")]
pub struct FileOperationError {
    /// The type of operation that failed
    pub operation: FileOperation,
    /// The file path that was being accessed
    pub file_path: PathBuf,
    /// Why the file was being accessed
    pub purpose: String,
    /// The underlying IO error
    #[source]
    pub source: std::io::Error,
}

impl FileOperationError {
    /// Get a user-friendly error message with context
    pub fn user_message(&self) -> String {
        let mut message = format!(
            "Failed {} '{}' while {}",
            self.operation,
            self.file_path.display(),
            self.purpose
        );

        match self.source.kind() {
            std::io::ErrorKind::NotFound => {
                message.push_str("\n\nThe file does not exist at the specified path.");
                if self.file_path.extension().and_then(|s| s.to_str()) == Some("java") {
                    message.push_str(
                        "\nJava sources are looked up below src/main/java using the package path.",
                    );
                }
            }
            std::io::ErrorKind::PermissionDenied => {
                message.push_str(&format!(
                    "\n\nPermission denied. Check file/directory permissions for: {}",
                    self.file_path.display()
                ));
            }
            _ => {
                message.push_str(&format!("\n\nError details: {}", self.source));
            }
        }

        message
    }
}

/// Extension trait for Result types to add file operation context
pub trait FileResultExt<T> {
    /// Add file operation context to a Result
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError>;
}

impl<T> FileResultExt<T> for Result<T, std::io::Error> {
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError> {
        self.map_err(|source| FileOperationError {
            operation,
            file_path: file_path.into(),
            purpose: purpose.into(),
            source,
        })
    }
}
