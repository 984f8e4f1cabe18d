//! Error handling for the OSGi bundle tooling
//!
//! Two layers, the same way every command reports failure:
//! - [`OsgiError`] - strongly typed failure cases raised by the packaging code
//! - [`ErrorContext`] - the error plus details and a suggestion for the operator
//!
//! Commands return `anyhow::Result` and attach context at I/O boundaries. The
//! binary converts whatever comes back through [`user_friendly_error`] and
//! prints it with colours.
//!
//! Element lookups that find nothing are not errors: the configuration tree
//! answers them with `None`, and the merger uses that to choose between
//! creating a container and appending to it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use osgi_plugin::core::{OsgiError, user_friendly_error};
//!
//! let err = anyhow::Error::from(OsgiError::ConfigurationUnavailable {
//!     plugin: "org.apache.felix:maven-bundle-plugin".to_string(),
//! });
//! let ctx = user_friendly_error(err);
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use super::file_error::FileOperationError;

/// The main error type for bundle packaging operations
///
/// Every variant is fatal to the command that raised it. Nothing is retried;
/// the operator fixes the cause and runs the command again.
#[derive(Error, Debug, Clone)]
pub enum OsgiError {
    /// The persisted bundle plugin configuration cannot be located
    ///
    /// Raised by `add-service-component` and by the activator path of
    /// `install-felix-dm`, which both edit a configuration written by an
    /// earlier `setup`.
    #[error("Bundle plugin configuration for '{plugin}' is not available")]
    ConfigurationUnavailable {
        /// Coordinate of the plugin that was looked up
        plugin: String,
    },

    /// Generated source text could not be parsed into a class
    #[error("Generated source does not parse: {reason}")]
    SourceParseError {
        /// What the structural parser choked on
        reason: String,
    },

    /// Template rendering failed
    #[error("Failed to render template '{template}': {reason}")]
    TemplateError {
        /// Template identifier
        template: String,
        /// Renderer message
        reason: String,
    },

    /// A file system operation failed
    #[error("File system error: {operation} {path}")]
    FileSystemError {
        /// What was being done
        operation: String,
        /// Path involved
        path: String,
        /// Underlying reason
        reason: String,
    },

    /// Project descriptor missing
    #[error("Project descriptor not found: {path}")]
    DescriptorNotFound {
        /// Expected location of the descriptor
        path: String,
    },

    /// Project descriptor cannot be parsed
    #[error("Invalid project descriptor syntax in {file}")]
    DescriptorParseError {
        /// Descriptor path
        file: String,
        /// Parser message
        reason: String,
    },

    /// A class referenced on the command line does not exist
    #[error("Class '{reference}' not found")]
    ClassNotFound {
        /// Qualified name or path given by the operator
        reference: String,
    },

    /// Not a valid Java package name
    #[error("Invalid package name: '{name}'")]
    InvalidPackageName {
        /// Rejected input
        name: String,
    },

    /// Not a valid Java class name
    #[error("Invalid class name: '{name}'")]
    InvalidClassName {
        /// Rejected input
        name: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl From<FileOperationError> for OsgiError {
    fn from(err: FileOperationError) -> Self {
        Self::FileSystemError {
            operation: err.operation.to_string(),
            path: err.file_path.display().to_string(),
            reason: err.source.to_string(),
        }
    }
}

/// An error together with operator-facing details and a suggestion
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: OsgiError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wrap an error without details or suggestion
    #[must_use]
    pub const fn new(error: OsgiError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] for display
///
/// Walks the `anyhow` chain looking for an [`OsgiError`] or a
/// [`FileOperationError`]; anything else is reported verbatim with the full
/// context chain as details.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(osgi_error) = cause.downcast_ref::<OsgiError>() {
            return create_error_context(osgi_error);
        }
        if let Some(file_error) = cause.downcast_ref::<FileOperationError>() {
            return ErrorContext::new(OsgiError::FileSystemError {
                operation: file_error.operation.to_string(),
                path: file_error.file_path.display().to_string(),
                reason: file_error.source.to_string(),
            })
            .with_details(file_error.user_message());
        }
    }

    let details = error.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>().join(": ");
    let ctx = ErrorContext::new(OsgiError::Other {
        message: error.to_string(),
    });
    if details.is_empty() { ctx } else { ctx.with_details(details) }
}

/// Attach the standard details and suggestion for a given error
pub fn create_error_context(error: &OsgiError) -> ErrorContext {
    let ctx = ErrorContext::new(error.clone());
    match error {
        OsgiError::ConfigurationUnavailable { .. } => ctx
            .with_suggestion("Run 'osgi setup' first to create the bundle plugin configuration")
            .with_details("This command edits an existing bundle plugin entry in osgi-project.toml"),
        OsgiError::SourceParseError { .. } => ctx
            .with_suggestion("Check the package and class names you entered")
            .with_details("The rendered template was not a well-formed Java class"),
        OsgiError::TemplateError { template, .. } => ctx
            .with_details(format!("Template '{template}' is embedded in the binary")),
        OsgiError::FileSystemError { reason, .. } => ctx
            .with_suggestion("Check that the project directory is writable")
            .with_details(reason.clone()),
        OsgiError::DescriptorNotFound { .. } => ctx
            .with_suggestion("Run the command from a project directory or pass --project <dir>")
            .with_details("Every project keeps its build descriptor in osgi-project.toml"),
        OsgiError::DescriptorParseError { reason, .. } => ctx
            .with_suggestion("Fix the TOML syntax in osgi-project.toml")
            .with_details(reason.clone()),
        OsgiError::ClassNotFound { .. } => ctx
            .with_suggestion("Pass a fully qualified class name or a path to a .java file")
            .with_details("Classes are resolved below src/main/java"),
        OsgiError::InvalidPackageName { .. } => ctx
            .with_suggestion("Use dot-separated Java identifiers, e.g. com.acme.osgi"),
        OsgiError::InvalidClassName { .. } => ctx
            .with_suggestion("Use a Java identifier starting with a letter, e.g. Activator"),
        OsgiError::ConfigError { .. } => ctx
            .with_suggestion(format!(
                "Check ~/.osgi/config.toml or the file named by {}",
                crate::constants::CONFIG_PATH_ENV
            )),
        OsgiError::Other { .. } => ctx,
    }
}
