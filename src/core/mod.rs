//! Core error types shared by every module.

pub mod error;
pub mod file_error;

pub use error::{ErrorContext, OsgiError, create_error_context, user_friendly_error};
pub use file_error::{FileOperation, FileOperationError, FileResultExt};
