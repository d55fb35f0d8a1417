//! Error types for prdenv operations.
//!
//! This module defines [`PrdEnvError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PrdEnvError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PrdEnvError::Other`) for unexpected errors
//! - Probe failures and catalog lookup misses are *values*, not errors: a
//!   missing tool degrades to `installed: false` and an unknown framework
//!   renders as a descriptive message

use thiserror::Error;

/// Core error type for prdenv operations.
#[derive(Debug, Error)]
pub enum PrdEnvError {
    /// The embedded framework catalog asset is missing.
    #[error("Framework catalog not found: {path}")]
    CatalogNotFound { path: String },

    /// The embedded framework catalog failed to parse.
    #[error("Failed to parse framework catalog at {path}: {message}")]
    CatalogParseError { path: String, message: String },

    /// The framework catalog violates a structural invariant.
    #[error("Invalid framework catalog: {message}")]
    CatalogValidationError { message: String },

    /// A shell command could not be spawned at all.
    #[error("Command failed to start: {command}")]
    CommandSpawnError { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for prdenv operations.
pub type Result<T> = std::result::Result<T, PrdEnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_not_found_displays_path() {
        let err = PrdEnvError::CatalogNotFound {
            path: "catalog/frameworks.yml".into(),
        };
        assert!(err.to_string().contains("catalog/frameworks.yml"));
    }

    #[test]
    fn catalog_parse_error_displays_path_and_message() {
        let err = PrdEnvError::CatalogParseError {
            path: "catalog/frameworks.yml".into(),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("catalog/frameworks.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn catalog_validation_error_displays_message() {
        let err = PrdEnvError::CatalogValidationError {
            message: "unknown platform key".into(),
        };
        assert!(err.to_string().contains("unknown platform key"));
    }

    #[test]
    fn command_spawn_error_displays_command() {
        let err = PrdEnvError::CommandSpawnError {
            command: "mysql --version".into(),
        };
        assert!(err.to_string().contains("mysql --version"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PrdEnvError = io_err.into();
        assert!(matches!(err, PrdEnvError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PrdEnvError::CatalogValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
