//! Error types for Warden Console
//!
//! This module provides unified error handling across the entire console,
//! including validation errors, admin service errors, IO errors, and
//! serialization errors.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for Warden Console
#[derive(Debug, Error)]
pub enum ConsoleError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A single form field failed validation
    #[error("{field}: {message}")]
    FieldValidation { field: String, message: String },

    /// Entity-level validation failed
    #[error("{kind} '{name}' is invalid: {message}")]
    EntityValidation {
        kind: String,
        name: String,
        message: String,
    },

    // ========================================================================
    // Form Binding Errors
    // ========================================================================
    /// A binding or rule referenced a control that was never registered.
    /// This indicates a programming defect in the editor wiring, not bad
    /// user input.
    #[error("Control '{0}' is not registered on this form")]
    ControlNotFound(String),

    // ========================================================================
    // Admin Service Errors
    // ========================================================================
    /// Listen port not found
    #[error("Listen port not found: {0}")]
    ListenPortNotFound(Uuid),

    /// JDBC connection not found
    #[error("JDBC connection not found: {0}")]
    JdbcConnectionNotFound(Uuid),

    /// Another entity of the same kind already uses this name
    #[error("Duplicate {kind} name: '{name}' already exists")]
    DuplicateName { kind: String, name: String },

    /// The current user lacks permission for the attempted operation
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// An admin service call failed
    #[error("Admin service failure: {0}")]
    AdminFailure(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Configuration file not found
    #[error("Configuration file not found at path: {0}")]
    ConfigNotFound(PathBuf),

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Invalid configuration file format
    #[error("Invalid configuration file format: {0}")]
    InvalidConfigFormat(String),

    /// Schema version mismatch
    #[error("Schema version mismatch: expected {expected}, found {found}")]
    SchemaVersionMismatch { expected: u32, found: u32 },

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Operation cancelled by user
    #[error("Operation cancelled")]
    Cancelled,

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl ConsoleError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ConsoleError::Validation(msg.into())
    }

    /// Create a field validation error
    pub fn field_validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        ConsoleError::FieldValidation {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create an entity validation error
    pub fn entity_validation(
        kind: impl Into<String>,
        name: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        ConsoleError::EntityValidation {
            kind: kind.into(),
            name: name.into(),
            message: msg.into(),
        }
    }

    /// Create a duplicate-name error
    pub fn duplicate_name(kind: impl Into<String>, name: impl Into<String>) -> Self {
        ConsoleError::DuplicateName {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create an admin failure error
    pub fn admin(msg: impl Into<String>) -> Self {
        ConsoleError::AdminFailure(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        ConsoleError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        ConsoleError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConsoleError::Validation(_)
                | ConsoleError::FieldValidation { .. }
                | ConsoleError::EntityValidation { .. }
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConsoleError::ListenPortNotFound(_)
                | ConsoleError::JdbcConnectionNotFound(_)
                | ConsoleError::ConfigNotFound(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ConsoleError::Io(_) | ConsoleError::FileRead { .. } | ConsoleError::FileWrite { .. }
        )
    }
}

/// Result type alias using ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> ConsoleResult<T>;
}

impl<T, E: Into<ConsoleError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> ConsoleResult<T> {
        self.map_err(|e| {
            let err: ConsoleError = e.into();
            ConsoleError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error() {
        let err = ConsoleError::validation("Name is required");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Validation error: Name is required");
    }

    #[test]
    fn test_field_validation_error() {
        let err = ConsoleError::field_validation("Port", "must be a number");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Port: must be a number");
    }

    #[test]
    fn test_entity_validation_error() {
        let err = ConsoleError::entity_validation("listen port", "Default HTTP", "port in use");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "listen port 'Default HTTP' is invalid: port in use"
        );
    }

    #[test]
    fn test_not_found_errors() {
        let id = Uuid::new_v4();
        let err = ConsoleError::ListenPortNotFound(id);
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), format!("Listen port not found: {}", id));
    }

    #[test]
    fn test_duplicate_name_error() {
        let err = ConsoleError::duplicate_name("JDBC connection", "OracleDev");
        assert_eq!(
            err.to_string(),
            "Duplicate JDBC connection name: 'OracleDev' already exists"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = ConsoleError::with_context("Saving configuration", "Permission denied");
        assert_eq!(err.to_string(), "Saving configuration: Permission denied");
    }

    #[test]
    fn test_control_not_found() {
        let err = ConsoleError::ControlNotFound("port".to_string());
        assert_eq!(
            err.to_string(),
            "Control 'port' is not registered on this form"
        );
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConsoleError = io_err.into();
        assert!(err.is_io());
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_context("Writing config").unwrap_err();
        assert!(err.to_string().starts_with("Writing config:"));
    }
}
