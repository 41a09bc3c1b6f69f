//! Core traits for Warden Console
//!
//! This module defines the fundamental traits that components throughout
//! the console implement to provide consistent behavior for property
//! editing, validation, and persistence.

use crate::error::ConsoleResult;
use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// PropertyEditor Trait
// ============================================================================

/// Uniform lifecycle for editing one configuration bean through a form.
///
/// Implementations bind a model object's fields to interactive controls in
/// both directions. The editor itself never talks to admin services or the
/// network; after the dialog closes the caller checks [`is_confirmed`] and,
/// if true, retrieves the edited model via [`get_data`] and persists it.
///
/// [`is_confirmed`]: PropertyEditor::is_confirmed
/// [`get_data`]: PropertyEditor::get_data
///
/// # Example
///
/// ```rust,ignore
/// let mut editor = build_listen_port_editor();
/// editor.set_data(&port);
/// // ... user interaction ...
/// if editor.is_confirmed() {
///     let edited = editor.get_data(&port)?;
///     registry.listen_ports().save(edited)?;
/// }
/// ```
pub trait PropertyEditor<T> {
    /// Populate all bound controls from the model's current values.
    ///
    /// Must be idempotent and side-effect-free beyond form state.
    fn set_data(&mut self, model: &T);

    /// Read current control values into a copy of the model.
    ///
    /// Returns a validation error carrying a human-readable message if any
    /// control's content is semantically invalid (unparsable number,
    /// out-of-range value). The input model is never mutated.
    fn get_data(&self, model: &T) -> ConsoleResult<T>;

    /// True only if the user activated the affirmative action while
    /// validation passed at that moment.
    fn is_confirmed(&self) -> bool;

    /// Whether this editor was opened in read-only mode
    fn is_read_only(&self) -> bool {
        false
    }
}

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `ConsoleError` describing the problem.
    fn validate(&self) -> ConsoleResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Persistable Trait
// ============================================================================

/// Trait for types that can be serialized to and deserialized from files
///
/// Types implementing this trait can be saved to and loaded from
/// configuration files (JSON format).
pub trait Persistable: Serialize + DeserializeOwned + Sized {
    /// Get the file extension for this type (without the dot)
    fn file_extension() -> &'static str;

    /// Get the schema version for migration purposes
    fn schema_version() -> u32 {
        1
    }

    /// Save to a JSON string
    fn to_json(&self) -> ConsoleResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Load from a JSON string
    fn from_json(json: &str) -> ConsoleResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Save to a file
    fn save_to_file(&self, path: &std::path::Path) -> ConsoleResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| crate::error::ConsoleError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from a file
    fn load_from_file(path: &std::path::Path) -> ConsoleResult<Self> {
        let json =
            std::fs::read_to_string(path).map_err(|e| crate::error::ConsoleError::FileRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::from_json(&json)
    }
}

// ============================================================================
// Identifiable Trait
// ============================================================================

/// Trait for types that have a unique identifier
///
/// Types implementing this trait have a UUID-based identifier
/// that can be used for lookups and references.
pub trait Identifiable {
    /// Get the unique identifier
    fn id(&self) -> uuid::Uuid;

    /// Check if this matches another identifier
    fn matches_id(&self, id: uuid::Uuid) -> bool {
        self.id() == id
    }
}

// ============================================================================
// Named Trait
// ============================================================================

/// Trait for types that have a name
///
/// Types implementing this trait have a human-readable name
/// that can be displayed in the UI.
pub trait Named {
    /// Get the name
    fn name(&self) -> &str;

    /// Set the name
    fn set_name(&mut self, name: String);

    /// Check if the name matches (case-insensitive)
    fn name_matches(&self, other: &str) -> bool {
        self.name().eq_ignore_ascii_case(other)
    }
}

// ============================================================================
// Timestamped Trait
// ============================================================================

/// Trait for types that track creation and modification times
pub trait Timestamped {
    /// Get the creation timestamp
    fn created_at(&self) -> chrono::DateTime<chrono::Utc>;

    /// Get the last modification timestamp
    fn modified_at(&self) -> chrono::DateTime<chrono::Utc>;

    /// Update the modification timestamp to now
    fn touch(&mut self);
}

// ============================================================================
// Tests
// ============================================================================
