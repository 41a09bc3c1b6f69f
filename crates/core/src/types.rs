//! Core types used throughout Warden Console
//!
//! This module contains the fundamental types shared by the form engine,
//! the configuration model, and the admin service layer.

use serde::{Deserialize, Serialize};

// ============================================================================
// Control Values
// ============================================================================

/// The current value of a single form control.
///
/// This is the headless analogue of widget state: text fields and text
/// areas carry `Text`, checkboxes and toggles carry `Flag`, combo boxes
/// carry `Choice` (the selected option key, if any). Numeric fields carry
/// their raw text so that validation rules, not the control, decide what
/// counts as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ControlValue {
    /// Free-form text (text field, text area, numeric field)
    Text(String),
    /// Boolean state (checkbox, toggle)
    Flag(bool),
    /// Combo box selection, `None` when nothing is selected
    Choice(Option<String>),
}

impl ControlValue {
    /// Empty text value
    pub fn empty() -> Self {
        ControlValue::Text(String::new())
    }

    /// Try to get as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ControlValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Try to get as boolean flag
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ControlValue::Flag(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as a combo selection
    pub fn as_choice(&self) -> Option<Option<&str>> {
        match self {
            ControlValue::Choice(v) => Some(v.as_deref()),
            _ => None,
        }
    }

    /// Check if this is a text value
    pub fn is_text(&self) -> bool {
        matches!(self, ControlValue::Text(_))
    }

    /// Check if this is a flag value
    pub fn is_flag(&self) -> bool {
        matches!(self, ControlValue::Flag(_))
    }

    /// Check if this is a choice value
    pub fn is_choice(&self) -> bool {
        matches!(self, ControlValue::Choice(_))
    }
}

impl Default for ControlValue {
    fn default() -> Self {
        ControlValue::empty()
    }
}

impl From<String> for ControlValue {
    fn from(v: String) -> Self {
        ControlValue::Text(v)
    }
}

impl From<&str> for ControlValue {
    fn from(v: &str) -> Self {
        ControlValue::Text(v.to_string())
    }
}

impl From<bool> for ControlValue {
    fn from(v: bool) -> Self {
        ControlValue::Flag(v)
    }
}

impl From<Option<String>> for ControlValue {
    fn from(v: Option<String>) -> Self {
        ControlValue::Choice(v)
    }
}

// ============================================================================
// Entity Kinds
// ============================================================================

/// The kinds of configuration entities the console manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A gateway listen port
    ListenPort,
    /// A JDBC connection
    JdbcConnection,
}

impl EntityKind {
    /// Get a user-friendly display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::ListenPort => "Listen Port",
            EntityKind::JdbcConnection => "JDBC Connection",
        }
    }

    /// Get the lower-case name used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::ListenPort => "listen port",
            EntityKind::JdbcConnection => "JDBC connection",
        }
    }

    /// Get all entity kinds
    pub fn all() -> &'static [EntityKind] {
        &[EntityKind::ListenPort, EntityKind::JdbcConnection]
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
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
    fn test_control_value_from() {
        let v: ControlValue = "8080".into();
        assert_eq!(v.as_text(), Some("8080"));
        assert!(v.is_text());

        let v: ControlValue = true.into();
        assert_eq!(v.as_flag(), Some(true));
        assert!(v.is_flag());

        let v: ControlValue = Some("https".to_string()).into();
        assert_eq!(v.as_choice(), Some(Some("https")));
        assert!(v.is_choice());
    }

    #[test]
    fn test_control_value_empty() {
        let v = ControlValue::empty();
        assert_eq!(v.as_text(), Some(""));
        assert_eq!(v, ControlValue::default());
    }

    #[test]
    fn test_control_value_type_mismatch() {
        let v = ControlValue::Flag(true);
        assert_eq!(v.as_text(), None);
        assert_eq!(v.as_choice(), None);
    }

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::ListenPort.display_name(), "Listen Port");
        assert_eq!(EntityKind::JdbcConnection.label(), "JDBC connection");
        assert_eq!(EntityKind::all().len(), 2);
    }
}
