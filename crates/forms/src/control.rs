//! Form state and named controls
//!
//! This module provides the headless control model: a form is an ordered
//! collection of named controls, each holding a value plus derived
//! enabled/visible flags. A revision counter bumps on every change and is
//! the single trigger for reactive revalidation.

use serde::{Deserialize, Serialize};
use warden_core::{ConsoleError, ConsoleResult, ControlValue};

// ============================================================================
// Control
// ============================================================================

/// A single named control on a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    /// Stable identifier used by bindings, rules, and the UI layer
    id: String,

    /// Human-readable label used in validation messages
    label: String,

    /// Current value
    value: ControlValue,

    /// Whether the control accepts input
    enabled: bool,

    /// Whether the control is shown at all
    visible: bool,
}

impl Control {
    /// Create a new control with the given initial value
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: ControlValue) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value,
            enabled: true,
            visible: true,
        }
    }

    /// Get the control identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the current value
    pub fn value(&self) -> &ControlValue {
        &self.value
    }

    /// Whether the control accepts input
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the control is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

// ============================================================================
// FormState
// ============================================================================

/// The live state of one form: registration-ordered named controls.
///
/// Controls are registered once when the editor is constructed and mutated
/// through [`set_value`](FormState::set_value) in response to user input.
/// Every mutation bumps [`revision`](FormState::revision), which the UI
/// layer uses as its re-render/revalidate signal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormState {
    /// Controls in registration order
    controls: Vec<Control>,

    /// Bumped on every value or flag change
    revision: u64,
}

impl FormState {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Registration (builder methods)
    // ========================================================================

    /// Register a text control
    pub fn with_text(self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.register(Control::new(id, label, ControlValue::empty()))
    }

    /// Register a flag (checkbox) control
    pub fn with_flag(self, id: impl Into<String>, label: impl Into<String>, initial: bool) -> Self {
        self.register(Control::new(id, label, ControlValue::Flag(initial)))
    }

    /// Register a choice (combo box) control
    pub fn with_choice(
        self,
        id: impl Into<String>,
        label: impl Into<String>,
        initial: Option<String>,
    ) -> Self {
        self.register(Control::new(id, label, ControlValue::Choice(initial)))
    }

    fn register(mut self, control: Control) -> Self {
        if self.controls.iter().any(|c| c.id == control.id) {
            tracing::warn!("control '{}' registered twice; keeping first", control.id);
            return self;
        }
        self.controls.push(control);
        self
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Get a control by id
    pub fn get(&self, id: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    /// Get a control by id, or a `ControlNotFound` error.
    ///
    /// Used by bindings, where a missing control indicates an editor wiring
    /// defect rather than bad user input.
    pub fn require(&self, id: &str) -> ConsoleResult<&Control> {
        self.get(id)
            .ok_or_else(|| ConsoleError::ControlNotFound(id.to_string()))
    }

    /// Check whether a control is registered
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All controls, in registration order
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Number of registered controls
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Check if no controls are registered
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Current revision; bumped on every change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ========================================================================
    // Value accessors
    // ========================================================================

    /// Text of a control, or `""` if missing or not a text control
    pub fn text(&self, id: &str) -> &str {
        self.get(id)
            .and_then(|c| c.value.as_text())
            .unwrap_or_default()
    }

    /// Trimmed text of a control
    pub fn trimmed(&self, id: &str) -> &str {
        self.text(id).trim()
    }

    /// Flag state of a control, or `false` if missing or not a flag
    pub fn flag(&self, id: &str) -> bool {
        self.get(id)
            .and_then(|c| c.value.as_flag())
            .unwrap_or(false)
    }

    /// Combo selection of a control, or `None` if missing or unselected
    pub fn choice(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|c| c.value.as_choice()).flatten()
    }

    /// Label of a control, falling back to its id
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|c| c.label()).unwrap_or(id)
    }

    /// Whether a control is enabled (missing controls report `false`)
    pub fn is_enabled(&self, id: &str) -> bool {
        self.get(id).map(|c| c.enabled).unwrap_or(false)
    }

    /// Whether a control is visible (missing controls report `false`)
    pub fn is_visible(&self, id: &str) -> bool {
        self.get(id).map(|c| c.visible).unwrap_or(false)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Set a control's value, bumping the revision
    pub fn set_value(&mut self, id: &str, value: ControlValue) -> ConsoleResult<()> {
        let control = self
            .controls
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ConsoleError::ControlNotFound(id.to_string()))?;
        control.value = value;
        self.revision += 1;
        Ok(())
    }

    /// Set a control's enabled flag; unknown ids are ignored
    pub fn set_enabled(&mut self, id: &str, enabled: bool) {
        if let Some(control) = self.controls.iter_mut().find(|c| c.id == id) {
            if control.enabled != enabled {
                control.enabled = enabled;
                self.revision += 1;
            }
        }
    }

    /// Set a control's visible flag; unknown ids are ignored
    pub fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(control) = self.controls.iter_mut().find(|c| c.id == id) {
            if control.visible != visible {
                control.visible = visible;
                self.revision += 1;
            }
        }
    }

    /// Disable every control (used by read-only editors)
    pub fn disable_all(&mut self) {
        for control in &mut self.controls {
            control.enabled = false;
        }
        self.revision += 1;
    }
}

// ============================================================================
// Tests
// ============================================================================
