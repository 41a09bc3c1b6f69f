//! Derived UI state
//!
//! Enabled/visible state that depends on other fields is modeled as a pure
//! function of the form, recomputed after every change, instead of
//! imperative enable/disable calls scattered through listeners.

use crate::control::FormState;

// ============================================================================
// DerivedKind
// ============================================================================

/// Which flag of the target control a derived rule drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedKind {
    /// Drives the control's enabled flag
    Enabled,
    /// Drives the control's visible flag
    Visible,
}

// ============================================================================
// DerivedRule
// ============================================================================

/// A pure predicate over the form mapped onto one control's flag.
///
/// The editor re-applies every derived rule after each value change, so a
/// checkbox-gated field follows its gate without any per-listener wiring.
pub struct DerivedRule {
    target: String,
    kind: DerivedKind,
    predicate: Box<dyn Fn(&FormState) -> bool>,
}

impl DerivedRule {
    /// The target control is enabled exactly when the predicate holds
    pub fn enabled_when(
        target: impl Into<String>,
        predicate: impl Fn(&FormState) -> bool + 'static,
    ) -> Self {
        Self {
            target: target.into(),
            kind: DerivedKind::Enabled,
            predicate: Box::new(predicate),
        }
    }

    /// The target control is visible exactly when the predicate holds
    pub fn visible_when(
        target: impl Into<String>,
        predicate: impl Fn(&FormState) -> bool + 'static,
    ) -> Self {
        Self {
            target: target.into(),
            kind: DerivedKind::Visible,
            predicate: Box::new(predicate),
        }
    }

    /// The control this rule drives
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Which flag this rule drives
    pub fn kind(&self) -> DerivedKind {
        self.kind
    }

    /// Recompute and apply this rule against current form state
    pub fn apply(&self, form: &mut FormState) {
        let on = (self.predicate)(form);
        match self.kind {
            DerivedKind::Enabled => form.set_enabled(&self.target, on),
            DerivedKind::Visible => form.set_visible(&self.target, on),
        }
    }
}

impl std::fmt::Debug for DerivedRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedRule")
            .field("target", &self.target)
            .field("kind", &self.kind)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_follows_gate_checkbox() {
        let rule = DerivedRule::enabled_when("schema", |form| form.flag("use_schema"));

        let mut form = FormState::new()
            .with_flag("use_schema", "Override Schema", false)
            .with_text("schema", "Schema");

        rule.apply(&mut form);
        assert!(!form.is_enabled("schema"));

        form.set_value("use_schema", true.into()).unwrap();
        rule.apply(&mut form);
        assert!(form.is_enabled("schema"));
    }

    #[test]
    fn test_visible_follows_choice() {
        let rule =
            DerivedRule::visible_when("pool", |form| form.choice("protocol") == Some("https"));

        let mut form = FormState::new()
            .with_choice("protocol", "Protocol", Some("http".to_string()))
            .with_text("pool", "Pool Size");

        rule.apply(&mut form);
        assert!(!form.is_visible("pool"));

        form.set_value("protocol", Some("https".to_string()).into())
            .unwrap();
        rule.apply(&mut form);
        assert!(form.is_visible("pool"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let rule = DerivedRule::enabled_when("schema", |form| form.flag("use_schema"));
        let mut form = FormState::new()
            .with_flag("use_schema", "Override Schema", true)
            .with_text("schema", "Schema");

        rule.apply(&mut form);
        let rev = form.revision();
        rule.apply(&mut form);
        // No flag change, no revision bump
        assert_eq!(form.revision(), rev);
    }
}
