//! Generic form editor
//!
//! [`FormEditor`] composes a form, a binding list, a validation aggregator,
//! and derived-state rules into one object satisfying the
//! [`PropertyEditor`] contract. Concrete dialogs are factory functions that
//! declare controls, bindings, and rules; there is no editor subclassing.

use crate::binding::FieldBinding;
use crate::control::FormState;
use crate::derived::DerivedRule;
use crate::validator::InputValidator;
use warden_core::{ConsoleResult, ControlValue, PropertyEditor};

// ============================================================================
// FormEditor
// ============================================================================

/// A complete bean editor: form state + bindings + validator + derived rules.
///
/// The lifecycle mirrors every properties dialog in the console:
///
/// 1. construct via a dialog-specific factory,
/// 2. `set_data(&bean)` to populate controls,
/// 3. feed user input through [`set_value`](FormEditor::set_value) (each
///    change synchronously recomputes derived enabled/visible state, and
///    validity is always read live),
/// 4. the submit control's enabled state is
///    [`submit_enabled`](FormEditor::submit_enabled),
/// 5. on activation, [`submit`](FormEditor::submit) runs the success path
///    only while valid and marks the editor confirmed,
/// 6. after the dialog closes, the caller checks
///    [`is_confirmed`](FormEditor::is_confirmed) and persists
///    [`get_data`](PropertyEditor::get_data)'s result.
pub struct FormEditor<T> {
    form: FormState,
    validator: InputValidator,
    bindings: Vec<FieldBinding<T>>,
    derived: Vec<DerivedRule>,
    confirmed: bool,
    read_only: bool,
}

impl<T: Clone> FormEditor<T> {
    /// Create an editor over the given form and validator
    pub fn new(form: FormState, validator: InputValidator) -> Self {
        Self {
            form,
            validator,
            bindings: Vec::new(),
            derived: Vec::new(),
            confirmed: false,
            read_only: false,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Add a field binding
    pub fn with_binding(mut self, binding: FieldBinding<T>) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Add a derived-state rule
    pub fn with_derived(mut self, rule: DerivedRule) -> Self {
        self.derived.push(rule);
        self
    }

    /// Open the editor read-only: every control is disabled and submission
    /// is a no-op
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.form.disable_all();
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current form state
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The validation aggregator
    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    /// True iff every validation rule passes against live control state
    pub fn is_valid(&self) -> bool {
        self.validator.is_valid(&self.form)
    }

    /// First failing rule's message, in registration order
    pub fn first_error(&self) -> Option<String> {
        self.validator.first_error(&self.form)
    }

    /// Whether the submit control should be enabled right now.
    ///
    /// Always equals `is_valid()` for writable editors; read-only editors
    /// never enable submission.
    pub fn submit_enabled(&self) -> bool {
        !self.read_only && self.is_valid()
    }

    // ========================================================================
    // Interaction
    // ========================================================================

    /// Apply a user edit to one control.
    ///
    /// Derived enabled/visible state is recomputed synchronously; the next
    /// validity read reflects the new value. Read-only editors ignore
    /// edits.
    pub fn set_value(&mut self, control: &str, value: ControlValue) -> ConsoleResult<()> {
        if self.read_only {
            return Ok(());
        }
        self.form.set_value(control, value)?;
        self.refresh_derived();
        Ok(())
    }

    /// Activate the submit action.
    ///
    /// The success callback receives the edited model and runs only when
    /// activation happens while the form is valid; activating while invalid
    /// is a guarded no-op returning `Ok(false)`. The editor is marked
    /// confirmed only after the callback succeeds.
    pub fn submit<F>(&mut self, base: &T, on_success: F) -> ConsoleResult<bool>
    where
        F: FnOnce(T) -> ConsoleResult<()>,
    {
        if !self.submit_enabled() {
            return Ok(false);
        }
        let edited = self.get_data(base)?;
        on_success(edited)?;
        self.confirmed = true;
        Ok(true)
    }

    fn refresh_derived(&mut self) {
        for rule in &self.derived {
            rule.apply(&mut self.form);
        }
    }
}

impl<T: Clone> PropertyEditor<T> for FormEditor<T> {
    fn set_data(&mut self, model: &T) {
        for binding in &self.bindings {
            if let Err(e) = binding.populate(&mut self.form, model) {
                // A populate failure is an editor wiring defect; surface it
                // in the log rather than poisoning the dialog.
                tracing::warn!("populate failed for '{}': {}", binding.control(), e);
            }
        }
        if self.read_only {
            self.form.disable_all();
        } else {
            self.refresh_derived();
        }
    }

    fn get_data(&self, model: &T) -> ConsoleResult<T> {
        let mut edited = model.clone();
        for binding in &self.bindings {
            binding.apply_to(&self.form, &mut edited)?;
        }
        Ok(edited)
    }

    fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }
}

impl<T> std::fmt::Debug for FormEditor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEditor")
            .field("controls", &self.form.len())
            .field("bindings", &self.bindings.len())
            .field("confirmed", &self.confirmed)
            .field("read_only", &self.read_only)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct Account {
        name: String,
        timeout: u32,
        audited: bool,
    }

    fn sample_account() -> Account {
        Account {
            name: "gateway-admin".to_string(),
            timeout: 30,
            audited: true,
        }
    }

    /// The factory idiom used by the real dialogs
    fn build_editor() -> FormEditor<Account> {
        let form = FormState::new()
            .with_text("name", "Account Name")
            .with_text("timeout", "Timeout")
            .with_flag("audited", "Audited", false);

        let validator = InputValidator::new("Account Properties")
            .constrain_required("name", "Account Name")
            .constrain_number_range("timeout", "Timeout", 1, 99);

        FormEditor::new(form, validator)
            .with_binding(FieldBinding::text(
                "name",
                |a: &Account| a.name.clone(),
                |a, v| a.name = v,
            ))
            .with_binding(FieldBinding::number(
                "timeout",
                "Timeout",
                |a: &Account| a.timeout,
                |a, v| a.timeout = v,
            ))
            .with_binding(FieldBinding::flag(
                "audited",
                |a: &Account| a.audited,
                |a, v| a.audited = v,
            ))
            .with_derived(DerivedRule::enabled_when("timeout", |form| {
                form.flag("audited")
            }))
    }

    #[test]
    fn test_set_data_get_data_round_trip() {
        let mut editor = build_editor();
        let account = sample_account();

        editor.set_data(&account);
        let out = editor.get_data(&account).unwrap();
        assert_eq!(out, account);
    }

    #[test]
    fn test_set_data_is_idempotent() {
        let mut editor = build_editor();
        let account = sample_account();

        editor.set_data(&account);
        editor.set_data(&account);
        assert_eq!(editor.get_data(&account).unwrap(), account);
    }

    #[test]
    fn test_get_data_does_not_mutate_input() {
        let mut editor = build_editor();
        let account = sample_account();
        editor.set_data(&account);
        editor.set_value("name", "renamed".into()).unwrap();

        let out = editor.get_data(&account).unwrap();
        assert_eq!(out.name, "renamed");
        assert_eq!(account.name, "gateway-admin");
    }

    #[test]
    fn test_submit_enabled_equals_validity() {
        let mut editor = build_editor();
        editor.set_data(&sample_account());
        assert!(editor.submit_enabled());

        editor.set_value("name", "".into()).unwrap();
        assert!(!editor.is_valid());
        assert!(!editor.submit_enabled());

        editor.set_value("name", "restored".into()).unwrap();
        assert!(editor.submit_enabled());
    }

    #[test]
    fn test_submit_while_invalid_never_runs_callback() {
        let mut editor = build_editor();
        let account = sample_account();
        editor.set_data(&account);
        editor.set_value("timeout", "0".into()).unwrap();

        let invoked = Rc::new(Cell::new(false));
        let seen = invoked.clone();
        let accepted = editor
            .submit(&account, move |_| {
                seen.set(true);
                Ok(())
            })
            .unwrap();

        assert!(!accepted);
        assert!(!invoked.get());
        assert!(!editor.is_confirmed());
    }

    #[test]
    fn test_submit_while_valid_confirms() {
        let mut editor = build_editor();
        let account = sample_account();
        editor.set_data(&account);
        editor.set_value("timeout", "55".into()).unwrap();

        let accepted = editor
            .submit(&account, |edited| {
                assert_eq!(edited.timeout, 55);
                Ok(())
            })
            .unwrap();

        assert!(accepted);
        assert!(editor.is_confirmed());
    }

    #[test]
    fn test_failed_success_path_leaves_unconfirmed() {
        let mut editor = build_editor();
        let account = sample_account();
        editor.set_data(&account);

        let result = editor.submit(&account, |_| {
            Err(warden_core::ConsoleError::admin("gateway unreachable"))
        });

        assert!(result.is_err());
        assert!(!editor.is_confirmed());
    }

    #[test]
    fn test_dispose_without_submit_is_unconfirmed() {
        let mut editor = build_editor();
        editor.set_data(&sample_account());
        editor.set_value("name", "changed".into()).unwrap();
        // Dialog closed without activating submit: nothing was confirmed
        assert!(!editor.is_confirmed());
    }

    #[test]
    fn test_get_data_guard_on_unparsable_number() {
        let mut editor = build_editor();
        let account = sample_account();
        editor.set_data(&account);

        // Bypass the rule path and corrupt the control directly; get_data
        // is the last-resort guard.
        editor.set_value("timeout", "ninety".into()).unwrap();
        let err = editor.get_data(&account).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_derived_state_recomputes_on_change() {
        let mut editor = build_editor();
        let mut account = sample_account();
        account.audited = false;
        editor.set_data(&account);
        assert!(!editor.form().is_enabled("timeout"));

        editor.set_value("audited", true.into()).unwrap();
        assert!(editor.form().is_enabled("timeout"));
    }

    #[test]
    fn test_read_only_editor() {
        let mut editor = build_editor().read_only();
        let account = sample_account();
        editor.set_data(&account);

        assert!(editor.is_read_only());
        assert!(!editor.form().is_enabled("name"));
        assert!(!editor.submit_enabled());

        // Edits are ignored
        editor.set_value("name", "hacked".into()).unwrap();
        assert_eq!(editor.get_data(&account).unwrap().name, "gateway-admin");

        // Submission is a guarded no-op
        let accepted = editor.submit(&account, |_| Ok(())).unwrap();
        assert!(!accepted);
        assert!(!editor.is_confirmed());
    }
}
