//! Validation aggregator
//!
//! [`InputValidator`] collects the per-field rules of one dialog and
//! computes the single "form is valid" signal that gates the submit
//! action. Registration order defines which error message is shown first.

use crate::control::FormState;
use crate::rules::{
    ChoiceRequired, ClosureRule, MatchesRule, NumberRange, PatternRule, RequiredText, UrlShape,
    ValidationRule,
};
use warden_core::ConsoleResult;

// ============================================================================
// InputValidator
// ============================================================================

/// Aggregates validation rules for one form.
///
/// `is_valid` re-evaluates every rule against live control state on each
/// call and caches nothing; the UI layer calls it from its render pass so
/// the submit control's enabled state always equals current validity.
///
/// Rules whose target control is currently disabled or hidden are still
/// evaluated. Several dialogs rely on a hidden field's error keeping the
/// submit action disabled until the field is revealed and corrected.
pub struct InputValidator {
    /// Dialog title, used as context in aggregate error reporting
    title: String,

    /// Rules in registration (priority) order
    rules: Vec<Box<dyn ValidationRule>>,
}

impl InputValidator {
    /// Create an aggregator for the named dialog
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rules: Vec::new(),
        }
    }

    /// Get the dialog title this validator reports under
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no rules are registered (an empty rule set is trivially valid)
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // ========================================================================
    // Rule registration
    // ========================================================================

    /// Register a rule; earlier rules take display priority
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Builder-style rule registration
    pub fn with_rule(mut self, rule: Box<dyn ValidationRule>) -> Self {
        self.add_rule(rule);
        self
    }

    /// Constrain a text control to be non-empty after trimming
    pub fn constrain_required(mut self, control: &str, label: &str) -> Self {
        self.add_rule(Box::new(RequiredText::new(control, label)));
        self
    }

    /// Constrain a text control to an integer in `[min, max]`
    pub fn constrain_number_range(
        mut self,
        control: &str,
        label: &str,
        min: i64,
        max: i64,
    ) -> Self {
        self.add_rule(Box::new(NumberRange::new(control, label, min, max)));
        self
    }

    /// Constrain non-empty text to match a regular expression
    pub fn constrain_pattern(
        mut self,
        control: &str,
        pattern: &str,
        message: &str,
    ) -> ConsoleResult<Self> {
        self.add_rule(Box::new(PatternRule::new(control, pattern, message)?));
        Ok(self)
    }

    /// Constrain non-empty text to URL shape
    pub fn constrain_url(mut self, control: &str, label: &str) -> Self {
        self.add_rule(Box::new(UrlShape::new(control, label)));
        self
    }

    /// Constrain a combo control to have a selection
    pub fn constrain_choice(mut self, control: &str, label: &str) -> Self {
        self.add_rule(Box::new(ChoiceRequired::new(control, label)));
        self
    }

    /// Constrain two text controls to hold identical content
    pub fn constrain_matches(mut self, control: &str, other: &str, message: &str) -> Self {
        self.add_rule(Box::new(MatchesRule::new(control, other, message)));
        self
    }

    /// Register a free-form closure rule
    pub fn constrain(
        mut self,
        description: &str,
        check: impl Fn(&FormState) -> Option<String> + 'static,
    ) -> Self {
        self.add_rule(Box::new(ClosureRule::new(description, check)));
        self
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// First failing rule's message, in registration order
    pub fn first_error(&self, form: &FormState) -> Option<String> {
        self.rules.iter().find_map(|rule| rule.check(form))
    }

    /// Every failing rule's message, in registration order
    pub fn errors(&self, form: &FormState) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(form))
            .collect()
    }

    /// True iff no rule produces an error against current form state
    pub fn is_valid(&self, form: &FormState) -> bool {
        self.first_error(form).is_none()
    }
}

impl std::fmt::Debug for InputValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputValidator")
            .field("title", &self.title)
            .field("rules", &self.rules.len())
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

    fn sample_form() -> FormState {
        FormState::new()
            .with_text("name", "Name")
            .with_text("port", "Port")
            .with_flag("enabled", "Enabled", true)
    }

    fn sample_validator() -> InputValidator {
        InputValidator::new("Listen Port Properties")
            .constrain_required("name", "Name")
            .constrain_number_range("port", "Port", 1, 99)
    }

    #[test]
    fn test_empty_rule_set_is_trivially_valid() {
        let validator = InputValidator::new("Empty");
        let form = sample_form();
        assert!(validator.is_empty());
        assert!(validator.is_valid(&form));
        assert_eq!(validator.first_error(&form), None);
    }

    #[test]
    fn test_is_valid_iff_no_rule_errors() {
        let validator = sample_validator();
        let mut form = sample_form();

        assert!(!validator.is_valid(&form));

        form.set_value("name", "Default HTTP".into()).unwrap();
        form.set_value("port", "42".into()).unwrap();
        assert!(validator.is_valid(&form));
        assert!(validator.errors(&form).is_empty());

        form.set_value("port", "0".into()).unwrap();
        assert!(!validator.is_valid(&form));
        assert_eq!(validator.errors(&form).len(), 1);
    }

    #[test]
    fn test_first_error_respects_registration_order() {
        let validator = sample_validator();
        let form = sample_form();

        // Both rules fail; the name rule registered first wins
        assert_eq!(
            validator.first_error(&form),
            Some("Name is required".to_string())
        );
    }

    #[test]
    fn test_no_caching_between_evaluations() {
        let validator = sample_validator();
        let mut form = sample_form();
        form.set_value("name", "A".into()).unwrap();
        form.set_value("port", "10".into()).unwrap();
        assert!(validator.is_valid(&form));

        // Mutate and re-evaluate: the validator always reads live state
        form.set_value("port", "abc".into()).unwrap();
        assert!(!validator.is_valid(&form));
        form.set_value("port", "10".into()).unwrap();
        assert!(validator.is_valid(&form));
    }

    #[test]
    fn test_rules_on_disabled_controls_still_evaluated() {
        let validator = sample_validator();
        let mut form = sample_form();
        form.set_value("name", "A".into()).unwrap();

        // Hide and disable the port field while it holds an invalid value
        form.set_enabled("port", false);
        form.set_visible("port", false);
        assert!(!validator.is_valid(&form));
    }

    #[test]
    fn test_closure_constraint() {
        let validator = InputValidator::new("Cross-field").constrain(
            "enabled ports need a name",
            |form| {
                (form.flag("enabled") && form.trimmed("name").is_empty())
                    .then(|| "Enabled ports must be named".to_string())
            },
        );

        let mut form = sample_form();
        assert!(!validator.is_valid(&form));

        form.set_value("enabled", false.into()).unwrap();
        assert!(validator.is_valid(&form));
    }

    #[test]
    fn test_constrain_matches() {
        let validator = InputValidator::new("Password")
            .constrain_matches("password", "confirm", "Passwords do not match");

        let mut form = FormState::new()
            .with_text("password", "Password")
            .with_text("confirm", "Confirm");
        form.set_value("password", "secret".into()).unwrap();
        form.set_value("confirm", "secret".into()).unwrap();
        assert!(validator.is_valid(&form));

        form.set_value("confirm", "Secret".into()).unwrap();
        assert_eq!(
            validator.first_error(&form),
            Some("Passwords do not match".to_string())
        );
    }
}
