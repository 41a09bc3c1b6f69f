//! Built-in validation rules
//!
//! Each rule is a pure function from current form state to an optional
//! error message. Rules are stateless; the aggregator owns them and
//! evaluates them in registration order.

use crate::control::FormState;
use regex::Regex;
use std::sync::OnceLock;
use warden_core::{ConsoleError, ConsoleResult};

// ============================================================================
// ValidationRule Trait
// ============================================================================

/// A single validation rule over live form state.
///
/// Returns `None` when the rule passes, or a human-readable error message
/// when it fails. Rules are evaluated on every change notification; they
/// must not cache anything.
pub trait ValidationRule {
    /// Short description of what the rule enforces (for diagnostics)
    fn describe(&self) -> String;

    /// Evaluate the rule against current form state
    fn check(&self, form: &FormState) -> Option<String>;
}

// ============================================================================
// RequiredText
// ============================================================================

/// The control must contain non-whitespace text
pub struct RequiredText {
    control: String,
    label: String,
}

impl RequiredText {
    /// Create a required-text rule
    pub fn new(control: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            control: control.into(),
            label: label.into(),
        }
    }
}

impl ValidationRule for RequiredText {
    fn describe(&self) -> String {
        format!("'{}' must not be empty", self.control)
    }

    fn check(&self, form: &FormState) -> Option<String> {
        if !form.contains(&self.control) {
            return Some(format!("{} control is not wired", self.label));
        }
        if form.trimmed(&self.control).is_empty() {
            Some(format!("{} is required", self.label))
        } else {
            None
        }
    }
}

// ============================================================================
// NumberRange
// ============================================================================

/// The control's text must parse as an integer within an inclusive range
pub struct NumberRange {
    control: String,
    label: String,
    min: i64,
    max: i64,
}

impl NumberRange {
    /// Create a numeric range rule over `[min, max]`
    pub fn new(control: impl Into<String>, label: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            control: control.into(),
            label: label.into(),
            min,
            max,
        }
    }
}

impl ValidationRule for NumberRange {
    fn describe(&self) -> String {
        format!(
            "'{}' must be a number in [{}, {}]",
            self.control, self.min, self.max
        )
    }

    fn check(&self, form: &FormState) -> Option<String> {
        let text = form.trimmed(&self.control);
        match text.parse::<i64>() {
            Ok(n) if n >= self.min && n <= self.max => None,
            Ok(_) => Some(format!(
                "{} must be between {} and {}",
                self.label, self.min, self.max
            )),
            Err(_) => Some(format!("{} must be a number", self.label)),
        }
    }
}

// ============================================================================
// PatternRule
// ============================================================================

/// Non-empty text in the control must match a regular expression.
///
/// Empty text passes; pair with [`RequiredText`] when the field is
/// mandatory.
pub struct PatternRule {
    control: String,
    pattern: Regex,
    message: String,
}

impl PatternRule {
    /// Create a pattern rule; fails if the pattern does not compile
    pub fn new(
        control: impl Into<String>,
        pattern: &str,
        message: impl Into<String>,
    ) -> ConsoleResult<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| ConsoleError::internal(format!("invalid rule pattern: {}", e)))?;
        Ok(Self {
            control: control.into(),
            pattern,
            message: message.into(),
        })
    }
}

impl ValidationRule for PatternRule {
    fn describe(&self) -> String {
        format!("'{}' must match /{}/", self.control, self.pattern)
    }

    fn check(&self, form: &FormState) -> Option<String> {
        let text = form.trimmed(&self.control);
        if text.is_empty() || self.pattern.is_match(text) {
            None
        } else {
            Some(self.message.clone())
        }
    }
}

// ============================================================================
// UrlShape
// ============================================================================

/// Non-empty text must look like a URL (`scheme://rest`)
pub struct UrlShape {
    control: String,
    label: String,
}

impl UrlShape {
    /// Create a URL shape rule
    pub fn new(control: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            control: control.into(),
            label: label.into(),
        }
    }

    fn url_pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://\S+$").expect("static pattern compiles")
        })
    }
}

impl ValidationRule for UrlShape {
    fn describe(&self) -> String {
        format!("'{}' must be a URL", self.control)
    }

    fn check(&self, form: &FormState) -> Option<String> {
        let text = form.trimmed(&self.control);
        if text.is_empty() || Self::url_pattern().is_match(text) {
            None
        } else {
            Some(format!("{} must be a valid URL", self.label))
        }
    }
}

// ============================================================================
// ChoiceRequired
// ============================================================================

/// The combo control must have a selection
pub struct ChoiceRequired {
    control: String,
    label: String,
}

impl ChoiceRequired {
    /// Create a selection-required rule
    pub fn new(control: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            control: control.into(),
            label: label.into(),
        }
    }
}

impl ValidationRule for ChoiceRequired {
    fn describe(&self) -> String {
        format!("'{}' must have a selection", self.control)
    }

    fn check(&self, form: &FormState) -> Option<String> {
        if form.choice(&self.control).is_none() {
            Some(format!("{} must be selected", self.label))
        } else {
            None
        }
    }
}

// ============================================================================
// MatchesRule
// ============================================================================

/// Two text controls must hold identical content (password/confirm)
pub struct MatchesRule {
    control: String,
    other: String,
    message: String,
}

impl MatchesRule {
    /// Create a confirmation-match rule
    pub fn new(
        control: impl Into<String>,
        other: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            control: control.into(),
            other: other.into(),
            message: message.into(),
        }
    }
}

impl ValidationRule for MatchesRule {
    fn describe(&self) -> String {
        format!("'{}' must match '{}'", self.other, self.control)
    }

    fn check(&self, form: &FormState) -> Option<String> {
        if form.text(&self.control) == form.text(&self.other) {
            None
        } else {
            Some(self.message.clone())
        }
    }
}

// ============================================================================
// ClosureRule
// ============================================================================

/// Free-form rule backed by a closure, for constraints that span controls
pub struct ClosureRule {
    description: String,
    check: Box<dyn Fn(&FormState) -> Option<String>>,
}

impl ClosureRule {
    /// Create a closure-backed rule
    pub fn new(
        description: impl Into<String>,
        check: impl Fn(&FormState) -> Option<String> + 'static,
    ) -> Self {
        Self {
            description: description.into(),
            check: Box::new(check),
        }
    }
}

impl ValidationRule for ClosureRule {
    fn describe(&self) -> String {
        self.description.clone()
    }

    fn check(&self, form: &FormState) -> Option<String> {
        (self.check)(form)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form_with_text(id: &str, value: &str) -> FormState {
        let mut form = FormState::new().with_text(id, "Name");
        form.set_value(id, value.into()).unwrap();
        form
    }

    #[test]
    fn test_required_text() {
        let rule = RequiredText::new("name", "Name");

        assert_eq!(
            rule.check(&form_with_text("name", "")),
            Some("Name is required".to_string())
        );
        assert_eq!(
            rule.check(&form_with_text("name", "   ")),
            Some("Name is required".to_string())
        );
        assert_eq!(rule.check(&form_with_text("name", "abc")), None);
    }

    #[test]
    fn test_required_text_unwired_control() {
        let rule = RequiredText::new("name", "Name");
        let form = FormState::new();
        assert!(rule.check(&form).is_some());
    }

    #[test]
    fn test_number_range() {
        let rule = NumberRange::new("count", "Count", 1, 99);

        let check = |value: &str| {
            let mut form = FormState::new().with_text("count", "Count");
            form.set_value("count", value.into()).unwrap();
            rule.check(&form)
        };

        assert_eq!(check("0"), Some("Count must be between 1 and 99".into()));
        assert_eq!(check("1"), None);
        assert_eq!(check("99"), None);
        assert_eq!(check("100"), Some("Count must be between 1 and 99".into()));
        assert_eq!(check("abc"), Some("Count must be a number".into()));
        assert_eq!(check(""), Some("Count must be a number".into()));
    }

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("name", r"^[A-Za-z][A-Za-z0-9_]*$", "Name must be a word")
            .unwrap();

        assert_eq!(rule.check(&form_with_text("name", "abc_1")), None);
        assert_eq!(
            rule.check(&form_with_text("name", "1abc")),
            Some("Name must be a word".to_string())
        );
        // Empty text passes; RequiredText owns that case
        assert_eq!(rule.check(&form_with_text("name", "")), None);
    }

    #[test]
    fn test_pattern_rule_bad_pattern() {
        let result = PatternRule::new("name", r"([", "broken");
        assert!(result.is_err());
    }

    #[test]
    fn test_url_shape() {
        let rule = UrlShape::new("url", "JDBC URL");

        assert_eq!(rule.check(&form_with_text("url", "https://gw.local:8443")), None);
        assert_eq!(rule.check(&form_with_text("url", "")), None);
        assert_eq!(
            rule.check(&form_with_text("url", "not a url")),
            Some("JDBC URL must be a valid URL".to_string())
        );
    }

    #[test]
    fn test_choice_required() {
        let rule = ChoiceRequired::new("protocol", "Protocol");

        let mut form = FormState::new().with_choice("protocol", "Protocol", None);
        assert_eq!(
            rule.check(&form),
            Some("Protocol must be selected".to_string())
        );

        form.set_value("protocol", Some("https".to_string()).into())
            .unwrap();
        assert_eq!(rule.check(&form), None);
    }

    #[test]
    fn test_matches_rule() {
        let rule = MatchesRule::new("password", "confirm", "Passwords do not match");

        let mut form = FormState::new()
            .with_text("password", "Password")
            .with_text("confirm", "Confirm Password");

        form.set_value("password", "secret".into()).unwrap();
        form.set_value("confirm", "secret".into()).unwrap();
        assert_eq!(rule.check(&form), None);

        form.set_value("confirm", "Secret".into()).unwrap();
        assert_eq!(
            rule.check(&form),
            Some("Passwords do not match".to_string())
        );
    }

    #[test]
    fn test_closure_rule() {
        let rule = ClosureRule::new("pool min <= max", |form| {
            let min = form.trimmed("min").parse::<i64>().ok()?;
            let max = form.trimmed("max").parse::<i64>().ok()?;
            (min > max).then(|| "Minimum pool size exceeds maximum".to_string())
        });

        let mut form = FormState::new()
            .with_text("min", "Minimum")
            .with_text("max", "Maximum");
        form.set_value("min", "5".into()).unwrap();
        form.set_value("max", "3".into()).unwrap();
        assert!(rule.check(&form).is_some());

        form.set_value("max", "10".into()).unwrap();
        assert_eq!(rule.check(&form), None);
    }
}
