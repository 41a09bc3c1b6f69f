//! Field bindings
//!
//! A binding pairs one control with one model field and an optional
//! converter, in both directions: `populate` pushes the model value into
//! the control, `apply` reads the control back into a model copy. Apply
//! converters may fail; that failure is the `get_data` last-resort guard
//! for input the rule set missed.

use crate::control::FormState;
use warden_core::{ConsoleError, ConsoleResult, ControlValue};

// ============================================================================
// FieldBinding
// ============================================================================

/// A declarative pairing of (control, model field, converter).
///
/// Bindings have no persistent identity; they are created fresh each time
/// an editor is constructed.
pub struct FieldBinding<T> {
    control: String,
    populate: Box<dyn Fn(&T) -> ControlValue>,
    apply: Box<dyn Fn(&ControlValue, &mut T) -> ConsoleResult<()>>,
}

impl<T> FieldBinding<T> {
    /// Create a binding from raw populate/apply closures
    pub fn new(
        control: impl Into<String>,
        populate: impl Fn(&T) -> ControlValue + 'static,
        apply: impl Fn(&ControlValue, &mut T) -> ConsoleResult<()> + 'static,
    ) -> Self {
        Self {
            control: control.into(),
            populate: Box::new(populate),
            apply: Box::new(apply),
        }
    }

    /// The control this binding targets
    pub fn control(&self) -> &str {
        &self.control
    }

    /// Push the model's value into the bound control
    pub fn populate(&self, form: &mut FormState, model: &T) -> ConsoleResult<()> {
        let value = (self.populate)(model);
        form.set_value(&self.control, value)
    }

    /// Read the bound control's value into the model
    pub fn apply_to(&self, form: &FormState, model: &mut T) -> ConsoleResult<()> {
        let control = form.require(&self.control)?;
        (self.apply)(control.value(), model)
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// Bind a `String` field to a text control
    pub fn text(
        control: impl Into<String>,
        get: impl Fn(&T) -> String + 'static,
        set: impl Fn(&mut T, String) + 'static,
    ) -> Self {
        Self::new(
            control,
            move |model| ControlValue::Text(get(model)),
            move |value, model| {
                let text = value.as_text().unwrap_or_default();
                set(model, text.to_string());
                Ok(())
            },
        )
    }

    /// Bind an `Option<String>` field to a text control; empty text maps
    /// to `None`
    pub fn optional_text(
        control: impl Into<String>,
        get: impl Fn(&T) -> Option<String> + 'static,
        set: impl Fn(&mut T, Option<String>) + 'static,
    ) -> Self {
        Self::new(
            control,
            move |model| ControlValue::Text(get(model).unwrap_or_default()),
            move |value, model| {
                let text = value.as_text().unwrap_or_default().trim();
                set(
                    model,
                    if text.is_empty() {
                        None
                    } else {
                        Some(text.to_string())
                    },
                );
                Ok(())
            },
        )
    }

    /// Bind a `bool` field to a flag control
    pub fn flag(
        control: impl Into<String>,
        get: impl Fn(&T) -> bool + 'static,
        set: impl Fn(&mut T, bool) + 'static,
    ) -> Self {
        Self::new(
            control,
            move |model| ControlValue::Flag(get(model)),
            move |value, model| {
                set(model, value.as_flag().unwrap_or(false));
                Ok(())
            },
        )
    }

    /// Bind a selection-backed field to a choice control.
    ///
    /// The setter receives the selected option key and may reject unknown
    /// keys, which surfaces as a `get_data` validation error.
    pub fn choice(
        control: impl Into<String>,
        get: impl Fn(&T) -> Option<String> + 'static,
        set: impl Fn(&mut T, Option<&str>) -> ConsoleResult<()> + 'static,
    ) -> Self {
        Self::new(
            control,
            move |model| ControlValue::Choice(get(model)),
            move |value, model| {
                let selected = value.as_choice().flatten();
                set(model, selected)
            },
        )
    }

    /// Bind an integer field to a text control, parsing on apply.
    ///
    /// A parse failure yields a field validation error naming the label.
    pub fn number<N>(
        control: impl Into<String>,
        label: impl Into<String>,
        get: impl Fn(&T) -> N + 'static,
        set: impl Fn(&mut T, N) + 'static,
    ) -> Self
    where
        N: std::str::FromStr + std::fmt::Display,
    {
        let label = label.into();
        Self::new(
            control,
            move |model| ControlValue::Text(get(model).to_string()),
            move |value, model| {
                let text = value.as_text().unwrap_or_default().trim();
                let parsed = text.parse::<N>().map_err(|_| {
                    ConsoleError::field_validation(label.clone(), "must be a number")
                })?;
                set(model, parsed);
                Ok(())
            },
        )
    }

    /// Bind an `Option<integer>` field to a text control; empty text maps
    /// to `None`
    pub fn optional_number<N>(
        control: impl Into<String>,
        label: impl Into<String>,
        get: impl Fn(&T) -> Option<N> + 'static,
        set: impl Fn(&mut T, Option<N>) + 'static,
    ) -> Self
    where
        N: std::str::FromStr + std::fmt::Display,
    {
        let label = label.into();
        Self::new(
            control,
            move |model| {
                ControlValue::Text(get(model).map(|n| n.to_string()).unwrap_or_default())
            },
            move |value, model| {
                let text = value.as_text().unwrap_or_default().trim();
                if text.is_empty() {
                    set(model, None);
                    return Ok(());
                }
                let parsed = text.parse::<N>().map_err(|_| {
                    ConsoleError::field_validation(label.clone(), "must be a number")
                })?;
                set(model, Some(parsed));
                Ok(())
            },
        )
    }
}

impl<T> std::fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBinding")
            .field("control", &self.control)
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

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Bean {
        name: String,
        comment: Option<String>,
        enabled: bool,
        port: u16,
        pool: Option<u32>,
    }

    fn form() -> FormState {
        FormState::new()
            .with_text("name", "Name")
            .with_text("comment", "Comment")
            .with_flag("enabled", "Enabled", false)
            .with_text("port", "Port")
            .with_text("pool", "Pool Size")
    }

    #[test]
    fn test_text_binding_round_trip() {
        let binding = FieldBinding::text(
            "name",
            |b: &Bean| b.name.clone(),
            |b, v| b.name = v,
        );

        let bean = Bean {
            name: "Default HTTP".to_string(),
            ..Default::default()
        };
        let mut form = form();
        binding.populate(&mut form, &bean).unwrap();
        assert_eq!(form.text("name"), "Default HTTP");

        let mut out = Bean::default();
        binding.apply_to(&form, &mut out).unwrap();
        assert_eq!(out.name, "Default HTTP");
    }

    #[test]
    fn test_optional_text_binding_empty_is_none() {
        let binding = FieldBinding::optional_text(
            "comment",
            |b: &Bean| b.comment.clone(),
            |b, v| b.comment = v,
        );

        let mut form = form();
        form.set_value("comment", "   ".into()).unwrap();
        let mut out = Bean::default();
        binding.apply_to(&form, &mut out).unwrap();
        assert_eq!(out.comment, None);

        form.set_value("comment", " note ".into()).unwrap();
        binding.apply_to(&form, &mut out).unwrap();
        assert_eq!(out.comment, Some("note".to_string()));
    }

    #[test]
    fn test_flag_binding() {
        let binding = FieldBinding::flag(
            "enabled",
            |b: &Bean| b.enabled,
            |b, v| b.enabled = v,
        );

        let bean = Bean {
            enabled: true,
            ..Default::default()
        };
        let mut form = form();
        binding.populate(&mut form, &bean).unwrap();
        assert!(form.flag("enabled"));

        let mut out = Bean::default();
        binding.apply_to(&form, &mut out).unwrap();
        assert!(out.enabled);
    }

    #[test]
    fn test_number_binding_parse_failure() {
        let binding = FieldBinding::number(
            "port",
            "Port",
            |b: &Bean| b.port,
            |b, v| b.port = v,
        );

        let mut form = form();
        form.set_value("port", "not-a-port".into()).unwrap();

        let mut out = Bean::default();
        let err = binding.apply_to(&form, &mut out).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Port: must be a number");
        // Model untouched on failure
        assert_eq!(out, Bean::default());
    }

    #[test]
    fn test_optional_number_binding() {
        let binding = FieldBinding::optional_number(
            "pool",
            "Pool Size",
            |b: &Bean| b.pool,
            |b, v| b.pool = v,
        );

        let mut form = form();
        let mut out = Bean::default();

        form.set_value("pool", "".into()).unwrap();
        binding.apply_to(&form, &mut out).unwrap();
        assert_eq!(out.pool, None);

        form.set_value("pool", "25".into()).unwrap();
        binding.apply_to(&form, &mut out).unwrap();
        assert_eq!(out.pool, Some(25));
    }

    #[test]
    fn test_apply_to_unwired_control() {
        let binding = FieldBinding::text(
            "missing",
            |b: &Bean| b.name.clone(),
            |b, v| b.name = v,
        );

        let form = form();
        let mut out = Bean::default();
        let err = binding.apply_to(&form, &mut out).unwrap_err();
        assert!(matches!(err, ConsoleError::ControlNotFound(_)));
    }
}
