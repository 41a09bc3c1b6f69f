//! # Input Components
//!
//! Form controls for the Warden Console dialogs. Each component mirrors
//! one headless control from the form engine: the dialog pushes the
//! control's current value and error state down, and forwards `on_change`
//! back into the editor.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Render as a password field
    #[props(default = false)]
    pub password: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_type = if props.password { "password" } else { "text" };
    let input_class = if props.error.is_some() { "invalid" } else { "" };

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    "{label}"
                    if props.required {
                        span { class: "required-marker", " *" }
                    }
                }
            }

            input {
                class: "{input_class}",
                r#type: "{input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            } else if let Some(help) = &props.help_text {
                p { class: "help", "{help}" }
            }
        }
    }
}

// ============================================================================
// Number Input Component
// ============================================================================

/// Properties for NumberInput component
#[derive(Props, Clone, PartialEq)]
pub struct NumberInputProps {
    /// Raw text value.
    ///
    /// Numeric fields keep their raw text so the validation rules, not the
    /// widget, decide what counts as a number.
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Numeric text input component
#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    let input_class = if props.error.is_some() { "invalid" } else { "" };

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    "{label}"
                    if props.required {
                        span { class: "required-marker", " *" }
                    }
                }
            }

            input {
                class: "{input_class}",
                r#type: "text",
                inputmode: "numeric",
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            } else if let Some(help) = &props.help_text {
                p { class: "help", "{help}" }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value (empty string when nothing is selected)
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder shown as a disabled first option
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = if props.error.is_some() { "invalid" } else { "" };

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label { "{label}" }
            }

            select {
                class: "{select_class}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        disabled: true,
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            } else if let Some(help) = &props.help_text {
                p { class: "help", "{help}" }
            }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Whether checked
    pub checked: bool,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Checkbox input component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            class: "checkbox-row",

            input {
                r#type: "checkbox",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |_| {
                    if !props.disabled {
                        props.on_change.call(!props.checked);
                    }
                },
            }

            if let Some(label) = &props.label {
                span { "{label}" }
            }

            if let Some(help) = &props.help_text {
                span { class: "help", "{help}" }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_option_new() {
        let opt = SelectOption::new("https", "HTTPS");
        assert_eq!(opt.value, "https");
        assert_eq!(opt.label, "HTTPS");
    }
}
