//! # JDBC Connection Dialog
//!
//! Properties dialog for creating and editing JDBC connections, including
//! the password/confirm pair and the "Test" probe against the admin
//! service.

use dioxus::prelude::*;
use uuid::Uuid;
use warden_admin::AdminRegistry;
use warden_core::{ControlValue, PropertyEditor};
use warden_forms::{FieldBinding, FormEditor, FormState, InputValidator};
use warden_model::jdbc::{MAX_POOL_SIZE, MIN_POOL_SIZE};
use warden_model::JdbcConnection;

use crate::components::inputs::{Checkbox, NumberInput, TextInput};
use crate::state::{APP_STATE, StatusLevel};

// ============================================================================
// Types
// ============================================================================

/// Mode for the JDBC connection dialog
#[derive(Debug, Clone, PartialEq)]
pub enum JdbcConnectionDialogMode {
    /// Create a new connection
    Create,
    /// Edit an existing connection
    Edit(Uuid),
}

// ============================================================================
// Editor Factory
// ============================================================================

/// Build the JDBC connection editor.
///
/// The confirm-password control is populated from the bean but never bound
/// back; its only job is feeding the match rule.
pub fn build_jdbc_connection_editor(
    taken_names: Vec<String>,
    read_only: bool,
) -> FormEditor<JdbcConnection> {
    let form = FormState::new()
        .with_text("name", "Name")
        .with_text("driver_class", "Driver Class")
        .with_text("jdbc_url", "JDBC URL")
        .with_text("username", "Username")
        .with_text("password", "Password")
        .with_text("confirm", "Confirm Password")
        .with_text("min_pool", "Minimum Pool Size")
        .with_text("max_pool", "Maximum Pool Size")
        .with_flag("enabled", "Enabled", true);

    let validator = InputValidator::new("JDBC Connection Properties")
        .constrain_required("name", "Name")
        .constrain("name must be unique", move |form| {
            let name = form.trimmed("name").to_lowercase();
            (!name.is_empty() && taken_names.contains(&name))
                .then(|| "A JDBC connection with this name already exists".to_string())
        })
        .constrain_required("driver_class", "Driver Class")
        .constrain_required("jdbc_url", "JDBC URL")
        .constrain("url must use the jdbc scheme", |form| {
            let url = form.trimmed("jdbc_url");
            (!url.is_empty() && !url.starts_with("jdbc:"))
                .then(|| "JDBC URL must start with 'jdbc:'".to_string())
        })
        .constrain_number_range(
            "min_pool",
            "Minimum Pool Size",
            MIN_POOL_SIZE as i64,
            MAX_POOL_SIZE as i64,
        )
        .constrain_number_range(
            "max_pool",
            "Maximum Pool Size",
            MIN_POOL_SIZE as i64,
            MAX_POOL_SIZE as i64,
        )
        .constrain("minimum pool size within maximum", |form| {
            let min = form.trimmed("min_pool").parse::<i64>().ok()?;
            let max = form.trimmed("max_pool").parse::<i64>().ok()?;
            (min > max).then(|| "Minimum pool size exceeds maximum".to_string())
        })
        .constrain_matches("password", "confirm", "Passwords do not match");

    let editor = FormEditor::new(form, validator)
        .with_binding(FieldBinding::text(
            "name",
            |c: &JdbcConnection| c.name.clone(),
            |c, v| c.name = v.trim().to_string(),
        ))
        .with_binding(FieldBinding::text(
            "driver_class",
            |c: &JdbcConnection| c.driver_class.clone(),
            |c, v| c.driver_class = v.trim().to_string(),
        ))
        .with_binding(FieldBinding::text(
            "jdbc_url",
            |c: &JdbcConnection| c.jdbc_url.clone(),
            |c, v| c.jdbc_url = v.trim().to_string(),
        ))
        .with_binding(FieldBinding::text(
            "username",
            |c: &JdbcConnection| c.username.clone(),
            |c, v| c.username = v.trim().to_string(),
        ))
        .with_binding(FieldBinding::text(
            "password",
            |c: &JdbcConnection| c.password.clone(),
            |c, v| c.password = v,
        ))
        // Confirm mirrors the stored password on populate and applies nothing
        .with_binding(FieldBinding::new(
            "confirm",
            |c: &JdbcConnection| ControlValue::Text(c.password.clone()),
            |_, _| Ok(()),
        ))
        .with_binding(FieldBinding::number(
            "min_pool",
            "Minimum Pool Size",
            |c: &JdbcConnection| c.min_pool_size,
            |c, v| c.min_pool_size = v,
        ))
        .with_binding(FieldBinding::number(
            "max_pool",
            "Maximum Pool Size",
            |c: &JdbcConnection| c.max_pool_size,
            |c, v| c.max_pool_size = v,
        ))
        .with_binding(FieldBinding::flag(
            "enabled",
            |c: &JdbcConnection| c.enabled,
            |c, v| c.enabled = v,
        ));

    if read_only { editor.read_only() } else { editor }
}

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct JdbcConnectionDialogProps {
    /// Dialog mode (create or edit)
    pub mode: JdbcConnectionDialogMode,

    /// Optional callback when the connection is saved
    #[props(default)]
    pub on_save: EventHandler<Uuid>,

    /// Optional callback when the dialog is cancelled
    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// JDBC connection creation and editing dialog
#[component]
pub fn JdbcConnectionDialog(props: JdbcConnectionDialogProps) -> Element {
    let registry = use_context::<AdminRegistry>();

    let (base_bean, exclude) = match &props.mode {
        JdbcConnectionDialogMode::Create => (JdbcConnection::new(""), None),
        JdbcConnectionDialogMode::Edit(id) => {
            let state = APP_STATE.read();
            let bean = state
                .connection(*id)
                .cloned()
                .unwrap_or_else(|| JdbcConnection::new(""));
            (bean, Some(*id))
        }
    };
    let is_new = matches!(props.mode, JdbcConnectionDialogMode::Create);
    let read_only = !APP_STATE.read().jdbc_permissions.can_edit(is_new);

    let base = use_signal({
        let bean = base_bean.clone();
        move || bean
    });
    let mut editor = use_signal({
        let names = APP_STATE.read().connection_names_except(exclude);
        move || {
            let mut editor = build_jdbc_connection_editor(names, read_only);
            editor.set_data(&base_bean);
            editor
        }
    });

    // Handle form submission
    let save_registry = registry.clone();
    let handle_save = move |_| {
        let result = editor.write().submit(&base.read(), |edited| {
            save_registry.jdbc_connections().save(edited).map(|_| ())
        });

        match result {
            Ok(true) => {
                let saved_id = base.read().id;
                let name = editor.read().form().trimmed("name").to_string();
                let mut state = APP_STATE.write();
                state.refresh(&save_registry);
                state.ui.close_dialog();
                state.ui.set_status(
                    format!("Saved JDBC connection '{}'", name),
                    StatusLevel::Success,
                );
                drop(state);
                props.on_save.call(saved_id);
            }
            Ok(false) => {}
            Err(e) => {
                APP_STATE
                    .write()
                    .ui
                    .set_status(format!("Save failed: {}", e), StatusLevel::Error);
            }
        }
    };

    // Probe the currently entered definition without persisting it
    let test_registry = registry.clone();
    let handle_test = move |_| {
        let candidate = editor.read().get_data(&base.read());
        let mut state = APP_STATE.write();
        match candidate {
            Ok(connection) => {
                match test_registry.jdbc_connections().test_connection(&connection) {
                    Ok(()) => state
                        .ui
                        .set_status("Connection test passed", StatusLevel::Success),
                    Err(e) => state.ui.set_status(e.to_string(), StatusLevel::Warning),
                }
            }
            Err(e) => state.ui.set_status(e.to_string(), StatusLevel::Error),
        }
    };

    // Handle cancel
    let handle_cancel = move |_| {
        APP_STATE.write().ui.close_dialog();
        props.on_cancel.call(());
    };

    let title = match &props.mode {
        JdbcConnectionDialogMode::Create => "Create JDBC Connection",
        JdbcConnectionDialogMode::Edit(_) => "JDBC Connection Properties",
    };

    let ed = editor.read();
    let form = ed.form();
    let first_error = ed.first_error();
    let submit_enabled = ed.submit_enabled();

    rsx! {
        div {
            class: "dialog jdbc-connection-dialog",

            h2 { "{title}" }

            if read_only {
                div {
                    class: "error-banner",
                    "You do not have permission to modify JDBC connections; the dialog is read-only."
                }
            } else if let Some(error) = &first_error {
                div { class: "error-banner", "{error}" }
            }

            form {
                onsubmit: move |e| {
                    e.prevent_default();
                    handle_save(());
                },

                TextInput {
                    value: form.text("name").to_string(),
                    label: "Name",
                    placeholder: "e.g., Audit DB",
                    required: true,
                    disabled: !form.is_enabled("name"),
                    on_change: move |v: String| {
                        let _ = editor.write().set_value("name", v.into());
                    },
                }

                TextInput {
                    value: form.text("driver_class").to_string(),
                    label: "Driver Class",
                    placeholder: "e.g., org.postgresql.Driver",
                    required: true,
                    disabled: !form.is_enabled("driver_class"),
                    on_change: move |v: String| {
                        let _ = editor.write().set_value("driver_class", v.into());
                    },
                }

                TextInput {
                    value: form.text("jdbc_url").to_string(),
                    label: "JDBC URL",
                    placeholder: "jdbc:postgresql://host:5432/database",
                    required: true,
                    disabled: !form.is_enabled("jdbc_url"),
                    on_change: move |v: String| {
                        let _ = editor.write().set_value("jdbc_url", v.into());
                    },
                }

                TextInput {
                    value: form.text("username").to_string(),
                    label: "Username",
                    disabled: !form.is_enabled("username"),
                    on_change: move |v: String| {
                        let _ = editor.write().set_value("username", v.into());
                    },
                }

                TextInput {
                    value: form.text("password").to_string(),
                    label: "Password",
                    password: true,
                    disabled: !form.is_enabled("password"),
                    on_change: move |v: String| {
                        let _ = editor.write().set_value("password", v.into());
                    },
                }

                TextInput {
                    value: form.text("confirm").to_string(),
                    label: "Confirm Password",
                    password: true,
                    disabled: !form.is_enabled("confirm"),
                    on_change: move |v: String| {
                        let _ = editor.write().set_value("confirm", v.into());
                    },
                }

                NumberInput {
                    value: form.text("min_pool").to_string(),
                    label: "Minimum Pool Size",
                    disabled: !form.is_enabled("min_pool"),
                    on_change: move |v: String| {
                        let _ = editor.write().set_value("min_pool", v.into());
                    },
                }

                NumberInput {
                    value: form.text("max_pool").to_string(),
                    label: "Maximum Pool Size",
                    disabled: !form.is_enabled("max_pool"),
                    on_change: move |v: String| {
                        let _ = editor.write().set_value("max_pool", v.into());
                    },
                }

                Checkbox {
                    checked: form.flag("enabled"),
                    label: "Enabled",
                    disabled: !form.is_enabled("enabled"),
                    on_change: move |v: bool| {
                        let _ = editor.write().set_value("enabled", v.into());
                    },
                }

                div {
                    class: "actions",

                    button {
                        r#type: "button",
                        class: "secondary",
                        onclick: handle_test,
                        disabled: read_only,
                        "Test"
                    }

                    button {
                        r#type: "button",
                        class: "secondary",
                        onclick: handle_cancel,
                        "Cancel"
                    }

                    button {
                        r#type: "submit",
                        class: "primary",
                        disabled: !submit_enabled,
                        "OK"
                    }
                }
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

    fn sample_connection() -> JdbcConnection {
        JdbcConnection::new("Audit DB")
            .with_driver_class("org.postgresql.Driver")
            .with_url("jdbc:postgresql://db:5432/audit")
            .with_credentials("gateway", "secret")
    }

    #[test]
    fn test_round_trip_valid_connection() {
        let mut editor = build_jdbc_connection_editor(Vec::new(), false);
        let connection = sample_connection();

        editor.set_data(&connection);
        assert!(editor.is_valid(), "unexpected: {:?}", editor.first_error());

        let out = editor.get_data(&connection).unwrap();
        assert_eq!(out, connection);
    }

    #[test]
    fn test_confirm_field_populated_on_edit() {
        let mut editor = build_jdbc_connection_editor(Vec::new(), false);
        editor.set_data(&sample_connection());

        // Opening an existing connection must not trip the match rule
        assert_eq!(editor.form().text("confirm"), "secret");
        assert!(editor.is_valid());
    }

    #[test]
    fn test_password_confirmation_rule() {
        let mut editor = build_jdbc_connection_editor(Vec::new(), false);
        editor.set_data(&sample_connection());

        editor.set_value("password", "changed".into()).unwrap();
        assert_eq!(
            editor.first_error(),
            Some("Passwords do not match".to_string())
        );

        editor.set_value("confirm", "changed".into()).unwrap();
        assert!(editor.is_valid());

        let out = editor.get_data(&sample_connection()).unwrap();
        assert_eq!(out.password, "changed");
    }

    #[test]
    fn test_url_scheme_rule() {
        let mut editor = build_jdbc_connection_editor(Vec::new(), false);
        editor.set_data(&sample_connection());

        editor
            .set_value("jdbc_url", "postgresql://db:5432/audit".into())
            .unwrap();
        assert_eq!(
            editor.first_error(),
            Some("JDBC URL must start with 'jdbc:'".to_string())
        );
    }

    #[test]
    fn test_pool_size_rules() {
        let mut editor = build_jdbc_connection_editor(Vec::new(), false);
        editor.set_data(&sample_connection());

        editor.set_value("min_pool", "0".into()).unwrap();
        assert!(!editor.is_valid());

        editor.set_value("min_pool", "20".into()).unwrap();
        editor.set_value("max_pool", "10".into()).unwrap();
        assert_eq!(
            editor.first_error(),
            Some("Minimum pool size exceeds maximum".to_string())
        );

        editor.set_value("max_pool", "40".into()).unwrap();
        assert!(editor.is_valid());
    }

    #[test]
    fn test_unique_name_rule() {
        let mut editor =
            build_jdbc_connection_editor(vec!["audit db".to_string()], false);
        editor.set_data(&JdbcConnection::new(""));

        editor.set_value("name", "Audit DB".into()).unwrap();
        assert_eq!(
            editor.first_error(),
            Some("A JDBC connection with this name already exists".to_string())
        );
    }

    #[test]
    fn test_read_only_never_submits() {
        let mut editor = build_jdbc_connection_editor(Vec::new(), true);
        let connection = sample_connection();
        editor.set_data(&connection);

        let accepted = editor.submit(&connection, |_| Ok(())).unwrap();
        assert!(!accepted);
        assert!(!editor.is_confirmed());
    }
}
