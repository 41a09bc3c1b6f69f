//! # Listen Port Dialog
//!
//! Properties dialog for creating and editing listen ports.
//!
//! The dialog is a thin shell around a headless [`FormEditor`]: the factory
//! below declares every control, rule, and binding, and the component just
//! mirrors that state into widgets. All behavior is testable without a
//! running desktop shell.

use dioxus::prelude::*;
use uuid::Uuid;
use warden_admin::AdminRegistry;
use warden_forms::{DerivedRule, FieldBinding, FormEditor, FormState, InputValidator};
use warden_model::listen_port::{
    MAX_LISTEN_PORT, MAX_THREAD_POOL_SIZE, MIN_LISTEN_PORT, MIN_THREAD_POOL_SIZE,
};
use warden_model::{ListenPort, ListenProtocol};
use warden_core::{ConsoleError, ControlValue, PropertyEditor};

use crate::components::inputs::{Checkbox, NumberInput, Select, SelectOption, TextInput};
use crate::state::{APP_STATE, StatusLevel};

// ============================================================================
// Types
// ============================================================================

/// Mode for the listen port dialog
#[derive(Debug, Clone, PartialEq)]
pub enum ListenPortDialogMode {
    /// Create a new listen port
    Create,
    /// Edit an existing listen port
    Edit(Uuid),
}

// ============================================================================
// Editor Factory
// ============================================================================

/// Build the listen port editor.
///
/// `taken_names` carries the lower-cased names of every other listen port;
/// the uniqueness rule closes over it so validation needs no service calls.
pub fn build_listen_port_editor(
    taken_names: Vec<String>,
    read_only: bool,
) -> FormEditor<ListenPort> {
    let form = FormState::new()
        .with_text("name", "Name")
        .with_flag("enabled", "Enabled", true)
        .with_choice(
            "protocol",
            "Protocol",
            Some(ListenProtocol::Http.key().to_string()),
        )
        .with_text("port", "Port")
        .with_text("pool_size", "Thread Pool Size")
        .with_flag("message_input", "Message Input", true)
        .with_flag("admin_access", "Admin Access", false)
        .with_flag("policy_download", "Policy Download", false)
        .with_text("description", "Description");

    let validator = InputValidator::new("Listen Port Properties")
        .constrain_required("name", "Name")
        .constrain("name must be unique", move |form| {
            let name = form.trimmed("name").to_lowercase();
            (!name.is_empty() && taken_names.contains(&name))
                .then(|| "A listen port with this name already exists".to_string())
        })
        .constrain_choice("protocol", "Protocol")
        .constrain_number_range(
            "port",
            "Port",
            MIN_LISTEN_PORT as i64,
            MAX_LISTEN_PORT as i64,
        )
        .constrain("thread pool size within bounds when set", |form| {
            let text = form.trimmed("pool_size");
            if text.is_empty() {
                return None;
            }
            match text.parse::<i64>() {
                Ok(n)
                    if (MIN_THREAD_POOL_SIZE as i64..=MAX_THREAD_POOL_SIZE as i64)
                        .contains(&n) =>
                {
                    None
                }
                Ok(_) => Some(format!(
                    "Thread Pool Size must be between {} and {}",
                    MIN_THREAD_POOL_SIZE, MAX_THREAD_POOL_SIZE
                )),
                Err(_) => Some("Thread Pool Size must be a number".to_string()),
            }
        })
        .constrain("at least one endpoint enabled", |form| {
            (!form.flag("message_input")
                && !form.flag("admin_access")
                && !form.flag("policy_download"))
            .then(|| "At least one endpoint must be enabled".to_string())
        })
        .constrain("admin access requires HTTPS", |form| {
            (form.flag("admin_access") && form.choice("protocol") != Some("https"))
                .then(|| "Admin access requires the HTTPS protocol".to_string())
        });

    let editor = FormEditor::new(form, validator)
        .with_binding(FieldBinding::text(
            "name",
            |p: &ListenPort| p.name.clone(),
            |p, v| p.name = v.trim().to_string(),
        ))
        .with_binding(FieldBinding::flag(
            "enabled",
            |p: &ListenPort| p.enabled,
            |p, v| p.enabled = v,
        ))
        .with_binding(FieldBinding::choice(
            "protocol",
            |p: &ListenPort| Some(p.protocol.key().to_string()),
            |p, selected| {
                let key = selected
                    .ok_or_else(|| ConsoleError::field_validation("Protocol", "must be selected"))?;
                p.protocol = ListenProtocol::from_key(key).ok_or_else(|| {
                    ConsoleError::field_validation("Protocol", "unknown protocol")
                })?;
                Ok(())
            },
        ))
        .with_binding(FieldBinding::number(
            "port",
            "Port",
            |p: &ListenPort| p.port,
            |p, v| p.port = v,
        ))
        .with_binding(FieldBinding::optional_number(
            "pool_size",
            "Thread Pool Size",
            |p: &ListenPort| p.thread_pool_size,
            |p, v| p.thread_pool_size = v,
        ))
        .with_binding(FieldBinding::flag(
            "message_input",
            |p: &ListenPort| p.endpoints.message_input,
            |p, v| p.endpoints.message_input = v,
        ))
        .with_binding(FieldBinding::flag(
            "admin_access",
            |p: &ListenPort| p.endpoints.admin_access,
            |p, v| p.endpoints.admin_access = v,
        ))
        .with_binding(FieldBinding::flag(
            "policy_download",
            |p: &ListenPort| p.endpoints.policy_download,
            |p, v| p.endpoints.policy_download = v,
        ))
        .with_binding(FieldBinding::optional_text(
            "description",
            |p: &ListenPort| p.description.clone(),
            |p, v| p.description = v,
        ))
        // Admin access is only offered over TLS; the checkbox follows the
        // protocol selection.
        .with_derived(DerivedRule::enabled_when("admin_access", |form| {
            form.choice("protocol") == Some("https")
        }));

    if read_only { editor.read_only() } else { editor }
}

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ListenPortDialogProps {
    /// Dialog mode (create or edit)
    pub mode: ListenPortDialogMode,

    /// Optional callback when the listen port is saved
    #[props(default)]
    pub on_save: EventHandler<Uuid>,

    /// Optional callback when the dialog is cancelled
    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Listen port creation and editing dialog
#[component]
pub fn ListenPortDialog(props: ListenPortDialogProps) -> Element {
    let registry = use_context::<AdminRegistry>();

    // Resolve the base bean and name-exclusion list from the current snapshot
    let (base_bean, exclude) = match &props.mode {
        ListenPortDialogMode::Create => (ListenPort::new("", ListenProtocol::Http), None),
        ListenPortDialogMode::Edit(id) => {
            let state = APP_STATE.read();
            let bean = state
                .port(*id)
                .cloned()
                .unwrap_or_else(|| ListenPort::new("", ListenProtocol::Http));
            (bean, Some(*id))
        }
    };
    let is_new = matches!(props.mode, ListenPortDialogMode::Create);
    let read_only = !APP_STATE.read().port_permissions.can_edit(is_new);

    let base = use_signal({
        let bean = base_bean.clone();
        move || bean
    });
    let mut editor = use_signal({
        let names = APP_STATE.read().port_names_except(exclude);
        move || {
            let mut editor = build_listen_port_editor(names, read_only);
            editor.set_data(&base_bean);
            editor
        }
    });

    // Handle form submission
    let save_registry = registry.clone();
    let handle_save = move |_| {
        let result = editor.write().submit(&base.read(), |edited| {
            save_registry.listen_ports().save(edited).map(|_| ())
        });

        match result {
            Ok(true) => {
                let saved_id = base.read().id;
                let name = editor.read().form().trimmed("name").to_string();
                let mut state = APP_STATE.write();
                state.refresh(&save_registry);
                state.ui.close_dialog();
                state
                    .ui
                    .set_status(format!("Saved listen port '{}'", name), StatusLevel::Success);
                drop(state);
                props.on_save.call(saved_id);
            }
            Ok(false) => {
                // Submit while invalid is a guarded no-op; the error banner
                // already names the first failing rule.
            }
            Err(e) => {
                APP_STATE
                    .write()
                    .ui
                    .set_status(format!("Save failed: {}", e), StatusLevel::Error);
            }
        }
    };

    // Handle cancel
    let handle_cancel = move |_| {
        APP_STATE.write().ui.close_dialog();
        props.on_cancel.call(());
    };

    let title = match &props.mode {
        ListenPortDialogMode::Create => "Create Listen Port",
        ListenPortDialogMode::Edit(_) => "Listen Port Properties",
    };

    let protocol_options: Vec<SelectOption> = ListenProtocol::all()
        .iter()
        .map(|p| SelectOption::new(p.key(), p.display_name()))
        .collect();

    let ed = editor.read();
    let form = ed.form();
    let first_error = ed.first_error();
    let submit_enabled = ed.submit_enabled();

    rsx! {
        div {
            class: "dialog listen-port-dialog",

            h2 { "{title}" }

            if read_only {
                div {
                    class: "error-banner",
                    "You do not have permission to modify listen ports; the dialog is read-only."
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
                    placeholder: "e.g., Default HTTP",
                    required: true,
                    disabled: !form.is_enabled("name"),
                    on_change: move |v: String| {
                        let _ = editor.write().set_value("name", v.into());
                    },
                }

                Select {
                    value: form.choice("protocol").unwrap_or_default().to_string(),
                    options: protocol_options,
                    label: "Protocol",
                    disabled: !form.is_enabled("protocol"),
                    on_change: move |v: String| {
                        let selected = if v.is_empty() { None } else { Some(v) };
                        let _ = editor
                            .write()
                            .set_value("protocol", ControlValue::Choice(selected));
                    },
                }

                NumberInput {
                    value: form.text("port").to_string(),
                    label: "Port",
                    help_text: format!("{} - {}", MIN_LISTEN_PORT, MAX_LISTEN_PORT),
                    required: true,
                    disabled: !form.is_enabled("port"),
                    on_change: move |v: String| {
                        let _ = editor.write().set_value("port", v.into());
                    },
                }

                NumberInput {
                    value: form.text("pool_size").to_string(),
                    label: "Thread Pool Size",
                    help_text: "Leave empty to share the gateway pool",
                    disabled: !form.is_enabled("pool_size"),
                    on_change: move |v: String| {
                        let _ = editor.write().set_value("pool_size", v.into());
                    },
                }

                TextInput {
                    value: form.text("description").to_string(),
                    label: "Description",
                    disabled: !form.is_enabled("description"),
                    on_change: move |v: String| {
                        let _ = editor.write().set_value("description", v.into());
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

                h2 { class: "section-heading", "Endpoints" }

                Checkbox {
                    checked: form.flag("message_input"),
                    label: "Message Input",
                    help_text: "Published service traffic",
                    disabled: !form.is_enabled("message_input"),
                    on_change: move |v: bool| {
                        let _ = editor.write().set_value("message_input", v.into());
                    },
                }

                Checkbox {
                    checked: form.flag("admin_access"),
                    label: "Admin Access",
                    help_text: "Requires HTTPS",
                    disabled: !form.is_enabled("admin_access"),
                    on_change: move |v: bool| {
                        let _ = editor.write().set_value("admin_access", v.into());
                    },
                }

                Checkbox {
                    checked: form.flag("policy_download"),
                    label: "Policy Download",
                    disabled: !form.is_enabled("policy_download"),
                    on_change: move |v: bool| {
                        let _ = editor.write().set_value("policy_download", v.into());
                    },
                }

                div {
                    class: "actions",

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
    use warden_model::EndpointSet;

    fn sample_port() -> ListenPort {
        ListenPort::new("Default HTTPS", ListenProtocol::Https)
            .with_port(8443)
            .with_description("TLS traffic")
            .with_endpoints(EndpointSet::all())
    }

    #[test]
    fn test_round_trip_valid_port() {
        let mut editor = build_listen_port_editor(Vec::new(), false);
        let port = sample_port();

        editor.set_data(&port);
        assert!(editor.is_valid(), "unexpected: {:?}", editor.first_error());

        let out = editor.get_data(&port).unwrap();
        assert_eq!(out, port);
    }

    #[test]
    fn test_create_starts_invalid_until_named() {
        let mut editor = build_listen_port_editor(Vec::new(), false);
        editor.set_data(&ListenPort::new("", ListenProtocol::Http));

        assert_eq!(editor.first_error(), Some("Name is required".to_string()));
        assert!(!editor.submit_enabled());

        editor.set_value("name", "Default HTTP".into()).unwrap();
        assert!(editor.submit_enabled());
    }

    #[test]
    fn test_unique_name_rule() {
        let mut editor =
            build_listen_port_editor(vec!["default http".to_string()], false);
        editor.set_data(&ListenPort::new("", ListenProtocol::Http));

        editor.set_value("name", "Default HTTP".into()).unwrap();
        assert_eq!(
            editor.first_error(),
            Some("A listen port with this name already exists".to_string())
        );

        editor.set_value("name", "Another".into()).unwrap();
        assert!(editor.is_valid());
    }

    #[test]
    fn test_port_range_rule() {
        let mut editor = build_listen_port_editor(Vec::new(), false);
        editor.set_data(&ListenPort::new("Default HTTP", ListenProtocol::Http));

        editor.set_value("port", "80".into()).unwrap();
        assert!(!editor.is_valid());

        editor.set_value("port", "8081".into()).unwrap();
        assert!(editor.is_valid());

        editor.set_value("port", "notaport".into()).unwrap();
        assert_eq!(
            editor.first_error(),
            Some("Port must be a number".to_string())
        );
    }

    #[test]
    fn test_admin_access_requires_https() {
        let mut editor = build_listen_port_editor(Vec::new(), false);
        editor.set_data(&ListenPort::new("Default HTTP", ListenProtocol::Http));

        // The checkbox is disabled for plain HTTP
        assert!(!editor.form().is_enabled("admin_access"));

        // A stale checked state still blocks submission
        editor.set_value("admin_access", true.into()).unwrap();
        assert_eq!(
            editor.first_error(),
            Some("Admin access requires the HTTPS protocol".to_string())
        );

        editor
            .set_value("protocol", ControlValue::Choice(Some("https".to_string())))
            .unwrap();
        assert!(editor.form().is_enabled("admin_access"));
        assert!(editor.is_valid());
    }

    #[test]
    fn test_endpoint_rule() {
        let mut editor = build_listen_port_editor(Vec::new(), false);
        editor.set_data(&ListenPort::new("Default HTTP", ListenProtocol::Http));

        editor.set_value("message_input", false.into()).unwrap();
        assert_eq!(
            editor.first_error(),
            Some("At least one endpoint must be enabled".to_string())
        );
    }

    #[test]
    fn test_pool_size_rule_only_when_set() {
        let mut editor = build_listen_port_editor(Vec::new(), false);
        editor.set_data(&ListenPort::new("Default HTTP", ListenProtocol::Http));
        assert!(editor.is_valid());

        editor.set_value("pool_size", "1000".into()).unwrap();
        assert!(!editor.is_valid());

        editor.set_value("pool_size", "".into()).unwrap();
        assert!(editor.is_valid());

        editor.set_value("pool_size", "50".into()).unwrap();
        assert!(editor.is_valid());
        let out = editor
            .get_data(&ListenPort::new("Default HTTP", ListenProtocol::Http))
            .unwrap();
        assert_eq!(out.thread_pool_size, Some(50));
    }

    #[test]
    fn test_read_only_editor_ignores_edits() {
        let mut editor = build_listen_port_editor(Vec::new(), true);
        let port = sample_port();
        editor.set_data(&port);

        assert!(editor.is_read_only());
        assert!(!editor.submit_enabled());

        editor.set_value("name", "tampered".into()).unwrap();
        assert_eq!(editor.get_data(&port).unwrap().name, "Default HTTPS");
    }

    #[test]
    fn test_description_clears_to_none() {
        let mut editor = build_listen_port_editor(Vec::new(), false);
        let port = sample_port();
        editor.set_data(&port);

        editor.set_value("description", "  ".into()).unwrap();
        let out = editor.get_data(&port).unwrap();
        assert_eq!(out.description, None);
    }
}
