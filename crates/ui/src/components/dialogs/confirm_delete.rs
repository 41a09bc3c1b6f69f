//! # Confirm Delete Dialog
//!
//! Confirmation dialog for destructive actions. The delete call goes
//! through the admin services only after the user confirms; closing the
//! dialog any other way performs nothing.

use dioxus::prelude::*;
use warden_admin::AdminRegistry;

use crate::state::{APP_STATE, DeleteTarget, StatusLevel};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// What is being deleted
    pub target: DeleteTarget,

    /// Optional callback after a successful delete
    #[props(default)]
    pub on_delete: EventHandler<()>,

    /// Optional callback when the dialog is cancelled
    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Delete confirmation dialog
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let registry = use_context::<AdminRegistry>();

    // Resolve display details and permission from the current snapshot
    let (kind, name, can_delete) = {
        let state = APP_STATE.read();
        match props.target {
            DeleteTarget::ListenPort(id) => (
                "listen port",
                state
                    .port(id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| id.to_string()),
                state.port_permissions.can_delete,
            ),
            DeleteTarget::JdbcConnection(id) => (
                "JDBC connection",
                state
                    .connection(id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| id.to_string()),
                state.jdbc_permissions.can_delete,
            ),
        }
    };

    let delete_name = name.clone();
    let handle_delete = move |_| {
        let result = match props.target {
            DeleteTarget::ListenPort(id) => registry.listen_ports().delete(id),
            DeleteTarget::JdbcConnection(id) => registry.jdbc_connections().delete(id),
        };

        let mut state = APP_STATE.write();
        match result {
            Ok(()) => {
                state.refresh(&registry);
                state.ui.close_dialog();
                state.ui.set_status(
                    format!("Deleted {} '{}'", kind, delete_name),
                    StatusLevel::Success,
                );
                drop(state);
                props.on_delete.call(());
            }
            Err(e) => {
                state
                    .ui
                    .set_status(format!("Delete failed: {}", e), StatusLevel::Error);
            }
        }
    };

    let handle_cancel = move |_| {
        APP_STATE.write().ui.close_dialog();
        props.on_cancel.call(());
    };

    rsx! {
        div {
            class: "dialog confirm-delete-dialog",

            h2 { "Delete {kind}?" }

            p {
                "This permanently removes the {kind} "
                strong { "'{name}'" }
                " from the gateway configuration."
            }

            if !can_delete {
                div {
                    class: "error-banner",
                    "You do not have permission to delete this {kind}."
                }
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
                    r#type: "button",
                    class: "danger",
                    disabled: !can_delete,
                    onclick: handle_delete,
                    "Delete"
                }
            }
        }
    }
}
