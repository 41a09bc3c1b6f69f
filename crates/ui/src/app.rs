//! Application shell for Warden Console
//!
//! Top-level layout: header with import/export actions, sidebar section
//! navigation, the entity list panels, the status bar, and the dialog
//! host. The admin registry enters the component tree here via context;
//! nothing below resolves services from globals.

use dioxus::prelude::*;
use warden_admin::AdminRegistry;

use crate::components::dialogs::{
    ConfirmDeleteDialog, JdbcConnectionDialog, JdbcConnectionDialogMode, ListenPortDialog,
    ListenPortDialogMode,
};
use crate::file_ops;
use crate::state::{APP_STATE, DeleteTarget, Dialog, Section, StatusLevel};

// ============================================================================
// App Root
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let registry = use_context_provider(crate::launch_registry);

    // Initial snapshot of the gateway state
    use_effect(move || {
        APP_STATE.write().refresh(&registry);
    });

    rsx! {
        div {
            class: "app-shell",
            Header {}
            div {
                class: "app-main",
                Sidebar {}
                ContentPanel {}
            }
            StatusBar {}
            DialogHost {}
        }
    }
}

// ============================================================================
// Header
// ============================================================================

/// Title bar with configuration import/export actions
#[component]
fn Header() -> Element {
    let registry = use_context::<AdminRegistry>();

    let import_registry = registry.clone();
    let handle_import = move |_| {
        let registry = import_registry.clone();
        spawn(async move {
            match file_ops::import_config(&registry).await {
                Ok(Some((path, summary))) => {
                    let mut state = APP_STATE.write();
                    state.refresh(&registry);
                    state.config_path = Some(path);
                    state.ui.set_status(summary.describe(), StatusLevel::Success);
                }
                Ok(None) => {}
                Err(e) => {
                    APP_STATE
                        .write()
                        .ui
                        .show_dialog(Dialog::Error(format!("Import failed: {}", e)));
                }
            }
        });
    };

    let export_registry = registry.clone();
    let handle_export = move |_| {
        let registry = export_registry.clone();
        spawn(async move {
            match file_ops::export_config(&registry, "Gateway Configuration").await {
                Ok(Some(path)) => {
                    let mut state = APP_STATE.write();
                    state.config_path = Some(path.clone());
                    state.ui.set_status(
                        format!("Exported configuration to {}", path.display()),
                        StatusLevel::Success,
                    );
                }
                Ok(None) => {}
                Err(e) => {
                    APP_STATE
                        .write()
                        .ui
                        .set_status(format!("Export failed: {}", e), StatusLevel::Error);
                }
            }
        });
    };

    rsx! {
        header {
            class: "app-header",
            h1 { "🛡 Warden Console" }
            div {
                button { class: "secondary", onclick: handle_import, "Import…" }
                button { class: "secondary", onclick: handle_export, "Export…" }
            }
        }
    }
}

// ============================================================================
// Sidebar
// ============================================================================

/// Section navigation with entity counts
#[component]
fn Sidebar() -> Element {
    let state = APP_STATE.read();
    let active = state.ui.active_section;
    let counts = [state.ports.len(), state.connections.len()];

    rsx! {
        nav {
            class: "sidebar",
            for (section, count) in Section::all().iter().copied().zip(counts) {
                button {
                    key: "{section.display_name()}",
                    class: if section == active { "active" } else { "" },
                    onclick: move |_| APP_STATE.write().ui.navigate(section),
                    span { "{section.icon()} {section.display_name()}" }
                    span { "{count}" }
                }
            }
        }
    }
}

// ============================================================================
// Content Panels
// ============================================================================

/// The active section's entity list
#[component]
fn ContentPanel() -> Element {
    let section = APP_STATE.read().ui.active_section;

    rsx! {
        main {
            class: "content-panel",
            match section {
                Section::ListenPorts => rsx! { ListenPortPanel {} },
                Section::JdbcConnections => rsx! { JdbcConnectionPanel {} },
            }
        }
    }
}

/// Listen port list with create/edit/delete actions
#[component]
fn ListenPortPanel() -> Element {
    let state = APP_STATE.read();
    let ports = state.ports.clone();
    let can_create = state.port_permissions.can_create;
    let can_delete = state.port_permissions.can_delete;
    drop(state);

    rsx! {
        div {
            class: "panel-header",
            h2 { "Listen Ports" }
            if can_create {
                button {
                    class: "primary",
                    onclick: move |_| APP_STATE.write().ui.show_dialog(Dialog::NewListenPort),
                    "New Listen Port"
                }
            }
        }

        if ports.is_empty() {
            p { class: "meta", "No listen ports configured." }
        }

        for port in ports {
            div {
                key: "{port.id}",
                class: "entity-row",
                div {
                    div { "{port.name}" }
                    div { class: "meta", "{port.summary()}" }
                }
                div {
                    span {
                        class: if port.enabled { "badge enabled" } else { "badge disabled" },
                        if port.enabled { "enabled" } else { "disabled" }
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| {
                            APP_STATE
                                .write()
                                .ui
                                .show_dialog(Dialog::EditListenPort(port.id));
                        },
                        "Properties"
                    }
                    if can_delete {
                        button {
                            class: "danger",
                            onclick: move |_| {
                                APP_STATE.write().ui.show_dialog(Dialog::ConfirmDelete(
                                    DeleteTarget::ListenPort(port.id),
                                ));
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

/// JDBC connection list with create/edit/delete actions
#[component]
fn JdbcConnectionPanel() -> Element {
    let state = APP_STATE.read();
    let connections = state.connections.clone();
    let can_create = state.jdbc_permissions.can_create;
    let can_delete = state.jdbc_permissions.can_delete;
    drop(state);

    rsx! {
        div {
            class: "panel-header",
            h2 { "JDBC Connections" }
            if can_create {
                button {
                    class: "primary",
                    onclick: move |_| {
                        APP_STATE.write().ui.show_dialog(Dialog::NewJdbcConnection);
                    },
                    "New Connection"
                }
            }
        }

        if connections.is_empty() {
            p { class: "meta", "No JDBC connections configured." }
        }

        for connection in connections {
            div {
                key: "{connection.id}",
                class: "entity-row",
                div {
                    div { "{connection.name}" }
                    div { class: "meta", "{connection.summary()}" }
                }
                div {
                    span {
                        class: if connection.enabled { "badge enabled" } else { "badge disabled" },
                        if connection.enabled { "enabled" } else { "disabled" }
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| {
                            APP_STATE
                                .write()
                                .ui
                                .show_dialog(Dialog::EditJdbcConnection(connection.id));
                        },
                        "Properties"
                    }
                    if can_delete {
                        button {
                            class: "danger",
                            onclick: move |_| {
                                APP_STATE.write().ui.show_dialog(Dialog::ConfirmDelete(
                                    DeleteTarget::JdbcConnection(connection.id),
                                ));
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Status Bar
// ============================================================================

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let state = APP_STATE.read();
    let message = state.ui.status_message.clone();
    let title = state.window_title();

    rsx! {
        footer {
            class: "status-bar",
            if let Some(message) = message {
                span { class: "{message.level.css_class()}", "{message.text}" }
            } else {
                span { "Ready" }
            }
            span { "{title}" }
        }
    }
}

// ============================================================================
// Dialog Host
// ============================================================================

/// Renders the active dialog, if any, inside a modal backdrop
#[component]
fn DialogHost() -> Element {
    let dialog = APP_STATE.read().ui.active_dialog.clone();

    let Some(dialog) = dialog else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "dialog-backdrop",
            match dialog {
                Dialog::NewListenPort => rsx! {
                    ListenPortDialog { mode: ListenPortDialogMode::Create }
                },
                Dialog::EditListenPort(id) => rsx! {
                    ListenPortDialog { mode: ListenPortDialogMode::Edit(id) }
                },
                Dialog::NewJdbcConnection => rsx! {
                    JdbcConnectionDialog { mode: JdbcConnectionDialogMode::Create }
                },
                Dialog::EditJdbcConnection(id) => rsx! {
                    JdbcConnectionDialog { mode: JdbcConnectionDialogMode::Edit(id) }
                },
                Dialog::ConfirmDelete(target) => rsx! {
                    ConfirmDeleteDialog { target }
                },
                Dialog::Error(message) => rsx! {
                    div {
                        class: "dialog",
                        h2 { "Error" }
                        p { "{message}" }
                        div {
                            class: "actions",
                            button {
                                class: "primary",
                                onclick: move |_| APP_STATE.write().ui.close_dialog(),
                                "Close"
                            }
                        }
                    }
                },
            }
        }
    }
}
