//! # Dialog Components
//!
//! Modal dialogs for the Warden Console. Each properties dialog pairs a
//! headless editor factory (controls, rules, bindings) with a thin Dioxus
//! component mirroring that editor's state.
//!
//! ## Dialogs
//!
//! - **ListenPortDialog**: create and edit listen ports
//! - **JdbcConnectionDialog**: create and edit JDBC connections
//! - **ConfirmDeleteDialog**: confirmation for destructive actions

// ============================================================================
// Module Declarations
// ============================================================================

pub mod confirm_delete;
pub mod jdbc_connection_dialog;
pub mod listen_port_dialog;

// ============================================================================
// Re-exports
// ============================================================================

pub use confirm_delete::ConfirmDeleteDialog;
pub use jdbc_connection_dialog::{
    JdbcConnectionDialog, JdbcConnectionDialogMode, build_jdbc_connection_editor,
};
pub use listen_port_dialog::{
    ListenPortDialog, ListenPortDialogMode, build_listen_port_editor,
};
