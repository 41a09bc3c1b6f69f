//! # Warden UI
//!
//! Dioxus Desktop UI for Warden Console.
//!
//! This crate provides the administrative desktop interface: entity list
//! panels, property dialogs built on the `warden_forms` editor engine, and
//! configuration import/export.
//!
//! ## Features
//!
//! - Listen port and JDBC connection management panels
//! - Property dialogs with reactive validation and permission-aware
//!   read-only mode
//! - Configuration import/export through native file dialogs
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod file_ops;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use warden_admin;
pub use warden_forms;
pub use warden_model;

// Re-export main components
pub use app::App;
pub use components::{
    Checkbox, ConfirmDeleteDialog, JdbcConnectionDialog, JdbcConnectionDialogMode,
    ListenPortDialog, ListenPortDialogMode, NumberInput, Select, SelectOption, TextInput,
};
pub use file_ops::{export_config, import_config, show_open_dialog, show_save_dialog};
pub use state::{
    APP_STATE, AppState, DeleteTarget, Dialog, Section, StatusLevel, StatusMessage, UiState,
};

use std::sync::OnceLock;
use warden_admin::{AdminRegistry, InMemoryGateway};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Warden Console";

/// Application display title
pub const TITLE: &str = "Warden Console - Gateway Administration";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Functions
// ============================================================================

/// Registry injected by [`launch_with_registry`], read once by the app root
static LAUNCH_REGISTRY: OnceLock<AdminRegistry> = OnceLock::new();

/// Resolve the registry the app root provides as context.
///
/// Falls back to a standalone in-memory gateway when none was injected
/// (plain `launch()`).
pub(crate) fn launch_registry() -> AdminRegistry {
    LAUNCH_REGISTRY
        .get()
        .cloned()
        .unwrap_or_else(|| InMemoryGateway::with_demo_config().into_registry())
}

/// Launch the Warden Console desktop application against a standalone
/// in-memory gateway
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     warden_ui::launch();
/// }
/// ```
pub fn launch() {
    launch_with_registry(InMemoryGateway::with_demo_config().into_registry());
}

/// Launch the desktop application against the given admin services
pub fn launch_with_registry(registry: AdminRegistry) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let _ = LAUNCH_REGISTRY.set(registry);

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(760.0, 560.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Warden Console");
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".dialog"));
    }

    #[test]
    fn test_launch_registry_falls_back_to_demo() {
        // Without an injected registry the app runs standalone
        let registry = launch_registry();
        assert!(!registry.listen_ports().find_all().unwrap().is_empty());
    }
}
