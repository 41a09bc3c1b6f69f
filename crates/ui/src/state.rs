//! Application State Management for Warden Console
//!
//! Centralized state management using Dioxus Signals: entity list
//! snapshots refreshed from the admin services, the active section and
//! dialog, and the status bar message.

use dioxus::prelude::*;
use std::path::PathBuf;
use uuid::Uuid;
use warden_admin::{AdminRegistry, PermissionFlags};
use warden_model::{JdbcConnection, ListenPort};

// ============================================================================
// Sections
// ============================================================================

/// Entity sections shown in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Inbound listen ports
    #[default]
    ListenPorts,
    /// Outbound JDBC connections
    JdbcConnections,
}

impl Section {
    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::ListenPorts => "Listen Ports",
            Section::JdbcConnections => "JDBC Connections",
        }
    }

    /// Get the icon for this section
    pub fn icon(&self) -> &'static str {
        match self {
            Section::ListenPorts => "🔌",
            Section::JdbcConnections => "🗄",
        }
    }

    /// All sections in sidebar order
    pub fn all() -> &'static [Section] {
        &[Section::ListenPorts, Section::JdbcConnections]
    }
}

// ============================================================================
// Dialogs
// ============================================================================

/// Dialog types
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// New listen port dialog
    NewListenPort,
    /// Edit listen port dialog
    EditListenPort(Uuid),
    /// New JDBC connection dialog
    NewJdbcConnection,
    /// Edit JDBC connection dialog
    EditJdbcConnection(Uuid),
    /// Delete confirmation dialog
    ConfirmDelete(DeleteTarget),
    /// Error dialog
    Error(String),
}

/// Target for delete confirmation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeleteTarget {
    ListenPort(Uuid),
    JdbcConnection(Uuid),
}

// ============================================================================
// Status Bar
// ============================================================================

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    /// CSS class used by the status bar
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusLevel::Info => "info",
            StatusLevel::Success => "success",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// General UI state (active section, dialogs, status)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    /// Currently active sidebar section
    pub active_section: Section,
    /// Active dialog (if any)
    pub active_dialog: Option<Dialog>,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
}

impl UiState {
    /// Create new UI state
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to a section
    pub fn navigate(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Show a dialog
    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = None;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container.
///
/// Entity lists are snapshots read through the admin services; every
/// mutation path calls [`refresh`](AppState::refresh) afterwards so the
/// panels always reflect what the gateway accepted.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Listen port snapshot, sorted by name
    pub ports: Vec<ListenPort>,
    /// JDBC connection snapshot, sorted by name
    pub connections: Vec<JdbcConnection>,
    /// Permissions for listen port dialogs
    pub port_permissions: PermissionFlags,
    /// Permissions for JDBC connection dialogs
    pub jdbc_permissions: PermissionFlags,
    /// UI state
    pub ui: UiState,
    /// Last import/export path
    pub config_path: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            ports: Vec::new(),
            connections: Vec::new(),
            port_permissions: PermissionFlags::all(),
            jdbc_permissions: PermissionFlags::all(),
            ui: UiState::new(),
            config_path: None,
        }
    }
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-read the entity snapshots from the admin services
    pub fn refresh(&mut self, registry: &AdminRegistry) {
        match registry.listen_ports().find_all() {
            Ok(ports) => self.ports = ports,
            Err(e) => {
                tracing::warn!("failed to list listen ports: {}", e);
                self.ui
                    .set_status(format!("Failed to load listen ports: {}", e), StatusLevel::Error);
            }
        }
        match registry.jdbc_connections().find_all() {
            Ok(connections) => self.connections = connections,
            Err(e) => {
                tracing::warn!("failed to list JDBC connections: {}", e);
                self.ui.set_status(
                    format!("Failed to load JDBC connections: {}", e),
                    StatusLevel::Error,
                );
            }
        }
    }

    /// Find a listen port snapshot by id
    pub fn port(&self, id: Uuid) -> Option<&ListenPort> {
        self.ports.iter().find(|p| p.id == id)
    }

    /// Find a JDBC connection snapshot by id
    pub fn connection(&self, id: Uuid) -> Option<&JdbcConnection> {
        self.connections.iter().find(|c| c.id == id)
    }

    /// Listen port names other dialogs must not reuse
    pub fn port_names_except(&self, exclude: Option<Uuid>) -> Vec<String> {
        self.ports
            .iter()
            .filter(|p| Some(p.id) != exclude)
            .map(|p| p.name.to_lowercase())
            .collect()
    }

    /// Connection names other dialogs must not reuse
    pub fn connection_names_except(&self, exclude: Option<Uuid>) -> Vec<String> {
        self.connections
            .iter()
            .filter(|c| Some(c.id) != exclude)
            .map(|c| c.name.to_lowercase())
            .collect()
    }

    /// Get window title
    pub fn window_title(&self) -> String {
        format!(
            "Warden Console - {} ports, {} connections",
            self.ports.len(),
            self.connections.len()
        )
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
/// Use this in components to access and modify app state
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// Tests
// ============================================================================
