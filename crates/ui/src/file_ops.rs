//! File Operations for Warden Console
//!
//! Configuration import/export using the `rfd` crate for native file
//! dialogs. Everything flows through the admin services: export collects
//! the current snapshots into a `GatewayConfig`, import replays a loaded
//! file through `save` so the gateway applies its usual checks.

use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};
use warden_admin::AdminRegistry;
use warden_core::{ConsoleError, ConsoleResult};
use warden_model::serialization::{
    CONFIG_EXTENSION, backup_config, ensure_extension, load_config_from_string,
    save_config_to_string,
};
use warden_model::GatewayConfig;

// ============================================================================
// File Filter Constants
// ============================================================================

/// File extension for Warden configuration files
pub const FILE_EXTENSION: &str = CONFIG_EXTENSION;

/// Display name for file filter
pub const FILE_TYPE_NAME: &str = "Warden Configuration";

// ============================================================================
// File Dialog Functions
// ============================================================================

/// Open a file dialog to select a configuration file to import
///
/// Returns the selected file path, or None if the dialog was cancelled.
pub async fn show_open_dialog() -> Option<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title("Import Configuration")
        .add_filter(FILE_TYPE_NAME, &[FILE_EXTENSION])
        .add_filter("All Files", &["*"])
        .pick_file()
        .await?;

    Some(file.path().to_path_buf())
}

/// Open a file dialog to select where to export the configuration
///
/// Returns the selected path with the `.warden` extension guaranteed, or
/// None if the dialog was cancelled.
pub async fn show_save_dialog(default_name: Option<&str>) -> Option<PathBuf> {
    let mut dialog = AsyncFileDialog::new()
        .set_title("Export Configuration")
        .add_filter(FILE_TYPE_NAME, &[FILE_EXTENSION]);

    if let Some(name) = default_name {
        dialog = dialog.set_file_name(warden_model::serialization::default_file_name(name));
    }

    let file = dialog.save_file().await?;
    Some(ensure_extension(file.path()))
}

// ============================================================================
// Export
// ============================================================================

/// Collect the current admin snapshots into one configuration
pub fn collect_config(registry: &AdminRegistry, name: &str) -> ConsoleResult<GatewayConfig> {
    let mut config = GatewayConfig::new(name);
    for port in registry.listen_ports().find_all()? {
        config.add_listen_port(port);
    }
    for connection in registry.jdbc_connections().find_all()? {
        config.add_jdbc_connection(connection);
    }
    Ok(config)
}

/// Export the current configuration to the given path
pub async fn export_config_to(
    registry: &AdminRegistry,
    name: &str,
    path: &Path,
) -> ConsoleResult<()> {
    let config = collect_config(registry, name)?;
    let json = save_config_to_string(&config)?;

    backup_config(path)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| ConsoleError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::info!(path = %path.display(), "exported configuration");
    Ok(())
}

/// Ask for a destination and export the current configuration
///
/// Returns the chosen path, or None if the dialog was cancelled.
pub async fn export_config(
    registry: &AdminRegistry,
    name: &str,
) -> ConsoleResult<Option<PathBuf>> {
    let Some(path) = show_save_dialog(Some(name)).await else {
        return Ok(None);
    };
    export_config_to(registry, name, &path).await?;
    Ok(Some(path))
}

// ============================================================================
// Import
// ============================================================================

/// Outcome of replaying an imported configuration through the services
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Entities the gateway accepted
    pub imported: usize,
    /// Entities the gateway rejected, with reasons
    pub skipped: Vec<String>,
}

impl ImportSummary {
    /// One-line description for the status bar
    pub fn describe(&self) -> String {
        if self.skipped.is_empty() {
            format!("Imported {} entities", self.imported)
        } else {
            format!(
                "Imported {} entities, skipped {}",
                self.imported,
                self.skipped.len()
            )
        }
    }
}

/// Import a configuration file, replaying each entity through `save`
pub async fn import_config_from(
    registry: &AdminRegistry,
    path: &Path,
) -> ConsoleResult<ImportSummary> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConsoleError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let config = load_config_from_string(&json)?;

    let mut summary = ImportSummary::default();
    for port in config.listen_ports.into_values() {
        let name = port.name.clone();
        match registry.listen_ports().save(port) {
            Ok(_) => summary.imported += 1,
            Err(e) => summary.skipped.push(format!("listen port '{}': {}", name, e)),
        }
    }
    for connection in config.jdbc_connections.into_values() {
        let name = connection.name.clone();
        match registry.jdbc_connections().save(connection) {
            Ok(_) => summary.imported += 1,
            Err(e) => summary
                .skipped
                .push(format!("JDBC connection '{}': {}", name, e)),
        }
    }

    tracing::info!(
        path = %path.display(),
        imported = summary.imported,
        skipped = summary.skipped.len(),
        "imported configuration"
    );
    Ok(summary)
}

/// Ask for a source file and import it
///
/// Returns the summary and path, or None if the dialog was cancelled.
pub async fn import_config(
    registry: &AdminRegistry,
) -> ConsoleResult<Option<(PathBuf, ImportSummary)>> {
    let Some(path) = show_open_dialog().await else {
        return Ok(None);
    };
    let summary = import_config_from(registry, &path).await?;
    Ok(Some((path, summary)))
}

// ============================================================================
// Tests
// ============================================================================
