//! Serialization and deserialization for gateway configurations
//!
//! This module provides save/load for configuration files, including JSON
//! serialization, schema version migration, and backup handling.

use crate::{GatewayConfig, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use warden_core::{ConsoleError, ConsoleResult};

// ============================================================================
// Constants
// ============================================================================

/// File extension for Warden configuration files
pub const CONFIG_EXTENSION: &str = crate::CONFIG_FILE_EXTENSION;

// ============================================================================
// Config File Wrapper
// ============================================================================

/// Wrapper for configuration files that carries version information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Schema version for migration purposes
    pub schema_version: u32,

    /// The configuration data
    pub config: GatewayConfig,
}

impl ConfigFile {
    /// Create a new config file from a configuration
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            config,
        }
    }

    /// Check if migration is needed
    pub fn needs_migration(&self) -> bool {
        self.schema_version < SCHEMA_VERSION
    }

    /// Migrate to the latest schema version
    pub fn migrate(&mut self) -> ConsoleResult<()> {
        while self.schema_version < SCHEMA_VERSION {
            self.migrate_one_version()?;
        }
        Ok(())
    }

    fn migrate_one_version(&mut self) -> ConsoleResult<()> {
        match self.schema_version {
            // Migration steps go here as the schema evolves
            _ => {
                self.schema_version = SCHEMA_VERSION;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Save Functions
// ============================================================================

/// Save a configuration to a file
pub fn save_config(config: &GatewayConfig, path: impl AsRef<Path>) -> ConsoleResult<()> {
    let path = path.as_ref();
    let file = ConfigFile::new(config.clone());

    let json = serde_json::to_string_pretty(&file).map_err(|e| ConsoleError::FileWrite {
        path: path.to_path_buf(),
        message: format!("Failed to serialize configuration: {}", e),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| ConsoleError::FileWrite {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    std::fs::write(path, json).map_err(|e| ConsoleError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(())
}

/// Save a configuration to a JSON string
pub fn save_config_to_string(config: &GatewayConfig) -> ConsoleResult<String> {
    let file = ConfigFile::new(config.clone());
    serde_json::to_string_pretty(&file).map_err(Into::into)
}

// ============================================================================
// Load Functions
// ============================================================================

/// Load a configuration from a file
pub fn load_config(path: impl AsRef<Path>) -> ConsoleResult<GatewayConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConsoleError::ConfigNotFound(path.to_path_buf()));
    }

    let json = std::fs::read_to_string(path).map_err(|e| ConsoleError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    load_config_from_string(&json).map_err(|e| match e {
        ConsoleError::JsonSerialization(je) => ConsoleError::FileRead {
            path: path.to_path_buf(),
            message: format!("Invalid configuration file format: {}", je),
        },
        other => other,
    })
}

/// Load a configuration from a JSON string
pub fn load_config_from_string(json: &str) -> ConsoleResult<GatewayConfig> {
    // Try the versioned wrapper first
    if let Ok(mut file) = serde_json::from_str::<ConfigFile>(json) {
        if file.needs_migration() {
            file.migrate()?;
        }
        return Ok(file.config);
    }

    // Fall back to a bare GatewayConfig for hand-written files
    let config: GatewayConfig = serde_json::from_str(json)?;
    Ok(config)
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Check if a file looks like a Warden configuration file
pub fn is_config_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match path.extension() {
        Some(ext) if ext == CONFIG_EXTENSION => {}
        _ => return false,
    }
    load_config(path).is_ok()
}

/// Get the default file name for a configuration
pub fn default_file_name(config_name: &str) -> String {
    let safe_name: String = config_name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("{}.{}", safe_name.to_lowercase(), CONFIG_EXTENSION)
}

/// Ensure a path carries the configuration extension
pub fn ensure_extension(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if path.extension().is_none_or(|e| e != CONFIG_EXTENSION) {
        let mut new_path = path.to_path_buf();
        new_path.set_extension(CONFIG_EXTENSION);
        new_path
    } else {
        path.to_path_buf()
    }
}

/// Create a backup of a configuration file before overwriting
pub fn backup_config(path: impl AsRef<Path>) -> ConsoleResult<Option<PathBuf>> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let backup_path = path.with_extension(format!("{}.backup", CONFIG_EXTENSION));

    std::fs::copy(path, &backup_path).map_err(|e| ConsoleError::FileWrite {
        path: backup_path.clone(),
        message: format!("Failed to create backup: {}", e),
    })?;

    Ok(Some(backup_path))
}

// ============================================================================
// Preview
// ============================================================================

/// Configuration metadata without the entity payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigPreview {
    pub name: String,
    pub description: Option<String>,
    pub version: String,
    pub listen_port_count: usize,
    pub jdbc_connection_count: usize,
    pub schema_version: u32,
}

/// Preview a configuration file's metadata
pub fn preview_config(path: impl AsRef<Path>) -> ConsoleResult<ConfigPreview> {
    let config = load_config(path)?;

    Ok(ConfigPreview {
        name: config.meta.name.clone(),
        description: config.meta.description.clone(),
        version: config.meta.version.clone(),
        listen_port_count: config.listen_port_count(),
        jdbc_connection_count: config.jdbc_connection_count(),
        schema_version: config.schema_version,
    })
}

// ============================================================================
// Tests
// ============================================================================
