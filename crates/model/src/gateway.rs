//! Gateway configuration container
//!
//! `GatewayConfig` is the root object the console edits: metadata plus the
//! collections of configured entities, keyed by id.

use crate::jdbc::JdbcConnection;
use crate::listen_port::ListenPort;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;
use warden_core::{ConsoleError, ConsoleResult, Persistable, Validatable};

// ============================================================================
// GatewayMeta
// ============================================================================

/// Metadata about a gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayMeta {
    /// Configuration name (usually the gateway cluster name)
    pub name: String,

    /// Free-form description
    pub description: Option<String>,

    /// Configuration version string
    pub version: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,
}

impl GatewayMeta {
    /// Create metadata for a new configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            version: "1.0.0".to_string(),
            created_at: Utc::now(),
            modified_at: Utc::now(),
        }
    }
}

// ============================================================================
// GatewayConfig
// ============================================================================

/// The root container for one gateway's configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Schema version this configuration was written with
    pub schema_version: u32,

    /// Configuration metadata
    pub meta: GatewayMeta,

    /// Listen ports by id
    pub listen_ports: HashMap<Uuid, ListenPort>,

    /// JDBC connections by id
    pub jdbc_connections: HashMap<Uuid, JdbcConnection>,
}

impl GatewayConfig {
    /// Create an empty configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema_version: crate::SCHEMA_VERSION,
            meta: GatewayMeta::new(name),
            listen_ports: HashMap::new(),
            jdbc_connections: HashMap::new(),
        }
    }

    /// Mark the configuration as modified now
    pub fn touch(&mut self) {
        self.meta.modified_at = Utc::now();
    }

    // ========================================================================
    // Listen port management
    // ========================================================================

    /// Add a listen port, returning its id
    pub fn add_listen_port(&mut self, port: ListenPort) -> Uuid {
        let id = port.id;
        self.listen_ports.insert(id, port);
        self.touch();
        id
    }

    /// Remove a listen port by id
    pub fn remove_listen_port(&mut self, id: Uuid) -> Option<ListenPort> {
        let removed = self.listen_ports.remove(&id);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    /// Get a listen port by id
    pub fn get_listen_port(&self, id: Uuid) -> Option<&ListenPort> {
        self.listen_ports.get(&id)
    }

    /// Get a mutable listen port by id
    pub fn get_listen_port_mut(&mut self, id: Uuid) -> Option<&mut ListenPort> {
        self.listen_ports.get_mut(&id)
    }

    /// Find a listen port by name (case-insensitive)
    pub fn listen_port_by_name(&self, name: &str) -> Option<&ListenPort> {
        self.listen_ports
            .values()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Check whether a listen port name is taken by any entity other than
    /// `exclude`
    pub fn is_port_name_taken(&self, name: &str, exclude: Option<Uuid>) -> bool {
        self.listen_ports
            .values()
            .any(|p| p.name.eq_ignore_ascii_case(name) && Some(p.id) != exclude)
    }

    /// Listen ports sorted by name, for list panels
    pub fn sorted_listen_ports(&self) -> Vec<&ListenPort> {
        let mut ports: Vec<&ListenPort> = self.listen_ports.values().collect();
        ports.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        ports
    }

    /// Number of listen ports
    pub fn listen_port_count(&self) -> usize {
        self.listen_ports.len()
    }

    // ========================================================================
    // JDBC connection management
    // ========================================================================

    /// Add a JDBC connection, returning its id
    pub fn add_jdbc_connection(&mut self, connection: JdbcConnection) -> Uuid {
        let id = connection.id;
        self.jdbc_connections.insert(id, connection);
        self.touch();
        id
    }

    /// Remove a JDBC connection by id
    pub fn remove_jdbc_connection(&mut self, id: Uuid) -> Option<JdbcConnection> {
        let removed = self.jdbc_connections.remove(&id);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    /// Get a JDBC connection by id
    pub fn get_jdbc_connection(&self, id: Uuid) -> Option<&JdbcConnection> {
        self.jdbc_connections.get(&id)
    }

    /// Get a mutable JDBC connection by id
    pub fn get_jdbc_connection_mut(&mut self, id: Uuid) -> Option<&mut JdbcConnection> {
        self.jdbc_connections.get_mut(&id)
    }

    /// Find a JDBC connection by name (case-insensitive)
    pub fn jdbc_connection_by_name(&self, name: &str) -> Option<&JdbcConnection> {
        self.jdbc_connections
            .values()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Check whether a connection name is taken by any entity other than
    /// `exclude`
    pub fn is_connection_name_taken(&self, name: &str, exclude: Option<Uuid>) -> bool {
        self.jdbc_connections
            .values()
            .any(|c| c.name.eq_ignore_ascii_case(name) && Some(c.id) != exclude)
    }

    /// JDBC connections sorted by name, for list panels
    pub fn sorted_jdbc_connections(&self) -> Vec<&JdbcConnection> {
        let mut connections: Vec<&JdbcConnection> = self.jdbc_connections.values().collect();
        connections.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        connections
    }

    /// Number of JDBC connections
    pub fn jdbc_connection_count(&self) -> usize {
        self.jdbc_connections.len()
    }

    /// Total entity count across all collections
    pub fn entity_count(&self) -> usize {
        self.listen_ports.len() + self.jdbc_connections.len()
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new("Gateway")
    }
}

impl Validatable for GatewayConfig {
    fn validate(&self) -> ConsoleResult<()> {
        if self.meta.name.trim().is_empty() {
            return Err(ConsoleError::validation("Configuration name is required"));
        }
        for port in self.listen_ports.values() {
            port.validate()?;
        }
        for connection in self.jdbc_connections.values() {
            connection.validate()?;
        }
        Ok(())
    }
}

impl Persistable for GatewayConfig {
    fn file_extension() -> &'static str {
        crate::CONFIG_FILE_EXTENSION
    }

    fn schema_version() -> u32 {
        crate::SCHEMA_VERSION
    }
}

// ============================================================================
// Tests
// ============================================================================
