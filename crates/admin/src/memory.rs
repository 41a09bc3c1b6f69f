//! In-memory admin services
//!
//! The reference implementation of the admin traits over a locked
//! `GatewayConfig`. It backs the desktop UI in standalone mode and every
//! dialog test; a networked implementation would satisfy the same traits
//! against a live gateway.

use crate::registry::AdminRegistry;
use crate::services::{JdbcConnectionAdmin, ListenPortAdmin};
use std::sync::{Arc, RwLock};
use uuid::Uuid;
use warden_core::{ConsoleError, ConsoleResult, Validatable};
use warden_model::{GatewayConfig, JdbcConnection, ListenPort, ListenProtocol};

// ============================================================================
// InMemoryGateway
// ============================================================================

/// Admin services over an in-memory configuration
pub struct InMemoryGateway {
    state: RwLock<GatewayConfig>,
}

impl InMemoryGateway {
    /// Create an empty gateway
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(GatewayConfig::new(name)),
        }
    }

    /// Wrap an existing configuration
    pub fn with_config(config: GatewayConfig) -> Self {
        Self {
            state: RwLock::new(config),
        }
    }

    /// Create a gateway pre-populated with a typical starter setup
    pub fn with_demo_config() -> Self {
        let mut config = GatewayConfig::new("Standalone Gateway");
        config.meta.description = Some("Local demonstration configuration".to_string());
        config.add_listen_port(ListenPort::new("Default HTTP", ListenProtocol::Http));
        config.add_listen_port(
            ListenPort::new("Default HTTPS", ListenProtocol::Https)
                .with_description("TLS traffic and policy download"),
        );
        Self::with_config(config)
    }

    /// Snapshot the current configuration
    pub fn snapshot(&self) -> GatewayConfig {
        self.lock_read().clone()
    }

    /// Replace the current configuration wholesale (import)
    pub fn replace(&self, config: GatewayConfig) {
        *self.lock_write() = config;
    }

    /// Package this gateway as a registry serving both admin traits
    pub fn into_registry(self) -> AdminRegistry {
        let shared = Arc::new(self);
        AdminRegistry::new(shared.clone(), shared)
    }

    fn lock_read(&self) -> std::sync::RwLockReadGuard<'_, GatewayConfig> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_write(&self) -> std::sync::RwLockWriteGuard<'_, GatewayConfig> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ListenPortAdmin for InMemoryGateway {
    fn find_all(&self) -> ConsoleResult<Vec<ListenPort>> {
        let config = self.lock_read();
        Ok(config.sorted_listen_ports().into_iter().cloned().collect())
    }

    fn find_by_id(&self, id: Uuid) -> ConsoleResult<Option<ListenPort>> {
        Ok(self.lock_read().get_listen_port(id).cloned())
    }

    fn save(&self, port: ListenPort) -> ConsoleResult<Uuid> {
        port.validate()?;

        let mut config = self.lock_write();
        if config.is_port_name_taken(&port.name, Some(port.id)) {
            return Err(ConsoleError::duplicate_name("listen port", &port.name));
        }

        tracing::debug!(name = %port.name, port = port.port, "saving listen port");
        Ok(config.add_listen_port(port))
    }

    fn delete(&self, id: Uuid) -> ConsoleResult<()> {
        let mut config = self.lock_write();
        config
            .remove_listen_port(id)
            .map(|removed| tracing::debug!(name = %removed.name, "deleted listen port"))
            .ok_or(ConsoleError::ListenPortNotFound(id))
    }
}

impl JdbcConnectionAdmin for InMemoryGateway {
    fn find_all(&self) -> ConsoleResult<Vec<JdbcConnection>> {
        let config = self.lock_read();
        Ok(config
            .sorted_jdbc_connections()
            .into_iter()
            .cloned()
            .collect())
    }

    fn find_by_id(&self, id: Uuid) -> ConsoleResult<Option<JdbcConnection>> {
        Ok(self.lock_read().get_jdbc_connection(id).cloned())
    }

    fn save(&self, connection: JdbcConnection) -> ConsoleResult<Uuid> {
        connection.validate()?;

        let mut config = self.lock_write();
        if config.is_connection_name_taken(&connection.name, Some(connection.id)) {
            return Err(ConsoleError::duplicate_name(
                "JDBC connection",
                &connection.name,
            ));
        }

        tracing::debug!(name = %connection.name, "saving JDBC connection");
        Ok(config.add_jdbc_connection(connection))
    }

    fn delete(&self, id: Uuid) -> ConsoleResult<()> {
        let mut config = self.lock_write();
        config
            .remove_jdbc_connection(id)
            .map(|removed| tracing::debug!(name = %removed.name, "deleted JDBC connection"))
            .ok_or(ConsoleError::JdbcConnectionNotFound(id))
    }

    fn test_connection(&self, connection: &JdbcConnection) -> ConsoleResult<()> {
        // Standalone mode has no database to reach; a well-formed definition
        // passes, anything else reports the validation failure the gateway
        // would raise.
        connection.validate().map_err(|e| {
            ConsoleError::admin(format!("connection test failed: {}", e))
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_connection(name: &str) -> JdbcConnection {
        JdbcConnection::new(name)
            .with_driver_class("org.postgresql.Driver")
            .with_url("jdbc:postgresql://db:5432/audit")
            .with_credentials("gateway", "secret")
    }

    #[test]
    fn test_save_and_find_listen_port() {
        let gateway = InMemoryGateway::new("Test");
        let id = ListenPortAdmin::save(
            &gateway,
            ListenPort::new("Default HTTP", ListenProtocol::Http),
        )
        .unwrap();

        let found = ListenPortAdmin::find_by_id(&gateway, id).unwrap().unwrap();
        assert_eq!(found.name, "Default HTTP");
        assert_eq!(ListenPortAdmin::find_all(&gateway).unwrap().len(), 1);
    }

    #[test]
    fn test_save_rejects_invalid_port() {
        let gateway = InMemoryGateway::new("Test");
        let result = ListenPortAdmin::save(
            &gateway,
            ListenPort::new("Low", ListenProtocol::Http).with_port(80),
        );
        assert!(result.is_err());
        assert_eq!(ListenPortAdmin::find_all(&gateway).unwrap().len(), 0);
    }

    #[test]
    fn test_save_rejects_duplicate_name() {
        let gateway = InMemoryGateway::new("Test");
        ListenPortAdmin::save(&gateway, ListenPort::new("Default HTTP", ListenProtocol::Http))
            .unwrap();

        let err = ListenPortAdmin::save(
            &gateway,
            ListenPort::new("default http", ListenProtocol::Https).with_port(9443),
        )
        .unwrap_err();
        assert!(matches!(err, ConsoleError::DuplicateName { .. }));
    }

    #[test]
    fn test_update_same_entity_keeps_name() {
        let gateway = InMemoryGateway::new("Test");
        let id = ListenPortAdmin::save(
            &gateway,
            ListenPort::new("Default HTTP", ListenProtocol::Http),
        )
        .unwrap();

        // Re-saving the same entity under its own name is an update
        let mut updated = ListenPortAdmin::find_by_id(&gateway, id).unwrap().unwrap();
        updated.port = 9090;
        ListenPortAdmin::save(&gateway, updated).unwrap();

        let found = ListenPortAdmin::find_by_id(&gateway, id).unwrap().unwrap();
        assert_eq!(found.port, 9090);
        assert_eq!(ListenPortAdmin::find_all(&gateway).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_unknown_listen_port_errors() {
        let gateway = InMemoryGateway::new("Test");
        let err = ListenPortAdmin::delete(&gateway, Uuid::new_v4()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_jdbc_round_trip() {
        let gateway = InMemoryGateway::new("Test");
        let id = JdbcConnectionAdmin::save(&gateway, valid_connection("Audit DB")).unwrap();

        let found = JdbcConnectionAdmin::find_by_id(&gateway, id)
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "Audit DB");

        JdbcConnectionAdmin::delete(&gateway, id).unwrap();
        assert!(
            JdbcConnectionAdmin::find_by_id(&gateway, id)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_jdbc_duplicate_name_rejected() {
        let gateway = InMemoryGateway::new("Test");
        JdbcConnectionAdmin::save(&gateway, valid_connection("Audit DB")).unwrap();

        let err = JdbcConnectionAdmin::save(&gateway, valid_connection("AUDIT DB")).unwrap_err();
        assert!(matches!(err, ConsoleError::DuplicateName { .. }));
    }

    #[test]
    fn test_connection_probe() {
        let gateway = InMemoryGateway::new("Test");
        assert!(gateway.test_connection(&valid_connection("ok")).is_ok());

        let broken = valid_connection("broken").with_url("not-a-jdbc-url");
        let err = gateway.test_connection(&broken).unwrap_err();
        assert!(err.to_string().contains("connection test failed"));
    }

    #[test]
    fn test_find_all_is_sorted() {
        let gateway = InMemoryGateway::new("Test");
        ListenPortAdmin::save(
            &gateway,
            ListenPort::new("zeta", ListenProtocol::Http).with_port(2000),
        )
        .unwrap();
        ListenPortAdmin::save(
            &gateway,
            ListenPort::new("Alpha", ListenProtocol::Http).with_port(3000),
        )
        .unwrap();

        let names: Vec<String> = ListenPortAdmin::find_all(&gateway)
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Alpha".to_string(), "zeta".to_string()]);
    }

    #[test]
    fn test_snapshot_and_replace() {
        let gateway = InMemoryGateway::with_demo_config();
        let snapshot = gateway.snapshot();
        assert_eq!(snapshot.listen_port_count(), 2);

        gateway.replace(GatewayConfig::new("Fresh"));
        assert_eq!(gateway.snapshot().listen_port_count(), 0);
    }
}
