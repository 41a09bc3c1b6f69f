//! Admin service registry
//!
//! A plain struct of trait-object handles, constructed explicitly and
//! handed to whoever needs it. Dialogs receive it through component
//! context; tests build one around an [`InMemoryGateway`](crate::memory::InMemoryGateway).

use crate::services::{JdbcConnectionAdmin, ListenPortAdmin};
use std::sync::Arc;

// ============================================================================
// AdminRegistry
// ============================================================================

/// Handles to the gateway's administrative services.
///
/// Cloning is cheap; clones share the underlying service instances.
#[derive(Clone)]
pub struct AdminRegistry {
    listen_ports: Arc<dyn ListenPortAdmin>,
    jdbc_connections: Arc<dyn JdbcConnectionAdmin>,
}

impl AdminRegistry {
    /// Assemble a registry from service handles
    pub fn new(
        listen_ports: Arc<dyn ListenPortAdmin>,
        jdbc_connections: Arc<dyn JdbcConnectionAdmin>,
    ) -> Self {
        Self {
            listen_ports,
            jdbc_connections,
        }
    }

    /// The listen port service
    pub fn listen_ports(&self) -> &dyn ListenPortAdmin {
        self.listen_ports.as_ref()
    }

    /// The JDBC connection service
    pub fn jdbc_connections(&self) -> &dyn JdbcConnectionAdmin {
        self.jdbc_connections.as_ref()
    }
}

impl std::fmt::Debug for AdminRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminRegistry").finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::memory::InMemoryGateway;
    use warden_model::{ListenPort, ListenProtocol};

    #[test]
    fn test_registry_clones_share_services() {
        let registry = InMemoryGateway::new("Shared").into_registry();
        let clone = registry.clone();

        let id = registry
            .listen_ports()
            .save(ListenPort::new("Default HTTP", ListenProtocol::Http))
            .unwrap();

        // The clone sees the entity saved through the original
        assert!(clone.listen_ports().find_by_id(id).unwrap().is_some());
    }
}
