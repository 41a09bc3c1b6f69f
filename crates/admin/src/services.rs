//! Admin service traits
//!
//! The console's view of the gateway's administrative APIs. Calls are
//! synchronous; sequencing around slow calls is the caller's concern.

use uuid::Uuid;
use warden_core::ConsoleResult;
use warden_model::{JdbcConnection, ListenPort};

// ============================================================================
// ListenPortAdmin
// ============================================================================

/// Administrative operations over listen ports
pub trait ListenPortAdmin: Send + Sync {
    /// All configured listen ports, sorted by name
    fn find_all(&self) -> ConsoleResult<Vec<ListenPort>>;

    /// Look up one listen port
    fn find_by_id(&self, id: Uuid) -> ConsoleResult<Option<ListenPort>>;

    /// Create or update a listen port, returning its id.
    ///
    /// Rejects entities that fail validation or whose name collides with
    /// another listen port.
    fn save(&self, port: ListenPort) -> ConsoleResult<Uuid>;

    /// Delete a listen port; unknown ids are an error
    fn delete(&self, id: Uuid) -> ConsoleResult<()>;
}

// ============================================================================
// JdbcConnectionAdmin
// ============================================================================

/// Administrative operations over JDBC connections
pub trait JdbcConnectionAdmin: Send + Sync {
    /// All configured connections, sorted by name
    fn find_all(&self) -> ConsoleResult<Vec<JdbcConnection>>;

    /// Look up one connection
    fn find_by_id(&self, id: Uuid) -> ConsoleResult<Option<JdbcConnection>>;

    /// Create or update a connection, returning its id.
    ///
    /// Rejects entities that fail validation or whose name collides with
    /// another connection.
    fn save(&self, connection: JdbcConnection) -> ConsoleResult<Uuid>;

    /// Delete a connection; unknown ids are an error
    fn delete(&self, id: Uuid) -> ConsoleResult<()>;

    /// Probe a connection definition without persisting it (the dialog's
    /// "Test" button)
    fn test_connection(&self, connection: &JdbcConnection) -> ConsoleResult<()>;
}
