//! # Warden Model
//!
//! Configuration model for Warden Console.
//!
//! This crate contains the configuration beans the console's property
//! dialogs edit, the container that holds them, and the whole-configuration
//! validation and persistence layers.
//!
//! ## Core Concepts
//!
//! - **ListenPort**: an inbound gateway listener (protocol, port, endpoints)
//! - **JdbcConnection**: an outbound database connection definition
//! - **GatewayConfig**: the root container holding all entities plus metadata
//!

// Module declarations
pub mod gateway;
pub mod jdbc;
pub mod listen_port;
pub mod serialization;
pub mod validation;

// Re-export commonly used types at crate root
pub use gateway::{GatewayConfig, GatewayMeta};
pub use jdbc::JdbcConnection;
pub use listen_port::{EndpointSet, ListenPort, ListenProtocol};
pub use serialization::{load_config, save_config};
pub use validation::{ConfigRule, ValidationReport, Validator};

// Re-export core types that are commonly used with the model
pub use warden_core::{ConsoleError, ConsoleResult, EntityKind, Validatable};

/// Current schema version for configuration files
pub const SCHEMA_VERSION: u32 = 1;

/// File extension for Warden configuration files
pub const CONFIG_FILE_EXTENSION: &str = "warden";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_version() {
        assert_eq!(SCHEMA_VERSION, 1);
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(CONFIG_FILE_EXTENSION, "warden");
    }
}
