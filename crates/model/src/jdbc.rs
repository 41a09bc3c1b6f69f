//! JDBC connection definitions
//!
//! An outbound database connection the gateway's policies can route
//! queries through. Credentials are stored as entered; secret management
//! is the gateway's concern, not the console's.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use warden_core::{ConsoleError, ConsoleResult, Identifiable, Named, Timestamped, Validatable};

/// Pool size bounds enforced by the gateway
pub const MIN_POOL_SIZE: u32 = 1;
pub const MAX_POOL_SIZE: u32 = 100;

/// Defaults applied to new connections
pub const DEFAULT_MIN_POOL_SIZE: u32 = 3;
pub const DEFAULT_MAX_POOL_SIZE: u32 = 15;

// ============================================================================
// JdbcConnection
// ============================================================================

/// A JDBC connection definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdbcConnection {
    /// Unique identifier
    pub id: Uuid,

    /// Display name (unique among connections, case-insensitive)
    pub name: String,

    /// Fully-qualified driver class, e.g. `org.postgresql.Driver`
    pub driver_class: String,

    /// Connection URL, e.g. `jdbc:postgresql://db.local:5432/warden`
    pub jdbc_url: String,

    /// Database account name
    pub username: String,

    /// Database account password
    pub password: String,

    /// Minimum pooled connections
    pub min_pool_size: u32,

    /// Maximum pooled connections
    pub max_pool_size: u32,

    /// Whether policies may use this connection
    pub enabled: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,
}

impl JdbcConnection {
    /// Create a new enabled connection with default pool sizes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            driver_class: String::new(),
            jdbc_url: String::new(),
            username: String::new(),
            password: String::new(),
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            enabled: true,
            created_at: Utc::now(),
            modified_at: Utc::now(),
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set the driver class
    pub fn with_driver_class(mut self, driver_class: impl Into<String>) -> Self {
        self.driver_class = driver_class.into();
        self
    }

    /// Set the connection URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.jdbc_url = url.into();
        self
    }

    /// Set the credentials
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set the pool size bounds
    pub fn with_pool_sizes(mut self, min: u32, max: u32) -> Self {
        self.min_pool_size = min;
        self.max_pool_size = max;
        self
    }

    /// Create the connection disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Password masked for display
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count().min(12))
    }

    /// Summary line for list panels
    pub fn summary(&self) -> String {
        if self.jdbc_url.is_empty() {
            "(no URL)".to_string()
        } else {
            self.jdbc_url.clone()
        }
    }
}

impl Identifiable for JdbcConnection {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Named for JdbcConnection {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
        self.touch();
    }
}

impl Timestamped for JdbcConnection {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}

impl Validatable for JdbcConnection {
    fn validate(&self) -> ConsoleResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConsoleError::validation("Connection name is required"));
        }
        if self.driver_class.trim().is_empty() {
            return Err(ConsoleError::entity_validation(
                "JDBC connection",
                &self.name,
                "driver class is required",
            ));
        }
        if !self.jdbc_url.starts_with("jdbc:") {
            return Err(ConsoleError::entity_validation(
                "JDBC connection",
                &self.name,
                "URL must start with 'jdbc:'",
            ));
        }
        if self.min_pool_size > self.max_pool_size {
            return Err(ConsoleError::entity_validation(
                "JDBC connection",
                &self.name,
                "minimum pool size exceeds maximum",
            ));
        }
        if !(MIN_POOL_SIZE..=MAX_POOL_SIZE).contains(&self.min_pool_size)
            || !(MIN_POOL_SIZE..=MAX_POOL_SIZE).contains(&self.max_pool_size)
        {
            return Err(ConsoleError::entity_validation(
                "JDBC connection",
                &self.name,
                format!(
                    "pool sizes must be between {} and {}",
                    MIN_POOL_SIZE, MAX_POOL_SIZE
                ),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_connection() -> JdbcConnection {
        JdbcConnection::new("OracleDev")
            .with_driver_class("oracle.jdbc.OracleDriver")
            .with_url("jdbc:oracle:thin:@db.local:1521/dev")
            .with_credentials("gateway", "secret")
    }

    #[test]
    fn test_new_defaults() {
        let conn = JdbcConnection::new("Fresh");
        assert!(conn.enabled);
        assert_eq!(conn.min_pool_size, DEFAULT_MIN_POOL_SIZE);
        assert_eq!(conn.max_pool_size, DEFAULT_MAX_POOL_SIZE);
    }

    #[test]
    fn test_valid_connection_passes() {
        assert!(valid_connection().is_valid());
    }

    #[test]
    fn test_validation_requires_jdbc_prefix() {
        let conn = valid_connection().with_url("postgresql://db.local/dev");
        let err = conn.validate().unwrap_err();
        assert!(err.to_string().contains("jdbc:"));
    }

    #[test]
    fn test_validation_requires_driver_class() {
        let conn = valid_connection().with_driver_class("  ");
        assert!(!conn.is_valid());
    }

    #[test]
    fn test_validation_rejects_inverted_pool() {
        let conn = valid_connection().with_pool_sizes(20, 5);
        let err = conn.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_validation_rejects_out_of_bounds_pool() {
        let conn = valid_connection().with_pool_sizes(0, 5);
        assert!(!conn.is_valid());

        let conn = valid_connection().with_pool_sizes(5, 500);
        assert!(!conn.is_valid());
    }

    #[test]
    fn test_masked_password() {
        let conn = valid_connection();
        assert_eq!(conn.masked_password(), "••••••");

        let long = valid_connection().with_credentials("u", "a-very-long-password-indeed");
        assert_eq!(long.masked_password().chars().count(), 12);
    }

    #[test]
    fn test_summary() {
        assert_eq!(JdbcConnection::new("X").summary(), "(no URL)");
        assert!(valid_connection().summary().starts_with("jdbc:oracle"));
    }
}
