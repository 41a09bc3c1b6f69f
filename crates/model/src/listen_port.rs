//! Listen port definitions
//!
//! A listen port is an inbound listener on the gateway: a protocol, a TCP
//! port, and the set of gateway endpoints reachable through it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use warden_core::{ConsoleError, ConsoleResult, Identifiable, Named, Timestamped, Validatable};

/// Lowest port a listener may bind (non-privileged range)
pub const MIN_LISTEN_PORT: u16 = 1025;

/// Highest port a listener may bind
pub const MAX_LISTEN_PORT: u16 = 65535;

/// Bounds for the optional worker thread pool
pub const MIN_THREAD_POOL_SIZE: u32 = 1;
pub const MAX_THREAD_POOL_SIZE: u32 = 200;

// ============================================================================
// ListenProtocol
// ============================================================================

/// Transport protocols a listen port can speak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListenProtocol {
    #[default]
    Http,
    Https,
    Ftp,
    Ftps,
}

impl ListenProtocol {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ListenProtocol::Http => "HTTP",
            ListenProtocol::Https => "HTTPS",
            ListenProtocol::Ftp => "FTP",
            ListenProtocol::Ftps => "FTPS",
        }
    }

    /// Stable key used in combo boxes and serialized forms
    pub fn key(&self) -> &'static str {
        match self {
            ListenProtocol::Http => "http",
            ListenProtocol::Https => "https",
            ListenProtocol::Ftp => "ftp",
            ListenProtocol::Ftps => "ftps",
        }
    }

    /// Parse a combo box key back into a protocol
    pub fn from_key(key: &str) -> Option<ListenProtocol> {
        match key {
            "http" => Some(ListenProtocol::Http),
            "https" => Some(ListenProtocol::Https),
            "ftp" => Some(ListenProtocol::Ftp),
            "ftps" => Some(ListenProtocol::Ftps),
            _ => None,
        }
    }

    /// Conventional default port for this protocol
    pub fn default_port(&self) -> u16 {
        match self {
            ListenProtocol::Http => 8080,
            ListenProtocol::Https => 8443,
            ListenProtocol::Ftp => 2121,
            ListenProtocol::Ftps => 2990,
        }
    }

    /// Whether the protocol carries TLS
    pub fn is_secure(&self) -> bool {
        matches!(self, ListenProtocol::Https | ListenProtocol::Ftps)
    }

    /// Get all protocols
    pub fn all() -> &'static [ListenProtocol] {
        &[
            ListenProtocol::Http,
            ListenProtocol::Https,
            ListenProtocol::Ftp,
            ListenProtocol::Ftps,
        ]
    }
}

impl std::fmt::Display for ListenProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// EndpointSet
// ============================================================================

/// Which gateway endpoints are reachable through a listen port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSet {
    /// Published service message traffic
    pub message_input: bool,

    /// Administrative API access
    pub admin_access: bool,

    /// Policy download for connected agents
    pub policy_download: bool,
}

impl EndpointSet {
    /// Message traffic only (the default for new ports)
    pub fn messages_only() -> Self {
        Self {
            message_input: true,
            admin_access: false,
            policy_download: false,
        }
    }

    /// Everything enabled
    pub fn all() -> Self {
        Self {
            message_input: true,
            admin_access: true,
            policy_download: true,
        }
    }

    /// Check whether at least one endpoint is enabled
    pub fn any_enabled(&self) -> bool {
        self.message_input || self.admin_access || self.policy_download
    }

    /// Count of enabled endpoints
    pub fn enabled_count(&self) -> usize {
        [self.message_input, self.admin_access, self.policy_download]
            .iter()
            .filter(|on| **on)
            .count()
    }
}

impl Default for EndpointSet {
    fn default() -> Self {
        Self::messages_only()
    }
}

// ============================================================================
// ListenPort
// ============================================================================

/// An inbound listener configured on the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListenPort {
    /// Unique identifier
    pub id: Uuid,

    /// Display name (unique among listen ports, case-insensitive)
    pub name: String,

    /// Whether the listener is active
    pub enabled: bool,

    /// Transport protocol
    pub protocol: ListenProtocol,

    /// TCP port to bind
    pub port: u16,

    /// Optional dedicated worker pool; `None` uses the shared pool
    pub thread_pool_size: Option<u32>,

    /// Endpoints reachable through this listener
    pub endpoints: EndpointSet,

    /// Free-form description
    pub description: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,
}

impl ListenPort {
    /// Create a new enabled listener on the protocol's default port
    pub fn new(name: impl Into<String>, protocol: ListenProtocol) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            enabled: true,
            protocol,
            port: protocol.default_port(),
            thread_pool_size: None,
            endpoints: EndpointSet::default(),
            description: None,
            created_at: Utc::now(),
            modified_at: Utc::now(),
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a dedicated thread pool size
    pub fn with_thread_pool_size(mut self, size: u32) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    /// Set the endpoint set
    pub fn with_endpoints(mut self, endpoints: EndpointSet) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Create the listener disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Summary line for list panels, e.g. "HTTPS :8443"
    pub fn summary(&self) -> String {
        format!("{} :{}", self.protocol.display_name(), self.port)
    }
}

impl Identifiable for ListenPort {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Named for ListenPort {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
        self.touch();
    }
}

impl Timestamped for ListenPort {
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

impl Validatable for ListenPort {
    fn validate(&self) -> ConsoleResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConsoleError::validation("Listen port name is required"));
        }
        if self.port < MIN_LISTEN_PORT {
            return Err(ConsoleError::entity_validation(
                "listen port",
                &self.name,
                format!(
                    "port {} is in the privileged range (minimum is {})",
                    self.port, MIN_LISTEN_PORT
                ),
            ));
        }
        if let Some(size) = self.thread_pool_size {
            if !(MIN_THREAD_POOL_SIZE..=MAX_THREAD_POOL_SIZE).contains(&size) {
                return Err(ConsoleError::entity_validation(
                    "listen port",
                    &self.name,
                    format!(
                        "thread pool size must be between {} and {}",
                        MIN_THREAD_POOL_SIZE, MAX_THREAD_POOL_SIZE
                    ),
                ));
            }
        }
        if !self.endpoints.any_enabled() {
            return Err(ConsoleError::entity_validation(
                "listen port",
                &self.name,
                "at least one endpoint must be enabled",
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

    #[test]
    fn test_protocol_keys_round_trip() {
        for protocol in ListenProtocol::all() {
            assert_eq!(ListenProtocol::from_key(protocol.key()), Some(*protocol));
        }
        assert_eq!(ListenProtocol::from_key("gopher"), None);
    }

    #[test]
    fn test_protocol_properties() {
        assert!(ListenProtocol::Https.is_secure());
        assert!(ListenProtocol::Ftps.is_secure());
        assert!(!ListenProtocol::Http.is_secure());
        assert_eq!(ListenProtocol::Https.default_port(), 8443);
        assert_eq!(ListenProtocol::Http.display_name(), "HTTP");
    }

    #[test]
    fn test_endpoint_set() {
        let endpoints = EndpointSet::messages_only();
        assert!(endpoints.any_enabled());
        assert_eq!(endpoints.enabled_count(), 1);

        assert_eq!(EndpointSet::all().enabled_count(), 3);

        let none = EndpointSet {
            message_input: false,
            admin_access: false,
            policy_download: false,
        };
        assert!(!none.any_enabled());
    }

    #[test]
    fn test_new_listen_port_defaults() {
        let port = ListenPort::new("Default HTTP", ListenProtocol::Http);
        assert!(port.enabled);
        assert_eq!(port.port, 8080);
        assert!(port.endpoints.message_input);
        assert!(!port.endpoints.admin_access);
        assert!(port.is_valid());
    }

    #[test]
    fn test_builder_methods() {
        let port = ListenPort::new("Admin HTTPS", ListenProtocol::Https)
            .with_port(9443)
            .with_description("management interface")
            .with_thread_pool_size(25)
            .with_endpoints(EndpointSet::all())
            .disabled();

        assert_eq!(port.port, 9443);
        assert_eq!(port.thread_pool_size, Some(25));
        assert!(!port.enabled);
        assert_eq!(port.summary(), "HTTPS :9443");
    }

    #[test]
    fn test_validation_rejects_privileged_port() {
        let port = ListenPort::new("Low", ListenProtocol::Http).with_port(80);
        let err = port.validate().unwrap_err();
        assert!(err.to_string().contains("privileged"));
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let port = ListenPort::new("   ", ListenProtocol::Http);
        assert!(!port.is_valid());
    }

    #[test]
    fn test_validation_rejects_oversized_pool() {
        let port = ListenPort::new("Busy", ListenProtocol::Http).with_thread_pool_size(10_000);
        assert!(!port.is_valid());
    }

    #[test]
    fn test_validation_requires_an_endpoint() {
        let port = ListenPort::new("Dead", ListenProtocol::Http).with_endpoints(EndpointSet {
            message_input: false,
            admin_access: false,
            policy_download: false,
        });
        assert!(!port.is_valid());
    }

    #[test]
    fn test_touch_updates_modified() {
        let mut port = ListenPort::new("Default HTTP", ListenProtocol::Http);
        let before = port.modified_at;
        port.set_name("Renamed".to_string());
        assert!(port.modified_at >= before);
        assert_eq!(port.name(), "Renamed");
    }
}
