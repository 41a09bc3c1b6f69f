//! Whole-configuration validation
//!
//! Dialog-level validation keeps a single form consistent; this module
//! checks an entire `GatewayConfig` before it is exported or pushed to a
//! gateway, reporting every problem at once rather than the first.

use crate::gateway::GatewayConfig;
use crate::jdbc::{MAX_POOL_SIZE, MIN_POOL_SIZE};
use crate::listen_port::MIN_LISTEN_PORT;
use std::collections::HashSet;
use warden_core::{ConsoleError, ConsoleResult};

// ============================================================================
// ValidationReport
// ============================================================================

/// Result of validating a configuration
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Whether the validation passed
    pub valid: bool,

    /// List of errors (empty if valid)
    pub errors: Vec<ConfigError>,

    /// List of warnings (non-fatal issues)
    pub warnings: Vec<ConfigWarning>,
}

impl ValidationReport {
    /// Create a passing report
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the report
    pub fn add_error(&mut self, error: ConfigError) {
        self.valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the report
    pub fn add_warning(&mut self, warning: ConfigWarning) {
        self.warnings.push(warning);
    }

    /// Merge another report into this one
    pub fn merge(&mut self, other: ValidationReport) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Convert to a ConsoleResult (fails if any errors)
    pub fn to_result(self) -> ConsoleResult<()> {
        if self.valid {
            Ok(())
        } else {
            let msg = self
                .errors
                .iter()
                .map(|e| e.message.clone())
                .collect::<Vec<_>>()
                .join("; ");
            Err(ConsoleError::validation(msg))
        }
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::ok()
    }
}

// ============================================================================
// ConfigError
// ============================================================================

/// A configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// Error code for programmatic handling
    pub code: ConfigErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Path to the problematic element (e.g., "listen_ports.Default HTTP")
    pub path: Option<String>,

    /// Suggested fix
    pub suggestion: Option<String>,
}

impl ConfigError {
    /// Create a new error
    pub fn new(code: ConfigErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
            suggestion: None,
        }
    }

    /// Add a path to the error
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add a suggestion to the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "[{}] {}", path, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// Error codes for configuration validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigErrorCode {
    // Listen port errors
    EmptyPortName,
    DuplicatePortName,
    PrivilegedPort,
    NoEndpointsEnabled,
    ThreadPoolOutOfRange,
    PortCollision,

    // JDBC connection errors
    EmptyConnectionName,
    DuplicateConnectionName,
    MissingDriverClass,
    MalformedJdbcUrl,
    PoolSizeInverted,
    PoolSizeOutOfRange,

    // Metadata errors
    EmptyConfigName,

    // Generic
    Custom,
}

// ============================================================================
// ConfigWarning
// ============================================================================

/// A non-fatal configuration issue
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// Warning code
    pub code: ConfigWarningCode,

    /// Human-readable warning message
    pub message: String,

    /// Path to the element
    pub path: Option<String>,
}

impl ConfigWarning {
    /// Create a new warning
    pub fn new(code: ConfigWarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Add a path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "[{}] Warning: {}", path, self.message)
        } else {
            write!(f, "Warning: {}", self.message)
        }
    }
}

/// Warning codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigWarningCode {
    NoListenPorts,
    NoAdminAccess,
    EmptyPassword,
    AllPortsDisabled,
    NoDescription,
    Custom,
}

// ============================================================================
// ConfigRule Trait
// ============================================================================

/// A validation rule over an entire configuration
pub trait ConfigRule {
    /// Get the rule name
    fn name(&self) -> &'static str;

    /// Get the rule description
    fn description(&self) -> &'static str;

    /// Validate a configuration and return the report
    fn validate(&self, config: &GatewayConfig) -> ValidationReport;
}

// ============================================================================
// Validator
// ============================================================================

/// Configuration validator that runs multiple rules
#[derive(Default)]
pub struct Validator {
    rules: Vec<Box<dyn ConfigRule>>,
}

impl Validator {
    /// Create a new validator with no rules
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a validator with the default rule set
    pub fn with_default_rules() -> Self {
        let mut validator = Self::new();
        validator.add_rule(Box::new(ListenPortsRule));
        validator.add_rule(Box::new(JdbcConnectionsRule));
        validator.add_rule(Box::new(MetaRule));
        validator
    }

    /// Add a rule
    pub fn add_rule(&mut self, rule: Box<dyn ConfigRule>) {
        self.rules.push(rule);
    }

    /// Validate a configuration with all rules
    pub fn validate(&self, config: &GatewayConfig) -> ValidationReport {
        let mut report = ValidationReport::ok();

        for rule in &self.rules {
            report.merge(rule.validate(config));
        }

        report
    }

    /// Validate and return a Result
    pub fn validate_result(&self, config: &GatewayConfig) -> ConsoleResult<()> {
        self.validate(config).to_result()
    }
}

// ============================================================================
// Built-in Rules
// ============================================================================

/// Rule: validate listen ports
pub struct ListenPortsRule;

impl ConfigRule for ListenPortsRule {
    fn name(&self) -> &'static str {
        "listen_ports"
    }

    fn description(&self) -> &'static str {
        "Validates listen port names, port numbers, and endpoint sets"
    }

    fn validate(&self, config: &GatewayConfig) -> ValidationReport {
        let mut report = ValidationReport::ok();
        let mut seen_names: HashSet<String> = HashSet::new();
        let mut seen_ports: HashSet<u16> = HashSet::new();

        for port in config.listen_ports.values() {
            let path = format!("listen_ports.{}", port.name);

            if port.name.trim().is_empty() {
                report.add_error(
                    ConfigError::new(
                        ConfigErrorCode::EmptyPortName,
                        "Listen port name cannot be empty",
                    )
                    .with_path(format!("listen_ports.{}", port.id)),
                );
                continue;
            }

            let lower_name = port.name.to_lowercase();
            if !seen_names.insert(lower_name) {
                report.add_error(
                    ConfigError::new(
                        ConfigErrorCode::DuplicatePortName,
                        format!("Duplicate listen port name: '{}'", port.name),
                    )
                    .with_path(&path),
                );
            }

            if port.port < MIN_LISTEN_PORT {
                report.add_error(
                    ConfigError::new(
                        ConfigErrorCode::PrivilegedPort,
                        format!(
                            "Port {} is in the privileged range (minimum is {})",
                            port.port, MIN_LISTEN_PORT
                        ),
                    )
                    .with_path(&path)
                    .with_suggestion(format!("Use a port of {} or above", MIN_LISTEN_PORT)),
                );
            }

            if port.enabled && !seen_ports.insert(port.port) {
                report.add_error(
                    ConfigError::new(
                        ConfigErrorCode::PortCollision,
                        format!("Port {} is bound by more than one enabled listener", port.port),
                    )
                    .with_path(&path),
                );
            }

            if !port.endpoints.any_enabled() {
                report.add_error(
                    ConfigError::new(
                        ConfigErrorCode::NoEndpointsEnabled,
                        format!("Listen port '{}' exposes no endpoints", port.name),
                    )
                    .with_path(&path)
                    .with_suggestion("Enable at least one endpoint"),
                );
            }

            if let Some(size) = port.thread_pool_size {
                if !(crate::listen_port::MIN_THREAD_POOL_SIZE
                    ..=crate::listen_port::MAX_THREAD_POOL_SIZE)
                    .contains(&size)
                {
                    report.add_error(
                        ConfigError::new(
                            ConfigErrorCode::ThreadPoolOutOfRange,
                            format!("Thread pool size {} is out of range", size),
                        )
                        .with_path(&path),
                    );
                }
            }
        }

        // Warnings
        if config.listen_ports.is_empty() {
            report.add_warning(ConfigWarning::new(
                ConfigWarningCode::NoListenPorts,
                "Configuration has no listen ports; the gateway will accept no traffic",
            ));
        } else {
            if !config
                .listen_ports
                .values()
                .any(|p| p.enabled && p.endpoints.admin_access)
            {
                report.add_warning(ConfigWarning::new(
                    ConfigWarningCode::NoAdminAccess,
                    "No enabled listen port exposes admin access",
                ));
            }
            if config.listen_ports.values().all(|p| !p.enabled) {
                report.add_warning(ConfigWarning::new(
                    ConfigWarningCode::AllPortsDisabled,
                    "Every listen port is disabled",
                ));
            }
        }

        report
    }
}

/// Rule: validate JDBC connections
pub struct JdbcConnectionsRule;

impl ConfigRule for JdbcConnectionsRule {
    fn name(&self) -> &'static str {
        "jdbc_connections"
    }

    fn description(&self) -> &'static str {
        "Validates JDBC connection names, URLs, and pool sizes"
    }

    fn validate(&self, config: &GatewayConfig) -> ValidationReport {
        let mut report = ValidationReport::ok();
        let mut seen_names: HashSet<String> = HashSet::new();

        for connection in config.jdbc_connections.values() {
            let path = format!("jdbc_connections.{}", connection.name);

            if connection.name.trim().is_empty() {
                report.add_error(
                    ConfigError::new(
                        ConfigErrorCode::EmptyConnectionName,
                        "Connection name cannot be empty",
                    )
                    .with_path(format!("jdbc_connections.{}", connection.id)),
                );
                continue;
            }

            let lower_name = connection.name.to_lowercase();
            if !seen_names.insert(lower_name) {
                report.add_error(
                    ConfigError::new(
                        ConfigErrorCode::DuplicateConnectionName,
                        format!("Duplicate connection name: '{}'", connection.name),
                    )
                    .with_path(&path),
                );
            }

            if connection.driver_class.trim().is_empty() {
                report.add_error(
                    ConfigError::new(
                        ConfigErrorCode::MissingDriverClass,
                        format!("Connection '{}' has no driver class", connection.name),
                    )
                    .with_path(&path),
                );
            }

            if !connection.jdbc_url.starts_with("jdbc:") {
                report.add_error(
                    ConfigError::new(
                        ConfigErrorCode::MalformedJdbcUrl,
                        format!(
                            "Connection '{}' URL must start with 'jdbc:'",
                            connection.name
                        ),
                    )
                    .with_path(&path)
                    .with_suggestion("Example: jdbc:postgresql://host:5432/database"),
                );
            }

            if connection.min_pool_size > connection.max_pool_size {
                report.add_error(
                    ConfigError::new(
                        ConfigErrorCode::PoolSizeInverted,
                        format!(
                            "Connection '{}' minimum pool size exceeds maximum",
                            connection.name
                        ),
                    )
                    .with_path(&path),
                );
            }

            if !(MIN_POOL_SIZE..=MAX_POOL_SIZE).contains(&connection.min_pool_size)
                || !(MIN_POOL_SIZE..=MAX_POOL_SIZE).contains(&connection.max_pool_size)
            {
                report.add_error(
                    ConfigError::new(
                        ConfigErrorCode::PoolSizeOutOfRange,
                        format!(
                            "Connection '{}' pool sizes must be between {} and {}",
                            connection.name, MIN_POOL_SIZE, MAX_POOL_SIZE
                        ),
                    )
                    .with_path(&path),
                );
            }

            if connection.password.is_empty() {
                report.add_warning(
                    ConfigWarning::new(
                        ConfigWarningCode::EmptyPassword,
                        format!("Connection '{}' has no password", connection.name),
                    )
                    .with_path(&path),
                );
            }
        }

        report
    }
}

/// Rule: validate configuration metadata
pub struct MetaRule;

impl ConfigRule for MetaRule {
    fn name(&self) -> &'static str {
        "meta"
    }

    fn description(&self) -> &'static str {
        "Validates configuration metadata"
    }

    fn validate(&self, config: &GatewayConfig) -> ValidationReport {
        let mut report = ValidationReport::ok();

        if config.meta.name.trim().is_empty() {
            report.add_error(ConfigError::new(
                ConfigErrorCode::EmptyConfigName,
                "Configuration name cannot be empty",
            ));
        }

        if config.meta.description.is_none() {
            report.add_warning(ConfigWarning::new(
                ConfigWarningCode::NoDescription,
                "Configuration has no description",
            ));
        }

        report
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jdbc::JdbcConnection;
    use crate::listen_port::{EndpointSet, ListenPort, ListenProtocol};

    fn valid_config() -> GatewayConfig {
        let mut config = GatewayConfig::new("Production");
        config.meta.description = Some("main cluster".to_string());
        config.add_listen_port(
            ListenPort::new("Default HTTP", ListenProtocol::Http).with_endpoints(EndpointSet::all()),
        );
        config.add_jdbc_connection(
            JdbcConnection::new("Audit DB")
                .with_driver_class("org.postgresql.Driver")
                .with_url("jdbc:postgresql://db:5432/audit")
                .with_credentials("gateway", "secret"),
        );
        config
    }

    #[test]
    fn test_valid_config_passes() {
        let report = Validator::with_default_rules().validate(&valid_config());
        assert!(report.valid, "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn test_duplicate_port_names_flagged() {
        let mut config = valid_config();
        config.add_listen_port(
            ListenPort::new("default http", ListenProtocol::Https).with_port(9443),
        );

        let report = ListenPortsRule.validate(&config);
        assert!(!report.valid);
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.code == ConfigErrorCode::DuplicatePortName)
        );
    }

    #[test]
    fn test_privileged_port_flagged() {
        let mut config = GatewayConfig::new("Test");
        config.add_listen_port(ListenPort::new("Low", ListenProtocol::Http).with_port(443));

        let report = ListenPortsRule.validate(&config);
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.code == ConfigErrorCode::PrivilegedPort)
        );
    }

    #[test]
    fn test_port_collision_flagged_only_for_enabled() {
        let mut config = GatewayConfig::new("Test");
        config.add_listen_port(ListenPort::new("A", ListenProtocol::Http).with_port(8080));
        config.add_listen_port(ListenPort::new("B", ListenProtocol::Http).with_port(8080));
        config
            .add_listen_port(ListenPort::new("C", ListenProtocol::Http).with_port(8080).disabled());

        let report = ListenPortsRule.validate(&config);
        let collisions = report
            .errors
            .iter()
            .filter(|e| e.code == ConfigErrorCode::PortCollision)
            .count();
        assert_eq!(collisions, 1);
    }

    #[test]
    fn test_malformed_jdbc_url_flagged() {
        let mut config = GatewayConfig::new("Test");
        config.add_jdbc_connection(
            JdbcConnection::new("Broken")
                .with_driver_class("org.postgresql.Driver")
                .with_url("postgresql://db:5432/x"),
        );

        let report = JdbcConnectionsRule.validate(&config);
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.code == ConfigErrorCode::MalformedJdbcUrl)
        );
    }

    #[test]
    fn test_pool_inversion_flagged() {
        let mut config = GatewayConfig::new("Test");
        config.add_jdbc_connection(
            JdbcConnection::new("Pool")
                .with_driver_class("org.h2.Driver")
                .with_url("jdbc:h2:mem:test")
                .with_pool_sizes(30, 5),
        );

        let report = JdbcConnectionsRule.validate(&config);
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.code == ConfigErrorCode::PoolSizeInverted)
        );
    }

    #[test]
    fn test_empty_config_warns_about_missing_ports() {
        let config = GatewayConfig::new("Empty");
        let report = Validator::with_default_rules().validate(&config);

        assert!(report.valid);
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.code == ConfigWarningCode::NoListenPorts)
        );
    }

    #[test]
    fn test_empty_password_warns() {
        let mut config = GatewayConfig::new("Test");
        config.add_jdbc_connection(
            JdbcConnection::new("NoPass")
                .with_driver_class("org.h2.Driver")
                .with_url("jdbc:h2:mem:test"),
        );

        let report = JdbcConnectionsRule.validate(&config);
        assert!(report.valid);
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.code == ConfigWarningCode::EmptyPassword)
        );
    }

    #[test]
    fn test_meta_rule() {
        let mut config = GatewayConfig::new("");
        config.meta.name = String::new();

        let report = MetaRule.validate(&config);
        assert!(!report.valid);
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.code == ConfigErrorCode::EmptyConfigName)
        );
    }

    #[test]
    fn test_report_to_result() {
        assert!(ValidationReport::ok().to_result().is_ok());

        let mut report = ValidationReport::ok();
        report.add_error(ConfigError::new(ConfigErrorCode::Custom, "boom"));
        let err = report.to_result().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_error_display_includes_path() {
        let error = ConfigError::new(ConfigErrorCode::EmptyPortName, "Name is empty")
            .with_path("listen_ports.X");
        let rendered = format!("{}", error);
        assert!(rendered.contains("listen_ports.X"));
        assert!(rendered.contains("Name is empty"));
    }
}
