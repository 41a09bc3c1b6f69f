//! # Warden Admin
//!
//! Admin service interfaces for Warden Console.
//!
//! Property dialogs never talk to the gateway directly; they receive an
//! [`AdminRegistry`] carrying trait-object handles to the administrative
//! services and call those after the user confirms an edit. The registry is
//! constructed once at startup (or per test) and passed down explicitly —
//! there is no process-wide service locator.
//!
//! [`InMemoryGateway`] is the reference implementation backing the UI and
//! the test suites; a networked implementation would satisfy the same
//! traits.

pub mod memory;
pub mod permissions;
pub mod registry;
pub mod services;

// Re-export commonly used items at crate root
pub use memory::InMemoryGateway;
pub use permissions::PermissionFlags;
pub use registry::AdminRegistry;
pub use services::{JdbcConnectionAdmin, ListenPortAdmin};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
