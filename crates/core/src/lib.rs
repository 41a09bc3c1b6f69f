//! # Warden Core
//!
//! Core types, traits, and error handling for Warden Console.
//!
//! This crate provides the foundational building blocks used throughout
//! the console, including:
//!
//! - **Types**: Control values and configuration entity kinds
//! - **Traits**: Common behaviors like `PropertyEditor` and `Validatable`
//! - **Errors**: Unified error handling with `ConsoleError` and `ConsoleResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ConsoleError, ConsoleResult, ResultExt};
pub use traits::{Identifiable, Named, Persistable, PropertyEditor, Timestamped, Validatable};
pub use types::{ControlValue, EntityKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
