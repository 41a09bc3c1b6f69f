//! # Warden Forms
//!
//! Headless form engine for Warden Console.
//!
//! This crate implements the two mechanisms every property dialog in the
//! console is built on:
//!
//! - **Editor contract**: [`FormEditor`] implements
//!   [`PropertyEditor`](warden_core::PropertyEditor) — `set_data` populates
//!   controls from a configuration bean, `get_data` reads them back into a
//!   copy, `is_confirmed` tells the caller whether to persist.
//! - **Validation aggregator**: [`InputValidator`] holds an ordered set of
//!   [`ValidationRule`]s, recomputes validity from live control state on
//!   every read, and gates the submit action.
//!
//! The engine is deliberately widget-free: controls are named slots holding
//! a [`ControlValue`](warden_core::ControlValue), and the UI layer mirrors
//! them into real widgets. That keeps every dialog's behavior unit-testable
//! without a running desktop shell.
//!
//! ## Structure
//!
//! - **control**: [`FormState`] and its named controls
//! - **rules**: [`ValidationRule`] and the built-in rule set
//! - **validator**: the [`InputValidator`] aggregator
//! - **binding**: [`FieldBinding`] - declarative control-to-bean pairings
//! - **derived**: [`DerivedRule`] - enabled/visible state as pure functions
//! - **editor**: [`FormEditor`] - the composed generic editor
//!

// Module declarations
pub mod binding;
pub mod control;
pub mod derived;
pub mod editor;
pub mod rules;
pub mod validator;

// Re-export commonly used types at crate root
pub use binding::FieldBinding;
pub use control::{Control, FormState};
pub use derived::{DerivedKind, DerivedRule};
pub use editor::FormEditor;
pub use rules::{
    ChoiceRequired, ClosureRule, MatchesRule, NumberRange, PatternRule, RequiredText, UrlShape,
    ValidationRule,
};
pub use validator::InputValidator;

// Re-export core types that are commonly used with the form engine
pub use warden_core::{ConsoleError, ConsoleResult, ControlValue, PropertyEditor};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for dialog modules
pub mod prelude {
    pub use crate::{
        ConsoleError, ConsoleResult, ControlValue, DerivedRule, FieldBinding, FormEditor,
        FormState, InputValidator, PropertyEditor, ValidationRule,
    };
}
