//! UI components for Warden Console

pub mod dialogs;
pub mod inputs;

pub use dialogs::{
    ConfirmDeleteDialog, JdbcConnectionDialog, JdbcConnectionDialogMode, ListenPortDialog,
    ListenPortDialogMode,
};
pub use inputs::{Checkbox, NumberInput, Select, SelectOption, TextInput};
