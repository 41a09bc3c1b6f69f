//! Permission flags
//!
//! Coarse per-entity-kind permissions the console resolves before opening a
//! dialog. A dialog opened without the relevant write permission runs
//! read-only.

use serde::{Deserialize, Serialize};

// ============================================================================
// PermissionFlags
// ============================================================================

/// What the current administrator may do with one kind of entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionFlags {
    /// May create new entities
    pub can_create: bool,

    /// May update existing entities
    pub can_update: bool,

    /// May delete entities
    pub can_delete: bool,
}

impl PermissionFlags {
    /// Full access
    pub fn all() -> Self {
        Self {
            can_create: true,
            can_update: true,
            can_delete: true,
        }
    }

    /// No write access at all
    pub fn read_only() -> Self {
        Self {
            can_create: false,
            can_update: false,
            can_delete: false,
        }
    }

    /// Whether a dialog for this entity should accept edits
    ///
    /// `is_new` distinguishes a create dialog from an edit dialog.
    pub fn can_edit(&self, is_new: bool) -> bool {
        if is_new { self.can_create } else { self.can_update }
    }
}

impl Default for PermissionFlags {
    fn default() -> Self {
        Self::all()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_read_only() {
        assert!(PermissionFlags::all().can_delete);
        assert!(!PermissionFlags::read_only().can_create);
    }

    #[test]
    fn test_can_edit() {
        let create_only = PermissionFlags {
            can_create: true,
            can_update: false,
            can_delete: false,
        };
        assert!(create_only.can_edit(true));
        assert!(!create_only.can_edit(false));
    }
}
