//! # Wire Messages & Authorization Kinds
//!
//! The client-to-server settings message that carries a player's chosen
//! sharing group, and the action/denial kinds used by the client-side edit
//! authorization guard.

use serde::{Deserialize, Serialize};

use crate::constants::lang;

/// Client-to-server message selecting the group the sender's *next* created
/// waypoint should be shared with. Consumed into the server's transient
/// per-player sharing selection cache, keyed by sender identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharingSelectionMessage {
    /// Target group id for the next waypoint-creating command
    pub group_id: i32,
}

/// Kind of mutation a client attempts against a waypoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditAction {
    /// Opening the edit dialog
    Edit,

    /// Deleting from the edit dialog
    Delete,

    /// Saving changed fields
    Save,
}

/// Authorization denial raised when a client targets a foreign waypoint.
/// The three action kinds share one ownership predicate and differ only in
/// the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialKind {
    CannotEdit,
    CannotDelete,
    CannotSave,
}

impl DenialKind {
    /// The denial raised for a given attempted action
    pub fn for_action(action: EditAction) -> Self {
        match action {
            EditAction::Edit => Self::CannotEdit,
            EditAction::Delete => Self::CannotDelete,
            EditAction::Save => Self::CannotSave,
        }
    }

    /// Localization key for the user-facing denial message
    pub fn lang_key(&self) -> &'static str {
        match self {
            Self::CannotEdit => lang::CANNOT_EDIT,
            Self::CannotDelete => lang::CANNOT_DELETE,
            Self::CannotSave => lang::CANNOT_SAVE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_action_maps_to_its_own_denial() {
        assert_eq!(DenialKind::for_action(EditAction::Edit), DenialKind::CannotEdit);
        assert_eq!(DenialKind::for_action(EditAction::Delete), DenialKind::CannotDelete);
        assert_eq!(DenialKind::for_action(EditAction::Save), DenialKind::CannotSave);
    }

    #[test]
    fn denial_lang_keys_are_distinct() {
        let keys = [
            DenialKind::CannotEdit.lang_key(),
            DenialKind::CannotDelete.lang_key(),
            DenialKind::CannotSave.lang_key(),
        ];
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
        assert_ne!(keys[0], keys[2]);
    }
}
