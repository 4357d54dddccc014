//! # Shared Constants
//!
//! Constants used across both the waypoint client and server crates.

/// Group id meaning "private / not shared with any group"
pub const GROUP_NONE: i32 = 0;

/// Localization keys for user-facing messages
pub mod lang {
    /// Confirmation after a waypoint was added; takes the 1-based index
    pub const WAYPOINT_ADDED: &str = "waypoint-added";

    /// Confirmation after the nearest waypoint was deleted
    pub const WAYPOINT_DELETED: &str = "waypoint-deleted";

    /// Denial shown when opening the edit dialog of a foreign waypoint
    pub const CANNOT_EDIT: &str = "cannot-edit";

    /// Denial shown when deleting a foreign waypoint from the edit dialog
    pub const CANNOT_DELETE: &str = "cannot-delete";

    /// Denial shown when saving changes to a foreign waypoint
    pub const CANNOT_SAVE: &str = "cannot-save";
}
