//! # Host Extension Points
//!
//! Traits the embedding game implements and this crate calls into. The host
//! game is a collaborator offering these interfaces; the core never reaches
//! into host internals. Group membership in particular is owned by the host's
//! player/group subsystem and is only ever read here.

use std::collections::HashSet;

use wp_shared::constants::lang;
use wp_shared::snapshot::WaypointSnapshot;

/// Read access to the host's player/group subsystem
pub trait GroupDirectory: Send + Sync {
    /// Groups the player currently belongs to
    fn member_groups(&self, player_uid: &str) -> HashSet<i32>;

    /// The player's default chat/notification group, used for a created
    /// waypoint when no explicit sharing selection is active
    fn default_group(&self, player_uid: &str) -> i32;
}

/// Outbound snapshot delivery to one connected client. Fire-and-forget;
/// a missed push self-heals on the next mutation.
pub trait SnapshotTransport: Send + Sync {
    fn send_snapshot(&self, player_uid: &str, snapshot: &WaypointSnapshot);
}

/// User-facing confirmation message sent after a successful mutation.
/// Wording and localization are the host's concern; the core only supplies
/// the message kind and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatNotice {
    /// Waypoint created; carries the 1-based index among the owner's waypoints
    WaypointAdded { index: usize },

    /// Nearest owned waypoint deleted
    WaypointDeleted,
}

impl ChatNotice {
    /// Localization key for this notice
    pub fn lang_key(&self) -> &'static str {
        match self {
            Self::WaypointAdded { .. } => lang::WAYPOINT_ADDED,
            Self::WaypointDeleted => lang::WAYPOINT_DELETED,
        }
    }
}

/// Chat output back to a single player
pub trait ChatSink: Send + Sync {
    fn notify(&self, player_uid: &str, notice: ChatNotice);
}
