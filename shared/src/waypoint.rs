//! # Waypoint Data Model
//!
//! The authoritative waypoint record. Waypoints are created, mutated, and
//! destroyed only on the server; clients hold synchronized copies received
//! through snapshots. A waypoint's identity is its index in the server store's
//! ordered sequence.

use serde::{Deserialize, Serialize};

use crate::constants::GROUP_NONE;
use crate::types::Vec3;

/// A positioned map marker with title, icon, color, owner, and visibility group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// World-space position
    pub position: Vec3,

    /// Human-readable title
    pub title: String,

    /// Key into the host's fixed icon set
    pub icon: String,

    /// Packed RGB color
    pub color: i32,

    /// Stable per-account identifier of the owning player
    pub owning_player_uid: String,

    /// Group that may see (not edit) this waypoint; `GROUP_NONE` means private
    pub owning_group_id: i32,

    /// Whether the waypoint is pinned to the map edge
    pub pinned: bool,
}

impl Waypoint {
    /// Whether the given player owns this waypoint. Ownership controls
    /// mutation rights; the group id only controls visibility.
    pub fn is_owned_by(&self, player_uid: &str) -> bool {
        self.owning_player_uid == player_uid
    }

    /// Whether this waypoint is shared with any group
    pub fn is_shared(&self) -> bool {
        self.owning_group_id != GROUP_NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(owner: &str, group: i32) -> Waypoint {
        Waypoint {
            position: Vec3::zero(),
            title: "Ore".to_string(),
            icon: "pick".to_string(),
            color: 0xFF0000,
            owning_player_uid: owner.to_string(),
            owning_group_id: group,
            pinned: false,
        }
    }

    #[test]
    fn ownership_is_exact_uid_match() {
        let wp = waypoint("player-a", GROUP_NONE);
        assert!(wp.is_owned_by("player-a"));
        assert!(!wp.is_owned_by("player-b"));
        assert!(!wp.is_owned_by(""));
    }

    #[test]
    fn group_none_means_private() {
        assert!(!waypoint("player-a", GROUP_NONE).is_shared());
        assert!(waypoint("player-a", 7).is_shared());
    }
}
