//! # Client-Side View Filter
//!
//! Partitions each incoming snapshot into the local player's own waypoints
//! (persistent, editable map entries) and foreign waypoints (read-only,
//! temporary overlays). Foreign waypoints are wholly replaced on every
//! snapshot, never merged.
//!
//! The edit authorization guard lives here too: edit, delete, and save are
//! symmetric in structure, so they share one ownership predicate and differ
//! only in the denial message shown to the player.

use log::{debug, warn};

use wp_shared::messages::{DenialKind, EditAction};
use wp_shared::snapshot::WaypointSnapshot;
use wp_shared::types::WpResult;
use wp_shared::waypoint::Waypoint;

/// Chat output on the client, for denial messages. The host localizes the
/// given key.
pub trait ClientChat {
    fn show_message(&self, lang_key: &str);
}

/// The local player's reconstructed waypoint view
#[derive(Debug)]
pub struct WaypointView {
    local_player_uid: String,
    own: Vec<Waypoint>,
    foreign: Vec<Waypoint>,
}

impl WaypointView {
    pub fn new(local_player_uid: &str) -> Self {
        Self {
            local_player_uid: local_player_uid.to_string(),
            own: Vec::new(),
            foreign: Vec::new(),
        }
    }

    /// Entry point for a raw snapshot payload received from the server
    pub fn apply_payload(&mut self, data: &[u8]) -> WpResult<()> {
        let snapshot = WaypointSnapshot::from_bytes(data)?;
        self.apply_snapshot(snapshot);
        Ok(())
    }

    /// Replace the local state with the given snapshot, partitioning into
    /// own (editable) and foreign (read-only) sets. Idempotent: replaying the
    /// same snapshot yields the same partition.
    pub fn apply_snapshot(&mut self, snapshot: WaypointSnapshot) {
        self.own.clear();
        self.foreign.clear();

        for waypoint in snapshot.waypoints {
            if waypoint.is_owned_by(&self.local_player_uid) {
                self.own.push(waypoint);
            } else {
                self.foreign.push(waypoint);
            }
        }
        debug!(
            "Applied snapshot: {} own, {} foreign waypoints",
            self.own.len(),
            self.foreign.len()
        );
    }

    /// Waypoints owned by the local player, editable
    pub fn own(&self) -> &[Waypoint] {
        &self.own
    }

    /// Waypoints visible but owned by someone else, read-only
    pub fn foreign(&self) -> &[Waypoint] {
        &self.foreign
    }

    /// The single authorization check shared by edit, delete, and save.
    /// Denied before any local or network mutation occurs.
    pub fn authorize(&self, waypoint: &Waypoint, action: EditAction) -> Result<(), DenialKind> {
        if waypoint.is_owned_by(&self.local_player_uid) {
            Ok(())
        } else {
            Err(DenialKind::for_action(action))
        }
    }

    /// Guard a mutation attempt from the host's dialog layer. On denial,
    /// shows the per-action message and returns `false`; the caller must then
    /// close any open edit affordance for the waypoint and attempt nothing.
    pub fn check_mutation(
        &self,
        waypoint: &Waypoint,
        action: EditAction,
        chat: &dyn ClientChat,
    ) -> bool {
        match self.authorize(waypoint, action) {
            Ok(()) => true,
            Err(denial) => {
                warn!(
                    "Rejected {:?} on waypoint owned by {} (local player {})",
                    action, waypoint.owning_player_uid, self.local_player_uid
                );
                chat.show_message(denial.lang_key());
                false
            }
        }
    }
}
