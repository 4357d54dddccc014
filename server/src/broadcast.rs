//! # Synchronization Broadcaster
//!
//! After any waypoint store mutation, computes which connected clients are
//! entitled to see the change and pushes each one a snapshot scoped to its own
//! visibility. Recipients are processed sequentially; delivery is
//! fire-and-forget from the server's perspective, since the next mutation
//! carries forward the correct state anyway.

use std::sync::Arc;

use log::debug;

use wp_shared::snapshot::WaypointSnapshot;

use crate::connection::ConnectedPlayers;
use crate::host::{GroupDirectory, SnapshotTransport};
use crate::store::WaypointStore;

/// A snapshot push addressed to one recipient
pub type PendingPush = (String, WaypointSnapshot);

/// Computes recipient sets and filtered snapshots for store mutations
pub struct SyncBroadcaster {
    groups: Arc<dyn GroupDirectory>,
    transport: Arc<dyn SnapshotTransport>,
}

impl SyncBroadcaster {
    pub fn new(groups: Arc<dyn GroupDirectory>, transport: Arc<dyn SnapshotTransport>) -> Self {
        Self { groups, transport }
    }

    /// Recipients of a mutation affecting a waypoint of the given group:
    /// every connected member of that group, plus unconditionally the owning
    /// player. The owner always sees their own waypoints, group member or not.
    pub fn recipients_for(
        &self,
        group_id: i32,
        owner_uid: &str,
        connected: &ConnectedPlayers,
    ) -> Vec<String> {
        let mut recipients: Vec<String> = connected
            .iter()
            .filter(|uid| self.groups.member_groups(uid).contains(&group_id))
            .map(str::to_string)
            .collect();

        if !recipients.iter().any(|uid| uid == owner_uid) {
            recipients.push(owner_uid.to_string());
        }
        recipients
    }

    /// The full filtered view for one recipient: all of their own waypoints,
    /// plus every waypoint shared with a group they belong to but owned by
    /// someone else. Store order is preserved.
    pub fn snapshot_for(&self, recipient_uid: &str, store: &WaypointStore) -> WaypointSnapshot {
        let memberships = self.groups.member_groups(recipient_uid);
        let visible = store
            .all()
            .iter()
            .filter(|w| w.is_owned_by(recipient_uid) || memberships.contains(&w.owning_group_id))
            .cloned()
            .collect();
        WaypointSnapshot::new(visible)
    }

    /// Build the per-recipient pushes for a mutation of a waypoint with the
    /// given group and owner. Called while the server state lock is held;
    /// delivery happens afterwards via [`deliver`](Self::deliver).
    pub fn collect_group_pushes(
        &self,
        store: &WaypointStore,
        connected: &ConnectedPlayers,
        group_id: i32,
        owner_uid: &str,
    ) -> Vec<PendingPush> {
        self.recipients_for(group_id, owner_uid, connected)
            .into_iter()
            .map(|uid| {
                let snapshot = self.snapshot_for(&uid, store);
                (uid, snapshot)
            })
            .collect()
    }

    /// Build a single full resend for one player
    pub fn collect_push_for(&self, store: &WaypointStore, player_uid: &str) -> PendingPush {
        (player_uid.to_string(), self.snapshot_for(player_uid, store))
    }

    /// Send the collected pushes, sequentially. Recipient counts are bounded
    /// by a single session's player count, so no parallelism is needed.
    pub fn deliver(&self, pushes: Vec<PendingPush>) {
        for (uid, snapshot) in pushes {
            debug!("Pushing {} waypoints to {}", snapshot.waypoints.len(), uid);
            self.transport.send_snapshot(&uid, &snapshot);
        }
    }
}
