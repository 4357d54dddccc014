//! # Waypoint Service
//!
//! The per-request mutation pipeline: resolve the sharing group, gate the
//! insert through proximity deduplication, mutate the store, and broadcast
//! filtered snapshots to everyone entitled to see the change.
//!
//! One mutex guards the whole authoritative state (store, sharing selections,
//! connected players). Selection consumption, store mutation, and snapshot
//! assembly run inside a single critical section per request, so two
//! in-flight requests from the same player can never steal each other's
//! sharing selection. Only snapshot serialization happens under the lock;
//! transport delivery happens after it is released.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, error};

use wp_shared::messages::SharingSelectionMessage;
use wp_shared::types::Vec3;
use wp_shared::waypoint::Waypoint;

use crate::broadcast::SyncBroadcaster;
use crate::config::AutoMarkerSettings;
use crate::connection::ConnectedPlayers;
use crate::dedup::{self, MarkerCandidate};
use crate::host::{ChatNotice, ChatSink, GroupDirectory, SnapshotTransport};
use crate::ownership::SharingSelections;
use crate::store::WaypointStore;

/// Authoritative server state, guarded by one lock
#[derive(Default)]
struct ServerState {
    store: WaypointStore,
    selections: SharingSelections,
    connected: ConnectedPlayers,
}

/// Server-side entry point for all waypoint mutations
pub struct WaypointService {
    state: Mutex<ServerState>,
    groups: Arc<dyn GroupDirectory>,
    chat: Arc<dyn ChatSink>,
    broadcaster: SyncBroadcaster,
}

impl WaypointService {
    pub fn new(
        groups: Arc<dyn GroupDirectory>,
        transport: Arc<dyn SnapshotTransport>,
        chat: Arc<dyn ChatSink>,
    ) -> Self {
        Self {
            state: Mutex::new(ServerState::default()),
            groups: groups.clone(),
            chat,
            broadcaster: SyncBroadcaster::new(groups, transport),
        }
    }

    /// A panicked request must not take the whole session down with it, so a
    /// poisoned lock is recovered rather than propagated.
    fn state(&self) -> MutexGuard<'_, ServerState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Wire-message entry point: record the sender's chosen sharing group for
    /// their next waypoint-creating command.
    pub fn handle_sharing_selection(&self, player_uid: &str, message: SharingSelectionMessage) {
        self.state().selections.set(player_uid, message.group_id);
    }

    /// Bracket a host command that may create waypoints. The returned guard
    /// clears the player's sharing selection when the command completes, on
    /// every exit path, so stale selections never leak into unrelated
    /// commands. Passing a group records it as the selection for the bracketed
    /// command's adds.
    pub fn begin_command<'a>(&'a self, player_uid: &str, group_id: Option<i32>) -> SelectionScope<'a> {
        if let Some(group_id) = group_id {
            self.state().selections.set(player_uid, group_id);
        }
        SelectionScope {
            service: self,
            player_uid: player_uid.to_string(),
        }
    }

    /// Run the full creation pipeline for one marker request. Disabled
    /// settings are a silent no-op; invalid input aborts the single operation
    /// with nothing mutated; a suppressed duplicate leaves the store
    /// untouched.
    pub fn create_marker(
        &self,
        player_uid: &str,
        position: Vec3,
        settings: &AutoMarkerSettings,
        notify: bool,
        dynamic_title: Option<&str>,
    ) {
        if !settings.enabled {
            return;
        }

        let title = match dynamic_title {
            Some(dynamic) => format!("{} ({})", settings.title, dynamic),
            None => settings.title.clone(),
        };
        if title.is_empty() || settings.icon.is_empty() {
            error!(
                "Unable to create map marker for player {}: missing title or icon",
                player_uid
            );
            return;
        }
        let Some(color) = settings.color else {
            error!("Unable to create map marker for player {}: unresolved color", player_uid);
            return;
        };

        let (index, pushes) = {
            let mut state = self.state();

            let candidate = MarkerCandidate {
                position,
                title: &title,
                icon: &settings.icon,
                color: settings.color,
                coverage_radius: settings.coverage_radius,
            };
            if dedup::should_suppress(&candidate, state.store.owned_by(player_uid)) {
                debug!(
                    "Suppressed duplicate marker \"{}\" for player {} at ({:.1}, {:.1})",
                    title, player_uid, position.x, position.z
                );
                return;
            }

            // Selection consumption and insert form one critical section;
            // a concurrent request from the same player sees either the
            // selection before this request set it, or none at all.
            let default_group = self.groups.default_group(player_uid);
            let group_id = state.selections.resolve_group_for(player_uid, default_group);

            state.store.add(Waypoint {
                position,
                title,
                icon: settings.icon.clone(),
                color,
                owning_player_uid: player_uid.to_string(),
                owning_group_id: group_id,
                pinned: false,
            });

            let index = state.store.owned_count(player_uid);
            let pushes = self.broadcaster.collect_group_pushes(
                &state.store,
                &state.connected,
                group_id,
                player_uid,
            );
            (index, pushes)
        };

        if notify {
            self.chat.notify(player_uid, ChatNotice::WaypointAdded { index });
        }
        self.broadcaster.deliver(pushes);
    }

    /// Delete the player's nearest owned waypoint and resync everyone who
    /// could see it. Owning no waypoints is an informational no-op, not an
    /// error toward the player.
    pub fn delete_nearest_marker(&self, player_uid: &str, origin: Vec3, notify: bool) {
        let pushes = {
            let mut state = self.state();
            let Some(removed) = state.store.remove_nearest(player_uid, origin) else {
                return;
            };
            self.broadcaster.collect_group_pushes(
                &state.store,
                &state.connected,
                removed.owning_group_id,
                player_uid,
            )
        };

        if notify {
            self.chat.notify(player_uid, ChatNotice::WaypointDeleted);
        }
        self.broadcaster.deliver(pushes);
    }

    /// Resend a player's full visible view, e.g. after they join
    pub fn rebroadcast_all(&self, player_uid: &str) {
        let push = {
            let state = self.state();
            self.broadcaster.collect_push_for(&state.store, player_uid)
        };
        self.broadcaster.deliver(vec![push]);
    }

    /// Register a connecting player and push them their current view
    pub fn player_connected(&self, player_uid: &str) {
        self.state().connected.register(player_uid);
        self.rebroadcast_all(player_uid);
    }

    /// Unregister a disconnecting player and drop any stale sharing selection
    pub fn player_disconnected(&self, player_uid: &str) {
        let mut state = self.state();
        state.connected.unregister(player_uid);
        state.selections.clear(player_uid);
    }

    /// Total number of stored waypoints
    pub fn waypoint_count(&self) -> usize {
        self.state().store.len()
    }

    /// Snapshot of all stored waypoints, for host-side inspection
    pub fn all_waypoints(&self) -> Vec<Waypoint> {
        self.state().store.all().to_vec()
    }
}

/// RAII bracket around one host command. Clears the player's sharing
/// selection on drop, success or failure alike.
pub struct SelectionScope<'a> {
    service: &'a WaypointService,
    player_uid: String,
}

impl Drop for SelectionScope<'_> {
    fn drop(&mut self) {
        self.service.state().selections.clear(&self.player_uid);
    }
}
