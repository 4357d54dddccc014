//! # Active Sharing Selections
//!
//! Transient per-player state: the group id a player has selected as the
//! target for their *next* waypoint-creating command. Populated by the
//! client's settings message or by the command bracket, consumed exactly once
//! when the waypoint is actually inserted, and cleared when the command
//! completes on any exit path. Never persisted.
//!
//! Consumption must be request-scoped: `resolve_group_for` removes the entry
//! as it reads it, and the caller runs it inside the same critical section as
//! the store insert, so a second in-flight request from the same player can
//! never consume a selection intended for the first.

use std::collections::HashMap;

use log::debug;

/// Per-player mapping of pending sharing-group selections
#[derive(Debug, Default)]
pub struct SharingSelections {
    selections: HashMap<String, i32>,
}

impl SharingSelections {
    pub fn new() -> Self {
        Self { selections: HashMap::new() }
    }

    /// Record the group the player's next created waypoint should be tagged
    /// with. A newer selection replaces any pending one.
    pub fn set(&mut self, player_uid: &str, group_id: i32) {
        debug!("Sharing selection for {}: group {}", player_uid, group_id);
        self.selections.insert(player_uid.to_string(), group_id);
    }

    /// Remove and return the player's pending selection, if any
    pub fn take(&mut self, player_uid: &str) -> Option<i32> {
        self.selections.remove(player_uid)
    }

    /// Drop the player's pending selection without reading it. Used by the
    /// command bracket's end and by player disconnect cleanup.
    pub fn clear(&mut self, player_uid: &str) {
        self.selections.remove(player_uid);
    }

    /// Consume the player's selection, falling back to the given default
    /// group when none is pending. This is the single lookup a creation
    /// request performs; the selection is gone afterwards.
    pub fn resolve_group_for(&mut self, player_uid: &str, default_group: i32) -> i32 {
        self.take(player_uid).unwrap_or(default_group)
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_consumes_the_selection() {
        let mut selections = SharingSelections::new();
        selections.set("a", 7);

        assert_eq!(selections.resolve_group_for("a", 1), 7);
        // Consumed: the next resolve falls back to the default.
        assert_eq!(selections.resolve_group_for("a", 1), 1);
    }

    #[test]
    fn resolve_without_selection_returns_default() {
        let mut selections = SharingSelections::new();
        assert_eq!(selections.resolve_group_for("a", 4), 4);
    }

    #[test]
    fn newer_selection_replaces_pending_one() {
        let mut selections = SharingSelections::new();
        selections.set("a", 2);
        selections.set("a", 9);
        assert_eq!(selections.resolve_group_for("a", 1), 9);
    }

    #[test]
    fn selections_are_per_player() {
        let mut selections = SharingSelections::new();
        selections.set("a", 2);
        selections.set("b", 3);

        assert_eq!(selections.resolve_group_for("b", 1), 3);
        assert_eq!(selections.resolve_group_for("a", 1), 2);
    }

    #[test]
    fn clear_drops_without_reading() {
        let mut selections = SharingSelections::new();
        selections.set("a", 2);
        selections.clear("a");
        assert!(selections.is_empty());
        assert_eq!(selections.resolve_group_for("a", 1), 1);
    }
}
