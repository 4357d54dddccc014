//! # Connected-Player Registry
//!
//! Tracks which players are currently connected to the session. The
//! broadcaster only ever pushes snapshots to registered players; recipient
//! counts are bounded by a single game session's player count.

use std::collections::HashSet;

use log::{info, warn};

/// Registry of currently connected player uids
#[derive(Debug, Default)]
pub struct ConnectedPlayers {
    players: HashSet<String>,
}

impl ConnectedPlayers {
    pub fn new() -> Self {
        Self { players: HashSet::new() }
    }

    /// Register a player on connect. Re-registering an already connected
    /// player is treated as a reconnection, not an error.
    pub fn register(&mut self, player_uid: &str) {
        if self.players.insert(player_uid.to_string()) {
            info!("Player connected: {}", player_uid);
        } else {
            info!("Player reconnected: {}", player_uid);
        }
    }

    /// Unregister a player on disconnect
    pub fn unregister(&mut self, player_uid: &str) {
        if self.players.remove(player_uid) {
            info!("Player disconnected: {}", player_uid);
        } else {
            warn!("Player disconnected but wasn't registered: {}", player_uid);
        }
    }

    pub fn is_connected(&self, player_uid: &str) -> bool {
        self.players.contains(player_uid)
    }

    /// Connected player uids, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_unregister_round_trip() {
        let mut connected = ConnectedPlayers::new();
        connected.register("a");
        connected.register("b");
        assert!(connected.is_connected("a"));
        assert_eq!(connected.len(), 2);

        connected.unregister("a");
        assert!(!connected.is_connected("a"));
        assert!(connected.is_connected("b"));
    }

    #[test]
    fn reconnect_does_not_duplicate() {
        let mut connected = ConnectedPlayers::new();
        connected.register("a");
        connected.register("a");
        assert_eq!(connected.len(), 1);
    }

    #[test]
    fn unregistering_unknown_player_is_harmless() {
        let mut connected = ConnectedPlayers::new();
        connected.unregister("ghost");
        assert!(connected.is_empty());
    }
}
