//! # Waypoint Store
//!
//! The authoritative, ordered collection of waypoint records. Server-owned;
//! every client only ever holds a synchronized copy. Order matters: a
//! waypoint's identity toward the player is its index in this sequence, and
//! the chat confirmation after an add reports a 1-based index among the
//! owner's waypoints.
//!
//! Every mutating operation here must be followed by a synchronization push.
//! That composition is the responsibility of the service layer, not of this
//! store.

use log::info;

use wp_shared::types::Vec3;
use wp_shared::waypoint::Waypoint;

/// Ordered, mutable sequence of waypoints
#[derive(Debug, Default)]
pub struct WaypointStore {
    waypoints: Vec<Waypoint>,
}

impl WaypointStore {
    pub fn new() -> Self {
        Self { waypoints: Vec::new() }
    }

    /// Append a waypoint; returns its index in the store
    pub fn add(&mut self, waypoint: Waypoint) -> usize {
        self.waypoints.push(waypoint);
        self.waypoints.len() - 1
    }

    /// Remove and return the Euclidean-nearest waypoint owned by the player.
    /// Ties break to the first-encountered in store order. Returns `None`
    /// without touching the store when the player owns no waypoints.
    pub fn remove_nearest(&mut self, player_uid: &str, origin: Vec3) -> Option<Waypoint> {
        let mut nearest: Option<(usize, f64)> = None;

        for (index, waypoint) in self.waypoints.iter().enumerate() {
            if !waypoint.is_owned_by(player_uid) {
                continue;
            }
            let distance = origin.distance_to(&waypoint.position);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }

        match nearest {
            Some((index, _)) => Some(self.waypoints.remove(index)),
            None => {
                info!(
                    "Player {} tried to delete their nearest waypoint, but owns none",
                    player_uid
                );
                None
            }
        }
    }

    /// Waypoints owned by the given player, in store order
    pub fn owned_by<'a>(&'a self, player_uid: &'a str) -> impl Iterator<Item = &'a Waypoint> {
        self.waypoints.iter().filter(move |w| w.is_owned_by(player_uid))
    }

    /// Number of waypoints owned by the given player
    pub fn owned_count(&self, player_uid: &str) -> usize {
        self.owned_by(player_uid).count()
    }

    /// All waypoints, in store order
    pub fn all(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(owner: &str, x: f64, z: f64) -> Waypoint {
        Waypoint {
            position: Vec3::new(x, 0.0, z),
            title: "Ore".to_string(),
            icon: "pick".to_string(),
            color: 0xFF0000,
            owning_player_uid: owner.to_string(),
            owning_group_id: 0,
            pinned: false,
        }
    }

    #[test]
    fn add_returns_store_index() {
        let mut store = WaypointStore::new();
        assert_eq!(store.add(waypoint("a", 0.0, 0.0)), 0);
        assert_eq!(store.add(waypoint("b", 1.0, 1.0)), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_nearest_picks_euclidean_minimum() {
        let mut store = WaypointStore::new();
        store.add(waypoint("a", 100.0, 100.0));
        store.add(waypoint("a", 3.0, 4.0));
        store.add(waypoint("a", 30.0, 40.0));

        let removed = store.remove_nearest("a", Vec3::zero()).unwrap();
        assert_eq!(removed.position, Vec3::new(3.0, 0.0, 4.0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_nearest_ignores_other_owners() {
        let mut store = WaypointStore::new();
        store.add(waypoint("b", 1.0, 1.0));
        store.add(waypoint("a", 500.0, 500.0));
        store.add(waypoint("b", 2.0, 2.0));

        let removed = store.remove_nearest("a", Vec3::zero()).unwrap();
        assert_eq!(removed.owning_player_uid, "a");
        assert_eq!(store.len(), 2);
        assert!(store.all().iter().all(|w| w.is_owned_by("b")));
    }

    #[test]
    fn remove_nearest_with_no_owned_waypoints_is_a_noop() {
        let mut store = WaypointStore::new();
        store.add(waypoint("b", 1.0, 1.0));

        assert!(store.remove_nearest("a", Vec3::zero()).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_nearest_tie_breaks_to_first_in_store_order() {
        let mut store = WaypointStore::new();
        let mut first = waypoint("a", 5.0, 0.0);
        first.title = "first".to_string();
        let mut second = waypoint("a", -5.0, 0.0);
        second.title = "second".to_string();
        store.add(first);
        store.add(second);

        let removed = store.remove_nearest("a", Vec3::zero()).unwrap();
        assert_eq!(removed.title, "first");
    }

    #[test]
    fn owned_count_counts_only_that_owner() {
        let mut store = WaypointStore::new();
        store.add(waypoint("a", 0.0, 0.0));
        store.add(waypoint("b", 0.0, 0.0));
        store.add(waypoint("a", 1.0, 1.0));

        assert_eq!(store.owned_count("a"), 2);
        assert_eq!(store.owned_count("b"), 1);
        assert_eq!(store.owned_count("c"), 0);
    }
}
