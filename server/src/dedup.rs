//! # Proximity Deduplication
//!
//! Gates waypoint insertion: a new automated marker is suppressed when the
//! same owner already has a matching marker covering the spot. Comparison is
//! exact string/integer equality, never fuzzy, and the scan is O(n) over the
//! owner's existing waypoints; per-player counts are tens, not thousands, so
//! no spatial index is kept.
//!
//! Pinned state is deliberately not consulted: a pinned waypoint suppresses
//! an automated candidate exactly like an unpinned one.

use wp_shared::types::Vec3;
use wp_shared::waypoint::Waypoint;

/// A candidate marker about to be inserted for one owner
#[derive(Debug, Clone)]
pub struct MarkerCandidate<'a> {
    /// Where the marker would be placed
    pub position: Vec3,

    /// Full title, including any dynamic component
    pub title: &'a str,

    /// Icon key from the triggering auto-marker configuration
    pub icon: &'a str,

    /// Explicitly configured color, if any. An explicit color differing from
    /// the existing waypoint's color is allowed to create a second, distinct
    /// marker at the same spot.
    pub color: Option<i32>,

    /// Chebyshev-style coverage radius from the triggering configuration
    pub coverage_radius: f64,
}

/// Whether the candidate duplicates any of the owner's existing waypoints.
/// Suppresses when `max(|dx|, |dz|) < coverage_radius` and title and icon
/// match, unless the candidate carries an explicit color differing from the
/// existing waypoint's.
pub fn should_suppress<'a, I>(candidate: &MarkerCandidate<'_>, existing: I) -> bool
where
    I: IntoIterator<Item = &'a Waypoint>,
{
    for waypoint in existing {
        let dx = (waypoint.position.x - candidate.position.x).abs();
        let dz = (waypoint.position.z - candidate.position.z).abs();
        if dx.max(dz) >= candidate.coverage_radius {
            continue;
        }
        if waypoint.title != candidate.title || waypoint.icon != candidate.icon {
            continue;
        }
        match candidate.color {
            Some(color) if color != waypoint.color => continue,
            _ => return true,
        }
    }
    false
}
