//! # wp_client
//!
//! Client-side half of the sharable waypoints system. Reconstructs the local
//! waypoint view from server snapshots, enforces edit permissions on foreign
//! waypoints before any mutation is attempted, and remembers the last-used
//! marker title per icon/color pair.
//!
//! Everything here runs on the host's single cooperative UI/event thread;
//! incoming snapshots replace the prior state wholesale, so no locking is
//! needed.
//!
//! The system is organized into:
//! - `view`: Own/foreign snapshot partitioning and the edit authorization guard
//! - `names`: Persisted per-save-game marker name memory

// Module declarations
pub mod view;   // Snapshot partitioning and edit guard
pub mod names;  // Named-marker memory

// Re-export commonly used items
pub use names::NamedMarkerMemory;
pub use view::{ClientChat, WaypointView};
