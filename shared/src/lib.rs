//! # wp_shared
//!
//! Shared types and wire messages used by both the waypoint server and client
//! crates. This crate contains the waypoint data model, the snapshot payload
//! pushed from server to client, and the client-to-server settings message,
//! to ensure consistency across the client-server boundary.

// Export module structure
pub mod types;
pub mod waypoint;
pub mod snapshot;
pub mod messages;
pub mod constants;

// Re-export commonly used items for convenience
pub use types::{Vec3, WpResult};
pub use waypoint::Waypoint;
pub use snapshot::WaypointSnapshot;
pub use messages::{EditAction, DenialKind, SharingSelectionMessage};
pub use constants::GROUP_NONE;
