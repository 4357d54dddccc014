//! # Snapshot Payload
//!
//! The filtered view of waypoints pushed from the server to one client after
//! every store mutation. A snapshot always carries the complete set of
//! waypoints the recipient is allowed to see; the client replaces its local
//! state wholesale, so a missed push self-heals on the next mutation.
//!
//! The JSON helpers here are the reference encoding. A host embedding this
//! core may substitute its own transport encoding as long as the logical
//! schema (the `Waypoint` fields) is preserved.

use serde::{Deserialize, Serialize};

use crate::types::WpResult;
use crate::waypoint::Waypoint;

/// Serialized sequence of waypoints visible to one recipient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaypointSnapshot {
    /// Waypoints the recipient may see, in server store order
    pub waypoints: Vec<Waypoint>,
}

impl WaypointSnapshot {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    /// Encode for transport
    pub fn to_bytes(&self) -> WpResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| format!("Failed to serialize snapshot: {}", e))
    }

    /// Decode a received payload
    pub fn from_bytes(data: &[u8]) -> WpResult<Self> {
        serde_json::from_slice(data).map_err(|e| format!("Failed to deserialize snapshot: {}", e))
    }
}
