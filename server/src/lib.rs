//! # wp_server
//!
//! Server-authoritative half of the sharable waypoints system. This crate owns
//! the single source of truth for all waypoint records and keeps every
//! connected client's view consistent with it.
//!
//! The system is organized into several sub-modules:
//! - `store`: Ordered, authoritative waypoint collection
//! - `ownership`: Per-player sharing-group selection and consumption
//! - `dedup`: Proximity-based duplicate marker suppression
//! - `broadcast`: Recipient computation and filtered snapshot pushes
//! - `connection`: Connected-player registry
//! - `config`: Auto-marker trigger settings
//! - `service`: The per-request mutation pipeline tying the above together
//! - `host`: Traits the embedding game implements for this crate to call into

// Module declarations
pub mod host;        // Host game extension points
pub mod store;       // Authoritative waypoint store
pub mod ownership;   // Active sharing selections
pub mod dedup;       // Proximity deduplication
pub mod broadcast;   // Snapshot broadcasting
pub mod connection;  // Connected-player registry
pub mod config;      // Auto-marker settings
pub mod service;     // Request pipeline

// Re-export commonly used items
pub use broadcast::SyncBroadcaster;
pub use config::{AutoMarkerSettings, MarkerConfig};
pub use connection::ConnectedPlayers;
pub use dedup::MarkerCandidate;
pub use host::{ChatNotice, ChatSink, GroupDirectory, SnapshotTransport};
pub use ownership::SharingSelections;
pub use service::{SelectionScope, WaypointService};
pub use store::WaypointStore;
