//! # Auto-Marker Configuration
//!
//! Settings for the automated marker triggers: what a trigger's marker is
//! titled, which icon and color it uses, and how large an area an existing
//! marker covers for deduplication purposes. The heuristics deciding *when*
//! a trigger fires live in the host game; this crate only consumes the
//! resulting settings.
//!
//! Loaded from a JSON file once at startup. A missing file is generated with
//! defaults; a corrupt file falls back to defaults with a warning. Neither is
//! ever a fatal error.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Settings for one auto-marker trigger kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoMarkerSettings {
    /// Whether this trigger creates markers at all
    pub enabled: bool,

    /// Base marker title; a dynamic component may be appended per trigger
    pub title: String,

    /// Icon key from the host's fixed icon set
    pub icon: String,

    /// Packed RGB marker color. `None` means the configured color string
    /// could not be resolved; creation treats that as invalid input.
    pub color: Option<i32>,

    /// Existing markers within this per-axis radius suppress new duplicates
    pub coverage_radius: f64,
}

impl Default for AutoMarkerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Marker".to_string(),
            icon: "circle".to_string(),
            color: Some(0x000000),
            coverage_radius: 10.0,
        }
    }
}

/// Named auto-marker settings sections, e.g. "ore" or "trader"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Trigger name to its settings; ordered for stable config files
    pub markers: BTreeMap<String, AutoMarkerSettings>,
}

impl MarkerConfig {
    /// Settings for a named trigger, if configured
    pub fn get(&self, name: &str) -> Option<&AutoMarkerSettings> {
        self.markers.get(name)
    }

    /// Load the config from disk. A missing file is written back with the
    /// given defaults so the player has something to edit; a corrupt file
    /// falls back to the defaults with a warning.
    pub fn load_or_init(path: &Path, defaults: MarkerConfig) -> MarkerConfig {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Invalid marker config at {}: {}. Using defaults", path.display(), e);
                    defaults
                }
            },
            Err(_) => {
                info!("No marker config at {}, generating defaults", path.display());
                if let Err(e) = defaults.save(path) {
                    warn!("Could not write default marker config: {}", e);
                }
                defaults
            }
        }
    }

    /// Write the config to disk, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize marker config: {}", e))?;
        fs::write(path, text).map_err(|e| format!("Failed to write marker config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        std::env::temp_dir().join(format!("wp_config_{}_{}_{}.json", name, std::process::id(), nanos))
    }

    fn sample_config() -> MarkerConfig {
        let mut markers = BTreeMap::new();
        markers.insert(
            "ore".to_string(),
            AutoMarkerSettings {
                enabled: true,
                title: "Ore".to_string(),
                icon: "pick".to_string(),
                color: Some(0xFF0000),
                coverage_radius: 5.0,
            },
        );
        MarkerConfig { markers }
    }

    #[test]
    fn missing_file_writes_and_returns_defaults() {
        let path = scratch_path("missing");
        let loaded = MarkerConfig::load_or_init(&path, sample_config());
        assert_eq!(loaded, sample_config());
        // The defaults were persisted for the player to edit.
        assert!(path.exists());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn round_trips_through_disk() {
        let path = scratch_path("roundtrip");
        sample_config().save(&path).unwrap();
        let loaded = MarkerConfig::load_or_init(&path, MarkerConfig::default());
        assert_eq!(loaded, sample_config());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults_without_rewriting() {
        let path = scratch_path("corrupt");
        fs::write(&path, "{ not json").unwrap();
        let loaded = MarkerConfig::load_or_init(&path, sample_config());
        assert_eq!(loaded, sample_config());
        // The corrupt file is left in place for the player to fix.
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
        fs::remove_file(&path).ok();
    }
}
