//! # Named-Marker Memory
//!
//! Small per-(icon, color) cache of the last title the player typed for a
//! marker, used to auto-suggest names in the add-waypoint dialog. Persisted
//! as a flat JSON mapping of `"{icon}-{color}"` to title, one file per
//! save-game.
//!
//! The file is read lazily on first access per process and cached in memory
//! thereafter; every remember flushes synchronously. A missing or corrupt
//! file degrades to an empty cache and is never a fatal error.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Persisted marker title memory, keyed by icon and color
#[derive(Debug)]
pub struct NamedMarkerMemory {
    path: PathBuf,
    cache: Option<HashMap<String, String>>,
}

impl NamedMarkerMemory {
    pub fn new(path: PathBuf) -> Self {
        Self { path, cache: None }
    }

    /// The storage location for one save-game instance
    pub fn for_save_game(data_dir: &Path, savegame_id: &str) -> Self {
        Self::new(data_dir.join(savegame_id).join("waypoint_names.json"))
    }

    fn key(icon: &str, color: i32) -> String {
        format!("{}-{}", icon, color)
    }

    /// Lazily load the cache. Read failures start from empty; the player
    /// simply loses the old suggestions.
    fn cache(&mut self) -> &mut HashMap<String, String> {
        let path = &self.path;
        self.cache.get_or_insert_with(|| Self::read_from_disk(path))
    }

    fn read_from_disk(path: &Path) -> HashMap<String, String> {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(e) => {
                    debug!("Corrupt marker name cache at {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        }
    }

    /// The last title used for this icon/color pair, if one was remembered
    pub fn suggest(&mut self, icon: &str, color: i32) -> Option<String> {
        let key = Self::key(icon, color);
        self.cache().get(&key).filter(|title| !title.is_empty()).cloned()
    }

    /// Remember the title used for this icon/color pair and flush. A write
    /// failure is logged; the in-memory entry is kept either way.
    pub fn remember(&mut self, icon: &str, color: i32, title: &str) {
        let key = Self::key(icon, color);
        self.cache().insert(key, title.to_string());
        self.flush();
    }

    fn flush(&mut self) {
        let Some(cache) = &self.cache else {
            return;
        };
        let text = match serde_json::to_string_pretty(cache) {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not serialize marker name cache: {}", e);
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Could not create marker name cache directory: {}", e);
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, text) {
            warn!("Could not write marker name cache to {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        std::env::temp_dir().join(format!(
            "wp_names_{}_{}_{}/waypoint_names.json",
            name,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn suggest_on_missing_file_is_empty_not_an_error() {
        let mut memory = NamedMarkerMemory::new(scratch_path("missing"));
        assert_eq!(memory.suggest("pick", 0xFF0000), None);
    }

    #[test]
    fn remember_then_suggest_round_trips() {
        let path = scratch_path("roundtrip");
        let mut memory = NamedMarkerMemory::new(path.clone());
        memory.remember("pick", 0xFF0000, "Copper Ore");

        assert_eq!(memory.suggest("pick", 0xFF0000).as_deref(), Some("Copper Ore"));
        // Different color, same icon: a different key.
        assert_eq!(memory.suggest("pick", 0x00FF00), None);

        // A fresh instance reads the flushed file back.
        let mut reloaded = NamedMarkerMemory::new(path.clone());
        assert_eq!(reloaded.suggest("pick", 0xFF0000).as_deref(), Some("Copper Ore"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn corrupt_file_degrades_to_empty_cache() {
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "]]not json[[").unwrap();

        let mut memory = NamedMarkerMemory::new(path.clone());
        assert_eq!(memory.suggest("pick", 0xFF0000), None);

        // Remembering still works and repairs the file.
        memory.remember("pick", 0xFF0000, "Ore");
        let mut reloaded = NamedMarkerMemory::new(path.clone());
        assert_eq!(reloaded.suggest("pick", 0xFF0000).as_deref(), Some("Ore"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn empty_remembered_title_is_not_suggested() {
        let mut memory = NamedMarkerMemory::new(scratch_path("empty"));
        memory.remember("pick", 0xFF0000, "");
        assert_eq!(memory.suggest("pick", 0xFF0000), None);
    }

    #[test]
    fn newer_title_overwrites_older_one() {
        let path = scratch_path("overwrite");
        let mut memory = NamedMarkerMemory::new(path.clone());
        memory.remember("trader", 0x0000FF, "Trader");
        memory.remember("trader", 0x0000FF, "Trader (Luxuries)");
        assert_eq!(
            memory.suggest("trader", 0x0000FF).as_deref(),
            Some("Trader (Luxuries)")
        );
        fs::remove_file(&path).ok();
    }
}
