//! Durable storage for the mastery map
//!
//! Layout: a single `progress.json` in the data directory holding the
//! serialized map (`country -> {attempts, correct}`). Writes happen
//! synchronously after every answered question, so a crash loses at most
//! the in-flight question. Missing or unreadable content is treated as an
//! empty map; this is the one boundary that swallows malformed input.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::mastery::MasteryMap;

#[derive(Error, Debug)]
pub enum ProgressStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, ProgressStorageError>;

/// Storage manager for quiz progress
pub struct ProgressStorage {
    data_dir: PathBuf,
}

impl ProgressStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("atlas"))
            .ok_or(ProgressStorageError::DataDirNotFound)
    }

    /// Path of the persisted mastery map
    pub fn progress_path(&self) -> PathBuf {
        self.data_dir.join("progress.json")
    }

    /// Read the persisted map. Absent or malformed content yields an
    /// empty map; entries violating `correct <= attempts` are clamped.
    pub fn load(&self) -> MasteryMap {
        let path = self.progress_path();
        if !path.exists() {
            return MasteryMap::new();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("Failed to read {}: {} (starting fresh)", path.display(), err);
                return MasteryMap::new();
            }
        };

        match serde_json::from_str::<MasteryMap>(&content) {
            Ok(map) => map
                .into_iter()
                .map(|(country, stats)| (country, stats.clamped()))
                .collect(),
            Err(err) => {
                log::warn!("Corrupt progress file {}: {} (starting fresh)", path.display(), err);
                MasteryMap::new()
            }
        }
    }

    /// Persist the full map, overwriting prior content
    pub fn save(&self, map: &MasteryMap) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::write(self.progress_path(), serde_json::to_string_pretty(map)?)?;
        Ok(())
    }

    /// Discard all persisted stats
    pub fn reset(&self) -> Result<()> {
        let path = self.progress_path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::mastery::ItemStats;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_yields_empty_map() {
        let dir = TempDir::new().unwrap();
        let storage = ProgressStorage::new(dir.path().to_path_buf());
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = ProgressStorage::new(dir.path().to_path_buf());

        let mut map = MasteryMap::new();
        map.insert("France".to_string(), ItemStats { attempts: 10, correct: 8 });
        map.insert("Peru".to_string(), ItemStats { attempts: 1, correct: 0 });

        storage.save(&map).unwrap();
        assert_eq!(storage.load(), map);

        // Saving what was loaded changes nothing
        storage.save(&storage.load()).unwrap();
        assert_eq!(storage.load(), map);
    }

    #[test]
    fn test_load_corrupt_file_yields_empty_map() {
        let dir = TempDir::new().unwrap();
        let storage = ProgressStorage::new(dir.path().to_path_buf());

        fs::create_dir_all(dir.path()).unwrap();
        fs::write(storage.progress_path(), "{not json").unwrap();

        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_clamps_invalid_counters() {
        let dir = TempDir::new().unwrap();
        let storage = ProgressStorage::new(dir.path().to_path_buf());

        fs::write(
            storage.progress_path(),
            r#"{"Chile": {"attempts": 2, "correct": 5}}"#,
        )
        .unwrap();

        let map = storage.load();
        assert_eq!(map["Chile"], ItemStats { attempts: 2, correct: 2 });
    }

    #[test]
    fn test_reset_removes_file() {
        let dir = TempDir::new().unwrap();
        let storage = ProgressStorage::new(dir.path().to_path_buf());

        let mut map = MasteryMap::new();
        map.insert("Japan".to_string(), ItemStats { attempts: 4, correct: 4 });
        storage.save(&map).unwrap();
        assert!(storage.progress_path().exists());

        storage.reset().unwrap();
        assert!(!storage.progress_path().exists());
        assert!(storage.load().is_empty());

        // Resetting again is harmless
        storage.reset().unwrap();
    }
}
