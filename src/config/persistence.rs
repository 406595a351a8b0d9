//! Practice set persistence module
//!
//! Stores the last-selected practice set as a list of flag codes under a
//! single JSON file. Missing or corrupt data is never an error: callers
//! fall back to the full catalog.

use crate::{QuizError, Result, APP_NAME, PRACTICE_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Practice set storage manager
#[derive(Debug)]
pub struct PracticeStore {
    practice_path: PathBuf,
}

/// Practice file structure for JSON persistence
#[derive(Debug, Serialize, Deserialize)]
struct PracticeFile {
    version: u32,
    codes: Vec<String>,
}

impl PracticeStore {
    /// Create a store at the standard data file location
    pub fn new() -> Result<Self> {
        let practice_path = Self::practice_file_path()?;
        Ok(Self { practice_path })
    }

    /// Create a store backed by an explicit file path
    pub fn with_path(practice_path: PathBuf) -> Self {
        Self { practice_path }
    }

    /// Get the standard practice file path
    /// Uses $DATA_HOME/flagquiz/practice.json or the platform equivalent
    pub fn practice_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| QuizError::StoreError("Unable to determine data directory".to_string()))?;

        Ok(data_dir.join(APP_NAME).join(PRACTICE_FILE))
    }

    /// Load the stored codes.
    ///
    /// Returns `None` when the file is missing, unreadable, or not valid
    /// JSON; the caller substitutes the default practice set.
    pub fn load(&self) -> Option<Vec<String>> {
        let content = fs::read_to_string(&self.practice_path).ok()?;
        let file: PracticeFile = serde_json::from_str(&content).ok()?;
        Some(file.codes)
    }

    /// Save the given codes, replacing any previous selection
    pub fn save(&self, codes: Vec<String>) -> Result<()> {
        if let Some(parent) = self.practice_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuizError::StoreError(format!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = PracticeFile { version: 1, codes };

        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| QuizError::StoreError(format!("Failed to serialize practice set: {}", e)))?;

        fs::write(&self.practice_path, content).map_err(|e| {
            QuizError::StoreError(format!(
                "Failed to write practice file {}: {}",
                self.practice_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the practice file path for external access
    pub fn path(&self) -> &PathBuf {
        &self.practice_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = PracticeStore::with_path(temp_dir.path().join("practice.json"));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = PracticeStore::with_path(temp_dir.path().join("practice.json"));

        store
            .save(vec!["fr".to_string(), "de".to_string()])
            .unwrap();

        let mut codes = store.load().unwrap();
        codes.sort();
        assert_eq!(codes, vec!["de", "fr"]);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("practice.json");
        let store = PracticeStore::with_path(nested);

        store.save(vec!["bt".to_string()]).unwrap();
        assert_eq!(store.load().unwrap(), vec!["bt"]);
    }

    #[test]
    fn test_corrupt_json_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("practice.json");
        fs::write(&path, "{not json").unwrap();

        let store = PracticeStore::with_path(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_wrong_shape_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("practice.json");
        fs::write(&path, r#"{"version": 1, "codes": "fr"}"#).unwrap();

        let store = PracticeStore::with_path(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_replaces_previous_selection() {
        let temp_dir = TempDir::new().unwrap();
        let store = PracticeStore::with_path(temp_dir.path().join("practice.json"));

        store.save(vec!["fr".to_string()]).unwrap();
        store.save(vec!["de".to_string()]).unwrap();
        assert_eq!(store.load().unwrap(), vec!["de"]);
    }

    #[test]
    fn test_practice_file_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("practice.json");
        let store = PracticeStore::with_path(path.clone());

        store.save(vec!["sz".to_string()]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let file: PracticeFile = serde_json::from_str(&content).unwrap();
        assert_eq!(file.version, 1);
        assert_eq!(file.codes, vec!["sz"]);
    }
}
