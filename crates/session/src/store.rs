//! High-score persistence.
//!
//! The engine only knows the current score. Keeping the best score across
//! runs is the session's job, and where it lives is behind
//! [`HighScoreStore`] so it can be swapped (memory, disk, remote) freely.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading or writing a persisted high score
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("high score file {} is malformed: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Backing storage for the single "best score" value
pub trait HighScoreStore {
    /// Read the stored best score. A store that has never been written reports 0.
    fn load(&mut self) -> Result<u32, StoreError>;

    /// Replace the stored best score.
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

/// In-process store; nothing survives the process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u32, StoreError> {
        Ok(self.best)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.best = score;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// Stores the best score as `{"high_score": N}` in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> Result<u32, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(self.io_err(e)),
        };
        let record: HighScoreRecord =
            serde_json::from_str(&text).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(record.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_err(e))?;
        }

        let record = HighScoreRecord { high_score: score };
        let text = serde_json::to_string_pretty(&record).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        // Write then rename so a crash never leaves a truncated file behind.
        let tmp = self.tmp_path();
        fs::write(&tmp, text).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load().unwrap(), 0);
        store.save(2048).unwrap();
        assert_eq!(store.load().unwrap(), 2048);
        assert_eq!(store.best(), 2048);
    }

    #[test]
    fn json_store_missing_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("best.json"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn json_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("best.json");

        let mut store = JsonFileStore::new(&path);
        store.save(1234).unwrap();

        let mut reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.load().unwrap(), 1234);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"high_score\": 1234"));
        assert!(!dir.path().join("nested").join("best.json.tmp").exists());
    }

    #[test]
    fn json_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("best.json");
        fs::write(&path, "not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(err.to_string().contains("malformed"));
    }
}
