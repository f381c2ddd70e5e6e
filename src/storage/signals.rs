//! Signal repository for JSON storage
//!
//! Manages loading and saving the intent signal feed to signals.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SignalError;
use crate::models::IntentSignal;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SignalData {
    signals: Vec<IntentSignal>,
}

/// Repository for the signal feed; keeps feed order
pub struct SignalRepository {
    path: PathBuf,
    data: RwLock<Vec<IntentSignal>>,
}

impl SignalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load signals from disk
    pub fn load(&self) -> Result<(), SignalError> {
        let file_data: SignalData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SignalError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.signals;

        tracing::debug!(count = data.len(), path = %self.path.display(), "Loaded signal feed");
        Ok(())
    }

    /// Write `signals` to disk, then make them the in-memory feed
    ///
    /// The in-memory feed is left as it was when the write fails.
    pub fn commit(&self, signals: Vec<IntentSignal>) -> Result<(), SignalError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SignalError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let snapshot = SignalData { signals };
        write_json_atomic(&self.path, &snapshot)?;
        *data = snapshot.signals;

        tracing::debug!(count = data.len(), path = %self.path.display(), "Saved signal feed");
        Ok(())
    }

    pub fn get_all(&self) -> Result<Vec<IntentSignal>, SignalError> {
        let data = self
            .data
            .read()
            .map_err(|e| SignalError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// Replace the whole feed in memory without touching disk
    pub fn replace_all(&self, signals: Vec<IntentSignal>) -> Result<(), SignalError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SignalError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = signals;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SignalStrength;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, SignalRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = SignalRepository::new(temp_dir.path().join("signals.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_replace_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.commit(IntentSignal::sample_feed()).unwrap();

        let reloaded = SignalRepository::new(temp_dir.path().join("signals.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.get_all().unwrap(), IntentSignal::sample_feed());
    }

    #[test]
    fn test_failed_commit_keeps_memory() {
        let (temp_dir, repo) = create_test_repo();
        let locked = vec![IntentSignal::new("sig-9", "Acme", "CRM", SignalStrength::Strong)];
        repo.replace_all(locked.clone()).unwrap();

        // A non-empty directory at the target path makes the rename fail
        let target = temp_dir.path().join("signals.json");
        std::fs::create_dir_all(target.join("occupied")).unwrap();

        let mut unlocked = locked.clone();
        unlocked[0].unlock();
        assert!(repo.commit(unlocked).is_err());
        assert_eq!(repo.get_all().unwrap(), locked);
    }
}
