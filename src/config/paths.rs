//! Path management for intent-signal
//!
//! ## Path Resolution Order
//!
//! 1. `INTENT_SIGNAL_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`
//! 3. `./.intent-signal` when no home directory can be determined

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SignalError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "INTENT_SIGNAL_DATA_DIR";

/// Manages all paths used by intent-signal
#[derive(Debug, Clone)]
pub struct SignalPaths {
    /// Base directory for all intent-signal data
    base_dir: PathBuf,
}

impl SignalPaths {
    /// Create a new SignalPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the override variable is set but empty.
    pub fn new() -> Result<Self, SignalError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if custom.trim().is_empty() => {
                return Err(SignalError::Config(format!("{} is set but empty", DATA_DIR_ENV)));
            }
            Ok(custom) => PathBuf::from(custom),
            Err(_) => resolve_default_path(),
        };

        Ok(Self { base_dir })
    }

    /// Create SignalPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the log directory (<base>/logs/)
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the unlock ledger
    pub fn unlock_log(&self) -> PathBuf {
        self.base_dir.join("unlocks.log")
    }

    /// Get the path to signals.json
    pub fn signals_file(&self) -> PathBuf {
        self.data_dir().join("signals.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SignalError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SignalError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SignalError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| SignalError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> PathBuf {
    ProjectDirs::from("", "", "intent-signal").map_or_else(
        || PathBuf::from(".intent-signal"),
        |dirs| dirs.config_dir().to_path_buf(),
    )
}
