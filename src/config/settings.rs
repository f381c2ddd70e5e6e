//! User settings for intent-signal
//!
//! Manages log verbosity, the TUI tick rate and how confirmed unlocks are
//! recorded and displayed.

use serde::{Deserialize, Serialize};

use super::paths::SignalPaths;
use crate::error::SignalError;

/// User settings for intent-signal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Log level for the `intent_signal` target (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Tick rate of the TUI event loop in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Whether confirmed unlocks are appended to the unlock ledger
    #[serde(default = "default_true")]
    pub record_unlocks: bool,

    /// Whether company names of locked signals are hidden
    #[serde(default = "default_true")]
    pub mask_locked_companies: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            log_level: default_log_level(),
            tick_rate_ms: default_tick_rate_ms(),
            record_unlocks: true,
            mask_locked_companies: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SignalPaths) -> Result<Self, SignalError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SignalError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SignalError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SignalPaths) -> Result<(), SignalError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SignalError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SignalError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.tick_rate_ms, 250);
        assert!(settings.record_unlocks);
        assert!(settings.mask_locked_companies);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignalPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            log_level: "debug".into(),
            record_unlocks: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.log_level, "debug");
        assert!(!loaded.record_unlocks);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"log_level":"warn"}"#).unwrap();
        assert_eq!(loaded.log_level, "warn");
        assert_eq!(loaded.tick_rate_ms, 250);
        assert!(loaded.record_unlocks);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignalPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SignalError::Config(_)));
    }
}
