//! Storage initialization
//!
//! First-run setup: directories and the sample signal feed.

use crate::config::paths::SignalPaths;
use crate::error::SignalError;
use crate::models::IntentSignal;

use super::file_io::{json_file_valid, write_json_atomic};

/// Initialize storage for a fresh installation
///
/// Seeds signals.json with the sample feed unless a valid feed already exists.
/// Returns whether a feed was written.
pub fn initialize_storage(paths: &SignalPaths) -> Result<bool, SignalError> {
    paths.ensure_directories()?;

    let signals_file = paths.signals_file();
    if json_file_valid(&signals_file) {
        tracing::info!(path = %signals_file.display(), "Signal feed already present");
        return Ok(false);
    }

    write_json_atomic(
        &signals_file,
        &serde_json::json!({ "signals": IntentSignal::sample_feed() }),
    )?;
    tracing::info!(path = %signals_file.display(), "Seeded sample signal feed");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SignalRepository;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_seeds_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignalPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(initialize_storage(&paths).unwrap());
        assert!(!initialize_storage(&paths).unwrap());

        let repo = SignalRepository::new(paths.signals_file());
        repo.load().unwrap();
        assert_eq!(repo.get_all().unwrap(), IntentSignal::sample_feed());
    }
}
