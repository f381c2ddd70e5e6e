//! Storage layer for intent-signal
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the append-only unlock ledger.

pub mod file_io;
pub mod init;
pub mod signals;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use signals::SignalRepository;

use crate::audit::UnlockLedger;
use crate::config::paths::SignalPaths;
use crate::error::SignalError;

/// Storage coordinator
pub struct Storage {
    pub signals: SignalRepository,
    pub ledger: UnlockLedger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SignalPaths) -> Result<Self, SignalError> {
        paths.ensure_directories()?;

        Ok(Self {
            signals: SignalRepository::new(paths.signals_file()),
            ledger: UnlockLedger::new(paths.unlock_log()),
        })
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SignalError> {
        self.signals.load()
    }
}
