//! Unlock ledger
//!
//! Every confirmed unlock is appended to `unlocks.log` as one JSON line
//! (JSONL), so the history survives restarts and can be replayed by
//! `intent-signal history`.
//!
//! # Example
//!
//! ```rust,ignore
//! use intent_signal::audit::{UnlockLedger, UnlockRecord};
//! use intent_signal::models::UnlockOptionId;
//!
//! let ledger = UnlockLedger::new(paths.unlock_log());
//! ledger.log(&UnlockRecord::new(vec![UnlockOptionId::All], None, unlocked))?;
//! ```

mod entry;
mod logger;

pub use entry::UnlockRecord;
pub use logger::UnlockLedger;
