//! Service layer for intent-signal
//!
//! Business logic on top of the storage layer.

pub mod unlock;

pub use unlock::{apply_unlock, UnlockService};
