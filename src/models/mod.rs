//! Core data models for intent-signal
//!
//! The unlock option catalog, the modal's selection state and the intent
//! signals shown on the dashboard.

pub mod selection;
pub mod signal;
pub mod unlock_option;

pub use selection::SelectionState;
pub use signal::{IntentSignal, SignalStrength};
pub use unlock_option::{UnlockOption, UnlockOptionId, UNLOCK_OPTIONS};
