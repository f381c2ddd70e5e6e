//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the dashboard

pub mod help;
pub mod unlock_signal;

pub use unlock_signal::{UnlockIntentSignalModal, UnlockSignalHost, UnlockSignalProps};
