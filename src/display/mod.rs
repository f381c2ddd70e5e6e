//! Display formatting for terminal output
//!
//! Tables for the option catalog, the signal feed and the unlock history.

pub mod options;
pub mod signal;

pub use options::{format_option_json, format_option_table};
pub use signal::{format_history, format_signal_table, format_unlock_result};
