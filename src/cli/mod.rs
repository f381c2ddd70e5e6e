//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod options;
pub mod signals;
pub mod unlock;

pub use options::handle_options_command;
pub use signals::{handle_history_command, handle_signals_command};
pub use unlock::handle_unlock_command;
