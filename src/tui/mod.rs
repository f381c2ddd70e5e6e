//! Terminal User Interface module
//!
//! A signal dashboard built with ratatui. Clicking a signal's badge (Enter)
//! opens the unlock modal; confirmed unlocks update the feed and the ledger.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
