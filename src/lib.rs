//! intent-signal - Terminal dashboard for B2B intent signals
//!
//! Lists buying-intent signals with the company hidden until the signal is
//! unlocked. Unlocking goes through the "Unlock the full power of Intent
//! Signal" modal, which collects a selection of unlock options and hands it
//! to its host.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Unlock option catalog, selection state, signals
//! - `storage`: JSON file storage layer
//! - `services`: Unlock application
//! - `audit`: Unlock ledger
//! - `tui`: Dashboard and the unlock modal
//! - `cli`/`display`: Command handlers and table formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use intent_signal::config::{paths::SignalPaths, settings::Settings};
//!
//! let paths = SignalPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{SignalError, SignalResult};
