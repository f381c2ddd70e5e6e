//! Configuration module for intent-signal
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SignalPaths;
pub use settings::Settings;
