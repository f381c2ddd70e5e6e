//! Logging setup
//!
//! The TUI owns stdout, so logs go to a daily rolling file under the log
//! directory. `RUST_LOG` takes precedence over the configured level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{SignalPaths, Settings};
use crate::error::{SignalError, SignalResult};

/// File name prefix of the rolling log
pub const LOG_FILE_PREFIX: &str = "intent-signal.log";

/// Build the filter from `RUST_LOG` or the configured level
pub fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("intent_signal={}", log_level)))
}

/// Install the global subscriber
///
/// The returned guard flushes buffered lines on drop; keep it alive until
/// the program exits.
pub fn init_logging(paths: &SignalPaths, settings: &Settings) -> SignalResult<WorkerGuard> {
    let log_dir = paths.log_dir();
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| SignalError::Io(format!("Failed to create log directory: {}", e)))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(build_filter(&settings.log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .try_init()
        .map_err(|e| SignalError::Config(format!("Failed to initialize logging: {}", e)))?;

    tracing::info!("Starting intent-signal v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {:?}", log_dir);

    Ok(guard)
}
