//! Structured logging setup.
//!
//! The menu owns stdout, so log events go to a daily rolling file instead of
//! the terminal.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log directory.
pub const LOG_DIR_VAR: &str = "CUSTOMER_DESK_LOG_DIR";

const DEFAULT_LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "customer-desk.log";

/// Where log files are written: `$CUSTOMER_DESK_LOG_DIR`, or `./logs`.
pub fn log_directory() -> PathBuf {
    std::env::var_os(LOG_DIR_VAR)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR))
}

/// Installs the global subscriber. `RUST_LOG` controls the filter and
/// defaults to `info`.
///
/// The returned guard flushes the background writer when dropped, so the
/// caller must keep it alive until exit.
pub fn init(log_dir: &Path) -> Result<WorkerGuard, ConfigError> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)
        .map_err(|e| ConfigError::LoggingError(format!("{}: {e}", log_dir.display())))?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    Ok(guard)
}
