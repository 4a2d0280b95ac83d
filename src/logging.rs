//! File logging. The terminal belongs to the deck, so log output goes to a
//! daily rolling file instead of stdout.

use anyhow::{Result, anyhow};
use std::path::Path;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "tapedeck.log";

/// Installs the global subscriber. `RUST_LOG` takes precedence over `level`.
///
/// The returned guard flushes buffered lines when dropped, so it has to
/// outlive the app.
pub fn init_logging(dir: &Path, level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;

    let appender = rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| anyhow!("Invalid log level {level:?}: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Could not install logger: {e}"))?;

    Ok(guard)
}
