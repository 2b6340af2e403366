//! File logging setup. The terminal UI owns stdout, so all tracing output
//! goes to `<log dir>/padel-counter.log`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_FILE_NAME: &str = "padel-counter.log";

/// Resolve the log directory, creating it if needed.
///
/// Falls back to the platform data directory when no override is given.
pub fn resolve_log_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    let path = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            let mut path = dirs::data_dir()
                .context("Unable to determine data directory for your platform")?;
            path.push("padel-counter");
            path
        }
    };

    std::fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create log directory {}", path.display()))?;

    Ok(path)
}

/// Install the global subscriber. Keep the guard alive until exit or
/// buffered lines are lost.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}
