//! Tracing subscriber setup.
//!
//! Headless runs log to stderr. The interactive session owns the terminal,
//! so there logs only go to a file: `--log-file`, or
//! `<cache dir>/sortvis/sortvis.log` when that directory can be created.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::LogLevel;

/// Log file name under the cache directory.
pub const LOG_FILE: &str = "sortvis.log";

/// Keeps the non-blocking file writer flushing until dropped.
pub struct LogGuard {
    _guard: Option<WorkerGuard>,
}

/// Builds the filter: `RUST_LOG` when set, otherwise `level`.
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()))
}

/// Default log file for interactive runs.
pub fn default_log_path() -> Option<PathBuf> {
    let dir = dirs::cache_dir()?.join("sortvis");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join(LOG_FILE))
}

/// Installs the global subscriber.
pub fn init_logging(level: LogLevel, log_file: Option<&Path>, interactive: bool) -> Result<LogGuard> {
    let path = match log_file {
        Some(path) => Some(path.to_path_buf()),
        None if interactive => default_log_path(),
        None => None,
    };

    let Some(path) = path else {
        if !interactive {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_writer(std::io::stderr)
                .init();
        }
        return Ok(LogGuard { _guard: None });
    };

    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(file_layer)
        .init();

    tracing::debug!(path = %path.display(), "logging to file");
    Ok(LogGuard {
        _guard: Some(guard),
    })
}
