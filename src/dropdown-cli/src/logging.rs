//! File logging for the interactive session.
//!
//! The terminal is in raw mode while the dropdown runs, so nothing may be
//! written to stderr. Logs go to a file when one is requested and are
//! discarded otherwise.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Flushes buffered log lines when dropped.
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Returns `None` when no log file
/// was given.
pub fn setup_logging(log_file: Option<&Path>, level: &str) -> Result<Option<LogGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(Some(LogGuard { _guard: guard }))
}
