// Logging setup
// tracing subscriber writing to a file so the TUI screen stays clean

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::core::LogSettings;

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered lines are flushed. Returns None when logging is disabled.
pub fn init_logging(settings: &LogSettings) -> Result<Option<WorkerGuard>> {
    if settings.file.trim().is_empty() {
        return Ok(None);
    }

    let path = Path::new(&settings.file);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path '{}' has no file name", settings.file))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.filter.as_str()));

    // A subscriber installed earlier (tests, embedding) wins
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => Ok(Some(guard)),
        Err(_) => Ok(None),
    }
}
