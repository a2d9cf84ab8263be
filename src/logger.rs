//! File logging for the terminal UI.
//!
//! The terminal is owned by the UI, so log records go to a file under the
//! platform cache directory. With logging disabled nothing is installed and
//! the `log` macros used across the crate are no-ops.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the log file path
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
        .map(|dir| dir.join("orderdesk").join("orderdesk.log"))
}

/// Build the dispatcher writing to `path` at the configured level.
pub fn build_dispatch(config: &LoggingConfig, path: &Path) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file))
}

/// Install the global logger if enabled. Returns the log file in use.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    build_dispatch(config, &path)?
        .apply()
        .context("Failed to install logger")?;

    log::info!("logging to {}", path.display());
    Ok(Some(path))
}
