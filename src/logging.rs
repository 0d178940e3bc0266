//! File-backed `tracing` setup.
//!
//! The terminal UI owns stdout, so log lines go to
//! `<data_local_dir>/marquee/marquee.log`. `RUST_LOG` takes precedence over
//! the configured filter.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{MarqueeError, MarqueeResult};

const LOG_FILE: &str = "marquee.log";

/// Default log location, when the platform has a local data dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("marquee").join(LOG_FILE))
}

/// Build the filter: `RUST_LOG` if set and valid, else `fallback`.
pub fn build_filter(fallback: &str) -> MarqueeResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(fallback).map_err(|e| MarqueeError::Logging(e.to_string()))
}

/// Install the global subscriber writing to `path` (appending).
pub fn init(path: &Path, fallback_filter: &str) -> MarqueeResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = build_filter(fallback_filter)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| MarqueeError::Logging(e.to_string()))?;

    tracing::info!("marquee v{} starting", crate::cli::VERSION);
    Ok(())
}
