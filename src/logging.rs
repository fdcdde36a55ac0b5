//! File logging via `tracing`.
//!
//! The terminal belongs to the animation, so events go to the file named by
//! `DVD_LOG_PATH` and nowhere else.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::DvdConfig;

/// Install the global subscriber. Returns `Ok(false)` when logging is disabled.
pub fn init(config: &DvdConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };
    let file = open_log_file(Path::new(path))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("logging: {e}"))?;
    Ok(true)
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("logging: cannot open {}", path.display()))
}

fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}
