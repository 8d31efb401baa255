//! Log file setup.
//!
//! The terminal is in raw mode on the alternate screen while playing, so
//! events go to a file or nowhere.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::config::AppConfig;

/// Install the global subscriber when a log path is configured.
///
/// Returns whether a subscriber was installed.
pub fn init(config: &AppConfig) -> Result<bool> {
    match &config.log_path {
        Some(path) => {
            init_file(path, config.log_level)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn init_file(path: &Path, level: LevelFilter) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(level)
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(())
}
