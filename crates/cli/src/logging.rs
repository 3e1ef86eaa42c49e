// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "clubsync.log";

pub fn log_path(state_dir: &Path) -> PathBuf {
    state_dir.join(LOG_FILE_NAME)
}

/// Sends tracing output to the log file in `state_dir`, falling back to
/// stderr when the file cannot be opened. `RUST_LOG` overrides the level.
pub fn setup_logging(state_dir: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = fs::create_dir_all(state_dir).and_then(|_| {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path(state_dir))
    });

    // A second call in the same process keeps the first subscriber.
    let _ = match file {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .try_init(),
        Err(_) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
