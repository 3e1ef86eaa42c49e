// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Environment variable names.
pub mod vars {
    pub const CLUBSYNC_API_URL: &str = "CLUBSYNC_API_URL";
    pub const CLUBSYNC_STATE_DIR: &str = "CLUBSYNC_STATE_DIR";
}

/// Returns the value of `CLUBSYNC_API_URL` if set and non-empty.
pub fn api_url() -> Option<String> {
    std::env::var(vars::CLUBSYNC_API_URL)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Returns the value of `CLUBSYNC_STATE_DIR` if set.
pub fn state_dir() -> Option<PathBuf> {
    std::env::var(vars::CLUBSYNC_STATE_DIR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Directory holding the config file and the local store.
///
/// `CLUBSYNC_STATE_DIR` wins; otherwise the platform state directory, then
/// the local data directory.
pub fn default_state_dir() -> Option<PathBuf> {
    if let Some(dir) = state_dir() {
        return Some(dir);
    }
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| base.join("clubsync"))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
