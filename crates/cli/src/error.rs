// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors surfaced by the `clubsync` command line.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Sync(#[from] clubsync::Error),

    #[error("no state directory available\n  hint: pass --state-dir or set CLUBSYNC_STATE_DIR")]
    NoStateDir,

    #[error("invalid date '{0}'\n  hint: use RFC 3339, e.g. 2026-11-02T17:00:00Z")]
    InvalidDate(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
