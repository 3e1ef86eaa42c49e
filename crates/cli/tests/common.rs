// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Nothing listens on port 1, so every call fails fast.
pub const OFFLINE_URL: &str = "http://127.0.0.1:1";

pub fn clubsync() -> Command {
    cargo_bin_cmd!("clubsync")
}

/// A command bound to `state_dir` and an unreachable backend.
pub fn offline(state_dir: &Path) -> Command {
    let mut cmd = clubsync();
    cmd.arg("--state-dir")
        .arg(state_dir)
        .arg("--api-url")
        .arg(OFFLINE_URL)
        .env_remove("CLUBSYNC_API_URL")
        .env_remove("CLUBSYNC_STATE_DIR")
        .env_remove("RUST_LOG");
    cmd
}
