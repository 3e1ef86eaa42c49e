// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for clubsync-core operations.

use thiserror::Error;

/// All possible errors that can occur in clubsync-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("invalid status: '{0}'\n  hint: valid statuses are: pending, approved, rejected")]
    InvalidStatus(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: student, faculty, hod")]
    InvalidRole(String),

    #[error("invalid collection: '{0}'\n  hint: valid collections are: clubs, events, join-requests, registrations")]
    InvalidEntity(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for clubsync-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Returns `Err(FieldRequired)` when `value` is blank.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::FieldRequired { field });
    }
    Ok(())
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
