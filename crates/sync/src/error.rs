// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the sync layer.
//!
//! Validation and conflict failures are raised before any network call and
//! always reach the caller. Network failures during reads never surface;
//! during writes they surface only as [`Error::NotDelivered`] under the
//! surfaced write policy.

use thiserror::Error;

use clubsync_core::EntityKind;

use crate::remote::NetworkError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("{0}")]
    InvalidInput(String),

    #[error("not signed in\n  hint: run 'clubsync login' first")]
    NotSignedIn,

    #[error("already registered for event {event_id}")]
    AlreadyRegistered { event_id: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("{kind} {id} was saved locally but did not reach the server: {source}\n  hint: it will be replaced by server state on the next successful refresh")]
    NotDelivered {
        kind: EntityKind,
        id: String,
        #[source]
        source: NetworkError,
    },

    #[error("{0}")]
    Network(#[from] NetworkError),

    #[error("local store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Rejected before any network call because of missing or bad input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::FieldRequired { .. } | Error::InvalidInput(_) | Error::NotSignedIn
        )
    }

    /// Rejected locally because it would violate a uniqueness rule.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::AlreadyRegistered { .. })
    }
}

impl From<clubsync_core::Error> for Error {
    fn from(e: clubsync_core::Error) -> Self {
        match e {
            clubsync_core::Error::FieldRequired { field } => Error::FieldRequired { field },
            clubsync_core::Error::Json(e) => Error::Json(e),
            other => Error::InvalidInput(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
