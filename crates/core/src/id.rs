// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed identifiers and local id generation.
//!
//! Relationships between records (`clubId`, `eventId`, `facultyId`) are plain
//! strings on the wire. Wrapping each in its own newtype keeps a club id from
//! being passed where an event id is expected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                $name(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                $name(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                $name(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_id!(
    /// Identifier of a [`Club`](crate::Club).
    ClubId
);
typed_id!(
    /// Identifier of an [`Event`](crate::Event).
    EventId
);
typed_id!(
    /// Identifier of a [`JoinRequest`](crate::JoinRequest).
    JoinRequestId
);
typed_id!(
    /// Identifier of a [`Registration`](crate::Registration).
    RegistrationId
);
typed_id!(
    /// Identifier of a user account (students, faculty, HODs).
    UserId
);

/// Generate a local record ID from prefix, seed text, and timestamp.
/// Format: {prefix}-{hash} where hash is first 8 hex chars of SHA256(seed + timestamp)
pub fn generate_id(prefix: &str, seed: &str, created_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", seed, created_at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    let short_hash = hex::encode(&hash[..4]);
    format!("{}-{}", prefix, short_hash)
}

/// Generate a unique ID, handling collisions by appending incrementing suffix.
pub fn generate_unique_id<F>(prefix: &str, seed: &str, created_at: &DateTime<Utc>, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base_id = generate_id(prefix, seed, created_at);

    if !exists(&base_id) {
        return base_id;
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
