// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Traits shared by every synchronized collection.
//!
//! A [`Record`] is one row of a server-owned collection. A [`Draft`] is the
//! body of a create call and knows how to stand in for the server when the
//! call fails. A [`Patch`] is the body of an update call and can be replayed
//! locally for the same reason.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The four server-owned collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Club,
    Event,
    JoinRequest,
    Registration,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Club,
        EntityKind::Event,
        EntityKind::JoinRequest,
        EntityKind::Registration,
    ];

    /// REST collection path.
    pub fn path(&self) -> &'static str {
        match self {
            EntityKind::Club => "/api/clubs",
            EntityKind::Event => "/api/events",
            EntityKind::JoinRequest => "/api/join-requests",
            EntityKind::Registration => "/api/registrations",
        }
    }

    /// Envelope key holding a single record.
    pub fn singular_key(&self) -> &'static str {
        match self {
            EntityKind::Club => "club",
            EntityKind::Event => "event",
            EntityKind::JoinRequest => "joinRequest",
            EntityKind::Registration => "registration",
        }
    }

    /// Envelope key holding the full collection.
    pub fn plural_key(&self) -> &'static str {
        match self {
            EntityKind::Club => "clubs",
            EntityKind::Event => "events",
            EntityKind::JoinRequest => "joinRequests",
            EntityKind::Registration => "registrations",
        }
    }

    /// Key of the collection snapshot in the local store.
    pub fn store_key(&self) -> &'static str {
        match self {
            EntityKind::Club => "clubs",
            EntityKind::Event => "events",
            EntityKind::JoinRequest => "joinRequests",
            EntityKind::Registration => "eventRegistrations",
        }
    }

    /// Prefix of locally generated ids.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            EntityKind::Club => "club",
            EntityKind::Event => "event",
            EntityKind::JoinRequest => "jr",
            EntityKind::Registration => "reg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Club => "club",
            EntityKind::Event => "event",
            EntityKind::JoinRequest => "join request",
            EntityKind::Registration => "registration",
        }
    }

    pub fn supports_update(&self) -> bool {
        !matches!(self, EntityKind::Registration)
    }

    pub fn supports_delete(&self) -> bool {
        matches!(self, EntityKind::Club | EntityKind::Event)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "club" | "clubs" => Ok(EntityKind::Club),
            "event" | "events" => Ok(EntityKind::Event),
            "join-request" | "join-requests" | "join_requests" | "joinrequests" => {
                Ok(EntityKind::JoinRequest)
            }
            "registration" | "registrations" => Ok(EntityKind::Registration),
            _ => Err(Error::InvalidEntity(s.to_string())),
        }
    }
}

/// One record of a synchronized collection.
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: Clone
        + Eq
        + Hash
        + fmt::Display
        + fmt::Debug
        + From<String>
        + AsRef<str>
        + Send
        + Sync
        + 'static;

    const KIND: EntityKind;

    fn id(&self) -> &Self::Id;

    /// Built-in dataset used when neither the backend nor the local store
    /// has anything to offer.
    fn defaults(_now: DateTime<Utc>) -> Vec<Self> {
        Vec::new()
    }
}

/// Body of a create call.
pub trait Draft: Serialize + Send + Sync {
    type Record: Record;

    /// Fails with the first missing required field.
    fn validate(&self) -> Result<()>;

    /// Text mixed into the locally generated id.
    fn id_seed(&self) -> String;

    /// JSON body sent to the backend.
    fn to_body(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Synthesizes the record the backend would have returned.
    fn into_local(self, id: <Self::Record as Record>::Id, now: DateTime<Utc>) -> Self::Record;
}

/// Body of an update call.
pub trait Patch: Serialize + Send + Sync {
    type Record: Record;

    fn to_body(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Replays the update on a local copy.
    fn apply_to(&self, record: &mut Self::Record, now: DateTime<Utc>);
}

/// Rewrites a server document so its identifier lives in `id`.
///
/// List endpoints return raw documents keyed by `_id`; single-record
/// responses already carry `id`. When both are present `_id` wins.
pub fn normalize_id(value: &mut Value) {
    let Some(obj) = value.as_object_mut() else {
        return;
    };
    obj.remove("__v");
    if let Some(raw) = obj.remove("_id") {
        let id = match raw {
            Value::String(s) => s,
            Value::Object(ref inner) => match inner.get("$oid") {
                Some(Value::String(s)) => s.clone(),
                _ => raw.to_string(),
            },
            other => other.to_string(),
        };
        obj.insert("id".to_string(), Value::String(id));
    }
}

/// Reads an explicit `null` as the field's default. Pair with
/// `#[serde(default)]` so a missing field behaves the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
