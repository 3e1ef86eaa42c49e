// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! clubsync: client-side synchronization for club records.
//!
//! Presents one consistent in-memory view of the server-owned collections
//! while the backend comes and goes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Poller    │────►│     Hub     │────►│ SyncEngine  │ x4
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │               │       │
//!                            ▼               ▼       ▼
//!                     ┌─────────────┐  ┌─────────┐ ┌────────────┐
//!                     │   Session   │  │ Remote  │ │ LocalStore │
//!                     └─────────────┘  └─────────┘ └────────────┘
//! ```
//!
//! Reads that fail fall back to the last snapshot in the local store and
//! then to a built-in dataset. Writes that fail are applied locally so the
//! caller always observes an outcome.

pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod poller;
pub mod remote;
pub mod session;
pub mod store;

#[cfg(test)]
mod test_helpers;

pub use config::{Config, WritePolicy};
pub use engine::{Canonical, Delivery, Freshness, Hub, SyncEngine, Written};
pub use error::{Error, Result};
pub use poller::{Poller, PollerState, Refresh};
pub use remote::{
    AuthClient, HttpTransport, Method, NetworkError, RemoteCollection, SignupForm, Transport,
};
pub use session::Session;
pub use store::{LocalStore, MemoryStore, SqliteStore, StoreError};
