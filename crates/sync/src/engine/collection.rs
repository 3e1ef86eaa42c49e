// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Refresh cycle and optimistic writes for one collection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tokio::sync::watch;

use clubsync_core::id::generate_unique_id;
use clubsync_core::{Draft, Patch, Record};

use super::canonical::{Canonical, Ticket};
use crate::error::{Error, Result};
use crate::remote::{NetworkError, RemoteCollection};
use crate::store::{load_json, save_json, LocalStore};

/// Where the data visible after a refresh came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Replaced from the backend.
    Fresh,
    /// Backend failed; the previous in-memory state was kept.
    Stale,
    /// Backend failed; loaded from the local store.
    Cached,
    /// Backend failed and nothing was stored; built-in defaults.
    Seeded,
}

impl Freshness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Freshness::Fresh => "fresh",
            Freshness::Stale => "stale",
            Freshness::Cached => "cached",
            Freshness::Seeded => "seeded",
        }
    }
}

/// Whether a write reached the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Confirmed,
    /// Applied to canonical state only. The next successful refresh
    /// replaces it with whatever the backend has.
    LocalOnly(NetworkError),
}

/// Outcome of a write.
#[derive(Debug, Clone, PartialEq)]
pub struct Written<T> {
    pub value: T,
    pub delivery: Delivery,
}

impl<T> Written<T> {
    pub fn confirmed(value: T) -> Self {
        Written {
            value,
            delivery: Delivery::Confirmed,
        }
    }

    pub fn local(value: T, reason: NetworkError) -> Self {
        Written {
            value,
            delivery: Delivery::LocalOnly(reason),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.delivery, Delivery::Confirmed)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Written<U> {
        Written {
            value: f(self.value),
            delivery: self.delivery,
        }
    }
}

/// Owns the canonical state of one collection.
///
/// The canonical lock is never held across a network call. Snapshots are
/// written to the local store under the lock so the store never goes
/// backwards relative to memory.
pub struct SyncEngine<R: Record> {
    remote: RemoteCollection<R>,
    store: Arc<dyn LocalStore>,
    canonical: Mutex<Canonical<R>>,
    tickets: AtomicU64,
    revision: watch::Sender<u64>,
}

impl<R: Record> SyncEngine<R> {
    pub fn new(remote: RemoteCollection<R>, store: Arc<dyn LocalStore>) -> Self {
        let (revision, _) = watch::channel(0);
        SyncEngine {
            remote,
            store,
            canonical: Mutex::new(Canonical::new()),
            tickets: AtomicU64::new(0),
            revision,
        }
    }

    /// Pulls the whole collection and replaces canonical state with it.
    ///
    /// Never fails: on a network error the previous state is kept, or the
    /// local snapshot is loaded, or the built-in defaults are used.
    pub async fn refresh(&self) -> Freshness {
        let kind = R::KIND;
        match self.remote.list().await {
            Ok(records) => {
                let count = records.len();
                {
                    let mut canonical = self.lock();
                    canonical.replace_all(records);
                    self.persist(&canonical);
                }
                self.bump();
                tracing::debug!(%kind, count, "refreshed from backend");
                Freshness::Fresh
            }
            Err(e) => {
                let freshness = self.hydrate().unwrap_or(Freshness::Stale);
                tracing::debug!(%kind, error = %e, freshness = freshness.as_str(), "refresh failed");
                freshness
            }
        }
    }

    /// Fills an unpopulated mapping from the local store, or from the
    /// defaults when the store has nothing. Returns `None` if the mapping
    /// was already populated.
    ///
    /// Defaults are not written back to the store.
    pub fn hydrate(&self) -> Option<Freshness> {
        if self.lock().is_populated() {
            return None;
        }
        let cached: Option<Vec<R>> = load_json(self.store.as_ref(), R::KIND.store_key());

        let freshness = {
            let mut canonical = self.lock();
            if canonical.is_populated() {
                return None;
            }
            match cached {
                Some(records) => {
                    canonical.replace_all(records);
                    Freshness::Cached
                }
                None => {
                    canonical.replace_all(R::defaults(Utc::now()));
                    Freshness::Seeded
                }
            }
        };
        self.bump();
        Some(freshness)
    }

    /// Creates a record on the backend, or locally if the backend fails.
    ///
    /// A locally created record gets a generated id and timestamps.
    pub async fn create<D>(&self, draft: D) -> Result<Written<R>>
    where
        D: Draft<Record = R>,
    {
        draft.validate()?;
        self.hydrate();
        let ticket = self.next_ticket();

        match self.remote.create(&draft).await {
            Ok(record) => {
                self.apply(record.clone(), ticket);
                Ok(Written::confirmed(record))
            }
            Err(e) => {
                tracing::warn!(kind = %R::KIND, error = %e, "create did not reach the backend, applying locally");
                let now = Utc::now();
                let seed = draft.id_seed();
                let record = {
                    let mut canonical = self.lock();
                    let id = generate_unique_id(R::KIND.id_prefix(), &seed, &now, |candidate| {
                        canonical.contains(&R::Id::from(candidate.to_string()))
                    });
                    let record = draft.into_local(R::Id::from(id), now);
                    canonical.upsert(record.clone());
                    canonical.stamp(record.id(), ticket);
                    self.persist(&canonical);
                    record
                };
                self.bump();
                Ok(Written::local(record, e))
            }
        }
    }

    /// Updates a record on the backend, or replays the patch locally if the
    /// backend fails.
    ///
    /// A confirmed record that was not known locally is inserted. A local
    /// replay needs the record to exist.
    pub async fn update<P>(&self, id: &R::Id, patch: P) -> Result<Written<R>>
    where
        P: Patch<Record = R>,
    {
        self.hydrate();
        let ticket = self.next_ticket();

        match self.remote.update(id, &patch).await {
            Ok(record) => {
                self.apply(record.clone(), ticket);
                Ok(Written::confirmed(record))
            }
            Err(e) => {
                tracing::warn!(kind = %R::KIND, %id, error = %e, "update did not reach the backend, applying locally");
                let now = Utc::now();
                let record = {
                    let mut canonical = self.lock();
                    if !canonical.accepts(id, ticket) {
                        tracing::debug!(kind = %R::KIND, %id, ticket, "newer write already applied");
                        canonical.get(id).cloned()
                    } else if canonical.update_with(id, |record| patch.apply_to(record, now)) {
                        canonical.stamp(id, ticket);
                        self.persist(&canonical);
                        canonical.get(id).cloned()
                    } else {
                        None
                    }
                };
                match record {
                    Some(record) => {
                        self.bump();
                        Ok(Written::local(record, e))
                    }
                    None => Err(Error::NotFound {
                        kind: R::KIND,
                        id: id.to_string(),
                    }),
                }
            }
        }
    }

    /// Deletes a record on the backend, and locally either way.
    pub async fn delete(&self, id: &R::Id) -> Result<Written<()>> {
        self.hydrate();
        let ticket = self.next_ticket();
        let result = self.remote.delete(id).await;

        {
            let mut canonical = self.lock();
            if canonical.accepts(id, ticket) {
                canonical.remove(id);
                canonical.stamp(id, ticket);
                self.persist(&canonical);
            }
        }
        self.bump();

        match result {
            Ok(()) => Ok(Written::confirmed(())),
            Err(e) => {
                tracing::warn!(kind = %R::KIND, %id, error = %e, "delete did not reach the backend, applied locally");
                Ok(Written::local((), e))
            }
        }
    }

    /// Applies a local-only change to one record, for side effects that
    /// follow a write to another collection. `f` returns whether it changed
    /// anything; only then is the snapshot persisted.
    pub fn modify_local(&self, id: &R::Id, f: impl FnOnce(&mut R) -> bool) -> bool {
        self.hydrate();
        let changed = {
            let mut canonical = self.lock();
            let mut changed = false;
            canonical.update_with(id, |record| changed = f(record));
            if changed {
                self.persist(&canonical);
            }
            changed
        };
        if changed {
            self.bump();
        }
        changed
    }

    pub fn snapshot(&self) -> Vec<R> {
        self.lock().snapshot()
    }

    pub fn get(&self, id: &R::Id) -> Option<R> {
        self.lock().get(id).cloned()
    }

    pub fn is_populated(&self) -> bool {
        self.lock().is_populated()
    }

    /// Revision counter, bumped after every change to canonical state.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    fn apply(&self, record: R, ticket: Ticket) {
        {
            let mut canonical = self.lock();
            if !canonical.accepts(record.id(), ticket) {
                tracing::debug!(kind = %R::KIND, id = %record.id(), ticket, "discarding out-of-order response");
                return;
            }
            canonical.stamp(record.id(), ticket);
            canonical.upsert(record);
            self.persist(&canonical);
        }
        self.bump();
    }

    fn persist(&self, canonical: &Canonical<R>) {
        let records: Vec<&R> = canonical.iter().collect();
        if let Err(e) = save_json(self.store.as_ref(), R::KIND.store_key(), &records) {
            tracing::warn!(kind = %R::KIND, error = %e, "failed to persist snapshot");
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }

    fn next_ticket(&self) -> Ticket {
        self.tickets.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn lock(&self) -> MutexGuard<'_, Canonical<R>> {
        self.canonical.lock().unwrap_or_else(|e| e.into_inner())
    }
}
