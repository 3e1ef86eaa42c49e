// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Insertion-ordered id to record mapping with per-record write tickets.

use std::collections::HashMap;

use clubsync_core::Record;

/// Monotonic sequence number drawn when a mutation is issued.
pub type Ticket = u64;

/// The in-memory view of one collection.
///
/// Records keep the order in which they were first inserted. Ids are
/// unique. Each id remembers the ticket of the last mutation applied to
/// it, so a response that arrives after a newer one for the same record
/// can be discarded.
#[derive(Debug, Clone)]
pub struct Canonical<R: Record> {
    records: Vec<R>,
    index: HashMap<R::Id, usize>,
    applied: HashMap<R::Id, Ticket>,
    populated: bool,
}

impl<R: Record> Default for Canonical<R> {
    fn default() -> Self {
        Canonical {
            records: Vec::new(),
            index: HashMap::new(),
            applied: HashMap::new(),
            populated: false,
        }
    }
}

impl<R: Record> Canonical<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once any source (backend, local store, defaults) has filled
    /// the mapping, even if it filled it with nothing.
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }

    pub fn snapshot(&self) -> Vec<R> {
        self.records.clone()
    }

    /// Replaces every record. Later duplicates of an id overwrite earlier
    /// ones in place. Write tickets are forgotten.
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records.clear();
        self.index.clear();
        self.applied.clear();
        for record in records {
            self.insert(record);
        }
        self.populated = true;
    }

    /// Inserts or replaces a record by id. Returns true if it was new.
    pub fn upsert(&mut self, record: R) -> bool {
        self.populated = true;
        self.insert(record)
    }

    pub fn remove(&mut self, id: &R::Id) -> Option<R> {
        let position = self.index.remove(id)?;
        let removed = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Runs `f` on the record with `id`. Returns false if there is none.
    pub fn update_with(&mut self, id: &R::Id, f: impl FnOnce(&mut R)) -> bool {
        match self.index.get(id) {
            Some(&i) => {
                f(&mut self.records[i]);
                true
            }
            None => false,
        }
    }

    /// True unless a mutation with a newer ticket was already applied to `id`.
    pub fn accepts(&self, id: &R::Id, ticket: Ticket) -> bool {
        self.applied.get(id).is_none_or(|&last| ticket >= last)
    }

    /// Records that the mutation holding `ticket` was applied to `id`.
    pub fn stamp(&mut self, id: &R::Id, ticket: Ticket) {
        let entry = self.applied.entry(id.clone()).or_insert(ticket);
        if ticket > *entry {
            *entry = ticket;
        }
    }

    fn insert(&mut self, record: R) -> bool {
        match self.index.get(record.id()) {
            Some(&i) => {
                self.records[i] = record;
                false
            }
            None => {
                self.index.insert(record.id().clone(), self.records.len());
                self.records.push(record);
                true
            }
        }
    }
}
