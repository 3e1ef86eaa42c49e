// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical state and the rules that keep it defined.
//!
//! One [`SyncEngine`] per entity type owns the [`Canonical`] mapping that
//! consumers read. The [`Hub`] holds all four engines and runs the
//! cross-collection side effects (approval adds a club member,
//! registration adds an event participant).

mod canonical;
mod collection;
mod hub;

pub use canonical::{Canonical, Ticket};
pub use collection::{Delivery, Freshness, SyncEngine, Written};
pub use hub::Hub;



#[cfg(test)]
mod hub_tests;
