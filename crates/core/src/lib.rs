// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! clubsync-core: Shared record types for the club sync layer.
//!
//! This crate provides the entity records, typed identifiers, drafts and
//! patches, the REST envelope format, and the built-in default dataset used
//! by the `clubsync` sync layer and the `clubsync` CLI host.

pub mod club;
pub mod envelope;
pub mod error;
pub mod event;
pub mod id;
pub mod join_request;
pub mod record;
pub mod registration;
pub mod seed;
pub mod status;
pub mod user;

pub use club::{Club, ClubDraft, ClubPatch, Member};
pub use envelope::{Envelope, EnvelopeError};
pub use error::{Error, Result};
pub use event::{Event, EventDraft, EventInput, EventPatch, Participant};
pub use id::{ClubId, EventId, JoinRequestId, RegistrationId, UserId};
pub use join_request::{JoinRequest, JoinRequestDraft, JoinRequestPatch};
pub use record::{normalize_id, Draft, EntityKind, Patch, Record};
pub use registration::{Registration, RegistrationDraft};
pub use status::ApprovalStatus;
pub use user::{Role, User};
