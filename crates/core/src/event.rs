// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Club events and their participant lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::club::Member;
use crate::error::{require, Error, Result};
use crate::id::{ClubId, EventId, UserId};
use crate::record::{null_as_default, Draft, EntityKind, Patch, Record};
use crate::seed;
use crate::status::ApprovalStatus;
use crate::user::User;

/// Event participants share the member shape.
pub type Participant = Member;

/// An event hosted by a club, subject to approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub club_id: ClubId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ApprovalStatus,
    /// Unique by participant id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<Participant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Event {
    pub fn has_participant(&self, id: &UserId) -> bool {
        self.participants.iter().any(|p| &p.id == id)
    }

    /// Appends `participant` unless already listed. Returns whether it was added.
    pub fn add_participant(&mut self, participant: Participant) -> bool {
        if self.has_participant(&participant.id) {
            return false;
        }
        self.participants.push(participant);
        true
    }
}

impl Record for Event {
    type Id = EventId;
    const KIND: EntityKind = EntityKind::Event;

    fn id(&self) -> &EventId {
        &self.id
    }

    fn defaults(now: DateTime<Utc>) -> Vec<Self> {
        seed::events(now)
    }
}

/// Event fields entered on the create form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    pub club_id: ClubId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Create body for an event: the form input plus actor-derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub club_id: ClubId,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    pub status: ApprovalStatus,
    pub participants: Vec<Participant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_name: Option<String>,
}

impl EventDraft {
    /// Builds the create body; `status` is decided by the caller.
    pub fn new(input: EventInput, status: ApprovalStatus, actor: Option<&User>) -> Self {
        EventDraft {
            club_id: input.club_id,
            title: input.title,
            description: input.description,
            date: input.date,
            status,
            participants: Vec::new(),
            faculty_id: actor.map(|u| u.id.clone()),
            faculty_name: actor.map(|u| u.name.clone()),
        }
    }
}

impl Draft for EventDraft {
    type Record = Event;

    fn validate(&self) -> Result<()> {
        if self.club_id.is_empty() {
            return Err(Error::FieldRequired { field: "club" });
        }
        require("title", &self.title)
    }

    fn id_seed(&self) -> String {
        format!("{}{}", self.club_id, self.title)
    }

    fn into_local(self, id: EventId, now: DateTime<Utc>) -> Event {
        Event {
            id,
            club_id: self.club_id,
            title: self.title,
            description: self.description,
            date: self.date,
            status: self.status,
            participants: Vec::new(),
            faculty_id: self.faculty_id,
            faculty_name: self.faculty_name,
            created_at: Some(now),
        }
    }
}

/// Whole-field replacement of event attributes. Absent fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApprovalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<Participant>>,
}

impl Patch for EventPatch {
    type Record = Event;

    fn apply_to(&self, event: &mut Event, _now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(date) = self.date {
            event.date = Some(date);
        }
        if let Some(status) = self.status {
            event.status = status;
        }
        if let Some(participants) = &self.participants {
            event.participants.clear();
            for participant in participants {
                event.add_participant(participant.clone());
            }
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
