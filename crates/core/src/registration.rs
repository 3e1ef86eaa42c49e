// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Student sign-ups for events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::club::Member;
use crate::error::{require, Error, Result};
use crate::id::{EventId, RegistrationId, UserId};
use crate::record::{Draft, EntityKind, Record};
use crate::user::User;

/// At most one registration exists per (event, student) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub student_id: UserId,
    pub student_name: String,
    pub student_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Registration {
    pub fn participant(&self) -> Member {
        Member::new(
            self.student_id.clone(),
            self.student_name.clone(),
            self.student_email.clone(),
        )
    }

    pub fn matches(&self, event_id: &EventId, student_id: &UserId) -> bool {
        &self.event_id == event_id && &self.student_id == student_id
    }
}

impl Record for Registration {
    type Id = RegistrationId;
    const KIND: EntityKind = EntityKind::Registration;

    fn id(&self) -> &RegistrationId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub event_id: EventId,
    pub student_id: UserId,
    pub student_name: String,
    pub student_email: String,
}

impl RegistrationDraft {
    pub fn new(event_id: EventId, student: &User) -> Self {
        RegistrationDraft {
            event_id,
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            student_email: student.email.clone(),
        }
    }
}

impl Draft for RegistrationDraft {
    type Record = Registration;

    fn validate(&self) -> Result<()> {
        if self.event_id.is_empty() {
            return Err(Error::FieldRequired { field: "event" });
        }
        if self.student_id.is_empty() {
            return Err(Error::FieldRequired { field: "student id" });
        }
        require("student name", &self.student_name)?;
        require("student email", &self.student_email)
    }

    fn id_seed(&self) -> String {
        format!("{}{}", self.event_id, self.student_id)
    }

    fn into_local(self, id: RegistrationId, now: DateTime<Utc>) -> Registration {
        Registration {
            id,
            event_id: self.event_id,
            student_id: self.student_id,
            student_name: self.student_name,
            student_email: self.student_email,
            created_at: Some(now),
        }
    }
}

#[cfg(test)]
#[path = "registration_tests.rs"]
mod tests;
