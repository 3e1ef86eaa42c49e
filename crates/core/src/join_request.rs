// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Student requests to join a club.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::club::Member;
use crate::error::{require, Error, Result};
use crate::id::{ClubId, JoinRequestId, UserId};
use crate::record::{null_as_default, Draft, EntityKind, Patch, Record};
use crate::status::ApprovalStatus;
use crate::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub id: JoinRequestId,
    pub club_id: ClubId,
    pub student_id: UserId,
    pub student_name: String,
    pub student_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ApprovalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Set only when the status changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl JoinRequest {
    /// The roster entry this request turns into once approved.
    pub fn member(&self) -> Member {
        Member::new(
            self.student_id.clone(),
            self.student_name.clone(),
            self.student_email.clone(),
        )
    }
}

impl Record for JoinRequest {
    type Id = JoinRequestId;
    const KIND: EntityKind = EntityKind::JoinRequest;

    fn id(&self) -> &JoinRequestId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestDraft {
    pub club_id: ClubId,
    pub student_id: UserId,
    pub student_name: String,
    pub student_email: String,
}

impl JoinRequestDraft {
    pub fn new(club_id: ClubId, student: &User) -> Self {
        JoinRequestDraft {
            club_id,
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            student_email: student.email.clone(),
        }
    }
}

impl Draft for JoinRequestDraft {
    type Record = JoinRequest;

    fn validate(&self) -> Result<()> {
        if self.club_id.is_empty() {
            return Err(Error::FieldRequired { field: "club" });
        }
        if self.student_id.is_empty() {
            return Err(Error::FieldRequired { field: "student id" });
        }
        require("student name", &self.student_name)?;
        require("student email", &self.student_email)
    }

    fn id_seed(&self) -> String {
        format!("{}{}", self.club_id, self.student_id)
    }

    fn into_local(self, id: JoinRequestId, now: DateTime<Utc>) -> JoinRequest {
        JoinRequest {
            id,
            club_id: self.club_id,
            student_id: self.student_id,
            student_name: self.student_name,
            student_email: self.student_email,
            status: ApprovalStatus::Pending,
            created_at: Some(now),
            updated_at: None,
        }
    }
}

/// The only mutable part of a join request is its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequestPatch {
    pub status: ApprovalStatus,
}

impl Patch for JoinRequestPatch {
    type Record = JoinRequest;

    fn apply_to(&self, request: &mut JoinRequest, now: DateTime<Utc>) {
        request.status = self.status;
        request.updated_at = Some(now);
    }
}

#[cfg(test)]
#[path = "join_request_tests.rs"]
mod tests;
