// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Clubs and their member lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{require, Result};
use crate::id::{ClubId, UserId};
use crate::record::{null_as_default, Draft, EntityKind, Patch, Record};
use crate::seed;
use crate::user::User;

/// A person listed on a club roster or an event's participant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl Member {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Member {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<&User> for Member {
    fn from(user: &User) -> Self {
        Member::new(user.id.clone(), user.name.clone(), user.email.clone())
    }
}

/// A student club supervised by a faculty member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities: Vec<String>,
    /// Insertion-ordered roster, unique by member id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<Member>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Club {
    /// Returns true if a member matches by id or by email.
    pub fn has_member(&self, id: &UserId, email: &str) -> bool {
        self.members
            .iter()
            .any(|m| &m.id == id || (!email.is_empty() && m.email == email))
    }

    /// Appends `member` unless already on the roster. Returns whether it was added.
    pub fn add_member(&mut self, member: Member) -> bool {
        if self.has_member(&member.id, &member.email) {
            return false;
        }
        self.members.push(member);
        true
    }
}

impl Record for Club {
    type Id = ClubId;
    const KIND: EntityKind = EntityKind::Club;

    fn id(&self) -> &ClubId {
        &self.id
    }

    fn defaults(_now: DateTime<Utc>) -> Vec<Self> {
        seed::clubs()
    }
}

/// Fields of a new club, as entered by faculty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_name: Option<String>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub activities: Vec<String>,
}

impl Draft for ClubDraft {
    type Record = Club;

    fn validate(&self) -> Result<()> {
        require("name", &self.name)
    }

    fn id_seed(&self) -> String {
        self.name.clone()
    }

    fn to_body(&self) -> Result<Value> {
        let mut body = serde_json::to_value(self)?;
        if let Some(obj) = body.as_object_mut() {
            obj.insert("members".to_string(), Value::Array(Vec::new()));
        }
        Ok(body)
    }

    fn into_local(self, id: ClubId, now: DateTime<Utc>) -> Club {
        Club {
            id,
            name: self.name,
            description: self.description,
            faculty_id: self.faculty_id,
            faculty_name: self.faculty_name,
            department: self.department,
            activities: self.activities,
            members: Vec::new(),
            created_at: Some(now),
        }
    }
}

/// Whole-field replacement of club attributes. Absent fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
}

impl Patch for ClubPatch {
    type Record = Club;

    fn apply_to(&self, club: &mut Club, _now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            club.name = name.clone();
        }
        if let Some(description) = &self.description {
            club.description = description.clone();
        }
        if let Some(faculty_id) = &self.faculty_id {
            club.faculty_id = Some(faculty_id.clone());
        }
        if let Some(faculty_name) = &self.faculty_name {
            club.faculty_name = Some(faculty_name.clone());
        }
        if let Some(department) = &self.department {
            club.department = department.clone();
        }
        if let Some(activities) = &self.activities {
            club.activities = activities.clone();
        }
        if let Some(members) = &self.members {
            // First occurrence wins; later entries sharing an id or email are dropped.
            club.members.clear();
            for member in members {
                club.add_member(member.clone());
            }
        }
    }
}

#[cfg(test)]
#[path = "club_tests.rs"]
mod tests;
