// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Account identity as returned by the auth endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::id::UserId;
use crate::record::null_as_default;

/// Role of an account. Decides dashboards and event approval defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Faculty,
    /// Head of department.
    Hod,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Hod => "hod",
        }
    }

    /// Elevated roles skip the approval queue for the events they create.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Role::Hod)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "faculty" => Ok(Role::Faculty),
            "hod" => Ok(Role::Hod),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

/// The signed-in actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
