// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Approval status shared by events and join requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Review state of an event or a join request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Waiting for a faculty member or HOD to review. Initial state.
    #[default]
    Pending,
    /// Accepted by a reviewer.
    Approved,
    /// Declined by a reviewer.
    Rejected,
}

impl ApprovalStatus {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    /// Returns true once a reviewer has made a decision.
    pub fn is_decided(&self) -> bool {
        !matches!(self, ApprovalStatus::Pending)
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
