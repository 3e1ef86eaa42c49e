// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in default dataset shown when the backend is unreachable and
//! nothing has been cached yet.

use chrono::{DateTime, Utc};

use crate::club::Club;
use crate::event::Event;
use crate::id::{ClubId, EventId, UserId};
use crate::status::ApprovalStatus;

pub fn clubs() -> Vec<Club> {
    vec![
        Club {
            id: ClubId::new("1"),
            name: "Coding Club".to_string(),
            description: "Learn programming and build amazing projects".to_string(),
            faculty_id: Some(UserId::new("faculty1")),
            faculty_name: Some("Srushti".to_string()),
            department: "CSE".to_string(),
            activities: vec![
                "Hackathons".to_string(),
                "Workshops".to_string(),
                "Code Reviews".to_string(),
            ],
            members: Vec::new(),
            created_at: None,
        },
        Club {
            id: ClubId::new("2"),
            name: "Robotics Club".to_string(),
            description: "Design and build robots for competitions".to_string(),
            faculty_id: Some(UserId::new("faculty2")),
            faculty_name: Some("Srushti".to_string()),
            department: "CSE".to_string(),
            activities: vec![
                "Robot Building".to_string(),
                "Competitions".to_string(),
                "Arduino Projects".to_string(),
            ],
            members: Vec::new(),
            created_at: None,
        },
    ]
}

/// The seed event is dated at the moment it is seeded.
pub fn events(now: DateTime<Utc>) -> Vec<Event> {
    vec![Event {
        id: EventId::new("101"),
        club_id: ClubId::new("1"),
        title: "Treasure Hunt".to_string(),
        description: "A fun and challenging treasure hunt event for all students.".to_string(),
        date: Some(now),
        status: ApprovalStatus::Approved,
        participants: Vec::new(),
        faculty_id: None,
        faculty_name: None,
        created_at: Some(now),
    }]
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
