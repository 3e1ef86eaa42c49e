// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::record::Record;

#[test]
fn two_seed_clubs_without_members() {
    let clubs = clubs();
    assert_eq!(clubs.len(), 2);
    assert_eq!(clubs[0].name, "Coding Club");
    assert_eq!(clubs[1].name, "Robotics Club");
    assert!(clubs.iter().all(|c| c.members.is_empty()));
}

#[test]
fn one_approved_seed_event_for_first_club() {
    let now = Utc::now();
    let events = events(now);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].club_id, clubs()[0].id);
    assert_eq!(events[0].status, ApprovalStatus::Approved);
    assert_eq!(events[0].date, Some(now));
}

#[test]
fn record_defaults_use_seed_for_clubs_and_events_only() {
    let now = Utc::now();
    assert_eq!(Club::defaults(now).len(), 2);
    assert_eq!(Event::defaults(now).len(), 1);
    assert!(crate::JoinRequest::defaults(now).is_empty());
    assert!(crate::Registration::defaults(now).is_empty());
}
