// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;
use crate::normalize_id;
use serde_json::json;

fn member(id: &str, email: &str) -> Member {
    Member::new(UserId::new(id), format!("Student {}", id), email)
}

fn empty_club() -> Club {
    ClubDraft {
        name: "Coding Club".into(),
        ..Default::default()
    }
    .into_local(ClubId::new("c1"), Utc::now())
}

#[test]
fn add_member_appends_once() {
    let mut club = empty_club();
    assert!(club.add_member(member("s1", "s1@example.edu")));
    assert!(!club.add_member(member("s1", "s1@example.edu")));
    assert_eq!(club.members.len(), 1);
}

#[test]
fn add_member_guards_on_email() {
    let mut club = empty_club();
    club.add_member(member("s1", "same@example.edu"));
    assert!(!club.add_member(member("s2", "same@example.edu")));
    assert_eq!(club.members.len(), 1);
}

#[test]
fn add_member_keeps_insertion_order() {
    let mut club = empty_club();
    club.add_member(member("s2", "b@example.edu"));
    club.add_member(member("s1", "a@example.edu"));
    let ids: Vec<_> = club.members.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["s2", "s1"]);
}

#[test]
fn draft_requires_name() {
    let draft = ClubDraft::default();
    assert!(matches!(
        draft.validate(),
        Err(Error::FieldRequired { field: "name" })
    ));
}

#[test]
fn draft_body_carries_empty_members() {
    let draft = ClubDraft {
        name: "Robotics Club".into(),
        department: "CSE".into(),
        activities: vec!["Arduino Projects".into()],
        ..Default::default()
    };
    let body = draft.to_body().unwrap();
    assert_eq!(body["members"], json!([]));
    assert_eq!(body["name"], "Robotics Club");
    assert_eq!(body["activities"], json!(["Arduino Projects"]));
}

#[test]
fn into_local_stamps_created_at_and_empty_members() {
    let now = Utc::now();
    let club = ClubDraft {
        name: "Chess Club".into(),
        ..Default::default()
    }
    .into_local(ClubId::new("club-1"), now);
    assert_eq!(club.id.as_str(), "club-1");
    assert_eq!(club.created_at, Some(now));
    assert!(club.members.is_empty());
}

#[test]
fn patch_replaces_only_present_fields() {
    let mut club = empty_club();
    club.description = "old".into();
    let patch = ClubPatch {
        name: Some("Coders".into()),
        activities: Some(vec!["Workshops".into()]),
        ..Default::default()
    };
    patch.apply_to(&mut club, Utc::now());
    assert_eq!(club.name, "Coders");
    assert_eq!(club.activities, vec!["Workshops".to_string()]);
    assert_eq!(club.description, "old");
}

#[test]
fn patch_body_omits_absent_fields() {
    let patch = ClubPatch {
        description: Some("new".into()),
        ..Default::default()
    };
    assert_eq!(patch.to_body().unwrap(), json!({"description": "new"}));
}

#[test]
fn club_parses_server_document() {
    let mut doc = json!({
        "_id": "65f1",
        "name": "Coding Club",
        "description": "Learn programming",
        "facultyId": "f1",
        "facultyName": "Srushti",
        "department": "CSE",
        "activities": ["Hackathons"],
        "members": [{"id": "s1", "name": "Asha", "email": "asha@example.edu", "_id": "sub"}],
        "createdAt": "2025-01-15T10:00:00.000Z",
        "__v": 0
    });
    normalize_id(&mut doc);
    let club: Club = serde_json::from_value(doc).unwrap();
    assert_eq!(club.id.as_str(), "65f1");
    assert_eq!(club.faculty_id, Some(UserId::new("f1")));
    assert_eq!(club.members.len(), 1);
    assert!(club.created_at.is_some());
}

#[test]
fn patch_members_keep_first_of_each_id_or_email() {
    let mut club = empty_club();
    let patch = ClubPatch {
        members: Some(vec![
            member("s1", "asha@example.edu"),
            member("s1", "asha@example.edu"),
            member("s2", "asha@example.edu"),
            member("s3", "ravi@example.edu"),
        ]),
        ..Default::default()
    };
    patch.apply_to(&mut club, Utc::now());
    let ids: Vec<_> = club.members.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s3"]);
}

#[test]
fn club_reads_null_optional_fields_as_empty() {
    let club: Club = serde_json::from_value(json!({
        "id": "c2",
        "name": "Beta",
        "description": null,
        "department": null,
        "activities": null,
        "members": null
    }))
    .unwrap();
    assert!(club.description.is_empty());
    assert!(club.department.is_empty());
    assert!(club.activities.is_empty());
    assert!(club.members.is_empty());
}
