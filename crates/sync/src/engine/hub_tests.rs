// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use yare::parameterized;

use super::collection::{Delivery, Freshness};
use super::hub::Hub;
use crate::config::WritePolicy;
use crate::error::Error;
use crate::poller::Poller;
use crate::remote::Method;
use crate::session::Session;
use crate::store::MemoryStore;
use crate::test_helpers::{faculty, hod, list_body, record_body, student, MockTransport};
use clubsync_core::{
    ApprovalStatus, ClubDraft, ClubId, ClubPatch, EntityKind, EventId, EventInput, Member, Role,
    User,
};

fn hub(transport: &MockTransport, user: Option<User>, policy: WritePolicy) -> Hub {
    let session = Session::anonymous();
    if let Some(user) = user {
        session.sign_in(user, "tok".into()).unwrap();
    }
    Hub::new(
        Arc::new(transport.clone()),
        Arc::new(MemoryStore::new()),
        session,
        policy,
    )
}

fn event_input(title: &str) -> EventInput {
    EventInput {
        club_id: ClubId::new("1"),
        title: title.to_string(),
        ..EventInput::default()
    }
}

fn members_named(hub: &Hub, club: &str, student: &User) -> usize {
    hub.club(&ClubId::new(club))
        .unwrap()
        .members
        .iter()
        .filter(|m| m.id == student.id)
        .count()
}

#[tokio::test]
async fn approving_twice_adds_member_once() {
    let transport = MockTransport::offline();
    let hub = hub(&transport, Some(student()), WritePolicy::Silent);
    hub.refresh_all().await;

    let request = hub.request_join(&ClubId::new("1")).await.unwrap().value;
    assert_eq!(request.status, ApprovalStatus::Pending);

    hub.update_join_request(&request.id, ApprovalStatus::Approved)
        .await
        .unwrap();
    hub.update_join_request(&request.id, ApprovalStatus::Approved)
        .await
        .unwrap();

    assert_eq!(members_named(&hub, "1", &student()), 1);
    let stored = hub.join_requests();
    assert_eq!(stored[0].status, ApprovalStatus::Approved);
    assert!(stored[0].updated_at.is_some());
}

#[tokio::test]
async fn member_with_same_email_is_not_duplicated() {
    let transport = MockTransport::offline();
    let mut same_email = student();
    same_email.id = "u-other".into();
    let hub = hub(&transport, Some(same_email.clone()), WritePolicy::Silent);
    hub.refresh_all().await;

    let first = hub.request_join(&ClubId::new("1")).await.unwrap().value;
    hub.session().sign_in(student(), "tok".into()).unwrap();
    let second = hub.request_join(&ClubId::new("1")).await.unwrap().value;

    hub.update_join_request(&first.id, ApprovalStatus::Approved)
        .await
        .unwrap();
    hub.update_join_request(&second.id, ApprovalStatus::Approved)
        .await
        .unwrap();

    let members = hub.club(&ClubId::new("1")).unwrap().members;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, same_email.id);
}

#[tokio::test]
async fn rejection_does_not_add_member() {
    let transport = MockTransport::offline();
    let hub = hub(&transport, Some(student()), WritePolicy::Silent);
    hub.refresh_all().await;

    let request = hub.request_join(&ClubId::new("1")).await.unwrap().value;
    hub.update_join_request(&request.id, ApprovalStatus::Rejected)
        .await
        .unwrap();

    assert_eq!(members_named(&hub, "1", &student()), 0);
}

#[tokio::test]
async fn approval_online_takes_members_from_backend() {
    let transport = MockTransport::new();
    let hub = hub(&transport, Some(faculty()), WritePolicy::Silent);
    transport.respond(
        Method::Put,
        "/api/join-requests/jr-1",
        record_body(
            EntityKind::JoinRequest,
            json!({
                "_id": "jr-1",
                "clubId": "c-1",
                "studentId": "u-student",
                "studentName": "Asha",
                "studentEmail": "asha@example.edu",
                "status": "approved"
            }),
        ),
    );
    transport.respond(
        Method::Get,
        "/api/clubs",
        list_body(
            EntityKind::Club,
            vec![json!({
                "_id": "c-1",
                "name": "Chess",
                "members": [{"id": "u-student", "name": "Asha", "email": "asha@example.edu"}]
            })],
        ),
    );

    let written = hub
        .update_join_request(&"jr-1".into(), ApprovalStatus::Approved)
        .await
        .unwrap();
    assert!(written.is_confirmed());
    assert_eq!(transport.count(Method::Get, "/api/clubs"), 1);
    assert_eq!(members_named(&hub, "c-1", &student()), 1);
    assert_eq!(hub.join_requests().len(), 1);
    assert_eq!(
        hub.club_of(&hub.join_requests()[0]).map(|c| c.name),
        Some("Chess".to_string())
    );
}

#[tokio::test]
async fn second_registration_is_a_conflict() {
    let transport = MockTransport::offline();
    let hub = hub(&transport, Some(student()), WritePolicy::Silent);
    hub.refresh_all().await;
    let event_id = EventId::new("101");

    let registration = hub.register_for_event(&event_id).await.unwrap().value;
    assert_eq!(hub.event(&event_id).unwrap().participants.len(), 1);
    assert_eq!(
        hub.event_of(&registration).map(|e| e.title),
        Some("Treasure Hunt".to_string())
    );

    let requests_before = transport.requests().len();
    let err = hub.register_for_event(&event_id).await.unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(transport.requests().len(), requests_before);
    assert_eq!(hub.event(&event_id).unwrap().participants.len(), 1);
    assert_eq!(hub.registrations().len(), 1);
}

#[tokio::test]
async fn confirmed_registration_adds_participant() {
    let transport = MockTransport::new();
    transport.respond(
        Method::Get,
        "/api/events",
        list_body(
            EntityKind::Event,
            vec![json!({"_id": "e-1", "clubId": "c-1", "title": "Quiz", "status": "approved"})],
        ),
    );
    transport.respond(
        Method::Post,
        "/api/registrations",
        record_body(
            EntityKind::Registration,
            json!({
                "_id": "r-1",
                "eventId": "e-1",
                "studentId": "u-student",
                "studentName": "Asha",
                "studentEmail": "asha@example.edu"
            }),
        ),
    );
    let hub = hub(&transport, Some(student()), WritePolicy::Silent);
    hub.refresh(EntityKind::Event).await;

    let written = hub.register_for_event(&EventId::new("e-1")).await.unwrap();
    assert!(written.is_confirmed());
    let event = hub.event(&EventId::new("e-1")).unwrap();
    assert_eq!(event.participants.len(), 1);
    assert_eq!(event.participants[0].email, "asha@example.edu");
}

#[parameterized(
    as_hod = { Some(Role::Hod), ApprovalStatus::Approved },
    as_faculty = { Some(Role::Faculty), ApprovalStatus::Pending },
    as_student = { Some(Role::Student), ApprovalStatus::Pending },
    signed_out = { None, ApprovalStatus::Pending },
)]
fn initial_event_status_follows_role(role: Option<Role>, expected: ApprovalStatus) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    runtime.block_on(async {
        let actor = role.map(|role| match role {
            Role::Hod => hod(),
            Role::Faculty => faculty(),
            Role::Student => student(),
        });
        let transport = MockTransport::offline();
        let hub = hub(&transport, actor.clone(), WritePolicy::Silent);

        let event = hub.create_event(event_input("Demo Day")).await.unwrap().value;
        assert_eq!(event.status, expected);
        assert_eq!(event.faculty_id, actor.map(|u| u.id));
    });
}

#[tokio::test]
async fn event_body_carries_actor_and_status() {
    let transport = MockTransport::new();
    let hub = hub(&transport, Some(hod()), WritePolicy::Silent);
    let _ = hub.create_event(event_input("Demo Day")).await;

    let body = transport.requests()[0].body.clone().unwrap();
    assert_eq!(body["status"], "approved");
    assert_eq!(body["facultyId"], "u-hod");
    assert_eq!(body["facultyName"], "Kiran");
    assert_eq!(body["participants"], json!([]));
}

#[tokio::test]
async fn silent_policy_reports_local_write_as_ok() {
    let transport = MockTransport::offline();
    let hub = hub(&transport, Some(faculty()), WritePolicy::Silent);

    let written = hub
        .create_club(ClubDraft {
            name: "Chess".into(),
            ..ClubDraft::default()
        })
        .await
        .unwrap();
    assert!(matches!(written.delivery, Delivery::LocalOnly(_)));
    assert!(hub.clubs().iter().any(|c| c.name == "Chess"));
}

#[tokio::test]
async fn surfaced_policy_applies_then_errors() {
    let transport = MockTransport::offline();
    let hub = hub(&transport, Some(faculty()), WritePolicy::Surfaced);

    let err = hub
        .create_club(ClubDraft {
            name: "Chess".into(),
            ..ClubDraft::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotDelivered { kind: EntityKind::Club, .. }));
    assert!(hub.clubs().iter().any(|c| c.name == "Chess"));
}

#[tokio::test]
async fn surfaced_approval_still_admits_member() {
    let transport = MockTransport::offline();
    let hub = hub(&transport, Some(student()), WritePolicy::Surfaced);
    hub.refresh_all().await;

    let err = hub.request_join(&ClubId::new("2")).await.unwrap_err();
    assert!(matches!(err, Error::NotDelivered { kind: EntityKind::JoinRequest, .. }));
    let request = hub.join_requests().remove(0);

    let err = hub
        .update_join_request(&request.id, ApprovalStatus::Approved)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotDelivered { .. }));
    assert_eq!(members_named(&hub, "2", &student()), 1);
}

#[tokio::test]
async fn writes_needing_an_actor_require_sign_in() {
    let transport = MockTransport::new();
    let hub = hub(&transport, None, WritePolicy::Silent);

    let err = hub.request_join(&ClubId::new("1")).await.unwrap_err();
    assert!(matches!(err, Error::NotSignedIn));
    let err = hub.register_for_event(&EventId::new("101")).await.unwrap_err();
    assert!(err.is_validation());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn event_without_title_is_rejected() {
    let transport = MockTransport::new();
    let hub = hub(&transport, Some(hod()), WritePolicy::Silent);

    let err = hub.create_event(event_input(" ")).await.unwrap_err();
    assert!(matches!(err, Error::FieldRequired { field: "title" }));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn refresh_all_collections_are_independent() {
    let transport = MockTransport::new();
    transport.respond(
        Method::Get,
        "/api/clubs",
        list_body(EntityKind::Club, vec![json!({"_id": "c-9", "name": "Debate"})]),
    );
    let hub = hub(&transport, None, WritePolicy::Silent);

    let results = hub.refresh_all().await;
    assert_eq!(
        results,
        [
            (EntityKind::Club, Freshness::Fresh),
            (EntityKind::Event, Freshness::Seeded),
            (EntityKind::JoinRequest, Freshness::Seeded),
            (EntityKind::Registration, Freshness::Seeded),
        ]
    );
    assert_eq!(hub.clubs().len(), 1);
    assert_eq!(hub.events().len(), 1);
}

#[tokio::test]
async fn events_of_filters_by_club() {
    let transport = MockTransport::offline();
    let hub = hub(&transport, Some(faculty()), WritePolicy::Silent);
    hub.refresh_all().await;
    hub.create_event(EventInput {
        club_id: ClubId::new("2"),
        title: "Bot Wars".into(),
        ..EventInput::default()
    })
    .await
    .unwrap();

    assert_eq!(hub.events_of(&ClubId::new("1")).len(), 1);
    assert_eq!(hub.events_of(&ClubId::new("2"))[0].title, "Bot Wars");
}

#[tokio::test]
async fn offline_roster_update_keeps_members_unique() {
    let transport = MockTransport::offline();
    let hub = hub(&transport, Some(faculty()), WritePolicy::Silent);
    let asha = student();
    let member = Member::new(asha.id.clone(), asha.name.clone(), asha.email.clone());

    let patch = ClubPatch {
        members: Some(vec![member.clone(), member]),
        ..ClubPatch::default()
    };
    hub.update_club(&ClubId::new("1"), patch).await.unwrap();

    assert_eq!(members_named(&hub, "1", &asha), 1);
}

#[tokio::test]
async fn reads_before_any_refresh_show_defaults() {
    let transport = MockTransport::offline();
    let hub = hub(&transport, None, WritePolicy::Silent);

    assert_eq!(hub.club(&ClubId::new("2")).map(|c| c.name).as_deref(), Some("Robotics Club"));
    assert_eq!(hub.clubs().len(), 2);
    assert_eq!(hub.events_of(&ClubId::new("1")).len(), 1);
    assert!(hub.join_requests().is_empty());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn poller_drives_hub_until_shutdown() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, "/api/clubs", list_body(EntityKind::Club, vec![]));
    let hub = Arc::new(hub(&transport, None, WritePolicy::Silent));
    let poller = Poller::new(hub.clone(), Duration::from_millis(20));

    poller.start();
    tokio::time::sleep(Duration::from_millis(70)).await;
    poller.shutdown().await;
    tokio::time::sleep(Duration::from_millis(10)).await;

    let polled = transport.count(Method::Get, "/api/clubs");
    assert!(polled >= 2, "polled = {polled}");
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(transport.count(Method::Get, "/api/clubs"), polled);
}
