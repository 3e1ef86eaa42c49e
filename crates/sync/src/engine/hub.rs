// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! All four collections and the side effects that cross them.

use std::sync::Arc;

use tokio::sync::watch;

use clubsync_core::{
    ApprovalStatus, Club, ClubDraft, ClubId, ClubPatch, EntityKind, Event, EventDraft, EventId,
    EventInput, EventPatch, JoinRequest, JoinRequestDraft, JoinRequestId, JoinRequestPatch,
    Registration, RegistrationDraft, User,
};

use super::collection::{Delivery, Freshness, SyncEngine, Written};
use crate::config::WritePolicy;
use crate::error::{Error, Result};
use crate::remote::{RemoteCollection, Transport};
use crate::session::Session;
use crate::store::LocalStore;

/// Entry point for hosts. Construct once per process.
pub struct Hub {
    session: Session,
    policy: WritePolicy,
    clubs: SyncEngine<Club>,
    events: SyncEngine<Event>,
    join_requests: SyncEngine<JoinRequest>,
    registrations: SyncEngine<Registration>,
}

impl Hub {
    pub fn new(
        transport: Arc<dyn Transport>,
        store: Arc<dyn LocalStore>,
        session: Session,
        policy: WritePolicy,
    ) -> Self {
        let clubs = SyncEngine::new(
            RemoteCollection::new(Arc::clone(&transport), session.clone()),
            Arc::clone(&store),
        );
        let events = SyncEngine::new(
            RemoteCollection::new(Arc::clone(&transport), session.clone()),
            Arc::clone(&store),
        );
        let join_requests = SyncEngine::new(
            RemoteCollection::new(Arc::clone(&transport), session.clone()),
            Arc::clone(&store),
        );
        let registrations = SyncEngine::new(RemoteCollection::new(transport, session.clone()), store);

        Hub {
            session,
            policy,
            clubs,
            events,
            join_requests,
            registrations,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    /// Refreshes every collection concurrently. One collection failing
    /// does not affect the others.
    pub async fn refresh_all(&self) -> [(EntityKind, Freshness); 4] {
        let (clubs, events, join_requests, registrations) = tokio::join!(
            self.clubs.refresh(),
            self.events.refresh(),
            self.join_requests.refresh(),
            self.registrations.refresh(),
        );
        [
            (EntityKind::Club, clubs),
            (EntityKind::Event, events),
            (EntityKind::JoinRequest, join_requests),
            (EntityKind::Registration, registrations),
        ]
    }

    pub async fn refresh(&self, kind: EntityKind) -> Freshness {
        match kind {
            EntityKind::Club => self.clubs.refresh().await,
            EntityKind::Event => self.events.refresh().await,
            EntityKind::JoinRequest => self.join_requests.refresh().await,
            EntityKind::Registration => self.registrations.refresh().await,
        }
    }

    pub fn subscribe(&self, kind: EntityKind) -> watch::Receiver<u64> {
        match kind {
            EntityKind::Club => self.clubs.subscribe(),
            EntityKind::Event => self.events.subscribe(),
            EntityKind::JoinRequest => self.join_requests.subscribe(),
            EntityKind::Registration => self.registrations.subscribe(),
        }
    }

    // Reads hydrate first, so state is defined before the first refresh.

    pub fn clubs(&self) -> Vec<Club> {
        self.clubs.hydrate();
        self.clubs.snapshot()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.hydrate();
        self.events.snapshot()
    }

    pub fn join_requests(&self) -> Vec<JoinRequest> {
        self.join_requests.hydrate();
        self.join_requests.snapshot()
    }

    pub fn registrations(&self) -> Vec<Registration> {
        self.registrations.hydrate();
        self.registrations.snapshot()
    }

    pub fn club(&self, id: &ClubId) -> Option<Club> {
        self.clubs.hydrate();
        self.clubs.get(id)
    }

    pub fn event(&self, id: &EventId) -> Option<Event> {
        self.events.hydrate();
        self.events.get(id)
    }

    pub fn club_of(&self, request: &JoinRequest) -> Option<Club> {
        self.club(&request.club_id)
    }

    pub fn event_of(&self, registration: &Registration) -> Option<Event> {
        self.event(&registration.event_id)
    }

    /// Events of one club, in canonical order.
    pub fn events_of(&self, club_id: &ClubId) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| &e.club_id == club_id)
            .collect()
    }

    pub async fn create_club(&self, draft: ClubDraft) -> Result<Written<Club>> {
        let written = self.clubs.create(draft).await?;
        self.settle(EntityKind::Club, written, |c| c.id.to_string())
    }

    pub async fn update_club(&self, id: &ClubId, patch: ClubPatch) -> Result<Written<Club>> {
        let written = self.clubs.update(id, patch).await?;
        self.settle(EntityKind::Club, written, |c| c.id.to_string())
    }

    pub async fn delete_club(&self, id: &ClubId) -> Result<Written<()>> {
        let written = self.clubs.delete(id).await?;
        self.settle(EntityKind::Club, written, |_| id.to_string())
    }

    /// Creates an event as the signed-in actor. Elevated roles create it
    /// approved; everyone else, including an anonymous caller, pending.
    pub async fn create_event(&self, input: EventInput) -> Result<Written<Event>> {
        let actor = self.session.user();
        let status = match &actor {
            Some(user) if user.role.is_elevated() => ApprovalStatus::Approved,
            _ => ApprovalStatus::Pending,
        };
        let draft = EventDraft::new(input, status, actor.as_ref());
        let written = self.events.create(draft).await?;
        self.settle(EntityKind::Event, written, |e| e.id.to_string())
    }

    pub async fn update_event(&self, id: &EventId, patch: EventPatch) -> Result<Written<Event>> {
        let written = self.events.update(id, patch).await?;
        self.settle(EntityKind::Event, written, |e| e.id.to_string())
    }

    pub async fn delete_event(&self, id: &EventId) -> Result<Written<()>> {
        let written = self.events.delete(id).await?;
        self.settle(EntityKind::Event, written, |_| id.to_string())
    }

    pub async fn request_join(&self, club_id: &ClubId) -> Result<Written<JoinRequest>> {
        let student = self.actor()?;
        let draft = JoinRequestDraft::new(club_id.clone(), &student);
        let written = self.join_requests.create(draft).await?;
        self.settle(EntityKind::JoinRequest, written, |r| r.id.to_string())
    }

    /// Moves a join request to `status`. Approval then makes the student a
    /// member of the club: from the backend if a club refresh succeeds,
    /// otherwise by appending them locally unless already present.
    pub async fn update_join_request(
        &self,
        id: &JoinRequestId,
        status: ApprovalStatus,
    ) -> Result<Written<JoinRequest>> {
        let written = self
            .join_requests
            .update(id, JoinRequestPatch { status })
            .await?;
        if status == ApprovalStatus::Approved {
            self.admit_member(&written.value).await;
        }
        self.settle(EntityKind::JoinRequest, written, |r| r.id.to_string())
    }

    /// Registers the signed-in student for an event and adds them to its
    /// participants. A second registration for the same event is rejected
    /// before any call is made.
    pub async fn register_for_event(&self, event_id: &EventId) -> Result<Written<Registration>> {
        let student = self.actor()?;
        self.registrations.hydrate();
        let duplicate = self
            .registrations
            .snapshot()
            .iter()
            .any(|r| r.matches(event_id, &student.id));
        if duplicate {
            return Err(Error::AlreadyRegistered {
                event_id: event_id.to_string(),
            });
        }

        let draft = RegistrationDraft::new(event_id.clone(), &student);
        let written = self.registrations.create(draft).await?;
        let participant = written.value.participant();
        let added = self
            .events
            .modify_local(&written.value.event_id, |event| event.add_participant(participant));
        if !added && self.event(&written.value.event_id).is_none() {
            tracing::debug!(event = %written.value.event_id, "registered for an event not known locally");
        }
        self.settle(EntityKind::Registration, written, |r| r.id.to_string())
    }

    async fn admit_member(&self, request: &JoinRequest) {
        if self.clubs.refresh().await == Freshness::Fresh {
            return;
        }
        let member = request.member();
        let added = self
            .clubs
            .modify_local(&request.club_id, |club| club.add_member(member));
        tracing::debug!(club = %request.club_id, student = %request.student_id, added, "admitted member locally");
    }

    fn actor(&self) -> Result<User> {
        self.session.user().ok_or(Error::NotSignedIn)
    }

    fn settle<T>(
        &self,
        kind: EntityKind,
        written: Written<T>,
        id: impl FnOnce(&T) -> String,
    ) -> Result<Written<T>> {
        match (&written.delivery, self.policy) {
            (Delivery::LocalOnly(reason), WritePolicy::Surfaced) => Err(Error::NotDelivered {
                kind,
                id: id(&written.value),
                source: reason.clone(),
            }),
            _ => Ok(written),
        }
    }
}

impl crate::poller::Refresh for Hub {
    fn poll_tick(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
            let results = self.refresh_all().await;
            let fresh = results.iter().filter(|(_, f)| *f == Freshness::Fresh).count();
            tracing::debug!(fresh, "poll tick complete");
        })
    }
}
