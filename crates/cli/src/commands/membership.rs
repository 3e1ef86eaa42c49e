// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clubsync_core::{ApprovalStatus, ClubId, EventId, JoinRequestId};

use crate::context::Context;
use crate::display::print_written;
use crate::error::Result;

pub async fn join(ctx: &Context, club_id: &str) -> Result<()> {
    let written = ctx.hub.request_join(&ClubId::from(club_id)).await?;
    print_written("Requested", &written, ctx.format)
}

/// Approving also adds the student to the club's members.
pub async fn review(ctx: &Context, request_id: &str, status: ApprovalStatus) -> Result<()> {
    let id = JoinRequestId::from(request_id);
    let written = ctx.hub.update_join_request(&id, status).await?;
    print_written("Reviewed", &written, ctx.format)
}

pub async fn register(ctx: &Context, event_id: &str) -> Result<()> {
    let written = ctx.hub.register_for_event(&EventId::from(event_id)).await?;
    print_written("Registered", &written, ctx.format)
}

#[cfg(test)]
#[path = "membership_tests.rs"]
mod tests;
