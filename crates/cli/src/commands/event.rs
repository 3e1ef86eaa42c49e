// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clubsync_core::{EventId, EventInput, EventPatch};

use super::club::print_deleted;
use super::parse_date;
use crate::cli::EventCommand;
use crate::context::Context;
use crate::display::print_written;
use crate::error::Result;

pub async fn run(ctx: &Context, cmd: EventCommand) -> Result<()> {
    match cmd {
        EventCommand::Create {
            club_id,
            title,
            description,
            date,
        } => {
            let input = EventInput {
                club_id: club_id.into(),
                title,
                description,
                date: date.as_deref().map(parse_date).transpose()?,
            };
            let written = ctx.hub.create_event(input).await?;
            print_written("Created", &written, ctx.format)
        }
        EventCommand::Update {
            id,
            title,
            description,
            date,
            status,
        } => {
            let patch = EventPatch {
                title,
                description,
                date: date.as_deref().map(parse_date).transpose()?,
                status,
                ..EventPatch::default()
            };
            let written = ctx.hub.update_event(&EventId::from(id), patch).await?;
            print_written("Updated", &written, ctx.format)
        }
        EventCommand::Delete { id } => {
            let id = EventId::from(id);
            let written = ctx.hub.delete_event(&id).await?;
            print_deleted("event", id.as_str(), &written, ctx.format);
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
