// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clubsync::Written;
use clubsync_core::{ClubDraft, ClubId, ClubPatch, UserId};

use crate::cli::{ClubCommand, OutputFormat};
use crate::context::Context;
use crate::display::{delivery_note, print_written};
use crate::error::Result;

pub async fn run(ctx: &Context, cmd: ClubCommand) -> Result<()> {
    match cmd {
        ClubCommand::Create {
            name,
            description,
            department,
            activities,
            faculty_id,
            faculty_name,
        } => {
            // Default the faculty to the signed-in user.
            let actor = ctx.session().user();
            let draft = ClubDraft {
                name,
                description,
                department,
                activities,
                faculty_id: faculty_id
                    .map(UserId::from)
                    .or_else(|| actor.as_ref().map(|u| u.id.clone())),
                faculty_name: faculty_name.or_else(|| actor.map(|u| u.name)),
            };
            let written = ctx.hub.create_club(draft).await?;
            print_written("Created", &written, ctx.format)
        }
        ClubCommand::Update {
            id,
            name,
            description,
            department,
            activities,
        } => {
            let patch = ClubPatch {
                name,
                description,
                department,
                activities: (!activities.is_empty()).then_some(activities),
                ..ClubPatch::default()
            };
            let written = ctx.hub.update_club(&ClubId::from(id), patch).await?;
            print_written("Updated", &written, ctx.format)
        }
        ClubCommand::Delete { id } => {
            let id = ClubId::from(id);
            let written = ctx.hub.delete_club(&id).await?;
            print_deleted("club", id.as_str(), &written, ctx.format);
            Ok(())
        }
    }
}

/// Shared by club and event deletion.
pub(crate) fn print_deleted(label: &str, id: &str, written: &Written<()>, format: OutputFormat) {
    if format == OutputFormat::Text {
        println!("Deleted {} {}", label, id);
    }
    if let Some(note) = delivery_note(written) {
        eprintln!("warning: {}", note);
    }
}

#[cfg(test)]
#[path = "club_tests.rs"]
mod tests;
