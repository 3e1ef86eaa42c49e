// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clubsync::Freshness;
use clubsync_core::EntityKind;

use crate::cli::OutputFormat;
use crate::context::Context;
use crate::display::{format_list, freshness_note};
use crate::error::Result;

pub async fn run(ctx: &Context, kind: EntityKind) -> Result<()> {
    let (out, freshness) = render(ctx, kind, ctx.format).await?;
    if !out.is_empty() {
        println!("{}", out);
    }
    if let Some(note) = freshness_note(freshness) {
        eprintln!("warning: {}", note);
    }
    Ok(())
}

/// Refreshes `kind` and renders whatever is visible afterwards.
pub(crate) async fn render(
    ctx: &Context,
    kind: EntityKind,
    format: OutputFormat,
) -> Result<(String, Freshness)> {
    let freshness = ctx.hub.refresh(kind).await;
    let out = match kind {
        EntityKind::Club => format_list(&ctx.hub.clubs(), format)?,
        EntityKind::Event => format_list(&ctx.hub.events(), format)?,
        EntityKind::JoinRequest => format_list(&ctx.hub.join_requests(), format)?,
        EntityKind::Registration => format_list(&ctx.hub.registrations(), format)?,
    };
    Ok((out, freshness))
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
