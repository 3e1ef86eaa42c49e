// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod auth;
pub mod club;
pub mod event;
pub mod list;
pub mod membership;
pub mod watch;

use chrono::{DateTime, Utc};

use crate::cli::Command;
use crate::context::Context;
use crate::error::{Error, Result};

/// Runs one parsed command against an opened context.
pub async fn dispatch(ctx: &Context, command: Command) -> Result<()> {
    match command {
        Command::List { kind } => list::run(ctx, kind).await,
        Command::Watch { for_secs } => watch::run(ctx, for_secs).await,
        Command::Login { email, password } => auth::login(ctx, &email, &password).await,
        Command::Signup {
            name,
            email,
            password,
            role,
            department,
        } => auth::signup(ctx, name, email, password, role, department).await,
        Command::Logout => auth::logout(ctx),
        Command::Whoami => auth::whoami(ctx),
        Command::Club(cmd) => club::run(ctx, cmd).await,
        Command::Event(cmd) => event::run(ctx, cmd).await,
        Command::Join { club_id } => membership::join(ctx, &club_id).await,
        Command::Review { request_id, status } => {
            membership::review(ctx, &request_id, status).await
        }
        Command::Register { event_id } => membership::register(ctx, &event_id).await,
    }
}

pub(crate) fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod testing;
