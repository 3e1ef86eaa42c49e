// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use clubsync_core::{ApprovalStatus, EntityKind, Role};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn parse_kind(s: &str) -> Result<EntityKind, String> {
    s.parse().map_err(|e: clubsync_core::Error| e.to_string())
}

fn parse_status(s: &str) -> Result<ApprovalStatus, String> {
    s.parse().map_err(|e: clubsync_core::Error| e.to_string())
}

fn parse_role(s: &str) -> Result<Role, String> {
    s.parse().map_err(|e: clubsync_core::Error| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "clubsync")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Offline-tolerant client for the club management backend")]
#[command(
    long_about = "Offline-tolerant client for the club management backend.\n\n\
    Reads fall back to the last local snapshot, then to built-in defaults. \
    Writes that cannot reach the backend are applied locally."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// Directory holding config.toml and the local store
    #[arg(long, global = true, value_name = "path")]
    pub state_dir: Option<PathBuf>,

    /// Backend base URL (overrides config and CLUBSYNC_API_URL)
    #[arg(long, global = true, value_name = "url")]
    pub api_url: Option<String>,

    /// Output format
    #[arg(long = "format", short = 'o', global = true, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Command {
    /// Refresh one collection and print it
    List {
        /// clubs, events, join-requests or registrations
        #[arg(value_parser = parse_kind)]
        kind: EntityKind,
    },

    /// Poll the backend and report changes until interrupted
    Watch {
        /// Stop after this many seconds instead of waiting for Ctrl-C
        #[arg(long, value_name = "secs")]
        for_secs: Option<u64>,
    },

    /// Sign in and store the session
    Login {
        #[arg(value_parser = non_empty_string)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in as it
    Signup {
        #[arg(long, value_parser = non_empty_string)]
        name: String,

        #[arg(long, value_parser = non_empty_string)]
        email: String,

        #[arg(long)]
        password: String,

        /// student, faculty or hod
        #[arg(long, value_parser = parse_role, default_value = "student")]
        role: Role,

        #[arg(long)]
        department: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Manage clubs
    #[command(subcommand)]
    Club(ClubCommand),

    /// Manage events
    #[command(subcommand)]
    Event(EventCommand),

    /// Ask to join a club as the signed-in student
    Join {
        club_id: String,
    },

    /// Approve or reject a join request
    Review {
        request_id: String,

        /// approved or rejected
        #[arg(value_parser = parse_status)]
        status: ApprovalStatus,
    },

    /// Register the signed-in student for an event
    Register {
        event_id: String,
    },
}

#[derive(Subcommand)]
pub enum ClubCommand {
    /// Create a club
    Create {
        #[arg(value_parser = non_empty_string)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        department: String,

        /// Activity (repeatable)
        #[arg(long = "activity", short = 'a')]
        activities: Vec<String>,

        #[arg(long)]
        faculty_id: Option<String>,

        #[arg(long)]
        faculty_name: Option<String>,
    },

    /// Change club fields
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        department: Option<String>,

        /// Replace activities (repeatable)
        #[arg(long = "activity", short = 'a')]
        activities: Vec<String>,
    },

    /// Delete a club
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum EventCommand {
    /// Create an event as the signed-in user
    Create {
        club_id: String,

        #[arg(value_parser = non_empty_string)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// RFC 3339 timestamp, e.g. 2026-11-02T17:00:00Z
        #[arg(long)]
        date: Option<String>,
    },

    /// Change event fields
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        date: Option<String>,

        /// pending, approved or rejected
        #[arg(long, value_parser = parse_status)]
        status: Option<ApprovalStatus>,
    },

    /// Delete an event
    Delete { id: String },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
