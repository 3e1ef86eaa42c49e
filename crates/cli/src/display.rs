// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use serde::Serialize;

use clubsync::{Delivery, Freshness, Written};
use clubsync_core::{Club, Event, JoinRequest, Registration, User};

use crate::cli::OutputFormat;
use crate::error::Result;

/// One-line text rendering of a record.
pub trait Line {
    fn line(&self) -> String;
}

fn short_date(date: Option<&DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "no date".to_string())
}

impl Line for Club {
    fn line(&self) -> String {
        let members = match self.members.len() {
            1 => "1 member".to_string(),
            n => format!("{} members", n),
        };
        if self.department.is_empty() {
            format!("{}  {}  ({})", self.id, self.name, members)
        } else {
            format!("{}  {}  [{}]  ({})", self.id, self.name, self.department, members)
        }
    }
}

impl Line for Event {
    fn line(&self) -> String {
        format!(
            "{}  {}  {}  [{}]  club {}  ({} going)",
            self.id,
            short_date(self.date.as_ref()),
            self.title,
            self.status,
            self.club_id,
            self.participants.len()
        )
    }
}

impl Line for JoinRequest {
    fn line(&self) -> String {
        format!(
            "{}  {} <{}>  club {}  [{}]",
            self.id, self.student_name, self.student_email, self.club_id, self.status
        )
    }
}

impl Line for Registration {
    fn line(&self) -> String {
        format!(
            "{}  {} <{}>  event {}",
            self.id, self.student_name, self.student_email, self.event_id
        )
    }
}

impl Line for User {
    fn line(&self) -> String {
        match &self.department {
            Some(dept) => format!("{} <{}>  {}, {}", self.name, self.email, self.role, dept),
            None => format!("{} <{}>  {}", self.name, self.email, self.role),
        }
    }
}

/// Renders a list in the requested format.
pub fn format_list<T: Line + Serialize>(items: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Text => Ok(items.iter().map(Line::line).collect::<Vec<_>>().join("\n")),
    }
}

/// Renders a single record in the requested format.
pub fn format_one<T: Line + Serialize>(item: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(item)?),
        OutputFormat::Text => Ok(item.line()),
    }
}

/// Warning printed when the data shown did not come from the backend.
pub fn freshness_note(freshness: Freshness) -> Option<&'static str> {
    match freshness {
        Freshness::Fresh => None,
        Freshness::Stale => Some("backend unreachable; showing data from this session"),
        Freshness::Cached => Some("backend unreachable; showing last saved data"),
        Freshness::Seeded => Some("backend unreachable; showing built-in defaults"),
    }
}

/// Warning printed when a write was applied locally only.
pub fn delivery_note<T>(written: &Written<T>) -> Option<String> {
    match &written.delivery {
        Delivery::Confirmed => None,
        Delivery::LocalOnly(reason) => Some(format!(
            "saved locally only; the next refresh may discard it ({})",
            reason
        )),
    }
}

/// Prints a write outcome: the record on stdout, any delivery note on stderr.
pub fn print_written<T: Line + Serialize>(
    verb: &str,
    written: &Written<T>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&written.value)?),
        OutputFormat::Text => println!("{} {}", verb, written.value.line()),
    }
    if let Some(note) = delivery_note(written) {
        eprintln!("warning: {}", note);
    }
    Ok(())
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
