// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Contexts wired against an unreachable backend.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use clubsync::{Config, HttpTransport, LocalStore, MemoryStore, Transport};
use clubsync_core::{Role, User, UserId};

use crate::cli::OutputFormat;
use crate::context::Context;

/// Nothing listens on port 1, so every call fails fast.
pub const OFFLINE_URL: &str = "http://127.0.0.1:1";

pub fn offline_context() -> Context {
    offline_context_with(Arc::new(MemoryStore::new()))
}

pub fn offline_context_with(store: Arc<dyn LocalStore>) -> Context {
    let config = Config::default().with_api_url(Some(OFFLINE_URL.to_string()));
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::from_config(&config).unwrap());
    Context::with_parts(
        std::env::temp_dir(),
        config,
        OutputFormat::Text,
        transport,
        store,
    )
}

pub fn student() -> User {
    User {
        id: UserId::new("u-student"),
        name: "Asha".to_string(),
        email: "asha@example.edu".to_string(),
        role: Role::Student,
        department: Some("CSE".to_string()),
    }
}

pub fn hod() -> User {
    User {
        id: UserId::new("u-hod"),
        name: "Kiran".to_string(),
        email: "kiran@example.edu".to_string(),
        role: Role::Hod,
        department: Some("CSE".to_string()),
    }
}

pub fn sign_in(ctx: &Context, user: User) {
    ctx.session().sign_in(user, "token".to_string()).unwrap();
}
