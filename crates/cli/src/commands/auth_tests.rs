// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use super::*;
use crate::commands::testing::{offline_context, offline_context_with, sign_in, student};
use clubsync::{Error as SyncError, LocalStore, MemoryStore};

#[test]
fn whoami_signed_out() {
    let ctx = offline_context();
    assert_eq!(render_whoami(&ctx).unwrap(), "Not signed in");
}

#[test]
fn whoami_shows_user() {
    let ctx = offline_context();
    sign_in(&ctx, student());
    assert_eq!(
        render_whoami(&ctx).unwrap(),
        "Asha <asha@example.edu>  student, CSE"
    );
}

#[test]
fn logout_forgets_persisted_session() {
    let store: Arc<dyn LocalStore> = Arc::new(MemoryStore::new());
    let ctx = offline_context_with(Arc::clone(&store));
    sign_in(&ctx, student());
    logout(&ctx).unwrap();

    let reopened = offline_context_with(store);
    assert!(!reopened.session().is_signed_in());
    assert!(reopened.session().token().is_none());
}

#[test]
fn session_survives_reopen() {
    let store: Arc<dyn LocalStore> = Arc::new(MemoryStore::new());
    sign_in(&offline_context_with(Arc::clone(&store)), student());
    let reopened = offline_context_with(store);
    assert_eq!(reopened.session().user().unwrap().name, "Asha");
}

#[tokio::test]
async fn login_offline_fails_without_signing_in() {
    let ctx = offline_context();
    let err = login(&ctx, "asha@example.edu", "pw").await.unwrap_err();
    assert!(matches!(err, crate::error::Error::Sync(SyncError::Network(_))));
    assert!(!ctx.session().is_signed_in());
}

#[tokio::test]
async fn signup_requires_password_before_any_call() {
    let ctx = offline_context();
    let err = signup(
        &ctx,
        "Asha".into(),
        "asha@example.edu".into(),
        String::new(),
        Role::Student,
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, crate::error::Error::Sync(ref e) if e.is_validation()));
}
