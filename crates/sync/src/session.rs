// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The signed-in actor and their bearer token.
//!
//! Both live in the local store under `user` and `token` so a restart
//! resumes the previous session.

use std::sync::{Arc, RwLock};

use clubsync_core::User;

use crate::error::Result;
use crate::store::{load_json, save_json, LocalStore, MemoryStore};

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Default, Clone)]
struct SessionState {
    user: Option<User>,
    token: Option<String>,
}

/// Shared handle to the current session. Clones see the same state.
#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
    store: Arc<dyn LocalStore>,
}

impl Session {
    /// Restores the persisted session from `store`, if any.
    pub fn restore(store: Arc<dyn LocalStore>) -> Self {
        let user: Option<User> = load_json(store.as_ref(), USER_KEY);
        let token = match store.read(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored token");
                None
            }
        };
        if let Some(user) = &user {
            tracing::debug!(user = %user.id, has_token = token.is_some(), "restored session");
        }
        Session {
            state: Arc::new(RwLock::new(SessionState { user, token })),
            store,
        }
    }

    /// A signed-out session that is never persisted.
    pub fn anonymous() -> Self {
        Session {
            state: Arc::new(RwLock::new(SessionState::default())),
            store: Arc::new(MemoryStore::new()),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.read().user.is_some()
    }

    /// Installs a new actor and token and persists both. If the user cannot
    /// be stored, the previously stored token is put back.
    pub fn sign_in(&self, user: User, token: String) -> Result<()> {
        let previous = self.token();
        self.store.write(TOKEN_KEY, &token)?;
        if let Err(e) = save_json(self.store.as_ref(), USER_KEY, &user) {
            let restored = match &previous {
                Some(old) => self.store.write(TOKEN_KEY, old),
                None => self.store.remove(TOKEN_KEY),
            };
            if let Err(undo) = restored {
                tracing::warn!(error = %undo, "failed to restore stored token");
            }
            return Err(e.into());
        }
        let mut state = self.write();
        state.user = Some(user);
        state.token = Some(token);
        Ok(())
    }

    /// Clears the actor and token, in memory and in the store.
    pub fn logout(&self) -> Result<()> {
        {
            let mut state = self.write();
            state.user = None;
            state.token = None;
        }
        self.store.remove(USER_KEY)?;
        self.store.remove(TOKEN_KEY)?;
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
