// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Login and signup.
//!
//! The sync layer only consumes the bearer token; these two calls exist so
//! a host can obtain one and install it into the [`Session`].

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};

use clubsync_core::{normalize_id, Envelope, Role, User};

use super::transport::{Method, NetworkError, Transport};
use crate::error::{Error, Result};
use crate::session::Session;

const LOGIN_PATH: &str = "/api/auth/login";
const SIGNUP_PATH: &str = "/api/auth/signup";

#[derive(Debug, Clone, Default, Serialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

pub struct AuthClient {
    transport: Arc<dyn Transport>,
    session: Session,
}

impl AuthClient {
    pub fn new(transport: Arc<dyn Transport>, session: Session) -> Self {
        AuthClient { transport, session }
    }

    /// Authenticates and installs the returned user and token.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        require("email", email)?;
        require("password", password)?;
        let body = json!({ "email": email.trim(), "password": password });
        self.authenticate(LOGIN_PATH, body).await
    }

    /// Creates an account and signs in as it.
    pub async fn signup(&self, form: &SignupForm) -> Result<User> {
        require("name", &form.name)?;
        require("email", &form.email)?;
        require("password", &form.password)?;
        let body = serde_json::to_value(form)?;
        self.authenticate(SIGNUP_PATH, body).await
    }

    async fn authenticate(&self, path: &str, body: Value) -> Result<User> {
        let response = self
            .transport
            .request(Method::Post, path, Some(body), None)
            .await?;
        let mut envelope = Envelope::from_value(response).map_err(NetworkError::from)?;
        envelope.ensure_success().map_err(NetworkError::from)?;

        let mut user: Value = envelope.take("user").map_err(NetworkError::from)?;
        normalize_id(&mut user);
        let user: User = serde_json::from_value(user)
            .map_err(|e| NetworkError::Decode(format!("invalid user: {}", e)))?;
        let token: String = envelope.take("token").map_err(NetworkError::from)?;

        self.session.sign_in(user.clone(), token)?;
        tracing::info!(user = %user.id, role = %user.role, "signed in");
        Ok(user)
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::FieldRequired { field });
    }
    Ok(())
}
