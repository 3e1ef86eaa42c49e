// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for REST calls.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTP calls for production
//! - Scripted transports for unit testing

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde_json::Value;

use clubsync_core::EnvelopeError;

use crate::config::Config;

/// Any failure to complete a call against the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The request never produced a response.
    #[error("server unreachable: {0}")]
    Unreachable(String),

    /// The server answered with a non-2xx status.
    #[error("{message} (HTTP {code})")]
    Status { code: u16, message: String },

    /// The server answered 2xx with `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<EnvelopeError> for NetworkError {
    fn from(e: EnvelopeError) -> Self {
        match e {
            EnvelopeError::Rejected(message) => NetworkError::Rejected(message),
            other => NetworkError::Decode(other.to_string()),
        }
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One JSON request/response exchange with the backend.
pub trait Transport: Send + Sync {
    /// Sends `body` to `path` and returns the decoded response body.
    ///
    /// `token` becomes an `Authorization: Bearer` header when present.
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Pin<Box<dyn Future<Output = NetworkResult<Value>> + Send + '_>>;
}

/// HTTP transport implementation using reqwest.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> NetworkResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| NetworkError::Unreachable(format!("failed to build client: {}", e)))?;
        Ok(HttpTransport {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> NetworkResult<Self> {
        Self::new(&config.api_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Pin<Box<dyn Future<Output = NetworkResult<Value>> + Send + '_>> {
        let url = format!("{}{}", self.base_url, path);
        let token = token.map(str::to_string);
        Box::pin(async move {
            let mut req = match method {
                Method::Get => self.client.get(&url),
                Method::Post => self.client.post(&url),
                Method::Put => self.client.put(&url),
                Method::Delete => self.client.delete(&url),
            };
            if let Some(token) = &token {
                req = req.bearer_auth(token);
            }
            if let Some(body) = &body {
                req = req.json(body);
            }

            let response = req
                .send()
                .await
                .map_err(|e| NetworkError::Unreachable(e.to_string()))?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| NetworkError::Unreachable(e.to_string()))?;
            let decoded: Option<Value> = serde_json::from_str(&text).ok();

            if !status.is_success() {
                let message = decoded
                    .as_ref()
                    .and_then(|v| v.get("error"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        status
                            .canonical_reason()
                            .unwrap_or("request failed")
                            .to_string()
                    });
                tracing::debug!(%method, %url, code = status.as_u16(), "request failed");
                return Err(NetworkError::Status {
                    code: status.as_u16(),
                    message,
                });
            }

            decoded.ok_or_else(|| NetworkError::Decode("response body is not JSON".to_string()))
        })
    }
}
