// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `{success, error?, <payload>}` wrapper around every REST response.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::record::{normalize_id, Record};

/// Failure to get a payload out of a response envelope.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// The server answered with `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The expected payload key was absent or `null`.
    #[error("response is missing '{0}'")]
    Missing(String),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A decoded response body.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl Envelope {
    pub fn from_value(value: Value) -> Result<Self, EnvelopeError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Fails with the server's error text unless `success` is true.
    pub fn ensure_success(&self) -> Result<(), EnvelopeError> {
        if self.success {
            return Ok(());
        }
        Err(EnvelopeError::Rejected(
            self.error
                .clone()
                .unwrap_or_else(|| "request was not successful".to_string()),
        ))
    }

    /// Removes and decodes the payload stored under `key`.
    pub fn take<T: DeserializeOwned>(&mut self, key: &str) -> Result<T, EnvelopeError> {
        match self.payload.remove(key) {
            None | Some(Value::Null) => Err(EnvelopeError::Missing(key.to_string())),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }

    /// Decodes the single record of `R`'s kind, normalizing its id.
    pub fn take_record<R: Record>(&mut self) -> Result<R, EnvelopeError> {
        let key = R::KIND.singular_key();
        let mut value: Value = self.take(key)?;
        normalize_id(&mut value);
        Ok(serde_json::from_value(value)?)
    }

    /// Decodes the full collection of `R`'s kind. A missing list is empty.
    pub fn take_records<R: Record>(&mut self) -> Result<Vec<R>, EnvelopeError> {
        let key = R::KIND.plural_key();
        let items: Vec<Value> = match self.take(key) {
            Ok(items) => items,
            Err(EnvelopeError::Missing(_)) => Vec::new(),
            Err(e) => return Err(e),
        };
        items
            .into_iter()
            .map(|mut item| {
                normalize_id(&mut item);
                serde_json::from_value(item).map_err(EnvelopeError::from)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
