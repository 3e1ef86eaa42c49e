// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host configuration.
//!
//! Stored in `<state_dir>/config.toml`. Every field has a default, so a
//! missing file yields a working configuration against a local backend.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const STORE_FILE_NAME: &str = "store.db";

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;

/// What a write reports when the backend could not be reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritePolicy {
    /// The local fallback is reported as success.
    #[default]
    Silent,
    /// The local fallback is applied, then reported as an error.
    Surfaced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the REST backend.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Poll period in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Per-request timeout. Absent means the transport default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,
    #[serde(default)]
    pub write_policy: WritePolicy,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            poll_interval_ms: default_poll_interval_ms(),
            request_timeout_ms: None,
            write_policy: WritePolicy::default(),
        }
    }
}

impl Config {
    /// Loads `config.toml` from `state_dir`, falling back to defaults when
    /// the file does not exist. The result is validated.
    pub fn load(state_dir: &Path) -> Result<Self> {
        let config_path = state_dir.join(CONFIG_FILE_NAME);
        let config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?
        } else {
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to `state_dir`, creating it if needed.
    pub fn save(&self, state_dir: &Path) -> Result<()> {
        fs::create_dir_all(state_dir)?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(state_dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }

    /// Replaces the API URL when an override is given.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.api_url.trim();
        let Some(rest) = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
        else {
            return Err(Error::Config(format!(
                "invalid api_url '{}': must start with http:// or https://",
                self.api_url
            )));
        };
        if rest.is_empty() {
            return Err(Error::Config(format!(
                "invalid api_url '{}': missing host",
                self.api_url
            )));
        }
        if self.poll_interval_ms == 0 {
            return Err(Error::Config(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_ms == Some(0) {
            return Err(Error::Config(
                "request_timeout_ms must be greater than zero when set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

/// Path of the local store inside `state_dir`.
pub fn store_path(state_dir: &Path) -> PathBuf {
    state_dir.join(STORE_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
