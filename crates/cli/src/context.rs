// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clubsync::config::store_path;
use clubsync::{AuthClient, Config, HttpTransport, Hub, LocalStore, Session, SqliteStore, Transport};

use crate::cli::{GlobalArgs, OutputFormat};
use crate::error::{Error, Result};

/// Resolves the state directory: the flag wins over the environment and
/// platform default.
pub fn resolve_state_dir(flag: Option<&Path>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir.to_path_buf()),
        None => clubsync::env::default_state_dir().ok_or(Error::NoStateDir),
    }
}

/// Everything a command needs, wired once per invocation.
pub struct Context {
    pub state_dir: PathBuf,
    pub config: Config,
    pub format: OutputFormat,
    pub hub: Arc<Hub>,
    transport: Arc<dyn Transport>,
}

impl Context {
    pub fn open(global: &GlobalArgs, state_dir: PathBuf) -> Result<Self> {
        let api_url = global.api_url.clone().or_else(clubsync::env::api_url);
        let config = Config::load(&state_dir)?.with_api_url(api_url);
        config.validate()?;

        let transport: Arc<dyn Transport> = Arc::new(
            HttpTransport::from_config(&config).map_err(clubsync::Error::from)?,
        );
        let store: Arc<dyn LocalStore> = Arc::new(
            SqliteStore::open(&store_path(&state_dir)).map_err(clubsync::Error::from)?,
        );
        Ok(Self::with_parts(state_dir, config, global.format, transport, store))
    }

    /// Wires a context from explicit parts.
    pub fn with_parts(
        state_dir: PathBuf,
        config: Config,
        format: OutputFormat,
        transport: Arc<dyn Transport>,
        store: Arc<dyn LocalStore>,
    ) -> Self {
        let session = Session::restore(Arc::clone(&store));
        let hub = Arc::new(Hub::new(
            Arc::clone(&transport),
            store,
            session,
            config.write_policy,
        ));
        tracing::debug!(api_url = %config.api_url, state_dir = %state_dir.display(), "context ready");
        Context {
            state_dir,
            config,
            format,
            hub,
            transport,
        }
    }

    pub fn session(&self) -> &Session {
        self.hub.session()
    }

    pub fn auth(&self) -> AuthClient {
        AuthClient::new(Arc::clone(&self.transport), self.session().clone())
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
