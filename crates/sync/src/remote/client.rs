// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-collection CRUD client.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use clubsync_core::{Draft, Envelope, Patch, Record};

use super::transport::{Method, NetworkError, NetworkResult, Transport};
use crate::session::Session;

/// Stateless CRUD access to one collection.
///
/// The bearer token is read from the session on every call, so signing in
/// or out takes effect on the next request. A missing token is not an
/// error here.
pub struct RemoteCollection<R> {
    transport: Arc<dyn Transport>,
    session: Session,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for RemoteCollection<R> {
    fn clone(&self) -> Self {
        RemoteCollection {
            transport: Arc::clone(&self.transport),
            session: self.session.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> RemoteCollection<R> {
    pub fn new(transport: Arc<dyn Transport>, session: Session) -> Self {
        RemoteCollection {
            transport,
            session,
            _record: PhantomData,
        }
    }

    /// Fetches the whole collection.
    pub async fn list(&self) -> NetworkResult<Vec<R>> {
        let mut envelope = self.call(Method::Get, R::KIND.path().to_string(), None).await?;
        Ok(envelope.take_records::<R>()?)
    }

    pub async fn create<D>(&self, draft: &D) -> NetworkResult<R>
    where
        D: Draft<Record = R>,
    {
        let body = draft
            .to_body()
            .map_err(|e| NetworkError::Decode(format!("failed to encode request: {}", e)))?;
        let mut envelope = self
            .call(Method::Post, R::KIND.path().to_string(), Some(body))
            .await?;
        Ok(envelope.take_record::<R>()?)
    }

    pub async fn update<P>(&self, id: &R::Id, patch: &P) -> NetworkResult<R>
    where
        P: Patch<Record = R>,
    {
        let body = patch
            .to_body()
            .map_err(|e| NetworkError::Decode(format!("failed to encode request: {}", e)))?;
        let mut envelope = self.call(Method::Put, item_path::<R>(id), Some(body)).await?;
        Ok(envelope.take_record::<R>()?)
    }

    pub async fn delete(&self, id: &R::Id) -> NetworkResult<()> {
        self.call(Method::Delete, item_path::<R>(id), None).await?;
        Ok(())
    }

    async fn call(&self, method: Method, path: String, body: Option<Value>) -> NetworkResult<Envelope> {
        let token = self.session.token();
        tracing::debug!(%method, %path, authenticated = token.is_some(), "remote call");
        let response = self
            .transport
            .request(method, &path, body, token.as_deref())
            .await?;
        let envelope = Envelope::from_value(response)?;
        envelope.ensure_success()?;
        Ok(envelope)
    }
}

/// The id is one path segment, so reserved characters are escaped.
fn item_path<R: Record>(id: &R::Id) -> String {
    format!("{}/{}", R::KIND.path(), urlencoding::encode(id.as_ref()))
}
