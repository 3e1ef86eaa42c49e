// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers: a scripted transport and sample actors.

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};

use clubsync_core::{EntityKind, Role, User, UserId};

use crate::remote::{Method, NetworkError, NetworkResult, Transport};

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub token: Option<String>,
}

struct Scripted {
    result: NetworkResult<Value>,
    delay: Option<Duration>,
}

#[derive(Default)]
struct MockState {
    sticky: HashMap<(Method, String), Value>,
    queued: HashMap<(Method, String), VecDeque<Scripted>>,
    offline: bool,
    requests: Vec<RecordedRequest>,
}

/// Mock transport for testing without a backend.
///
/// One-shot responses queued with [`respond_once`](Self::respond_once) are
/// served first, then the sticky response for the route. Unknown routes
/// fail as unreachable.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport on which every call fails as unreachable.
    pub fn offline() -> Self {
        let transport = Self::new();
        transport.set_offline(true);
        transport
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    pub fn respond(&self, method: Method, path: &str, body: Value) {
        self.state
            .lock()
            .unwrap()
            .sticky
            .insert((method, path.to_string()), body);
    }

    pub fn respond_once(&self, method: Method, path: &str, result: NetworkResult<Value>) {
        self.respond_once_after(method, path, result, None);
    }

    pub fn respond_once_after(
        &self,
        method: Method,
        path: &str,
        result: NetworkResult<Value>,
        delay: Option<Duration>,
    ) {
        self.state
            .lock()
            .unwrap()
            .queued
            .entry((method, path.to_string()))
            .or_default()
            .push_back(Scripted { result, delay });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

impl Transport for MockTransport {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Pin<Box<dyn Future<Output = NetworkResult<Value>> + Send + '_>> {
        let scripted = {
            let mut state = self.state.lock().unwrap();
            state.requests.push(RecordedRequest {
                method,
                path: path.to_string(),
                body,
                token: token.map(str::to_string),
            });
            let key = (method, path.to_string());
            if state.offline {
                Scripted {
                    result: Err(NetworkError::Unreachable("mock offline".into())),
                    delay: None,
                }
            } else if let Some(next) = state.queued.get_mut(&key).and_then(VecDeque::pop_front) {
                next
            } else if let Some(body) = state.sticky.get(&key) {
                Scripted {
                    result: Ok(body.clone()),
                    delay: None,
                }
            } else {
                Scripted {
                    result: Err(NetworkError::Unreachable(format!(
                        "no route for {} {}",
                        method, path
                    ))),
                    delay: None,
                }
            }
        };
        Box::pin(async move {
            if let Some(delay) = scripted.delay {
                tokio::time::sleep(delay).await;
            }
            scripted.result
        })
    }
}

pub fn user(id: &str, name: &str, role: Role) -> User {
    User {
        id: UserId::new(id),
        name: name.to_string(),
        email: format!("{}@example.edu", name.to_lowercase()),
        role,
        department: Some("CSE".to_string()),
    }
}

pub fn student() -> User {
    user("u-student", "Asha", Role::Student)
}

pub fn faculty() -> User {
    user("u-faculty", "Srushti", Role::Faculty)
}

pub fn hod() -> User {
    user("u-hod", "Kiran", Role::Hod)
}

/// `{success: true, <plural>: [...]}` as returned by list endpoints.
pub fn list_body(kind: EntityKind, items: Vec<Value>) -> Value {
    let mut body = json!({ "success": true });
    body[kind.plural_key()] = Value::Array(items);
    body
}

/// `{success: true, <singular>: {...}}` as returned by write endpoints.
pub fn record_body(kind: EntityKind, item: Value) -> Value {
    let mut body = json!({ "success": true });
    body[kind.singular_key()] = item;
    body
}

pub fn club_doc(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "description": "",
        "department": "CSE",
        "activities": [],
        "members": [],
        "__v": 0
    })
}
