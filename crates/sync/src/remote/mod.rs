// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! REST access to the backend.
//!
//! Provides one stateless [`RemoteCollection`] per entity type plus the
//! [`AuthClient`] for the two auth endpoints. Both sit on an injectable
//! [`Transport`]; the real one is [`HttpTransport`].
//!
//! Transport failures and non-2xx statuses both collapse to
//! [`NetworkError`]. The variants only differ in the text shown to users.

mod auth;
mod client;
mod transport;

pub use auth::{AuthClient, SignupForm};
pub use client::RemoteCollection;
pub use transport::{HttpTransport, Method, NetworkError, NetworkResult, Transport};
