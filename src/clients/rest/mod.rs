//! REST transport for the accounts API.
//!
//! This module provides the [`Transport`] capability trait and
//! [`RestClient`], its implementation on top of
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`Transport`]: `create()`, `fetch()` and `delete()` against an API path
//! - [`RestClient`]: Sends one request per call and maps the status code
//!
//! # Status Handling
//!
//! Responses below 400 are decoded into the requested type (`delete()`
//! ignores the body). Responses from 400 upwards become
//! [`ApiError`](crate::clients::ApiError) values:
//!
//! | Status | Kind |
//! |--------|------|
//! | 400 | `BadRequest` |
//! | 404 | `NotFound` |
//! | 409 | `Conflict` |
//! | 500 | `InternalServer` |
//! | other | `Unknown(code)` |
//!
//! Nothing is retried.

mod client;
mod transport;

pub use client::RestClient;
pub use transport::Transport;
