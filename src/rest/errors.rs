//! Error type for repository operations.
//!
//! API and transport failures pass through unchanged inside
//! [`ResourceError::Http`], so an API error still displays as
//! `[<Category>]: <message>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use form3_api::clients::ApiErrorKind;
//! use form3_api::rest::{Repository, ResourceError};
//!
//! match accounts.fetch(id).await {
//!     Ok(account) => println!("Found: {}", account.id),
//!     Err(e) if e.api_kind() == Some(ApiErrorKind::NotFound) => println!("Gone"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{ApiErrorKind, HttpError};
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource declares no path for the operation with the given IDs.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "fetch", "delete").
        operation: &'static str,
    },

    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the API error kind if the server rejected the request.
    #[must_use]
    pub const fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Self::Http(e) => e.api_kind(),
            Self::PathResolutionFailed { .. } => None,
        }
    }

    /// Returns the `X-Request-Id` of the failed response, if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Api(e)) => e.request_id.as_deref(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
