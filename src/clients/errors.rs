//! HTTP-specific error types for the accounts API client.
//!
//! - [`ApiError`]: A response with status >= 400, classified by [`ApiErrorKind`]
//! - [`InvalidHttpRequestError`]: A request that failed validation before sending
//! - [`HttpError`]: Unified error type for every transport failure
//!
//! # Example
//!
//! ```rust,ignore
//! use form3_api::clients::{ApiErrorKind, HttpError};
//!
//! match client.fetch::<Envelope<Account>>(&path).await {
//!     Ok(envelope) => println!("Found: {}", envelope.data.id),
//!     Err(HttpError::Api(e)) if e.kind == ApiErrorKind::NotFound => {
//!         println!("No such account");
//!     }
//!     Err(HttpError::Api(e)) => println!("Rejected: {e}"),
//!     Err(HttpError::Decode(e)) => println!("Unreadable reply: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// The category of an API error, keyed by HTTP status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// HTTP 400.
    BadRequest,
    /// HTTP 404.
    NotFound,
    /// HTTP 409.
    Conflict,
    /// HTTP 500.
    InternalServer,
    /// Any other status >= 400, carrying the raw code.
    Unknown(u16),
}

/// Status codes with a dedicated kind. Everything else is `Unknown`.
const STATUS_KINDS: &[(u16, ApiErrorKind)] = &[
    (400, ApiErrorKind::BadRequest),
    (404, ApiErrorKind::NotFound),
    (409, ApiErrorKind::Conflict),
    (500, ApiErrorKind::InternalServer),
];

impl ApiErrorKind {
    /// Maps an HTTP status code to its error kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use form3_api::clients::ApiErrorKind;
    ///
    /// assert_eq!(ApiErrorKind::from_status(409), ApiErrorKind::Conflict);
    /// assert_eq!(ApiErrorKind::from_status(503), ApiErrorKind::Unknown(503));
    /// ```
    #[must_use]
    pub fn from_status(code: u16) -> Self {
        STATUS_KINDS
            .iter()
            .find(|(status, _)| *status == code)
            .map_or(Self::Unknown(code), |(_, kind)| *kind)
    }

    /// Returns the HTTP status code for this kind.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Unknown(code) => *code,
            known => STATUS_KINDS
                .iter()
                .find(|(_, kind)| kind == known)
                .map_or(0, |(status, _)| *status),
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => f.write_str("Bad Request"),
            Self::NotFound => f.write_str("Not Found"),
            Self::Conflict => f.write_str("Conflict"),
            Self::InternalServer => f.write_str("Internal Server"),
            Self::Unknown(code) => write!(f, "Unknown Status {code}"),
        }
    }
}

/// Error returned when the API answers with a status code >= 400.
///
/// Displays as `[<Category>]: <message>`. The category label is stable, so
/// callers may match on the prefix.
///
/// # Example
///
/// ```rust
/// use form3_api::clients::{ApiError, ApiErrorKind};
///
/// let error = ApiError::new(ApiErrorKind::Conflict, "version mismatch");
/// assert_eq!(error.to_string(), "[Conflict]: version mismatch");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("[{kind}]: {message}")]
pub struct ApiError {
    /// The error category.
    pub kind: ApiErrorKind,
    /// The server-supplied `error_message`, or empty if it could not be read.
    pub message: String,
    /// The `X-Request-Id` response header, when present.
    pub request_id: Option<String>,
}

/// Shape of the JSON body the API sends alongside error statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_message: String,
}

impl ApiError {
    /// Creates an error with the given kind and message.
    #[must_use]
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            request_id: None,
        }
    }

    /// Builds an error from a failed response's status code and body.
    ///
    /// The message is decoded from the body's `error_message` field. A body
    /// that cannot be decoded leaves the message empty; the kind is always
    /// taken from the status code.
    #[must_use]
    pub fn from_response(code: u16, body: &str, request_id: Option<&str>) -> Self {
        let kind = ApiErrorKind::from_status(code);
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.error_message,
            Err(error) => {
                tracing::warn!(
                    status = code,
                    %error,
                    "Could not decode error body from API, returning {kind} with an empty message"
                );
                String::new()
            }
        };

        Self {
            kind,
            message,
            request_id: request_id.map(String::from),
        }
    }
}

/// Error returned when an HTTP request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A body was attached to a method that does not send one.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that was given a body.
        method: String,
    },
}

/// Unified error type for all transport failures.
///
/// `Api` means the server rejected the request. `Decode` means the server
/// accepted it but its reply could not be understood. Neither is retried.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API returned a status code >= 400.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A successful response body could not be decoded.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the API error kind if the server rejected the request.
    #[must_use]
    pub const fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Self::Api(e) => Some(e.kind),
            _ => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<HttpError>();
};
