//! HTTP request types for the accounts API client.
//!
//! This module provides the [`HttpRequest`] type and its builder.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the accounts API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for fetching resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the API.
///
/// The body, when present, is already-serialized JSON text.
///
/// # Example
///
/// ```rust
/// use form3_api::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Post, "/v1/organisation/accounts")
///     .body(r#"{"data":{}}"#)
///     .build()
///     .unwrap();
/// assert_eq!(request.http_method, HttpMethod::Post);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path appended to the host, including any query string.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<String>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Post` but `body` is `None`
    /// - `http_method` is `Get` or `Delete` but `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method, &self.body) {
            (HttpMethod::Post, None) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (HttpMethod::Get | HttpMethod::Delete, Some(_)) => {
                Err(InvalidHttpRequestError::UnexpectedBody {
                    method: self.http_method.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<String>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            extra_headers: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}
