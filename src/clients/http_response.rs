//! HTTP response type for the accounts API client.

use std::collections::HashMap;

/// An HTTP response from the API.
///
/// The body is kept as raw text; decoding into a typed value is the job of
/// the caller, which knows what shape to expect.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is below 400.
    ///
    /// Anything from 400 upwards is an API error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code < 400
    }

    /// Returns the first value of the named header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}
