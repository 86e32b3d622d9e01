//! The `{ "data": ... }` wrapper used by every request and response body.

use serde::{Deserialize, Serialize};

/// Wraps a single resource under the top-level `data` key.
///
/// The API wraps every resource this way regardless of its kind, so one
/// generic type serves as both request and response body. Extra keys in a
/// response (such as `links`) are ignored.
///
/// # Example
///
/// ```rust
/// use form3_api::rest::Envelope;
/// use serde_json::json;
///
/// let envelope = Envelope::new(json!({"id": "42"}));
/// assert_eq!(serde_json::to_value(&envelope).unwrap(), json!({"data": {"id": "42"}}));
///
/// let decoded: Envelope<serde_json::Value> =
///     serde_json::from_value(json!({"data": {"id": "42"}, "links": {"self": "/x"}})).unwrap();
/// assert_eq!(decoded.into_inner(), json!({"id": "42"}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped resource.
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wraps a resource.
    #[must_use]
    pub const fn new(data: T) -> Self {
        Self { data }
    }

    /// Consumes the envelope and returns the resource.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> From<T> for Envelope<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}
