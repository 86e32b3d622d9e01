//! URL templates for REST resources.
//!
//! Each resource declares one [`ResourcePath`] per operation it supports.
//! Templates use `{name}` placeholders that [`build_path`] fills in.
//!
//! # Example
//!
//! ```rust
//! use form3_api::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use form3_api::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Fetch, &["id"], "/v1/widgets/{id}"),
//!     ResourcePath::new(
//!         HttpMethod::Delete,
//!         ResourceOperation::Delete,
//!         &["id", "version"],
//!         "/v1/widgets/{id}?version={version}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Delete, &["id", "version"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("id", "42".to_string());
//! ids.insert("version", "3".to_string());
//! assert_eq!(build_path(path.template, &ids), "/v1/widgets/42?version=3");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Create a new resource (POST /resources).
    Create,
    /// Fetch a single resource by ID (GET /resources/{id}).
    Fetch,
    /// Delete a resource at a known version (DELETE /resources/{id}?version={version}).
    Delete,
}

impl ResourceOperation {
    /// Returns the HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Create => HttpMethod::Post,
            Self::Fetch => HttpMethod::Get,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Fetch => "fetch",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// `ids` lists the placeholder names the template needs, so a path can be
/// rejected up front when a caller cannot supply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Placeholder names the template requires.
    pub ids: &'static [&'static str],
    /// The URL template with `{name}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` so paths can be declared as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Checks if all required placeholders are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the path for an operation whose placeholders can all be filled.
///
/// When several qualify, the one using the most placeholders wins.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.ids.len())
}

/// Builds a URL path from a template by interpolating values.
///
/// Values are percent-encoded, so an ID containing `/`, `?` or `#` cannot
/// change which endpoint is addressed.
///
/// # Example
///
/// ```rust
/// use form3_api::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("id", "a b/c");
///
/// assert_eq!(build_path("/v1/widgets/{id}", &ids), "/v1/widgets/a%20b%2Fc");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let value = value.to_string();
        result = result.replace(&placeholder, &urlencoding::encode(&value));
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
