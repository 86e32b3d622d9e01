//! REST Resource trait.
//!
//! This module defines the [`RestResource`] trait, which describes how a
//! resource type is addressed on the API: its name, its identity, and the
//! URL template for each operation. Any type implementing it can be served by
//! [`ResourceRepository`](crate::rest::ResourceRepository) without further
//! code.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use form3_api::rest::{ResourceOperation, ResourcePath, RestResource};
//! use form3_api::HttpMethod;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Widget {
//!     pub id: String,
//!     pub version: Option<i64>,
//! }
//!
//! impl RestResource for Widget {
//!     const NAME: &'static str = "Widget";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/v1/widgets"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Fetch, &["id"], "/v1/widgets/{id}"),
//!         ResourcePath::new(
//!             HttpMethod::Delete,
//!             ResourceOperation::Delete,
//!             &["id", "version"],
//!             "/v1/widgets/{id}?version={version}",
//!         ),
//!     ];
//!
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::rest::{build_path, get_path, ResourceError, ResourceOperation, ResourcePath};

/// A REST resource that can be created, fetched, and deleted.
///
/// Resources must be serializable, deserializable, cloneable, and
/// thread-safe.
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The singular name of the resource (e.g., "Account").
    ///
    /// Used in error messages and log fields.
    const NAME: &'static str;

    /// Available paths for this resource, one per supported operation.
    const PATHS: &'static [ResourcePath];

    /// Returns the resource's identifier.
    fn id(&self) -> &str;

    /// Resolves the path for `operation`, filling placeholders from `ids`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no declared path
    /// for the operation can be filled from `ids`.
    fn resolve_path(
        operation: ResourceOperation,
        ids: &HashMap<&str, String>,
    ) -> Result<String, ResourceError> {
        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, operation, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            },
        )?;

        Ok(build_path(path.template, ids))
    }
}
