//! Typed CRUD facade over a [`Transport`].
//!
//! [`Repository`] is the capability callers program against.
//! [`ResourceRepository`] implements it once for every [`RestResource`] by
//! wrapping payloads in an [`Envelope`] and resolving the resource's URL
//! templates.
//!
//! # Example
//!
//! ```rust,ignore
//! use form3_api::{ClientConfig, RestClient};
//! use form3_api::rest::{Repository, ResourceRepository};
//! use form3_api::rest::resources::Account;
//!
//! let client = RestClient::new(&ClientConfig::from_env()?)?;
//! let accounts: ResourceRepository<Account, _> = ResourceRepository::new(client);
//!
//! let created = accounts.create(&account).await?;
//! let fetched = accounts.fetch(&created.id).await?;
//! accounts.delete(&fetched.id, fetched.version.unwrap_or_default()).await?;
//! ```

use std::collections::HashMap;
use std::marker::PhantomData;

use crate::clients::Transport;
use crate::rest::{Envelope, ResourceError, ResourceOperation, RestResource};

/// Create, fetch and delete for one resource type.
#[allow(async_fn_in_trait)]
pub trait Repository<T>: Send + Sync {
    /// Creates `resource` and returns the server's copy of it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the API rejects it.
    async fn create(&self, resource: &T) -> Result<T, ResourceError>;

    /// Fetches the resource with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the API rejects it.
    async fn fetch(&self, id: &str) -> Result<T, ResourceError>;

    /// Deletes the resource with the given identifier at `version`.
    ///
    /// `version` must match the server's current version of the resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the API rejects it.
    async fn delete(&self, id: &str, version: i64) -> Result<(), ResourceError>;
}

/// The [`Repository`] implementation shared by every [`RestResource`].
///
/// # Type Parameters
///
/// * `T` - The resource type
/// * `C` - The transport. [`RestClient`](crate::RestClient) in production;
///   `&RestClient` or `Arc<RestClient>` to share one client between
///   repositories.
#[derive(Debug)]
pub struct ResourceRepository<T, C> {
    client: C,
    _resource: PhantomData<fn() -> T>,
}

impl<T, C> ResourceRepository<T, C> {
    /// Creates a repository that talks through `client`.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }
}

impl<T, C> Repository<T> for ResourceRepository<T, C>
where
    T: RestResource,
    C: Transport,
{
    async fn create(&self, resource: &T) -> Result<T, ResourceError> {
        let path = T::resolve_path(ResourceOperation::Create, &HashMap::new())?;

        tracing::debug!(resource = T::NAME, id = resource.id(), "Creating resource");

        let response: Envelope<T> = self.client.create(&path, &Envelope::new(resource)).await?;
        Ok(response.into_inner())
    }

    async fn fetch(&self, id: &str) -> Result<T, ResourceError> {
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert("id", id.to_string());
        let path = T::resolve_path(ResourceOperation::Fetch, &ids)?;

        tracing::debug!(resource = T::NAME, id, "Fetching resource");

        let response: Envelope<T> = self.client.fetch(&path).await?;
        Ok(response.into_inner())
    }

    async fn delete(&self, id: &str, version: i64) -> Result<(), ResourceError> {
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert("id", id.to_string());
        ids.insert("version", version.to_string());
        let path = T::resolve_path(ResourceOperation::Delete, &ids)?;

        tracing::debug!(resource = T::NAME, id, version, "Deleting resource");

        self.client.delete(&path).await?;
        Ok(())
    }
}
