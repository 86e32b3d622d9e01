//! The transport capability shared by every repository.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::HttpError;

/// Create, fetch and delete against API paths.
///
/// Repositories are generic over this trait rather than over a concrete
/// client, so tests can swap in an in-memory implementation.
///
/// Every call performs at most one round trip. A status code >= 400 becomes
/// [`HttpError::Api`]; a successful body that does not decode into `R`
/// becomes [`HttpError::Decode`].
///
/// # Example
///
/// ```rust,ignore
/// use form3_api::clients::Transport;
/// use form3_api::rest::Envelope;
///
/// async fn fetch_widget<C: Transport>(client: &C) -> Result<Widget, HttpError> {
///     let envelope: Envelope<Widget> = client.fetch("/v1/widgets/42").await?;
///     Ok(envelope.data)
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Serializes `body` as JSON, POSTs it to `path` and decodes the reply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Encode`] if `body` cannot be serialized, and any
    /// other [`HttpError`] raised by the round trip.
    async fn create<B, R>(&self, path: &str, body: &B) -> Result<R, HttpError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned;

    /// GETs `path` and decodes the reply.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] raised by the round trip.
    async fn fetch<R>(&self, path: &str) -> Result<R, HttpError>
    where
        R: DeserializeOwned;

    /// DELETEs `path`. A successful reply body is ignored.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] raised by the round trip.
    async fn delete(&self, path: &str) -> Result<(), HttpError>;
}

impl<C: Transport> Transport for &C {
    async fn create<B, R>(&self, path: &str, body: &B) -> Result<R, HttpError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        (**self).create(path, body).await
    }

    async fn fetch<R>(&self, path: &str) -> Result<R, HttpError>
    where
        R: DeserializeOwned,
    {
        (**self).fetch(path).await
    }

    async fn delete(&self, path: &str) -> Result<(), HttpError> {
        (**self).delete(path).await
    }
}

impl<C: Transport> Transport for Arc<C> {
    async fn create<B, R>(&self, path: &str, body: &B) -> Result<R, HttpError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        (**self).create(path, body).await
    }

    async fn fetch<R>(&self, path: &str) -> Result<R, HttpError>
    where
        R: DeserializeOwned,
    {
        (**self).fetch(path).await
    }

    async fn delete(&self, path: &str) -> Result<(), HttpError> {
        (**self).delete(path).await
    }
}
