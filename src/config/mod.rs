//! Configuration types for the accounts API client.
//!
//! The only setting the API needs is the host to talk to. It is supplied once
//! when the client is constructed and never changes afterwards.
//!
//! - [`ClientConfig`]: The immutable client configuration
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`HostUrl`]: A validated API host URL
//!
//! # Example
//!
//! ```rust
//! use form3_api::{ClientConfig, HostUrl};
//!
//! let config = ClientConfig::builder()
//!     .host(HostUrl::new("http://localhost:8080").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "http://localhost:8080");
//! ```
//!
//! # Timeouts
//!
//! No request timeout is configured. Callers that need bounded latency
//! should wrap calls in `tokio::time::timeout`.

mod newtypes;

pub use newtypes::HostUrl;

use crate::error::ConfigError;

/// Environment variable read by [`ClientConfig::from_env`].
pub const HOST_ENV_VAR: &str = "HOST";

/// Configuration for the accounts API client.
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`. Clients take a copy at
/// construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    host: HostUrl,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Creates a configuration for the given host with all defaults.
    #[must_use]
    pub const fn new(host: HostUrl) -> Self {
        Self {
            host,
            user_agent_prefix: None,
        }
    }

    /// Loads the host from the [`HOST_ENV_VAR`] environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironmentVariable`] if the variable is
    /// unset or not valid unicode, and [`ConfigError::InvalidHostUrl`] if its
    /// value is not a valid host.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(HOST_ENV_VAR)
    }

    /// Loads the host from the named environment variable.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_env_var(name: &str) -> Result<Self, ConfigError> {
        let value = std::env::var(name).map_err(|_| ConfigError::MissingEnvironmentVariable {
            name: name.to_string(),
        })?;
        Ok(Self::new(HostUrl::new(value)?))
    }

    /// Returns the API host.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// `host` is required. `user_agent_prefix` defaults to `None`.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API host (required).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `host` is not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;

        Ok(ClientConfig {
            host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
