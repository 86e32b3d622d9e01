//! Error types for client configuration.
//!
//! This module contains the error type returned while building a
//! [`ClientConfig`](crate::ClientConfig). Errors raised while talking to the
//! API live in [`clients`](crate::clients) and [`rest`](crate::rest).
//!
//! # Example
//!
//! ```rust
//! use form3_api::{ConfigError, HostUrl};
//!
//! let result = HostUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidHostUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'http://localhost:8080').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The environment variable holding the host is not set.
    #[error("Environment variable '{name}' is not set. It must contain the API host (e.g., 'http://localhost:8080').")]
    MissingEnvironmentVariable {
        /// The name of the variable that was read.
        name: String,
    },
}
