//! # Form3 API Rust Library
//!
//! A typed client for the Form3 organisation accounts API, providing
//! validated configuration, a JSON transport with a closed error taxonomy,
//! and generic repositories over envelope-wrapped resources.
//!
//! ## Overview
//!
//! This library provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - An async HTTP transport ([`RestClient`]) implementing [`Transport`]
//! - API errors classified into [`ApiErrorKind`] categories
//! - A generic [`ResourceRepository`] for any [`RestResource`]
//! - The [`Account`] resource and its [`AccountRepository`]
//!
//! ## Quick Start
//!
//! ```rust
//! use form3_api::{ClientConfig, HostUrl};
//!
//! let config = ClientConfig::builder()
//!     .host(HostUrl::new("http://localhost:8080").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "http://localhost:8080");
//! ```
//!
//! ## Working With Accounts
//!
//! ```rust,ignore
//! use form3_api::{Account, AccountRepository, ClientConfig, Repository, RestClient};
//! use form3_api::rest::resources::AccountAttributes;
//!
//! // Reads the API base URL from the HOST environment variable
//! let client = RestClient::new(&ClientConfig::from_env()?)?;
//! let accounts = AccountRepository::new(client);
//!
//! let account = Account {
//!     id: "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc".to_string(),
//!     organisation_id: "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c".to_string(),
//!     version: Some(0),
//!     attributes: Some(AccountAttributes {
//!         country: Some("GB".to_string()),
//!         name: Some(vec!["Samantha Holder".to_string()]),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let created = accounts.create(&account).await?;
//! let fetched = accounts.fetch(&created.id).await?;
//! accounts.delete(&fetched.id, fetched.version.unwrap_or_default()).await?;
//! ```
//!
//! ## Handling Errors
//!
//! ```rust,ignore
//! use form3_api::ApiErrorKind;
//!
//! match accounts.fetch("ad27e265-9605-4b4b-a0e5-3003ea9cc4dc").await {
//!     Ok(account) => println!("Found {}", account.id),
//!     Err(e) if e.api_kind() == Some(ApiErrorKind::NotFound) => println!("No such account"),
//!     Err(e) => eprintln!("{e}"), // e.g. "[Bad Request]: id is not a valid uuid"
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: The host URL is validated on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One round trip per call**: No retries, caching or pagination

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ClientConfig, ClientConfigBuilder, HostUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, ApiErrorKind, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, RestClient, Transport,
};

// Re-export resource types
pub use rest::resources::{Account, AccountRepository};
pub use rest::{Envelope, Repository, ResourceError, ResourceRepository, RestResource};
