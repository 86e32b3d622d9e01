//! HTTP client types for accounts API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Sends one request and returns the raw response
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response read from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`rest::Transport`]: The create/fetch/delete capability repositories use
//! - [`rest::RestClient`]: The production [`rest::Transport`]
//! - [`ApiError`] and [`HttpError`]: The error taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use form3_api::{ClientConfig, HostUrl};
//! use form3_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = ClientConfig::new(HostUrl::new("http://localhost:8080")?);
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/v1/organisation/accounts/ad27e265")
//!     .build()?;
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{ApiError, ApiErrorKind, HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

// Re-export REST transport types at the clients module level
pub use rest::{RestClient, Transport};
