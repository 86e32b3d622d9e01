//! Typed resources and repositories on top of the REST client.
//!
//! This module provides:
//!
//! - **[`Envelope<T>`]**: The `{"data": ...}` wrapper every payload travels in
//! - **[`RestResource`] trait**: How a resource type is named, identified and addressed
//! - **[`Repository`] trait**: Create, fetch and delete for one resource type
//! - **[`ResourceRepository`]**: The generic implementation shared by every resource
//! - **Path building**: URL templates with percent-encoded placeholders
//! - **[`ResourceError`]**: Error type for repository operations
//!
//! Concrete resources live in the [`resources`] submodule.
//!
//! # Example
//!
//! ```rust,ignore
//! use form3_api::{ClientConfig, RestClient};
//! use form3_api::rest::Repository;
//! use form3_api::rest::resources::{Account, AccountRepository};
//!
//! let client = RestClient::new(&ClientConfig::from_env()?)?;
//! let accounts = AccountRepository::new(client);
//!
//! let account = accounts.fetch("ad27e265-9605-4b4b-a0e5-3003ea9cc4dc").await?;
//! println!("Account version: {:?}", account.version);
//! ```

mod envelope;
mod errors;
mod path;
mod repository;
mod resource;
pub mod resources;

pub use envelope::Envelope;
pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use repository::{Repository, ResourceRepository};
pub use resource::RestResource;
