//! Resource implementations.
//!
//! Each resource implements [`RestResource`](crate::rest::RestResource) and
//! exposes a repository alias bound to it.
//!
//! # Available Resources
//!
//! - [`Account`]: Bank accounts under `/v1/organisation/accounts`

mod account;

pub use account::{
    Account, AccountAttributes, AccountClassification, AccountRepository, AccountStatus,
    ACCOUNT_TYPE,
};
