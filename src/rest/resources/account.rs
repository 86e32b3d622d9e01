//! Account resource implementation.
//!
//! This module provides the [`Account`] resource for the organisation
//! accounts endpoints, and [`AccountRepository`], the repository bound to it.
//!
//! # Example
//!
//! ```rust,ignore
//! use form3_api::rest::Repository;
//! use form3_api::rest::resources::{Account, AccountAttributes, AccountRepository};
//! use form3_api::{ClientConfig, RestClient};
//!
//! let accounts = AccountRepository::new(RestClient::new(&ClientConfig::from_env()?)?);
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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{ResourceOperation, ResourcePath, ResourceRepository, RestResource};
use crate::HttpMethod;

/// The `type` value the API uses for accounts.
pub const ACCOUNT_TYPE: &str = "accounts";

/// A bank account registered with an organisation.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `created_on`, `modified_on` - Server timestamps
///
/// ## Writable Fields
/// - `id`, `organisation_id` - UUIDs chosen by the caller
/// - `type` - Always `"accounts"`
/// - `version` - Optimistic-concurrency counter, echoed on delete
/// - `attributes` - The account details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// The unique identifier of the account (a UUID).
    #[serde(default)]
    pub id: String,

    /// The organisation that owns the account (a UUID).
    #[serde(default)]
    pub organisation_id: String,

    /// The resource type, always `"accounts"`.
    #[serde(rename = "type", default)]
    pub resource_type: String,

    /// The current version of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// The account details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AccountAttributes>,

    /// When the account was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_on: Option<DateTime<Utc>>,

    /// When the account was last modified.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub modified_on: Option<DateTime<Utc>>,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            id: String::new(),
            organisation_id: String::new(),
            resource_type: ACCOUNT_TYPE.to_string(),
            version: None,
            attributes: None,
            created_on: None,
            modified_on: None,
        }
    }
}

impl RestResource for Account {
    const NAME: &'static str = "Account";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "/v1/organisation/accounts",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Fetch,
            &["id"],
            "/v1/organisation/accounts/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id", "version"],
            "/v1/organisation/accounts/{id}?version={version}",
        ),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}

/// The repository for [`Account`] resources.
pub type AccountRepository<C> = ResourceRepository<Account, C>;

/// Whether an account is held by a person or a business.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountClassification {
    /// A personal account.
    Personal,
    /// A business account.
    Business,
}

/// Lifecycle status of an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Awaiting confirmation.
    Pending,
    /// Confirmed and active.
    Confirmed,
    /// Confirmation failed.
    Failed,
}

/// The details of an [`Account`].
///
/// The API validates which fields are required for a given country; this
/// type leaves all of them optional and omits absent ones from the request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccountAttributes {
    /// ISO 3166-1 code of the country the account is held in (e.g., "GB").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// ISO 4217 code of the account currency (e.g., "GBP").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,

    /// Local country bank identifier (e.g., a UK sort code).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,

    /// Identifies the type of `bank_id` (e.g., "GBDSC").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id_code: Option<String>,

    /// SWIFT BIC in 8 or 11 character format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,

    /// The account number. Generated by the API when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// IBAN of the account. Generated by the API when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,

    /// Name of the account holder, up to four lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<String>>,

    /// Alternative names of the account holder, up to three lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_names: Option<Vec<String>>,

    /// Personal or business account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_classification: Option<AccountClassification>,

    /// Whether the account is held jointly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint_account: Option<bool>,

    /// Whether the holder opted out of account matching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_matching_opt_out: Option<bool>,

    /// Additional information to identify the account (e.g., a roll number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_identification: Option<String>,

    /// Whether the account has been switched to another provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switched: Option<bool>,

    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,

    /// Reason for the current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{get_path, Envelope};
    use serde_json::json;

    fn sample_account() -> Account {
        Account {
            id: "9d932617-294d-4065-a2cd-ba9de4af0988".to_string(),
            organisation_id: "7f249544-8841-4a1e-9576-8c6b32dce797".to_string(),
            version: Some(0),
            attributes: Some(AccountAttributes {
                name: Some(vec!["James".to_string()]),
                country: Some("UK".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_account_serializes_with_api_field_names() {
        let value = serde_json::to_value(Envelope::new(sample_account())).unwrap();

        assert_eq!(
            value,
            json!({
                "data": {
                    "id": "9d932617-294d-4065-a2cd-ba9de4af0988",
                    "organisation_id": "7f249544-8841-4a1e-9576-8c6b32dce797",
                    "type": "accounts",
                    "version": 0,
                    "attributes": {
                        "name": ["James"],
                        "country": "UK"
                    }
                }
            })
        );
    }

    #[test]
    fn test_account_deserializes_api_response() {
        let body = json!({
            "data": {
                "attributes": {
                    "account_classification": "Personal",
                    "alternative_names": null,
                    "bank_id": "400300",
                    "bank_id_code": "GBDSC",
                    "base_currency": "GBP",
                    "bic": "NWBKGB22",
                    "country": "GB",
                    "name": ["Samantha Holder"],
                    "status": "confirmed"
                },
                "created_on": "2021-06-01T12:00:00.000Z",
                "id": "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc",
                "modified_on": "2021-06-01T12:00:00.000Z",
                "organisation_id": "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c",
                "type": "accounts",
                "version": 0
            },
            "links": {
                "self": "/v1/organisation/accounts/ad27e265-9605-4b4b-a0e5-3003ea9cc4dc"
            }
        });

        let account = serde_json::from_value::<Envelope<Account>>(body)
            .unwrap()
            .into_inner();

        assert_eq!(account.id, "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc");
        assert_eq!(account.resource_type, ACCOUNT_TYPE);
        assert_eq!(account.version, Some(0));
        assert!(account.created_on.is_some());

        let attributes = account.attributes.unwrap();
        assert_eq!(
            attributes.account_classification,
            Some(AccountClassification::Personal)
        );
        assert_eq!(attributes.status, Some(AccountStatus::Confirmed));
        assert_eq!(attributes.bic.as_deref(), Some("NWBKGB22"));
        assert!(attributes.alternative_names.is_none());
    }

    #[test]
    fn test_read_only_timestamps_are_not_sent() {
        let mut account = sample_account();
        account.created_on = Some(Utc::now());

        let value = serde_json::to_value(&account).unwrap();
        assert!(value.get("created_on").is_none());
        assert!(value.get("modified_on").is_none());
    }

    #[test]
    fn test_empty_account_serializes_without_optional_fields() {
        let value = serde_json::to_value(Account::default()).unwrap();

        assert_eq!(
            value,
            json!({"id": "", "organisation_id": "", "type": "accounts"})
        );
    }

    #[test]
    fn test_envelope_round_trip_preserves_account() {
        let account = sample_account();

        let json = serde_json::to_string(&Envelope::new(account.clone())).unwrap();
        let decoded: Envelope<Account> = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.into_inner(), account);
    }

    #[test]
    fn test_account_paths() {
        let fetch = get_path(Account::PATHS, ResourceOperation::Fetch, &["id"]).unwrap();
        assert_eq!(fetch.template, "/v1/organisation/accounts/{id}");

        let delete =
            get_path(Account::PATHS, ResourceOperation::Delete, &["id", "version"]).unwrap();
        assert_eq!(
            delete.template,
            "/v1/organisation/accounts/{id}?version={version}"
        );
        assert_eq!(delete.http_method, HttpMethod::Delete);
    }
}
