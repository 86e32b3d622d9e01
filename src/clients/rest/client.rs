//! REST client implementation for the accounts API.
//!
//! This module provides the [`RestClient`] type, the production
//! [`Transport`]. It turns each operation into one [`HttpRequest`] and maps
//! the response to a decoded value or an [`HttpError`].

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::rest::Transport;
use crate::clients::{ApiError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::ClientConfig;

/// REST API client for the accounts API.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync` and holds no mutable state beyond the
/// connection pool, so a single instance can be shared across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use form3_api::{ClientConfig, RestClient};
/// use form3_api::clients::Transport;
/// use form3_api::rest::Envelope;
/// use form3_api::rest::resources::Account;
///
/// let client = RestClient::new(&ClientConfig::from_env()?)?;
///
/// let envelope: Envelope<Account> = client
///     .fetch("/v1/organisation/accounts/ad27e265-9605-4b4b-a0e5-3003ea9cc4dc")
///     .await?;
/// println!("Account: {}", envelope.data.id);
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

/// What the caller wants back from a successful response.
enum Expect {
    Body,
    Nothing,
}

impl RestClient {
    /// Creates a new REST client for the configured host.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        self.http_client.config()
    }

    /// Sends the request and splits the outcome on the status code.
    ///
    /// Returns the response when the status is below 400 and an
    /// [`HttpError::Api`] otherwise.
    async fn do_request(
        &self,
        request: HttpRequest,
        expect: Expect,
    ) -> Result<Option<HttpResponse>, HttpError> {
        let response = self.http_client.request(request).await?;

        if !response.is_ok() {
            return Err(ApiError::from_response(
                response.code,
                &response.body,
                response.request_id(),
            )
            .into());
        }

        match expect {
            Expect::Body => Ok(Some(response)),
            Expect::Nothing => Ok(None),
        }
    }

    /// Decodes a successful response body into `R`.
    fn decode<R: DeserializeOwned>(response: Option<HttpResponse>) -> Result<R, HttpError> {
        let body = response.map(|r| r.body).unwrap_or_default();
        serde_json::from_str(&body).map_err(HttpError::Decode)
    }
}

impl Transport for RestClient {
    async fn create<B, R>(&self, path: &str, body: &B) -> Result<R, HttpError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_string(body).map_err(HttpError::Encode)?;
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(payload)
            .build()?;

        let response = self.do_request(request, Expect::Body).await?;
        Self::decode(response)
    }

    async fn fetch<R>(&self, path: &str) -> Result<R, HttpError>
    where
        R: DeserializeOwned,
    {
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;

        let response = self.do_request(request, Expect::Body).await?;
        Self::decode(response)
    }

    async fn delete(&self, path: &str) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;

        self.do_request(request, Expect::Nothing).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostUrl;
    use serde_json::json;

    #[test]
    fn test_rest_client_keeps_config() {
        let config = ClientConfig::new(HostUrl::new("http://localhost:8080").unwrap());
        let client = RestClient::new(&config).unwrap();

        assert_eq!(client.config(), &config);
    }

    #[test]
    fn test_decode_reads_body() {
        let response = HttpResponse::new(200, Default::default(), r#"{"data":{"id":"1"}}"#.into());

        let value: serde_json::Value = RestClient::decode(Some(response)).unwrap();
        assert_eq!(value, json!({"data": {"id": "1"}}));
    }

    #[test]
    fn test_decode_reports_malformed_body() {
        let response = HttpResponse::new(201, Default::default(), "not json".into());

        let result: Result<serde_json::Value, _> = RestClient::decode(Some(response));
        assert!(matches!(result, Err(HttpError::Decode(_))));
    }

    #[test]
    fn test_decode_reports_empty_body() {
        let result: Result<serde_json::Value, _> = RestClient::decode(None);
        assert!(matches!(result, Err(HttpError::Decode(_))));
    }

    #[tokio::test]
    async fn test_create_reports_unserializable_body_before_sending() {
        // Port 9 (discard) is never contacted: encoding fails first.
        let config = ClientConfig::new(HostUrl::new("http://127.0.0.1:9").unwrap());
        let client = RestClient::new(&config).unwrap();

        let mut body = std::collections::HashMap::new();
        body.insert((1, 2), "tuple keys are not valid JSON object keys");

        let result: Result<serde_json::Value, _> = client.create("/v1/anything", &body).await;
        assert!(matches!(result, Err(HttpError::Encode(_))));
    }

    #[test]
    fn test_rest_client_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
