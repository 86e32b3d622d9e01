//! HTTP client for accounts API communication.
//!
//! This module provides the [`HttpClient`] type, which sends exactly one
//! request per call and hands back the raw response.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ClientConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Low-level HTTP client for the accounts API.
///
/// The client handles:
/// - URL construction from the configured host
/// - Default headers (`User-Agent`, `Accept: application/json`)
/// - Reading the status, headers and body of every response
///
/// It does not interpret status codes; see
/// [`RestClient`](crate::clients::RestClient) for that.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The wrapped `reqwest::Client` pools
/// connections internally, so one instance can serve concurrent callers.
///
/// # Example
///
/// ```rust,ignore
/// use form3_api::{ClientConfig, HostUrl};
/// use form3_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = ClientConfig::new(HostUrl::new("http://localhost:8080")?);
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/v1/organisation/accounts/ad27e265")
///     .build()?;
/// let response = client.request(request).await?;
/// println!("{} {}", response.code, response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The client configuration.
    config: ClientConfig,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured host.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Form3 API Library v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        tracing::debug!(host = %config.host(), "Created accounts API HTTP client");

        Ok(Self {
            client,
            config: config.clone(),
            default_headers,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the absolute URL for a request path.
    #[must_use]
    pub fn resolve_url(&self, path: &str) -> String {
        self.config.host().join(path)
    }

    /// Sends a single HTTP request.
    ///
    /// Any status code is returned as a response; only failures to validate,
    /// send, or read the request surface as errors. The response body is
    /// read to completion before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs while sending or reading (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.resolve_url(&request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        tracing::debug!(method = %request.http_method, %url, "Sending request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);

        tracing::debug!(
            status = code,
            request_id = response.request_id().unwrap_or("-"),
            "Received response"
        );

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostUrl;

    fn create_test_config() -> ClientConfig {
        ClientConfig::new(HostUrl::new("http://localhost:8080").unwrap())
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Form3 API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ClientConfig::builder()
            .host(HostUrl::new("http://localhost:8080").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Form3 API Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_resolve_url_appends_path_to_host() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.resolve_url("/v1/organisation/accounts"),
            "http://localhost:8080/v1/organisation/accounts"
        );
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected_before_sending() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let request = HttpRequest {
            http_method: HttpMethod::Post,
            path: "/v1/organisation/accounts".to_string(),
            body: None,
            extra_headers: None,
        };

        let result = client.request(request).await;
        assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
