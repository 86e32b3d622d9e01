//! Integration tests for the low-level HTTP client.
//!
//! These tests verify header handling and that [`HttpClient`] returns every
//! status code as a response rather than an error.

use form3_api::{ClientConfig, HostUrl, HttpClient, HttpMethod, HttpRequest};
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::new(HostUrl::new(server.uri()).unwrap());
    HttpClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_error_status_is_returned_as_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/organisation/accounts/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("x-request-id", "req-42")
                .set_body_string(r#"{"error_message":"record missing does not exist"}"#),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "/v1/organisation/accounts/missing")
        .build()
        .unwrap();

    let response = assert_ok!(client.request(request).await);

    assert_eq!(response.code, 404);
    assert!(!response.is_ok());
    assert_eq!(response.request_id(), Some("req-42"));
    assert_eq!(
        response.body,
        r#"{"error_message":"record missing does not exist"}"#
    );
}

#[tokio::test]
async fn test_post_sends_json_content_type_and_extra_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/organisation/accounts"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .and(header("idempotency-key", "abc"))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = HttpRequest::builder(HttpMethod::Post, "/v1/organisation/accounts")
        .body(r#"{"data":{}}"#)
        .header("Idempotency-Key", "abc")
        .build()
        .unwrap();

    let response = assert_ok!(client.request(request).await);

    assert_eq!(response.code, 201);
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_response_headers_are_case_insensitive() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/organisation/accounts/a"))
        .respond_with(ResponseTemplate::new(204).insert_header("X-Request-Id", "req-7"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = HttpRequest::builder(HttpMethod::Delete, "/v1/organisation/accounts/a")
        .build()
        .unwrap();

    let response = assert_ok!(client.request(request).await);

    assert_eq!(response.header("X-REQUEST-ID"), Some("req-7"));
    assert!(response.body.is_empty());
}
