//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .no_rate_limit()
        .build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.rate_limit.is_some());
    assert!(config.user_agent.starts_with("f1-dataset/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://ergast.com/api/f1")
        .timeout(Duration::from_secs(5))
        .user_agent("test-agent/1.0")
        .no_rate_limit()
        .build();

    assert_eq!(
        config.base_url,
        Some("https://ergast.com/api/f1".to_string())
    );
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert!(config.rate_limit.is_none());
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("limit", "100")
        .query("offset", "200")
        .timeout(Duration::from_secs(10));

    assert_eq!(config.query.get("limit"), Some(&"100".to_string()));
    assert_eq!(config.query.get("offset"), Some(&"200".to_string()));
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn test_build_url_joins_slashes() {
    let config = HttpClientConfig::builder()
        .base_url("https://ergast.com/api/f1/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(
        client.build_url("/2021/drivers.json"),
        "https://ergast.com/api/f1/2021/drivers.json"
    );
    assert_eq!(
        client.build_url("2021.json"),
        "https://ergast.com/api/f1/2021.json"
    );
    assert_eq!(
        client.build_url("https://other.example.com/x.json"),
        "https://other.example.com/x.json"
    );
}

#[tokio::test]
async fn test_get_json_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drivers.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "MRData": {"total": "1"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body: serde_json::Value = client
        .get_json_with_config("/drivers.json", RequestConfig::default())
        .await
        .unwrap();

    assert_eq!(body["MRData"]["total"], "1");
}

#[tokio::test]
async fn test_get_sends_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2021/results.json"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let config = RequestConfig::new().query("limit", "100").query("offset", "0");
    let response = client
        .get_with_config("/2021/results.json", config)
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_non_200_is_failure_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_with_config("/broken.json", RequestConfig::default())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "down");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_other_2xx_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accepted.json"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_with_config("/accepted.json", RequestConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 204, .. }));
}

#[tokio::test]
async fn test_not_found_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json_with_config::<serde_json::Value>("/missing.json", RequestConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let config = RequestConfig::new().timeout(Duration::from_millis(50));
    let err = client
        .get_with_config("/slow.json", config)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/garbage.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json_with_config::<serde_json::Value>("/garbage.json", RequestConfig::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}
