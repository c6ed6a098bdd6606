#![allow(clippy::unwrap_used)]
// Integration tests for `RestClient` and the typed endpoints using wiremock.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{any, body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use site24x7_api::models::{MonitorType, WebsiteMonitor};
use site24x7_api::{
    Client, ClientConfig, DataCenter, Error, OAuth2Credentials, OAuth2TokenSource, RestClient, RetryConfig, Site24x7,
    StaticToken, TokenSource, TransportConfig,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        min_wait: Duration::from_millis(1),
        max_wait: Duration::from_millis(5),
        max_retries,
    }
}

async fn setup(max_retries: u32) -> (MockServer, Client) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/api", server.uri())).unwrap();
    let rest = RestClient::with_client(
        reqwest::Client::new(),
        base_url,
        Arc::new(StaticToken::new("test-token")),
        fast_retry(max_retries),
    );
    (server, Client::from_rest(Arc::new(rest)))
}

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "code": 0, "message": "success", "data": data })
}

fn website_json(id: &str) -> serde_json::Value {
    json!({
        "monitor_id": id,
        "display_name": "foo",
        "type": "URL",
        "website": "https://www.test.tld",
        "check_frequency": "5",
        "timeout": 10,
        "http_method": "G",
        "location_profile_id": "456",
        "notification_profile_id": "789",
        "threshold_profile_id": "012",
        "monitor_groups": ["234", "567"],
        "user_group_ids": ["123", "456"]
    })
}

// ── CRUD tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_sends_token_and_unwraps_envelope() {
    let (server, client) = setup(0).await;

    Mock::given(method("GET"))
        .and(path("/api/monitors/123"))
        .and(header("Authorization", "Zoho-oauthtoken test-token"))
        .and(header("Accept", "application/json; version=2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(website_json("123"))))
        .mount(&server)
        .await;

    let monitor = client.website_monitors().get("123").await.unwrap();

    assert_eq!(monitor.monitor_id, "123");
    assert_eq!(monitor.display_name, "foo");
    assert_eq!(monitor.monitor_groups, vec!["234", "567"]);
}

#[tokio::test]
async fn test_create_posts_json_body() {
    let (server, client) = setup(0).await;

    Mock::given(method("POST"))
        .and(path("/api/monitors"))
        .and(header("Content-Type", "application/json;charset=UTF-8"))
        .and(body_partial_json(json!({ "display_name": "foo", "type": "URL" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(website_json("999"))))
        .expect(1)
        .mount(&server)
        .await;

    let monitor = WebsiteMonitor {
        display_name: "foo".into(),
        monitor_type: MonitorType::Url.to_string(),
        ..WebsiteMonitor::default()
    };
    let created = client.website_monitors().create(&monitor).await.unwrap();

    assert_eq!(created.monitor_id, "999");
}

#[tokio::test]
async fn test_update_puts_to_entity_id() {
    let (server, client) = setup(0).await;

    Mock::given(method("PUT"))
        .and(path("/api/monitors/123"))
        .and(body_partial_json(json!({ "monitor_id": "123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(website_json("123"))))
        .expect(1)
        .mount(&server)
        .await;

    let monitor: WebsiteMonitor = serde_json::from_value(website_json("123")).unwrap();
    let updated = client.website_monitors().update(&monitor).await.unwrap();

    assert_eq!(updated, monitor);
}

#[tokio::test]
async fn test_delete_not_found_is_not_retried() {
    let (server, client) = setup(3).await;

    Mock::given(method("DELETE"))
        .and(path("/api/user_groups/42"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "error_code": 1004, "message": "Not found" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client.user_groups().delete("42").await.unwrap_err();

    assert!(err.is_not_found(), "expected not found, got: {err:?}");
    assert_eq!(err.api_error_code(), Some(1004));
}

#[tokio::test]
async fn test_list_narrows_shared_monitor_path() {
    let (server, client) = setup(0).await;

    let mut ssl = website_json("2");
    ssl["type"] = json!("SSL_CERT");

    Mock::given(method("GET"))
        .and(path("/api/monitors"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!([website_json("1"), ssl]))),
        )
        .mount(&server)
        .await;

    let monitors = client.website_monitors().list().await.unwrap();

    assert_eq!(monitors.len(), 1);
    assert_eq!(monitors[0].monitor_id, "1");
}

// ── Retry tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_retries_server_errors_then_succeeds() {
    let (server, client) = setup(3).await;

    Mock::given(method("GET"))
        .and(path("/api/location_profiles"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/location_profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "profile_id": "1", "profile_name": "Default" }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let profiles = client.location_profiles().list().await.unwrap();

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].profile_name, "Default");
}

#[tokio::test]
async fn test_gives_up_after_max_retries() {
    let (server, client) = setup(2).await;

    Mock::given(method("GET"))
        .and(path("/api/monitors/1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(3)
        .mount(&server)
        .await;

    let err = client.ssl_monitors().get("1").await.unwrap_err();

    assert!(
        matches!(err, Error::Status { status: 503, ref message, .. } if message == "unavailable"),
        "expected 503 status error, got: {err:?}"
    );
}

#[tokio::test]
async fn test_client_errors_surface_immediately() {
    let (server, client) = setup(4).await;

    Mock::given(method("POST"))
        .and(path("/api/threshold_profiles"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "error_code": 2001, "message": "invalid type" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .threshold_profiles()
        .create(&site24x7_api::models::ThresholdProfile::default())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(400));
    assert!(!err.is_transient());
}

// ── OAuth2 tests ────────────────────────────────────────────────────

fn credentials() -> OAuth2Credentials {
    OAuth2Credentials {
        client_id: "client".into(),
        client_secret: "secret".to_string().into(),
        refresh_token: "refresh".to_string().into(),
    }
}

#[tokio::test]
async fn test_oauth2_token_is_cached() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("client_id=client"))
        .and(body_string_contains("refresh_token=refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "minted",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source = OAuth2TokenSource::new(
        &format!("{}/oauth/v2/token", server.uri()),
        credentials(),
        &TransportConfig::default(),
    )
    .unwrap();

    let first = source.token().await.unwrap();
    let second = source.token().await.unwrap();

    use secrecy::ExposeSecret;
    assert_eq!(first.expose_secret(), "minted");
    assert_eq!(second.expose_secret(), "minted");
}

#[tokio::test]
async fn test_oauth2_grant_error_is_authentication_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "invalid_code" })))
        .mount(&server)
        .await;

    let source = OAuth2TokenSource::new(
        &format!("{}/oauth/v2/token", server.uri()),
        credentials(),
        &TransportConfig::default(),
    )
    .unwrap();

    let err = source.token().await.unwrap_err();

    assert!(
        matches!(err, Error::Authentication { ref message } if message == "invalid_code"),
        "expected Authentication error, got: {err:?}"
    );
}

#[tokio::test]
async fn test_unreachable_token_endpoint_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = ClientConfig::new(DataCenter::Us, credentials());
    config.api_base_url = Some(format!("{}/api", server.uri()));
    // nothing listens on port 1
    config.token_url = Some("http://127.0.0.1:1/oauth/v2/token".into());
    config.transport.retry = RetryConfig {
        min_wait: Duration::from_secs(5),
        max_wait: Duration::from_secs(5),
        max_retries: 3,
    };
    let client = Client::new(&config).unwrap();

    let started = std::time::Instant::now();
    let err = client.location_profiles().list().await.unwrap_err();

    assert!(
        matches!(err, Error::Authentication { ref message } if message.starts_with("token request failed")),
        "expected Authentication error, got: {err:?}"
    );
    assert!(!err.is_transient());
    assert!(started.elapsed() < Duration::from_secs(5));
}
