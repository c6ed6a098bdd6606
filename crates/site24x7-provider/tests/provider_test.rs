#![allow(clippy::unwrap_used)]
// Provider dispatch: registry lookup, import, schema export, and the
// non-monitor resource types.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;

use site24x7_api::Error;
use site24x7_api::fake::{Call, FakeClient};
use site24x7_api::models::{
    Header, MonitorGroup, RestApiMonitor, ThresholdProfile, URL_ACTION_TYPE, UrlAutomation,
};
use site24x7_provider::{Provider, ProviderError, ResourceState};

// ── Helpers ─────────────────────────────────────────────────────────

fn setup() -> (Arc<FakeClient>, Provider) {
    let fake = Arc::new(FakeClient::new());
    let provider = Provider::with_client(fake.clone());
    (fake, provider)
}

fn rest_api_monitor(id: &str) -> RestApiMonitor {
    RestApiMonitor {
        monitor_id: id.into(),
        display_name: "foo".into(),
        monitor_type: "RESTAPI".into(),
        website: "www.test.tld".into(),
        check_frequency: "5".into(),
        timeout: 10,
        http_method: "G".into(),
        http_protocol: "H1.1".into(),
        ssl_protocol: "Auto".into(),
        request_content_type: "JSON".into(),
        response_content_type: "T".into(),
        request_param: "req_param".into(),
        auth_user: "username".into(),
        auth_pass: "password".into(),
        client_certificate_password: "pass".into(),
        jwt_id: "111".into(),
        match_case: true,
        user_agent: "firefox".into(),
        custom_headers: vec![Header {
            name: "Accept".into(),
            value: "application/json".into(),
        }],
        use_name_server: true,
        location_profile_id: "456".into(),
        notification_profile_id: "789".into(),
        threshold_profile_id: "012".into(),
        monitor_groups: vec!["234".into(), "567".into()],
        user_group_ids: vec!["123".into(), "456".into()],
        ..RestApiMonitor::default()
    }
}

// ── Dispatch ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rest_api_monitor_create_and_update() {
    let (fake, provider) = setup();
    fake.rest_api_monitors
        .on_create(rest_api_monitor(""), Ok(rest_api_monitor("123")))
        .on_update(rest_api_monitor("123"), Err(Error::status(500, "error")));

    let mut state = ResourceState::from_value(json!({
        "display_name": "foo",
        "website": "www.test.tld",
        "check_frequency": "5",
        "timeout": 10,
        "http_method": "G",
        "http_protocol": "H1.1",
        "ssl_protocol": "Auto",
        "use_alpn": false,
        "request_content_type": "JSON",
        "response_content_type": "T",
        "request_param": "req_param",
        "auth_user": "username",
        "auth_pass": "password",
        "client_certificate_password": "pass",
        "jwt_id": "111",
        "match_case": true,
        "user_agent": "firefox",
        "custom_headers": { "Accept": "application/json" },
        "location_profile_id": "456",
        "notification_profile_id": "789",
        "threshold_profile_id": "012",
        "monitor_groups": ["234", "567"],
        "user_group_ids": ["123", "456"],
        "use_name_server": true,
        "json_schema_check": false
    }))
    .unwrap();

    provider
        .create("site24x7_rest_api_monitor", &mut state)
        .await
        .unwrap();
    assert_eq!(state.id, "123");

    let err = provider
        .update("site24x7_rest_api_monitor", &mut state)
        .await
        .unwrap_err();
    assert_eq!(err.api().and_then(Error::status_code), Some(500));
    fake.rest_api_monitors.assert_done();
}

#[tokio::test]
async fn test_unknown_type_is_rejected() {
    let (_fake, provider) = setup();

    let mut state = ResourceState::with_id("1");
    let err = provider
        .read("site24x7_server_monitor", &mut state)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::UnknownResourceType(_)));
}

#[tokio::test]
async fn test_import_reads_by_identifier_alone() {
    let (fake, provider) = setup();
    fake.monitor_groups.on_get(
        "g-1",
        Ok(MonitorGroup {
            group_id: "g-1".into(),
            display_name: "Web tier".into(),
            monitors: vec!["m-1".into(), "m-2".into()],
            health_threshold_count: Some(1),
            ..MonitorGroup::default()
        }),
    );

    let state = provider
        .import("site24x7_monitor_group", "g-1")
        .await
        .unwrap();

    assert_eq!(state.id, "g-1");
    assert_eq!(state.get("display_name"), Some(&json!("Web tier")));
    assert_eq!(state.get("monitors"), Some(&json!(["m-1", "m-2"])));
    assert_eq!(state.get("health_threshold_count"), Some(&json!(1)));
    assert_eq!(fake.monitor_groups.calls(), vec![Call::Get("g-1".into())]);
}

#[tokio::test]
async fn test_url_action_maps_to_url_automation() {
    let (fake, provider) = setup();
    let submitted = UrlAutomation {
        action_name: "hook".into(),
        action_type: URL_ACTION_TYPE,
        action_method: "P".into(),
        action_url: "https://hooks.test.tld/alert".into(),
        action_timeout: 30,
        send_in_json_format: true,
        ..UrlAutomation::default()
    };
    let mut created = submitted.clone();
    created.action_id = "act-1".into();
    fake.url_automations.on_create(submitted, Ok(created));

    let mut state = ResourceState::from_value(json!({
        "name": "hook",
        "url": "https://hooks.test.tld/alert",
        "send_in_json_format": true
    }))
    .unwrap();
    provider
        .create("site24x7_url_action", &mut state)
        .await
        .unwrap();

    assert_eq!(state.id, "act-1");
    assert_eq!(state.get("method"), Some(&json!("P")));
    assert_eq!(state.get("timeout"), Some(&json!(30)));
}

#[tokio::test]
async fn test_threshold_profile_rejects_unknown_monitor_type() {
    let (fake, provider) = setup();

    let mut state = ResourceState::from_value(json!({
        "profile_name": "strict",
        "type": "HOMEPAGE"
    }))
    .unwrap();
    let err = provider
        .create("site24x7_threshold_profile", &mut state)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Conversion { .. }));
    assert!(fake.threshold_profiles.calls().is_empty());
}

#[tokio::test]
async fn test_threshold_profile_round_trips_type_attribute() {
    let (fake, provider) = setup();
    let profile = ThresholdProfile {
        profile_name: "strict".into(),
        monitor_type: "URL".into(),
        profile_type: 1,
        down_location_threshold: 2,
        ..ThresholdProfile::default()
    };
    let mut created = profile.clone();
    created.profile_id = "thr-9".into();
    fake.threshold_profiles.on_create(profile, Ok(created));

    let mut state = ResourceState::from_value(json!({
        "profile_name": "strict",
        "type": "URL",
        "down_location_threshold": 2
    }))
    .unwrap();
    provider
        .create("site24x7_threshold_profile", &mut state)
        .await
        .unwrap();

    assert_eq!(state.id, "thr-9");
    assert_eq!(state.get("type"), Some(&json!("URL")));
}

#[tokio::test]
async fn test_read_without_identifier_is_rejected() {
    let (fake, provider) = setup();

    let mut state = ResourceState::default();
    let err = provider
        .read("site24x7_user_group", &mut state)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::MissingId));
    assert!(fake.user_groups.calls().is_empty());
}

// ── Schema export ───────────────────────────────────────────────────

#[test]
fn test_schema_covers_every_resource_type() {
    let (_fake, provider) = setup();
    let schema = provider.schema();
    let resources = schema["resources"].as_object().unwrap();

    assert_eq!(resources.len(), provider.resource_types().len());
    for name in provider.resource_types() {
        assert!(resources.contains_key(name), "missing schema for {name}");
    }

    let ssl = &resources["site24x7_ssl_monitor"]["attributes"];
    assert_eq!(ssl["port"]["default"], 443);
    assert_eq!(ssl["display_name"]["required"], true);
    assert_eq!(ssl["location_profile_id"]["computed"], true);

    let website = &resources["site24x7_website_monitor"]["attributes"];
    assert_eq!(website["auth_pass"]["sensitive"], true);
    assert_eq!(website["actions"]["type"], "map_of_string");
}
