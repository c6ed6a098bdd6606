// ── Monitor entities ──
//
// Wire shapes for the `/monitors` resource. All monitor kinds share the
// path and are told apart by their `type` member.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Monitor kinds managed by this crate, as spelled in the `type` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
pub enum MonitorType {
    #[strum(serialize = "URL")]
    Url,
    #[strum(serialize = "SSL_CERT")]
    SslCert,
    #[strum(serialize = "RESTAPI")]
    RestApi,
    #[strum(serialize = "AMAZON")]
    Amazon,
}

/// A custom HTTP header sent with each check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// An IT automation triggered on a given alert type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRef {
    pub action_id: String,
    pub alert_type: i32,
}

/// Keyword / regex match with the severity raised when it trips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueAndSeverity {
    pub value: String,
    pub severity: i32,
}

fn is_zero(v: &u32) -> bool {
    *v == 0
}

// ── Website ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub website: String,
    pub check_frequency: String,
    pub timeout: u32,
    pub http_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_user: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_pass: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_keyword: Option<ValueAndSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmatching_keyword: Option<ValueAndSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_regex: Option<ValueAndSeverity>,
    pub match_case: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
    pub custom_headers: Vec<Header>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub up_status_codes: String,
    pub use_name_server: bool,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    pub monitor_groups: Vec<String>,
    pub user_group_ids: Vec<String>,
    pub action_ids: Vec<ActionRef>,
}

// ── SSL certificate ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SslMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub domain_name: String,
    pub timeout: u32,
    pub protocol: String,
    pub port: u32,
    pub expire_days: u32,
    pub http_protocol_version: String,
    pub ignore_domain_mismatch: bool,
    pub ignore_trust: bool,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    pub monitor_groups: Vec<String>,
    pub user_group_ids: Vec<String>,
    pub action_ids: Vec<ActionRef>,
}

// ── REST API ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestApiMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub website: String,
    pub check_frequency: String,
    pub timeout: u32,
    pub http_method: String,
    pub http_protocol: String,
    pub ssl_protocol: String,
    pub use_alpn: bool,
    pub use_ipv6: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_content_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub response_content_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_param: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_user: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_pass: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub oauth2_provider: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_certificate_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub jwt_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_keyword: Option<ValueAndSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmatching_keyword: Option<ValueAndSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_regex: Option<ValueAndSeverity>,
    pub match_case: bool,
    pub json_schema_check: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
    pub custom_headers: Vec<Header>,
    pub use_name_server: bool,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    pub monitor_groups: Vec<String>,
    pub user_group_ids: Vec<String>,
    pub action_ids: Vec<ActionRef>,
}

// ── Amazon ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmazonMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    #[serde(rename = "aws_access_key")]
    pub access_key: String,
    #[serde(rename = "aws_secret_key", skip_serializing_if = "String::is_empty")]
    pub secret_key: String,
    #[serde(rename = "aws_discovery_frequency", skip_serializing_if = "is_zero")]
    pub discover_frequency: u32,
    #[serde(rename = "aws_discover_services")]
    pub discover_services: Vec<String>,
    pub notification_profile_id: String,
    pub user_group_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn monitor_type_round_trips_wire_names() {
        assert_eq!(MonitorType::SslCert.as_ref(), "SSL_CERT");
        assert_eq!("RESTAPI".parse::<MonitorType>().ok(), Some(MonitorType::RestApi));
        assert!("HOMEPAGE".parse::<MonitorType>().is_err());
    }

    #[test]
    fn unsaved_monitor_omits_identifier() {
        let monitor = WebsiteMonitor {
            display_name: "foo".into(),
            monitor_type: MonitorType::Url.to_string(),
            ..WebsiteMonitor::default()
        };
        let value = serde_json::to_value(&monitor).expect("serialize");
        assert!(value.get("monitor_id").is_none());
        assert_eq!(value["type"], "URL");
        assert!(value.get("matching_keyword").is_none());
    }

    #[test]
    fn amazon_monitor_uses_aws_field_names() {
        let monitor: AmazonMonitor = serde_json::from_value(json!({
            "monitor_id": "9",
            "type": "AMAZON",
            "display_name": "aws",
            "aws_access_key": "AKIA",
            "aws_discovery_frequency": 5,
            "aws_discover_services": ["1", "3"],
            "notification_profile_id": "n",
            "user_group_ids": ["u"]
        }))
        .expect("deserialize");
        assert_eq!(monitor.access_key, "AKIA");
        assert_eq!(monitor.discover_frequency, 5);
        assert_eq!(monitor.discover_services, vec!["1", "3"]);
        assert!(monitor.secret_key.is_empty());
    }
}
