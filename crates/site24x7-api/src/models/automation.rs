// ── IT automation ──

use serde::{Deserialize, Serialize};

use super::monitors::Header;

/// Action type code for URL (webhook) automations.
pub const URL_ACTION_TYPE: i32 = 1;

/// A webhook invoked when a monitor raises an alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlAutomation {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub action_id: String,
    pub action_name: String,
    pub action_type: i32,
    pub action_method: String,
    pub action_url: String,
    pub action_timeout: u32,
    pub custom_headers: Vec<Header>,
    pub send_incident_parameters: bool,
    pub send_custom_parameters: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_parameters: String,
    pub send_in_json_format: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
}
