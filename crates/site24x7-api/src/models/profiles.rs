// ── Profile entities ──
//
// Location, notification and threshold profiles are referenced by id
// from monitors and resolved as defaults when a monitor omits them.

use serde::{Deserialize, Serialize};

/// Where checks run from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationProfile {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile_id: String,
    pub profile_name: String,
    pub primary_location: String,
    pub secondary_locations: Vec<String>,
    #[serde(rename = "restrict_alt_loc")]
    pub restrict_alternate_location: bool,
}

/// How and when alerts are routed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationProfile {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile_id: String,
    pub profile_name: String,
    pub rca_needed: bool,
    pub notify_after_executing_actions: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downtime_notification_delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_notification: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub escalation_user_group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_wait_time: Option<u32>,
}

/// When a monitor is considered down or trouble.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdProfile {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile_id: String,
    pub profile_name: String,
    /// Monitor type this profile applies to, e.g. `URL`.
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub profile_type: i32,
    pub down_location_threshold: u32,
    pub website_content_modified: bool,
}
