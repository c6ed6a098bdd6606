// ── Group entities ──

use serde::{Deserialize, Serialize};

/// A named set of monitors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorGroup {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub monitors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_threshold_count: Option<u32>,
}

/// A set of users alerted together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroup {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_group_id: String,
    pub display_name: String,
    pub users: Vec<String>,
    pub attribute_group_id: String,
    pub product_id: i32,
}
