use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use site24x7_api::models::NotificationProfile;
use site24x7_api::{Endpoint, Site24x7};

use super::ManagedResource;
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};

/// Attributes of `site24x7_notification_profile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationProfileResource {
    pub profile_name: String,
    pub rca_needed: bool,
    pub notify_after_executing_actions: bool,
    pub downtime_notification_delay: Option<u32>,
    pub persistent_notification: Option<u32>,
    pub escalation_user_group_id: String,
    pub escalation_wait_time: Option<u32>,
}

#[async_trait]
impl ManagedResource for NotificationProfileResource {
    const TYPE_NAME: &'static str = "site24x7_notification_profile";

    type Entity = NotificationProfile;

    fn endpoint(client: &dyn Site24x7) -> &dyn Endpoint<NotificationProfile> {
        client.notification_profiles()
    }

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("profile_name", Attribute::string().required())
            .with_attribute(
                "rca_needed",
                Attribute::bool()
                    .default_value(false)
                    .describe("Attach a root cause analysis to down alerts"),
            )
            .with_attribute(
                "notify_after_executing_actions",
                Attribute::bool().default_value(false),
            )
            .with_attribute(
                "downtime_notification_delay",
                Attribute::int().describe("Polls to wait before alerting"),
            )
            .with_attribute(
                "persistent_notification",
                Attribute::int().describe("Polls between repeated alerts"),
            )
            .with_attribute("escalation_user_group_id", Attribute::string())
            .with_attribute(
                "escalation_wait_time",
                Attribute::int().describe("Minutes before escalating"),
            )
    }

    async fn to_entity(
        &mut self,
        id: &str,
        _client: &dyn Site24x7,
    ) -> Result<NotificationProfile, ProviderError> {
        Ok(NotificationProfile {
            profile_id: id.to_owned(),
            profile_name: self.profile_name.clone(),
            rca_needed: self.rca_needed,
            notify_after_executing_actions: self.notify_after_executing_actions,
            downtime_notification_delay: self.downtime_notification_delay,
            persistent_notification: self.persistent_notification,
            escalation_user_group_id: self.escalation_user_group_id.clone(),
            escalation_wait_time: self.escalation_wait_time,
        })
    }

    fn apply(&mut self, profile: &NotificationProfile) {
        self.profile_name.clone_from(&profile.profile_name);
        self.rca_needed = profile.rca_needed;
        self.notify_after_executing_actions = profile.notify_after_executing_actions;
        self.downtime_notification_delay = profile.downtime_notification_delay;
        self.persistent_notification = profile.persistent_notification;
        self.escalation_user_group_id
            .clone_from(&profile.escalation_user_group_id);
        self.escalation_wait_time = profile.escalation_wait_time;
    }
}
