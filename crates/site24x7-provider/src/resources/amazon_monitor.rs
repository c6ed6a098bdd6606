use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use site24x7_api::models::{AmazonMonitor, MonitorType};
use site24x7_api::{Endpoint, Site24x7};

use super::{ManagedResource, mirror_secret, resolve_user_groups};
use crate::defaults;
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};

fn default_discovery_frequency() -> u32 {
    5
}

/// Attributes of `site24x7_amazon_monitor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmazonMonitorResource {
    pub display_name: String,
    pub aws_access_key: String,
    pub aws_secret_key: String,
    /// Minutes between service discovery runs.
    pub aws_discovery_frequency: u32,
    /// Service codes to discover, e.g. `"1"` for EC2.
    pub aws_discover_services: Vec<String>,
    pub notification_profile_id: String,
    pub user_group_ids: Vec<String>,
}

impl Default for AmazonMonitorResource {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            aws_access_key: String::new(),
            aws_secret_key: String::new(),
            aws_discovery_frequency: default_discovery_frequency(),
            aws_discover_services: Vec::new(),
            notification_profile_id: String::new(),
            user_group_ids: Vec::new(),
        }
    }
}

#[async_trait]
impl ManagedResource for AmazonMonitorResource {
    const TYPE_NAME: &'static str = "site24x7_amazon_monitor";

    type Entity = AmazonMonitor;

    fn endpoint(client: &dyn Site24x7) -> &dyn Endpoint<AmazonMonitor> {
        client.amazon_monitors()
    }

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("display_name", Attribute::string().required())
            .with_attribute("aws_access_key", Attribute::string().required())
            .with_attribute("aws_secret_key", Attribute::string().required().sensitive())
            .with_attribute(
                "aws_discovery_frequency",
                Attribute::int().default_value(default_discovery_frequency()),
            )
            .with_attribute("aws_discover_services", Attribute::list())
            .with_attribute("notification_profile_id", Attribute::string().computed())
            .with_attribute("user_group_ids", Attribute::list().computed())
    }

    async fn to_entity(
        &mut self,
        id: &str,
        client: &dyn Site24x7,
    ) -> Result<AmazonMonitor, ProviderError> {
        if self.notification_profile_id.is_empty() {
            self.notification_profile_id = defaults::default_notification_profile(client)
                .await?
                .profile_id;
        }
        resolve_user_groups(&mut self.user_group_ids, client).await?;

        Ok(AmazonMonitor {
            monitor_id: id.to_owned(),
            display_name: self.display_name.clone(),
            monitor_type: MonitorType::Amazon.to_string(),
            access_key: self.aws_access_key.clone(),
            secret_key: self.aws_secret_key.clone(),
            discover_frequency: self.aws_discovery_frequency,
            discover_services: self.aws_discover_services.clone(),
            notification_profile_id: self.notification_profile_id.clone(),
            user_group_ids: self.user_group_ids.clone(),
        })
    }

    fn apply(&mut self, monitor: &AmazonMonitor) {
        self.display_name.clone_from(&monitor.display_name);
        self.aws_access_key.clone_from(&monitor.access_key);
        mirror_secret(&mut self.aws_secret_key, &monitor.secret_key);
        if monitor.discover_frequency != 0 {
            self.aws_discovery_frequency = monitor.discover_frequency;
        }
        self.aws_discover_services
            .clone_from(&monitor.discover_services);
        self.notification_profile_id
            .clone_from(&monitor.notification_profile_id);
        self.user_group_ids.clone_from(&monitor.user_group_ids);
    }
}
