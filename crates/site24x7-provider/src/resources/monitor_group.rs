use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use site24x7_api::models::MonitorGroup;
use site24x7_api::{Endpoint, Site24x7};

use super::ManagedResource;
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};

/// Attributes of `site24x7_monitor_group`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorGroupResource {
    pub display_name: String,
    pub description: String,
    pub monitors: Vec<String>,
    pub health_threshold_count: Option<u32>,
}

#[async_trait]
impl ManagedResource for MonitorGroupResource {
    const TYPE_NAME: &'static str = "site24x7_monitor_group";

    type Entity = MonitorGroup;

    fn endpoint(client: &dyn Site24x7) -> &dyn Endpoint<MonitorGroup> {
        client.monitor_groups()
    }

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("display_name", Attribute::string().required())
            .with_attribute("description", Attribute::string())
            .with_attribute("monitors", Attribute::list().describe("Member monitor ids"))
            .with_attribute(
                "health_threshold_count",
                Attribute::int().describe("Members that must be down before the group is"),
            )
    }

    async fn to_entity(
        &mut self,
        id: &str,
        _client: &dyn Site24x7,
    ) -> Result<MonitorGroup, ProviderError> {
        Ok(MonitorGroup {
            group_id: id.to_owned(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            monitors: self.monitors.clone(),
            health_threshold_count: self.health_threshold_count,
        })
    }

    fn apply(&mut self, group: &MonitorGroup) {
        self.display_name.clone_from(&group.display_name);
        self.description.clone_from(&group.description);
        self.monitors.clone_from(&group.monitors);
        self.health_threshold_count = group.health_threshold_count;
    }
}
