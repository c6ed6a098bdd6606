use super::{Endpoint, Entity};
use crate::models::{MonitorGroup, UserGroup};

pub type MonitorGroups = dyn Endpoint<MonitorGroup>;
pub type UserGroups = dyn Endpoint<UserGroup>;

impl Entity for MonitorGroup {
    const RESOURCE: &'static str = "monitor_groups";

    fn id(&self) -> &str {
        &self.group_id
    }
}

impl Entity for UserGroup {
    const RESOURCE: &'static str = "user_groups";

    fn id(&self) -> &str {
        &self.user_group_id
    }
}
