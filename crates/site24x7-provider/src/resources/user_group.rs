use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use site24x7_api::models::UserGroup;
use site24x7_api::{Endpoint, Site24x7};

use super::ManagedResource;
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};

/// Attributes of `site24x7_user_group`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroupResource {
    pub display_name: String,
    pub users: Vec<String>,
    pub attribute_group_id: String,
    pub product_id: i32,
}

#[async_trait]
impl ManagedResource for UserGroupResource {
    const TYPE_NAME: &'static str = "site24x7_user_group";

    type Entity = UserGroup;

    fn endpoint(client: &dyn Site24x7) -> &dyn Endpoint<UserGroup> {
        client.user_groups()
    }

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("display_name", Attribute::string().required())
            .with_attribute("users", Attribute::list().required())
            .with_attribute("attribute_group_id", Attribute::string())
            .with_attribute("product_id", Attribute::int().default_value(0))
    }

    async fn to_entity(
        &mut self,
        id: &str,
        _client: &dyn Site24x7,
    ) -> Result<UserGroup, ProviderError> {
        Ok(UserGroup {
            user_group_id: id.to_owned(),
            display_name: self.display_name.clone(),
            users: self.users.clone(),
            attribute_group_id: self.attribute_group_id.clone(),
            product_id: self.product_id,
        })
    }

    fn apply(&mut self, group: &UserGroup) {
        self.display_name.clone_from(&group.display_name);
        self.users.clone_from(&group.users);
        self.attribute_group_id
            .clone_from(&group.attribute_group_id);
        self.product_id = group.product_id;
    }
}
