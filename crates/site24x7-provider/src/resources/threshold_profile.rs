use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use site24x7_api::models::{MonitorType, ThresholdProfile};
use site24x7_api::{Endpoint, Site24x7};

use super::ManagedResource;
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};

fn default_profile_type() -> i32 {
    1
}
fn default_down_location_threshold() -> u32 {
    1
}

/// Attributes of `site24x7_threshold_profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdProfileResource {
    pub profile_name: String,
    /// Monitor type the profile applies to, e.g. `URL`.
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub profile_type: i32,
    pub down_location_threshold: u32,
    pub website_content_modified: bool,
}

impl Default for ThresholdProfileResource {
    fn default() -> Self {
        Self {
            profile_name: String::new(),
            monitor_type: String::new(),
            profile_type: default_profile_type(),
            down_location_threshold: default_down_location_threshold(),
            website_content_modified: false,
        }
    }
}

#[async_trait]
impl ManagedResource for ThresholdProfileResource {
    const TYPE_NAME: &'static str = "site24x7_threshold_profile";

    type Entity = ThresholdProfile;

    fn endpoint(client: &dyn Site24x7) -> &dyn Endpoint<ThresholdProfile> {
        client.threshold_profiles()
    }

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("profile_name", Attribute::string().required())
            .with_attribute(
                "type",
                Attribute::string()
                    .required()
                    .describe("Monitor type: URL, SSL_CERT, RESTAPI or AMAZON"),
            )
            .with_attribute(
                "profile_type",
                Attribute::int().default_value(default_profile_type()),
            )
            .with_attribute(
                "down_location_threshold",
                Attribute::int().default_value(default_down_location_threshold()),
            )
            .with_attribute(
                "website_content_modified",
                Attribute::bool().default_value(false),
            )
    }

    async fn to_entity(
        &mut self,
        id: &str,
        _client: &dyn Site24x7,
    ) -> Result<ThresholdProfile, ProviderError> {
        if self.monitor_type.parse::<MonitorType>().is_err() {
            return Err(ProviderError::Conversion {
                resource: Self::TYPE_NAME,
                message: format!("unsupported monitor type '{}'", self.monitor_type),
            });
        }

        Ok(ThresholdProfile {
            profile_id: id.to_owned(),
            profile_name: self.profile_name.clone(),
            monitor_type: self.monitor_type.clone(),
            profile_type: self.profile_type,
            down_location_threshold: self.down_location_threshold,
            website_content_modified: self.website_content_modified,
        })
    }

    fn apply(&mut self, profile: &ThresholdProfile) {
        self.profile_name.clone_from(&profile.profile_name);
        self.monitor_type.clone_from(&profile.monitor_type);
        self.profile_type = profile.profile_type;
        self.down_location_threshold = profile.down_location_threshold;
        self.website_content_modified = profile.website_content_modified;
    }
}
