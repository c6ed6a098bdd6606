use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use site24x7_api::models::LocationProfile;
use site24x7_api::{Endpoint, Site24x7};

use super::ManagedResource;
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};

/// Attributes of `site24x7_location_profile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationProfileResource {
    pub profile_name: String,
    pub primary_location: String,
    pub secondary_locations: Vec<String>,
    /// Never fall back to locations outside this profile.
    pub restrict_alternate_location: bool,
}

#[async_trait]
impl ManagedResource for LocationProfileResource {
    const TYPE_NAME: &'static str = "site24x7_location_profile";

    type Entity = LocationProfile;

    fn endpoint(client: &dyn Site24x7) -> &dyn Endpoint<LocationProfile> {
        client.location_profiles()
    }

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("profile_name", Attribute::string().required())
            .with_attribute(
                "primary_location",
                Attribute::string().required().describe("Location code checks run from"),
            )
            .with_attribute("secondary_locations", Attribute::list())
            .with_attribute(
                "restrict_alternate_location",
                Attribute::bool().default_value(false),
            )
    }

    async fn to_entity(
        &mut self,
        id: &str,
        _client: &dyn Site24x7,
    ) -> Result<LocationProfile, ProviderError> {
        Ok(LocationProfile {
            profile_id: id.to_owned(),
            profile_name: self.profile_name.clone(),
            primary_location: self.primary_location.clone(),
            secondary_locations: self.secondary_locations.clone(),
            restrict_alternate_location: self.restrict_alternate_location,
        })
    }

    fn apply(&mut self, profile: &LocationProfile) {
        self.profile_name.clone_from(&profile.profile_name);
        self.primary_location.clone_from(&profile.primary_location);
        self.secondary_locations
            .clone_from(&profile.secondary_locations);
        self.restrict_alternate_location = profile.restrict_alternate_location;
    }
}
