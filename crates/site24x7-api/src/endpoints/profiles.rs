use super::{Endpoint, Entity};
use crate::models::{LocationProfile, NotificationProfile, ThresholdProfile};

pub type LocationProfiles = dyn Endpoint<LocationProfile>;
pub type NotificationProfiles = dyn Endpoint<NotificationProfile>;
pub type ThresholdProfiles = dyn Endpoint<ThresholdProfile>;

impl Entity for LocationProfile {
    const RESOURCE: &'static str = "location_profiles";

    fn id(&self) -> &str {
        &self.profile_id
    }
}

impl Entity for NotificationProfile {
    const RESOURCE: &'static str = "notification_profiles";

    fn id(&self) -> &str {
        &self.profile_id
    }
}

impl Entity for ThresholdProfile {
    const RESOURCE: &'static str = "threshold_profiles";

    fn id(&self) -> &str {
        &self.profile_id
    }
}
