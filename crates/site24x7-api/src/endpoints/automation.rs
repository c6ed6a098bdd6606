use super::{Endpoint, Entity};
use crate::models::{URL_ACTION_TYPE, UrlAutomation};

pub type UrlAutomations = dyn Endpoint<UrlAutomation>;

impl Entity for UrlAutomation {
    const RESOURCE: &'static str = "it_automation";

    fn id(&self) -> &str {
        &self.action_id
    }

    fn is_kind(&self) -> bool {
        self.action_type == URL_ACTION_TYPE
    }
}
