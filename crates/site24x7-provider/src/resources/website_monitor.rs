use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use site24x7_api::models::{MonitorType, ValueAndSeverity, WebsiteMonitor};
use site24x7_api::{Endpoint, Site24x7};

use super::{
    ManagedResource, MonitorReferences, headers_from_entity, headers_to_entity, mirror_secret,
};
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema, with_monitor_references};

fn default_check_frequency() -> String {
    "1".into()
}
fn default_timeout() -> u32 {
    10
}
fn default_http_method() -> String {
    "G".into()
}

/// Attributes of `site24x7_website_monitor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteMonitorResource {
    pub display_name: String,
    pub website: String,
    pub check_frequency: String,
    pub timeout: u32,
    pub http_method: String,
    pub auth_user: String,
    pub auth_pass: String,
    pub matching_keyword: Option<ValueAndSeverity>,
    pub unmatching_keyword: Option<ValueAndSeverity>,
    pub match_regex: Option<ValueAndSeverity>,
    pub match_case: bool,
    pub user_agent: String,
    pub custom_headers: BTreeMap<String, String>,
    pub up_status_codes: String,
    pub use_name_server: bool,
    #[serde(flatten)]
    pub references: MonitorReferences,
}

impl Default for WebsiteMonitorResource {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            website: String::new(),
            check_frequency: default_check_frequency(),
            timeout: default_timeout(),
            http_method: default_http_method(),
            auth_user: String::new(),
            auth_pass: String::new(),
            matching_keyword: None,
            unmatching_keyword: None,
            match_regex: None,
            match_case: false,
            user_agent: String::new(),
            custom_headers: BTreeMap::new(),
            up_status_codes: String::new(),
            use_name_server: false,
            references: MonitorReferences::default(),
        }
    }
}

#[async_trait]
impl ManagedResource for WebsiteMonitorResource {
    const TYPE_NAME: &'static str = "site24x7_website_monitor";

    type Entity = WebsiteMonitor;

    fn endpoint(client: &dyn Site24x7) -> &dyn Endpoint<WebsiteMonitor> {
        client.website_monitors()
    }

    fn schema() -> Schema {
        let schema = Schema::v0()
            .with_attribute("display_name", Attribute::string().required())
            .with_attribute(
                "website",
                Attribute::string().required().describe("URL to check"),
            )
            .with_attribute(
                "check_frequency",
                Attribute::string()
                    .default_value(default_check_frequency())
                    .describe("Minutes between checks"),
            )
            .with_attribute(
                "timeout",
                Attribute::int()
                    .default_value(default_timeout())
                    .describe("Seconds before the check times out"),
            )
            .with_attribute(
                "http_method",
                Attribute::string().default_value(default_http_method()),
            )
            .with_attribute("auth_user", Attribute::string())
            .with_attribute("auth_pass", Attribute::string().sensitive())
            .with_attribute("matching_keyword", Attribute::object())
            .with_attribute("unmatching_keyword", Attribute::object())
            .with_attribute("match_regex", Attribute::object())
            .with_attribute("match_case", Attribute::bool().default_value(false))
            .with_attribute("user_agent", Attribute::string())
            .with_attribute("custom_headers", Attribute::map())
            .with_attribute("up_status_codes", Attribute::string())
            .with_attribute("use_name_server", Attribute::bool().default_value(false));
        with_monitor_references(schema)
    }

    async fn to_entity(
        &mut self,
        id: &str,
        client: &dyn Site24x7,
    ) -> Result<WebsiteMonitor, ProviderError> {
        let action_ids = self.references.action_refs(Self::TYPE_NAME)?;
        self.references.resolve(client, MonitorType::Url).await?;
        let refs = &self.references;

        Ok(WebsiteMonitor {
            monitor_id: id.to_owned(),
            display_name: self.display_name.clone(),
            monitor_type: MonitorType::Url.to_string(),
            website: self.website.clone(),
            check_frequency: self.check_frequency.clone(),
            timeout: self.timeout,
            http_method: self.http_method.clone(),
            auth_user: self.auth_user.clone(),
            auth_pass: self.auth_pass.clone(),
            matching_keyword: self.matching_keyword.clone(),
            unmatching_keyword: self.unmatching_keyword.clone(),
            match_regex: self.match_regex.clone(),
            match_case: self.match_case,
            user_agent: self.user_agent.clone(),
            custom_headers: headers_to_entity(&self.custom_headers),
            up_status_codes: self.up_status_codes.clone(),
            use_name_server: self.use_name_server,
            location_profile_id: refs.location_profile_id.clone(),
            notification_profile_id: refs.notification_profile_id.clone(),
            threshold_profile_id: refs.threshold_profile_id.clone(),
            monitor_groups: refs.monitor_groups.clone(),
            user_group_ids: refs.user_group_ids.clone(),
            action_ids,
        })
    }

    fn apply(&mut self, monitor: &WebsiteMonitor) {
        self.display_name.clone_from(&monitor.display_name);
        self.website.clone_from(&monitor.website);
        self.check_frequency.clone_from(&monitor.check_frequency);
        self.timeout = monitor.timeout;
        self.http_method.clone_from(&monitor.http_method);
        self.auth_user.clone_from(&monitor.auth_user);
        mirror_secret(&mut self.auth_pass, &monitor.auth_pass);
        self.matching_keyword.clone_from(&monitor.matching_keyword);
        self.unmatching_keyword.clone_from(&monitor.unmatching_keyword);
        self.match_regex.clone_from(&monitor.match_regex);
        self.match_case = monitor.match_case;
        self.user_agent.clone_from(&monitor.user_agent);
        self.custom_headers = headers_from_entity(&monitor.custom_headers);
        self.up_status_codes.clone_from(&monitor.up_status_codes);
        self.use_name_server = monitor.use_name_server;
        self.references.mirror(
            &monitor.location_profile_id,
            &monitor.notification_profile_id,
            &monitor.threshold_profile_id,
            &monitor.monitor_groups,
            &monitor.user_group_ids,
            &monitor.action_ids,
        );
    }
}
