use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use site24x7_api::models::{MonitorType, RestApiMonitor, ValueAndSeverity};
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
fn default_http_protocol() -> String {
    "H1.1".into()
}
fn default_ssl_protocol() -> String {
    "Auto".into()
}
fn default_response_content_type() -> String {
    "T".into()
}

/// Attributes of `site24x7_rest_api_monitor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestApiMonitorResource {
    pub display_name: String,
    pub website: String,
    pub check_frequency: String,
    pub timeout: u32,
    pub http_method: String,
    pub http_protocol: String,
    pub ssl_protocol: String,
    pub use_alpn: bool,
    pub use_ipv6: bool,
    pub request_content_type: String,
    pub response_content_type: String,
    pub request_param: String,
    pub auth_user: String,
    pub auth_pass: String,
    pub oauth2_provider: String,
    pub client_certificate_password: String,
    pub jwt_id: String,
    pub matching_keyword: Option<ValueAndSeverity>,
    pub unmatching_keyword: Option<ValueAndSeverity>,
    pub match_regex: Option<ValueAndSeverity>,
    pub match_case: bool,
    pub json_schema_check: bool,
    pub user_agent: String,
    pub custom_headers: BTreeMap<String, String>,
    pub use_name_server: bool,
    #[serde(flatten)]
    pub references: MonitorReferences,
}

impl Default for RestApiMonitorResource {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            website: String::new(),
            check_frequency: default_check_frequency(),
            timeout: default_timeout(),
            http_method: default_http_method(),
            http_protocol: default_http_protocol(),
            ssl_protocol: default_ssl_protocol(),
            use_alpn: false,
            use_ipv6: false,
            request_content_type: String::new(),
            response_content_type: default_response_content_type(),
            request_param: String::new(),
            auth_user: String::new(),
            auth_pass: String::new(),
            oauth2_provider: String::new(),
            client_certificate_password: String::new(),
            jwt_id: String::new(),
            matching_keyword: None,
            unmatching_keyword: None,
            match_regex: None,
            match_case: false,
            json_schema_check: false,
            user_agent: String::new(),
            custom_headers: BTreeMap::new(),
            use_name_server: false,
            references: MonitorReferences::default(),
        }
    }
}

#[async_trait]
impl ManagedResource for RestApiMonitorResource {
    const TYPE_NAME: &'static str = "site24x7_rest_api_monitor";

    type Entity = RestApiMonitor;

    fn endpoint(client: &dyn Site24x7) -> &dyn Endpoint<RestApiMonitor> {
        client.rest_api_monitors()
    }

    fn schema() -> Schema {
        let schema = Schema::v0()
            .with_attribute("display_name", Attribute::string().required())
            .with_attribute("website", Attribute::string().required())
            .with_attribute(
                "check_frequency",
                Attribute::string().default_value(default_check_frequency()),
            )
            .with_attribute("timeout", Attribute::int().default_value(default_timeout()))
            .with_attribute(
                "http_method",
                Attribute::string().default_value(default_http_method()),
            )
            .with_attribute(
                "http_protocol",
                Attribute::string().default_value(default_http_protocol()),
            )
            .with_attribute(
                "ssl_protocol",
                Attribute::string().default_value(default_ssl_protocol()),
            )
            .with_attribute("use_alpn", Attribute::bool().default_value(false))
            .with_attribute("use_ipv6", Attribute::bool().default_value(false))
            .with_attribute(
                "request_content_type",
                Attribute::string().describe("J (JSON), T (text) or F (form)"),
            )
            .with_attribute(
                "response_content_type",
                Attribute::string().default_value(default_response_content_type()),
            )
            .with_attribute("request_param", Attribute::string())
            .with_attribute("auth_user", Attribute::string())
            .with_attribute("auth_pass", Attribute::string().sensitive())
            .with_attribute("oauth2_provider", Attribute::string())
            .with_attribute(
                "client_certificate_password",
                Attribute::string().sensitive(),
            )
            .with_attribute("jwt_id", Attribute::string())
            .with_attribute("matching_keyword", Attribute::object())
            .with_attribute("unmatching_keyword", Attribute::object())
            .with_attribute("match_regex", Attribute::object())
            .with_attribute("match_case", Attribute::bool().default_value(false))
            .with_attribute("json_schema_check", Attribute::bool().default_value(false))
            .with_attribute("user_agent", Attribute::string())
            .with_attribute("custom_headers", Attribute::map())
            .with_attribute("use_name_server", Attribute::bool().default_value(false));
        with_monitor_references(schema)
    }

    async fn to_entity(
        &mut self,
        id: &str,
        client: &dyn Site24x7,
    ) -> Result<RestApiMonitor, ProviderError> {
        let action_ids = self.references.action_refs(Self::TYPE_NAME)?;
        self.references
            .resolve(client, MonitorType::RestApi)
            .await?;
        let refs = &self.references;

        Ok(RestApiMonitor {
            monitor_id: id.to_owned(),
            display_name: self.display_name.clone(),
            monitor_type: MonitorType::RestApi.to_string(),
            website: self.website.clone(),
            check_frequency: self.check_frequency.clone(),
            timeout: self.timeout,
            http_method: self.http_method.clone(),
            http_protocol: self.http_protocol.clone(),
            ssl_protocol: self.ssl_protocol.clone(),
            use_alpn: self.use_alpn,
            use_ipv6: self.use_ipv6,
            request_content_type: self.request_content_type.clone(),
            response_content_type: self.response_content_type.clone(),
            request_param: self.request_param.clone(),
            auth_user: self.auth_user.clone(),
            auth_pass: self.auth_pass.clone(),
            oauth2_provider: self.oauth2_provider.clone(),
            client_certificate_password: self.client_certificate_password.clone(),
            jwt_id: self.jwt_id.clone(),
            matching_keyword: self.matching_keyword.clone(),
            unmatching_keyword: self.unmatching_keyword.clone(),
            match_regex: self.match_regex.clone(),
            match_case: self.match_case,
            json_schema_check: self.json_schema_check,
            user_agent: self.user_agent.clone(),
            custom_headers: headers_to_entity(&self.custom_headers),
            use_name_server: self.use_name_server,
            location_profile_id: refs.location_profile_id.clone(),
            notification_profile_id: refs.notification_profile_id.clone(),
            threshold_profile_id: refs.threshold_profile_id.clone(),
            monitor_groups: refs.monitor_groups.clone(),
            user_group_ids: refs.user_group_ids.clone(),
            action_ids,
        })
    }

    fn apply(&mut self, monitor: &RestApiMonitor) {
        self.display_name.clone_from(&monitor.display_name);
        self.website.clone_from(&monitor.website);
        self.check_frequency.clone_from(&monitor.check_frequency);
        self.timeout = monitor.timeout;
        self.http_method.clone_from(&monitor.http_method);
        self.http_protocol.clone_from(&monitor.http_protocol);
        self.ssl_protocol.clone_from(&monitor.ssl_protocol);
        self.use_alpn = monitor.use_alpn;
        self.use_ipv6 = monitor.use_ipv6;
        self.request_content_type
            .clone_from(&monitor.request_content_type);
        self.response_content_type
            .clone_from(&monitor.response_content_type);
        self.request_param.clone_from(&monitor.request_param);
        self.auth_user.clone_from(&monitor.auth_user);
        mirror_secret(&mut self.auth_pass, &monitor.auth_pass);
        self.oauth2_provider.clone_from(&monitor.oauth2_provider);
        mirror_secret(
            &mut self.client_certificate_password,
            &monitor.client_certificate_password,
        );
        self.jwt_id.clone_from(&monitor.jwt_id);
        self.matching_keyword.clone_from(&monitor.matching_keyword);
        self.unmatching_keyword.clone_from(&monitor.unmatching_keyword);
        self.match_regex.clone_from(&monitor.match_regex);
        self.match_case = monitor.match_case;
        self.json_schema_check = monitor.json_schema_check;
        self.user_agent.clone_from(&monitor.user_agent);
        self.custom_headers = headers_from_entity(&monitor.custom_headers);
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
