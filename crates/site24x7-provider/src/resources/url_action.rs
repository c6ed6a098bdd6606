use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use site24x7_api::models::{URL_ACTION_TYPE, UrlAutomation};
use site24x7_api::{Endpoint, Site24x7};

use super::{ManagedResource, headers_from_entity, headers_to_entity, mirror_secret};
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};

fn default_method() -> String {
    "P".into()
}
fn default_timeout() -> u32 {
    30
}

/// Attributes of `site24x7_url_action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlActionResource {
    pub name: String,
    pub url: String,
    /// `G`, `P`, `U` or `D`.
    pub method: String,
    pub timeout: u32,
    pub custom_headers: BTreeMap<String, String>,
    pub send_incident_parameters: bool,
    pub send_custom_parameters: bool,
    pub custom_parameters: String,
    pub send_in_json_format: bool,
    pub auth_method: String,
    pub username: String,
    pub password: String,
}

impl Default for UrlActionResource {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            method: default_method(),
            timeout: default_timeout(),
            custom_headers: BTreeMap::new(),
            send_incident_parameters: false,
            send_custom_parameters: false,
            custom_parameters: String::new(),
            send_in_json_format: false,
            auth_method: String::new(),
            username: String::new(),
            password: String::new(),
        }
    }
}

#[async_trait]
impl ManagedResource for UrlActionResource {
    const TYPE_NAME: &'static str = "site24x7_url_action";

    type Entity = UrlAutomation;

    fn endpoint(client: &dyn Site24x7) -> &dyn Endpoint<UrlAutomation> {
        client.url_automations()
    }

    fn schema() -> Schema {
        Schema::v0()
            .with_attribute("name", Attribute::string().required())
            .with_attribute(
                "url",
                Attribute::string().required().describe("Webhook called on alert"),
            )
            .with_attribute("method", Attribute::string().default_value(default_method()))
            .with_attribute("timeout", Attribute::int().default_value(default_timeout()))
            .with_attribute("custom_headers", Attribute::map())
            .with_attribute(
                "send_incident_parameters",
                Attribute::bool().default_value(false),
            )
            .with_attribute(
                "send_custom_parameters",
                Attribute::bool().default_value(false),
            )
            .with_attribute("custom_parameters", Attribute::string())
            .with_attribute("send_in_json_format", Attribute::bool().default_value(false))
            .with_attribute("auth_method", Attribute::string())
            .with_attribute("username", Attribute::string())
            .with_attribute("password", Attribute::string().sensitive())
    }

    async fn to_entity(
        &mut self,
        id: &str,
        _client: &dyn Site24x7,
    ) -> Result<UrlAutomation, ProviderError> {
        Ok(UrlAutomation {
            action_id: id.to_owned(),
            action_name: self.name.clone(),
            action_type: URL_ACTION_TYPE,
            action_method: self.method.clone(),
            action_url: self.url.clone(),
            action_timeout: self.timeout,
            custom_headers: headers_to_entity(&self.custom_headers),
            send_incident_parameters: self.send_incident_parameters,
            send_custom_parameters: self.send_custom_parameters,
            custom_parameters: self.custom_parameters.clone(),
            send_in_json_format: self.send_in_json_format,
            auth_method: self.auth_method.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    fn apply(&mut self, action: &UrlAutomation) {
        self.name.clone_from(&action.action_name);
        self.url.clone_from(&action.action_url);
        self.method.clone_from(&action.action_method);
        self.timeout = action.action_timeout;
        self.custom_headers = headers_from_entity(&action.custom_headers);
        self.send_incident_parameters = action.send_incident_parameters;
        self.send_custom_parameters = action.send_custom_parameters;
        self.custom_parameters.clone_from(&action.custom_parameters);
        self.send_in_json_format = action.send_in_json_format;
        self.auth_method.clone_from(&action.auth_method);
        self.username.clone_from(&action.username);
        mirror_secret(&mut self.password, &action.password);
    }
}
