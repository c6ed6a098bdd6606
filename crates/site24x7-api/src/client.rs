// Aggregate API client
//
// `Site24x7` is the seam resource converters program against: one typed
// endpoint per entity kind. `Client` wires all of them onto a single
// shared `RestClient`.

use std::sync::Arc;

use crate::auth::{DataCenter, OAuth2Credentials, OAuth2TokenSource, TokenSource};
use crate::endpoints::{
    AmazonMonitors, LocationProfiles, MonitorGroups, NotificationProfiles, RestApiMonitors,
    RestEndpoint, SslMonitors, ThresholdProfiles, UrlAutomations, UserGroups, WebsiteMonitors,
};
use crate::error::Error;
use crate::models::{
    AmazonMonitor, LocationProfile, MonitorGroup, NotificationProfile, RestApiMonitor, SslMonitor,
    ThresholdProfile, UrlAutomation, UserGroup, WebsiteMonitor,
};
use crate::rest::RestClient;
use crate::transport::TransportConfig;

/// Every endpoint the provider talks to.
pub trait Site24x7: Send + Sync {
    fn website_monitors(&self) -> &WebsiteMonitors;
    fn ssl_monitors(&self) -> &SslMonitors;
    fn rest_api_monitors(&self) -> &RestApiMonitors;
    fn amazon_monitors(&self) -> &AmazonMonitors;
    fn location_profiles(&self) -> &LocationProfiles;
    fn notification_profiles(&self) -> &NotificationProfiles;
    fn threshold_profiles(&self) -> &ThresholdProfiles;
    fn monitor_groups(&self) -> &MonitorGroups;
    fn user_groups(&self) -> &UserGroups;
    fn url_automations(&self) -> &UrlAutomations;
}

/// Connection settings for [`Client::new`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub data_center: DataCenter,
    pub credentials: OAuth2Credentials,
    pub transport: TransportConfig,
    /// Overrides the data center's API root (proxies, tests).
    pub api_base_url: Option<String>,
    /// Overrides the data center's token endpoint.
    pub token_url: Option<String>,
}

impl ClientConfig {
    pub fn new(data_center: DataCenter, credentials: OAuth2Credentials) -> Self {
        Self {
            data_center,
            credentials,
            transport: TransportConfig::default(),
            api_base_url: None,
            token_url: None,
        }
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or_else(|| self.data_center.api_base_url())
    }

    pub fn token_url(&self) -> &str {
        self.token_url
            .as_deref()
            .unwrap_or_else(|| self.data_center.token_url())
    }
}

/// HTTP implementation of [`Site24x7`].
pub struct Client {
    website_monitors: RestEndpoint<WebsiteMonitor>,
    ssl_monitors: RestEndpoint<SslMonitor>,
    rest_api_monitors: RestEndpoint<RestApiMonitor>,
    amazon_monitors: RestEndpoint<AmazonMonitor>,
    location_profiles: RestEndpoint<LocationProfile>,
    notification_profiles: RestEndpoint<NotificationProfile>,
    threshold_profiles: RestEndpoint<ThresholdProfile>,
    monitor_groups: RestEndpoint<MonitorGroup>,
    user_groups: RestEndpoint<UserGroup>,
    url_automations: RestEndpoint<UrlAutomation>,
}

impl Client {
    /// Build a client that authenticates with the OAuth2 refresh-token grant.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let tokens = OAuth2TokenSource::new(
            config.token_url(),
            config.credentials.clone(),
            &config.transport,
        )?;
        Self::with_token_source(config.api_base_url(), Arc::new(tokens), &config.transport)
    }

    /// Build a client around any token source.
    pub fn with_token_source(
        api_base_url: &str,
        tokens: Arc<dyn TokenSource>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let rest = RestClient::new(api_base_url, tokens, transport)?;
        Ok(Self::from_rest(Arc::new(rest)))
    }

    /// Wire every endpoint onto an existing REST client.
    pub fn from_rest(rest: Arc<RestClient>) -> Self {
        Self {
            website_monitors: RestEndpoint::new(Arc::clone(&rest)),
            ssl_monitors: RestEndpoint::new(Arc::clone(&rest)),
            rest_api_monitors: RestEndpoint::new(Arc::clone(&rest)),
            amazon_monitors: RestEndpoint::new(Arc::clone(&rest)),
            location_profiles: RestEndpoint::new(Arc::clone(&rest)),
            notification_profiles: RestEndpoint::new(Arc::clone(&rest)),
            threshold_profiles: RestEndpoint::new(Arc::clone(&rest)),
            monitor_groups: RestEndpoint::new(Arc::clone(&rest)),
            user_groups: RestEndpoint::new(Arc::clone(&rest)),
            url_automations: RestEndpoint::new(rest),
        }
    }
}

impl Site24x7 for Client {
    fn website_monitors(&self) -> &WebsiteMonitors {
        &self.website_monitors
    }

    fn ssl_monitors(&self) -> &SslMonitors {
        &self.ssl_monitors
    }

    fn rest_api_monitors(&self) -> &RestApiMonitors {
        &self.rest_api_monitors
    }

    fn amazon_monitors(&self) -> &AmazonMonitors {
        &self.amazon_monitors
    }

    fn location_profiles(&self) -> &LocationProfiles {
        &self.location_profiles
    }

    fn notification_profiles(&self) -> &NotificationProfiles {
        &self.notification_profiles
    }

    fn threshold_profiles(&self) -> &ThresholdProfiles {
        &self.threshold_profiles
    }

    fn monitor_groups(&self) -> &MonitorGroups {
        &self.monitor_groups
    }

    fn user_groups(&self) -> &UserGroups {
        &self.user_groups
    }

    fn url_automations(&self) -> &UrlAutomations {
        &self.url_automations
    }
}
