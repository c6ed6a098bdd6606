use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use site24x7_api::models::{MonitorType, SslMonitor};
use site24x7_api::{Endpoint, Site24x7};

use super::{ManagedResource, MonitorReferences};
use crate::error::ProviderError;
use crate::schema::{Attribute, Schema, with_monitor_references};

fn default_timeout() -> u32 {
    30
}
fn default_protocol() -> String {
    "HTTPS".into()
}
fn default_port() -> u32 {
    443
}
fn default_expire_days() -> u32 {
    30
}
fn default_http_protocol_version() -> String {
    "H1.1".into()
}

/// Attributes of `site24x7_ssl_monitor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SslMonitorResource {
    pub display_name: String,
    pub domain_name: String,
    pub timeout: u32,
    pub protocol: String,
    pub port: u32,
    /// Days before certificate expiry to start alerting.
    pub expire_days: u32,
    pub http_protocol_version: String,
    pub ignore_domain_mismatch: bool,
    pub ignore_trust: bool,
    #[serde(flatten)]
    pub references: MonitorReferences,
}

impl Default for SslMonitorResource {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            domain_name: String::new(),
            timeout: default_timeout(),
            protocol: default_protocol(),
            port: default_port(),
            expire_days: default_expire_days(),
            http_protocol_version: default_http_protocol_version(),
            ignore_domain_mismatch: false,
            ignore_trust: false,
            references: MonitorReferences::default(),
        }
    }
}

#[async_trait]
impl ManagedResource for SslMonitorResource {
    const TYPE_NAME: &'static str = "site24x7_ssl_monitor";

    type Entity = SslMonitor;

    fn endpoint(client: &dyn Site24x7) -> &dyn Endpoint<SslMonitor> {
        client.ssl_monitors()
    }

    fn schema() -> Schema {
        let schema = Schema::v0()
            .with_attribute("display_name", Attribute::string().required())
            .with_attribute("domain_name", Attribute::string().required())
            .with_attribute("timeout", Attribute::int().default_value(default_timeout()))
            .with_attribute(
                "protocol",
                Attribute::string().default_value(default_protocol()),
            )
            .with_attribute("port", Attribute::int().default_value(default_port()))
            .with_attribute(
                "expire_days",
                Attribute::int().default_value(default_expire_days()),
            )
            .with_attribute(
                "http_protocol_version",
                Attribute::string().default_value(default_http_protocol_version()),
            )
            .with_attribute(
                "ignore_domain_mismatch",
                Attribute::bool().default_value(false),
            )
            .with_attribute("ignore_trust", Attribute::bool().default_value(false));
        with_monitor_references(schema)
    }

    async fn to_entity(
        &mut self,
        id: &str,
        client: &dyn Site24x7,
    ) -> Result<SslMonitor, ProviderError> {
        let action_ids = self.references.action_refs(Self::TYPE_NAME)?;
        self.references
            .resolve(client, MonitorType::SslCert)
            .await?;
        let refs = &self.references;

        Ok(SslMonitor {
            monitor_id: id.to_owned(),
            display_name: self.display_name.clone(),
            monitor_type: MonitorType::SslCert.to_string(),
            domain_name: self.domain_name.clone(),
            timeout: self.timeout,
            protocol: self.protocol.clone(),
            port: self.port,
            expire_days: self.expire_days,
            http_protocol_version: self.http_protocol_version.clone(),
            ignore_domain_mismatch: self.ignore_domain_mismatch,
            ignore_trust: self.ignore_trust,
            location_profile_id: refs.location_profile_id.clone(),
            notification_profile_id: refs.notification_profile_id.clone(),
            threshold_profile_id: refs.threshold_profile_id.clone(),
            monitor_groups: refs.monitor_groups.clone(),
            user_group_ids: refs.user_group_ids.clone(),
            action_ids,
        })
    }

    fn apply(&mut self, monitor: &SslMonitor) {
        self.display_name.clone_from(&monitor.display_name);
        self.domain_name.clone_from(&monitor.domain_name);
        self.timeout = monitor.timeout;
        self.protocol.clone_from(&monitor.protocol);
        self.port = monitor.port;
        self.expire_days = monitor.expire_days;
        self.http_protocol_version
            .clone_from(&monitor.http_protocol_version);
        self.ignore_domain_mismatch = monitor.ignore_domain_mismatch;
        self.ignore_trust = monitor.ignore_trust;
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
