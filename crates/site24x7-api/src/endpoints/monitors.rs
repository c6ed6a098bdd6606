use super::{Endpoint, Entity};
use crate::models::{AmazonMonitor, MonitorType, RestApiMonitor, SslMonitor, WebsiteMonitor};

pub type WebsiteMonitors = dyn Endpoint<WebsiteMonitor>;
pub type SslMonitors = dyn Endpoint<SslMonitor>;
pub type RestApiMonitors = dyn Endpoint<RestApiMonitor>;
pub type AmazonMonitors = dyn Endpoint<AmazonMonitor>;

impl Entity for WebsiteMonitor {
    const RESOURCE: &'static str = "monitors";

    fn id(&self) -> &str {
        &self.monitor_id
    }

    fn is_kind(&self) -> bool {
        self.monitor_type == MonitorType::Url.as_ref()
    }
}

impl Entity for SslMonitor {
    const RESOURCE: &'static str = "monitors";

    fn id(&self) -> &str {
        &self.monitor_id
    }

    fn is_kind(&self) -> bool {
        self.monitor_type == MonitorType::SslCert.as_ref()
    }
}

impl Entity for RestApiMonitor {
    const RESOURCE: &'static str = "monitors";

    fn id(&self) -> &str {
        &self.monitor_id
    }

    fn is_kind(&self) -> bool {
        self.monitor_type == MonitorType::RestApi.as_ref()
    }
}

impl Entity for AmazonMonitor {
    const RESOURCE: &'static str = "monitors";

    fn id(&self) -> &str {
        &self.monitor_id
    }

    fn is_kind(&self) -> bool {
        self.monitor_type == MonitorType::Amazon.as_ref()
    }
}
