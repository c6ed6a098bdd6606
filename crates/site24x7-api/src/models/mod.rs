// ── Site24x7 API entity model ──
//
// Serde mirrors of the JSON entities exchanged with the REST API.
// Unknown members are ignored and missing members default, so partial
// responses still decode.

pub mod automation;
pub mod groups;
pub mod monitors;
pub mod profiles;

pub use automation::{URL_ACTION_TYPE, UrlAutomation};
pub use groups::{MonitorGroup, UserGroup};
pub use monitors::{
    ActionRef, AmazonMonitor, Header, MonitorType, RestApiMonitor, SslMonitor, ValueAndSeverity,
    WebsiteMonitor,
};
pub use profiles::{LocationProfile, NotificationProfile, ThresholdProfile};
