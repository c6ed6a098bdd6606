// ── Resource registry ──
//
// Explicit `ResourceKind` → `ResourceDefinition` table. Each definition
// carries the schema plus type-erased CRUD entry points that decode the
// host's untyped state, run the typed operation and encode it back.

use futures::future::BoxFuture;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use site24x7_api::Site24x7;

use crate::error::ProviderError;
use crate::resources::{
    self, AmazonMonitorResource, LocationProfileResource, ManagedResource, MonitorGroupResource,
    NotificationProfileResource, RestApiMonitorResource, SslMonitorResource,
    ThresholdProfileResource, UrlActionResource, UserGroupResource, WebsiteMonitorResource,
};
use crate::schema::Schema;
use crate::state::ResourceState;

/// Create, read, update or delete against an untyped state.
pub type CrudFn = for<'a> fn(
    &'a mut ResourceState,
    &'a dyn Site24x7,
) -> BoxFuture<'a, Result<(), ProviderError>>;

pub type ExistsFn =
    for<'a> fn(&'a ResourceState, &'a dyn Site24x7) -> BoxFuture<'a, Result<bool, ProviderError>>;

/// Every resource type the provider registers, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum ResourceKind {
    #[strum(serialize = "site24x7_website_monitor")]
    WebsiteMonitor,
    #[strum(serialize = "site24x7_ssl_monitor")]
    SslMonitor,
    #[strum(serialize = "site24x7_rest_api_monitor")]
    RestApiMonitor,
    #[strum(serialize = "site24x7_amazon_monitor")]
    AmazonMonitor,
    #[strum(serialize = "site24x7_monitor_group")]
    MonitorGroup,
    #[strum(serialize = "site24x7_url_action")]
    UrlAction,
    #[strum(serialize = "site24x7_threshold_profile")]
    ThresholdProfile,
    #[strum(serialize = "site24x7_user_group")]
    UserGroup,
    #[strum(serialize = "site24x7_location_profile")]
    LocationProfile,
    #[strum(serialize = "site24x7_notification_profile")]
    NotificationProfile,
}

impl ResourceKind {
    pub fn definition(self) -> ResourceDefinition {
        match self {
            Self::WebsiteMonitor => ResourceDefinition::of::<WebsiteMonitorResource>(self),
            Self::SslMonitor => ResourceDefinition::of::<SslMonitorResource>(self),
            Self::RestApiMonitor => ResourceDefinition::of::<RestApiMonitorResource>(self),
            Self::AmazonMonitor => ResourceDefinition::of::<AmazonMonitorResource>(self),
            Self::MonitorGroup => ResourceDefinition::of::<MonitorGroupResource>(self),
            Self::UrlAction => ResourceDefinition::of::<UrlActionResource>(self),
            Self::ThresholdProfile => ResourceDefinition::of::<ThresholdProfileResource>(self),
            Self::UserGroup => ResourceDefinition::of::<UserGroupResource>(self),
            Self::LocationProfile => ResourceDefinition::of::<LocationProfileResource>(self),
            Self::NotificationProfile => {
                ResourceDefinition::of::<NotificationProfileResource>(self)
            }
        }
    }
}

#[derive(Clone)]
pub struct ResourceDefinition {
    pub kind: ResourceKind,
    pub type_name: &'static str,
    pub schema: Schema,
    pub create: CrudFn,
    pub read: CrudFn,
    pub update: CrudFn,
    pub delete: CrudFn,
    pub exists: ExistsFn,
}

impl std::fmt::Debug for ResourceDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceDefinition")
            .field("kind", &self.kind)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl ResourceDefinition {
    pub fn of<R: ManagedResource>(kind: ResourceKind) -> Self {
        Self {
            kind,
            type_name: R::TYPE_NAME,
            schema: R::schema(),
            create: create::<R>,
            read: read::<R>,
            update: update::<R>,
            delete: delete::<R>,
            exists: exists::<R>,
        }
    }
}

fn create<'a, R: ManagedResource>(
    state: &'a mut ResourceState,
    client: &'a dyn Site24x7,
) -> BoxFuture<'a, Result<(), ProviderError>> {
    Box::pin(resources::create::<R>(state, client))
}

fn read<'a, R: ManagedResource>(
    state: &'a mut ResourceState,
    client: &'a dyn Site24x7,
) -> BoxFuture<'a, Result<(), ProviderError>> {
    Box::pin(resources::read::<R>(state, client))
}

fn update<'a, R: ManagedResource>(
    state: &'a mut ResourceState,
    client: &'a dyn Site24x7,
) -> BoxFuture<'a, Result<(), ProviderError>> {
    Box::pin(resources::update::<R>(state, client))
}

fn delete<'a, R: ManagedResource>(
    state: &'a mut ResourceState,
    client: &'a dyn Site24x7,
) -> BoxFuture<'a, Result<(), ProviderError>> {
    Box::pin(resources::delete::<R>(state, client))
}

fn exists<'a, R: ManagedResource>(
    state: &'a ResourceState,
    client: &'a dyn Site24x7,
) -> BoxFuture<'a, Result<bool, ProviderError>> {
    Box::pin(resources::exists::<R>(state, client))
}

/// Ordered set of resource definitions, built once at startup.
#[derive(Debug, Clone)]
pub struct Registry {
    definitions: Vec<ResourceDefinition>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            definitions: ResourceKind::iter().map(ResourceKind::definition).collect(),
        }
    }

    pub fn get(&self, type_name: &str) -> Result<&ResourceDefinition, ProviderError> {
        self.definitions
            .iter()
            .find(|d| d.type_name == type_name)
            .ok_or_else(|| ProviderError::UnknownResourceType(type_name.to_owned()))
    }

    pub fn definitions(&self) -> &[ResourceDefinition] {
        &self.definitions
    }

    pub fn type_names(&self) -> Vec<&'static str> {
        self.definitions.iter().map(|d| d.type_name).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registers_every_kind_in_order() {
        let registry = Registry::new();
        assert_eq!(
            registry.type_names(),
            vec![
                "site24x7_website_monitor",
                "site24x7_ssl_monitor",
                "site24x7_rest_api_monitor",
                "site24x7_amazon_monitor",
                "site24x7_monitor_group",
                "site24x7_url_action",
                "site24x7_threshold_profile",
                "site24x7_user_group",
                "site24x7_location_profile",
                "site24x7_notification_profile",
            ]
        );
    }

    #[test]
    fn kind_names_match_resource_type_names() {
        for kind in ResourceKind::iter() {
            let definition = kind.definition();
            assert_eq!(kind.as_ref(), definition.type_name);
            assert_eq!(
                definition.type_name.parse::<ResourceKind>().unwrap(),
                kind
            );
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = Registry::new().get("site24x7_nope").unwrap_err();
        assert!(matches!(err, ProviderError::UnknownResourceType(ref name) if name == "site24x7_nope"));
    }
}
