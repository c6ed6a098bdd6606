// ── Resource converters ──
//
// Each resource type is a typed attribute struct implementing
// `ManagedResource`: a forward conversion into the API entity (resolving
// omitted references on the way) and a reverse conversion mirroring a
// server entity back. The generic CRUD functions below drive those
// conversions against the host's untyped `ResourceState`.

mod amazon_monitor;
mod location_profile;
mod monitor_group;
mod notification_profile;
mod rest_api_monitor;
mod ssl_monitor;
mod threshold_profile;
mod url_action;
mod user_group;
mod website_monitor;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use site24x7_api::models::{ActionRef, Header, MonitorType};
use site24x7_api::{Endpoint, Entity, Site24x7};

use crate::defaults;
use crate::error::ProviderError;
use crate::schema::Schema;
use crate::state::ResourceState;

pub use amazon_monitor::AmazonMonitorResource;
pub use location_profile::LocationProfileResource;
pub use monitor_group::MonitorGroupResource;
pub use notification_profile::NotificationProfileResource;
pub use rest_api_monitor::RestApiMonitorResource;
pub use ssl_monitor::SslMonitorResource;
pub use threshold_profile::ThresholdProfileResource;
pub use url_action::UrlActionResource;
pub use user_group::UserGroupResource;
pub use website_monitor::WebsiteMonitorResource;

/// A resource type the provider manages.
#[async_trait]
pub trait ManagedResource:
    Serialize + DeserializeOwned + Default + Send + Sync + 'static
{
    /// Host-facing type name, e.g. `site24x7_ssl_monitor`.
    const TYPE_NAME: &'static str;

    type Entity: Entity;

    fn endpoint(client: &dyn Site24x7) -> &dyn Endpoint<Self::Entity>;

    fn schema() -> Schema;

    /// Build the entity to submit. `id` is empty on create. Defaults
    /// resolved for omitted references are written into `self`.
    async fn to_entity(
        &mut self,
        id: &str,
        client: &dyn Site24x7,
    ) -> Result<Self::Entity, ProviderError>;

    /// Mirror a server entity into the attributes.
    fn apply(&mut self, entity: &Self::Entity);
}

// ── Generic CRUD ────────────────────────────────────────────────────

/// Resolve defaults, POST, then store the new identifier and mirror the
/// returned entity. Resolved defaults stay in `state` even if the POST
/// fails.
pub async fn create<R: ManagedResource>(
    state: &mut ResourceState,
    client: &dyn Site24x7,
) -> Result<(), ProviderError> {
    let mut attrs: R = state.decode()?;
    let submitted = submit(&mut attrs, None, client).await;
    let written = state.encode(&attrs);
    let entity = submitted?;
    written?;

    if entity.id().is_empty() {
        return Err(ProviderError::Conversion {
            resource: R::TYPE_NAME,
            message: "create succeeded but the server returned no identifier".into(),
        });
    }
    state.id = entity.id().to_owned();
    attrs.apply(&entity);
    state.encode(&attrs)?;
    info!(resource = R::TYPE_NAME, id = %state.id, "created");
    Ok(())
}

pub async fn read<R: ManagedResource>(
    state: &mut ResourceState,
    client: &dyn Site24x7,
) -> Result<(), ProviderError> {
    let entity = R::endpoint(client).get(state.require_id()?).await?;

    let mut attrs: R = state.decode()?;
    attrs.apply(&entity);
    state.encode(&attrs)?;
    debug!(resource = R::TYPE_NAME, id = %state.id, "refreshed");
    Ok(())
}

/// PUT the full entity under the state's identifier. The identifier is
/// kept when the server echoes none back.
pub async fn update<R: ManagedResource>(
    state: &mut ResourceState,
    client: &dyn Site24x7,
) -> Result<(), ProviderError> {
    let id = state.require_id()?.to_owned();
    let mut attrs: R = state.decode()?;
    let submitted = submit(&mut attrs, Some(&id), client).await;
    let written = state.encode(&attrs);
    let entity = submitted?;
    written?;

    if !entity.id().is_empty() {
        state.id = entity.id().to_owned();
    }
    attrs.apply(&entity);
    state.encode(&attrs)?;
    info!(resource = R::TYPE_NAME, id = %state.id, "updated");
    Ok(())
}

/// DELETE; a resource that is already gone counts as deleted, and a tree
/// without an identifier is already absent.
pub async fn delete<R: ManagedResource>(
    state: &mut ResourceState,
    client: &dyn Site24x7,
) -> Result<(), ProviderError> {
    if !state.has_id() {
        return Ok(());
    }
    match R::endpoint(client).delete(state.require_id()?).await {
        Ok(()) => info!(resource = R::TYPE_NAME, id = %state.id, "deleted"),
        Err(e) if e.is_not_found() => {
            debug!(resource = R::TYPE_NAME, id = %state.id, "already gone");
        }
        Err(e) => return Err(e.into()),
    }
    state.id.clear();
    Ok(())
}

/// A tree without an identifier does not exist.
pub async fn exists<R: ManagedResource>(
    state: &ResourceState,
    client: &dyn Site24x7,
) -> Result<bool, ProviderError> {
    if !state.has_id() {
        return Ok(false);
    }
    match R::endpoint(client).get(state.require_id()?).await {
        Ok(_) => Ok(true),
        Err(e) if e.is_not_found() => Ok(false),
        Err(e) => Err(e.into()),
    }
}

async fn submit<R: ManagedResource>(
    attrs: &mut R,
    id: Option<&str>,
    client: &dyn Site24x7,
) -> Result<R::Entity, ProviderError> {
    let entity = attrs.to_entity(id.unwrap_or_default(), client).await?;
    let endpoint = R::endpoint(client);
    let saved = match id {
        None => endpoint.create(&entity).await?,
        Some(_) => endpoint.update(&entity).await?,
    };
    Ok(saved)
}

// ── Shared monitor references ───────────────────────────────────────

/// Profile, group and action references carried by website, SSL and
/// REST API monitors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorReferences {
    pub location_profile_id: String,
    /// Only consulted when `location_profile_id` is empty.
    pub location_profile_name: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    pub monitor_groups: Vec<String>,
    pub user_group_ids: Vec<String>,
    /// Alert type (decimal) to automation id.
    pub actions: BTreeMap<String, String>,
}

impl MonitorReferences {
    /// Fill every empty reference with its default, in a fixed order:
    /// location, notification, threshold, user groups. Each value is
    /// written back as soon as it is known.
    pub async fn resolve(
        &mut self,
        client: &dyn Site24x7,
        monitor_type: MonitorType,
    ) -> Result<(), ProviderError> {
        if self.location_profile_id.is_empty() {
            let profile =
                defaults::default_location_profile(client, &self.location_profile_name).await?;
            self.location_profile_id = profile.profile_id;
        }
        if self.notification_profile_id.is_empty() {
            self.notification_profile_id = defaults::default_notification_profile(client)
                .await?
                .profile_id;
        }
        if self.threshold_profile_id.is_empty() {
            self.threshold_profile_id = defaults::default_threshold_profile(client, monitor_type)
                .await?
                .profile_id;
        }
        resolve_user_groups(&mut self.user_group_ids, client).await
    }

    pub fn action_refs(&self, resource: &'static str) -> Result<Vec<ActionRef>, ProviderError> {
        actions_to_entity(resource, &self.actions)
    }

    /// Mirror the entity's references. The name hint is local only and
    /// is left as configured.
    pub fn mirror(
        &mut self,
        location_profile_id: &str,
        notification_profile_id: &str,
        threshold_profile_id: &str,
        monitor_groups: &[String],
        user_group_ids: &[String],
        actions: &[ActionRef],
    ) {
        location_profile_id.clone_into(&mut self.location_profile_id);
        notification_profile_id.clone_into(&mut self.notification_profile_id);
        threshold_profile_id.clone_into(&mut self.threshold_profile_id);
        self.monitor_groups = monitor_groups.to_vec();
        self.user_group_ids = user_group_ids.to_vec();
        self.actions = actions_from_entity(actions);
    }
}

pub(crate) async fn resolve_user_groups(
    user_group_ids: &mut Vec<String>,
    client: &dyn Site24x7,
) -> Result<(), ProviderError> {
    if user_group_ids.is_empty() {
        let group = defaults::default_user_group(client).await?;
        *user_group_ids = vec![group.user_group_id];
    }
    Ok(())
}

// ── Nested shape helpers ────────────────────────────────────────────

/// Header map to the entity's header list, ordered by name.
pub(crate) fn headers_to_entity(headers: &BTreeMap<String, String>) -> Vec<Header> {
    headers
        .iter()
        .map(|(name, value)| Header {
            name: name.clone(),
            value: value.clone(),
        })
        .collect()
}

/// Header list to the attribute map. The map holds one value per name:
/// when the server returns a header name more than once, the last value
/// wins and the earlier ones are dropped.
pub(crate) fn headers_from_entity(headers: &[Header]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for h in headers {
        if let Some(dropped) = map.insert(h.name.clone(), h.value.clone()) {
            debug!(header = %h.name, %dropped, "duplicate header name, keeping last value");
        }
    }
    map
}

/// Action map to the entity's action list, ordered by alert type.
pub(crate) fn actions_to_entity(
    resource: &'static str,
    actions: &BTreeMap<String, String>,
) -> Result<Vec<ActionRef>, ProviderError> {
    let mut refs = actions
        .iter()
        .map(|(alert_type, action_id)| {
            let alert_type = alert_type.trim().parse::<i32>().map_err(|_| {
                ProviderError::Conversion {
                    resource,
                    message: format!("actions key '{alert_type}' is not an alert type number"),
                }
            })?;
            Ok(ActionRef {
                action_id: action_id.clone(),
                alert_type,
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;
    refs.sort_by_key(|r| r.alert_type);
    Ok(refs)
}

pub(crate) fn actions_from_entity(actions: &[ActionRef]) -> BTreeMap<String, String> {
    actions
        .iter()
        .map(|a| (a.alert_type.to_string(), a.action_id.clone()))
        .collect()
}

/// Overwrite a write-only secret only when the server actually returned one.
pub(crate) fn mirror_secret(local: &mut String, remote: &str) {
    if !remote.is_empty() {
        remote.clone_into(local);
    }
}
