// Typed CRUD endpoints
//
// Every entity kind gets the same five calls, each a direct translation
// to one HTTP request. No batching, no caching: callers decide what a
// "not found" means for them.

mod automation;
mod groups;
mod monitors;
mod profiles;

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Error;
use crate::rest::{JSON_CONTENT_TYPE, RestClient};

pub use automation::UrlAutomations;
pub use groups::{MonitorGroups, UserGroups};
pub use monitors::{AmazonMonitors, RestApiMonitors, SslMonitors, WebsiteMonitors};
pub use profiles::{LocationProfiles, NotificationProfiles, ThresholdProfiles};

/// An API entity addressable under a fixed resource path.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Resource path relative to the API root.
    const RESOURCE: &'static str;

    /// Server-assigned identifier; empty before creation.
    fn id(&self) -> &str;

    /// Whether a listed entity belongs to this kind. Kinds sharing a
    /// resource path (monitors) narrow the list with this.
    fn is_kind(&self) -> bool {
        true
    }
}

/// CRUD interface for one entity kind.
#[async_trait]
pub trait Endpoint<T: Entity>: Send + Sync {
    /// `GET /{resource}/{id}`
    async fn get(&self, id: &str) -> Result<T, Error>;

    /// `POST /{resource}`
    async fn create(&self, entity: &T) -> Result<T, Error>;

    /// `PUT /{resource}/{entity.id}`
    async fn update(&self, entity: &T) -> Result<T, Error>;

    /// `DELETE /{resource}/{id}`
    async fn delete(&self, id: &str) -> Result<(), Error>;

    /// `GET /{resource}`
    async fn list(&self) -> Result<Vec<T>, Error>;
}

/// [`Endpoint`] backed by the REST client.
pub struct RestEndpoint<T> {
    client: Arc<RestClient>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> RestEndpoint<T> {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Entity> Endpoint<T> for RestEndpoint<T> {
    async fn get(&self, id: &str) -> Result<T, Error> {
        debug!(resource = T::RESOURCE, id, "fetching entity");
        self.client
            .get()
            .resource(T::RESOURCE)
            .resource_id(id)
            .send()
            .await
            .parse()
    }

    async fn create(&self, entity: &T) -> Result<T, Error> {
        debug!(resource = T::RESOURCE, "creating entity");
        self.client
            .post()
            .resource(T::RESOURCE)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(entity)
            .send()
            .await
            .parse()
    }

    async fn update(&self, entity: &T) -> Result<T, Error> {
        debug!(resource = T::RESOURCE, id = entity.id(), "updating entity");
        self.client
            .put()
            .resource(T::RESOURCE)
            .resource_id(entity.id())
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(entity)
            .send()
            .await
            .parse()
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        debug!(resource = T::RESOURCE, id, "deleting entity");
        self.client
            .delete()
            .resource(T::RESOURCE)
            .resource_id(id)
            .send()
            .await
            .err()
    }

    async fn list(&self) -> Result<Vec<T>, Error> {
        debug!(resource = T::RESOURCE, "listing entities");
        let all: Vec<T> = self
            .client
            .get()
            .resource(T::RESOURCE)
            .send()
            .await
            .parse()?;
        Ok(all.into_iter().filter(|e| e.is_kind()).collect())
    }
}
