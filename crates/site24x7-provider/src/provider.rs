// ── Provider facade ──
//
// What the plugin host talks to: configure once, then dispatch CRUD,
// exists and import calls by resource type name through the registry.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info};

use site24x7_api::{Client, Site24x7};
use site24x7_config::ProviderConfig;

use crate::error::ProviderError;
use crate::logging::{self, LogConfig};
use crate::registry::Registry;
use crate::state::ResourceState;

pub struct Provider {
    client: Arc<dyn Site24x7>,
    registry: Registry,
}

impl Provider {
    /// Install logging and build the HTTP client from validated config.
    pub fn configure(config: &ProviderConfig, log: &LogConfig) -> Result<Self, ProviderError> {
        logging::init(log);
        let client = Client::new(&config.client_config())?;
        info!(
            data_center = %config.data_center,
            max_retries = config.retry.max_retries,
            "provider configured"
        );
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Load config from the host's provider block plus environment, then
    /// [`configure`](Self::configure).
    pub fn from_host(host: &Value, log: &LogConfig) -> Result<Self, ProviderError> {
        let config = ProviderConfig::load(host)?;
        Self::configure(&config, log)
    }

    /// Use an existing client, e.g. a fake in tests.
    pub fn with_client(client: Arc<dyn Site24x7>) -> Self {
        Self {
            client,
            registry: Registry::new(),
        }
    }

    pub fn resource_types(&self) -> Vec<&'static str> {
        self.registry.type_names()
    }

    /// Every resource schema, keyed by type name.
    pub fn schema(&self) -> Value {
        let resources = self
            .registry
            .definitions()
            .iter()
            .map(|d| (d.type_name.to_owned(), d.schema.to_json()))
            .collect::<Map<_, _>>();
        serde_json::json!({ "resources": resources })
    }

    pub async fn create(
        &self,
        type_name: &str,
        state: &mut ResourceState,
    ) -> Result<(), ProviderError> {
        let definition = self.registry.get(type_name)?;
        (definition.create)(state, self.client.as_ref()).await
    }

    pub async fn read(
        &self,
        type_name: &str,
        state: &mut ResourceState,
    ) -> Result<(), ProviderError> {
        let definition = self.registry.get(type_name)?;
        (definition.read)(state, self.client.as_ref()).await
    }

    pub async fn update(
        &self,
        type_name: &str,
        state: &mut ResourceState,
    ) -> Result<(), ProviderError> {
        let definition = self.registry.get(type_name)?;
        (definition.update)(state, self.client.as_ref()).await
    }

    pub async fn delete(
        &self,
        type_name: &str,
        state: &mut ResourceState,
    ) -> Result<(), ProviderError> {
        let definition = self.registry.get(type_name)?;
        (definition.delete)(state, self.client.as_ref()).await
    }

    pub async fn exists(
        &self,
        type_name: &str,
        state: &ResourceState,
    ) -> Result<bool, ProviderError> {
        let definition = self.registry.get(type_name)?;
        (definition.exists)(state, self.client.as_ref()).await
    }

    /// Import by identifier alone: start from an empty tree and read.
    pub async fn import(&self, type_name: &str, id: &str) -> Result<ResourceState, ProviderError> {
        debug!(resource = type_name, id, "importing");
        let mut state = ResourceState::with_id(id);
        self.read(type_name, &mut state).await?;
        Ok(state)
    }
}
