// site24x7-provider: resource reconciliation for the Site24x7 API
//
// Converts declarative attribute trees into API entities and back,
// resolving omitted profile and group references to defaults.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod provider;
pub mod registry;
pub mod resources;
pub mod schema;
pub mod state;

pub use error::ProviderError;
pub use logging::LogConfig;
pub use provider::Provider;
pub use registry::{Registry, ResourceDefinition, ResourceKind};
pub use resources::ManagedResource;
pub use schema::{Attribute, AttributeType, Schema};
pub use state::ResourceState;

pub use site24x7_config::{ConfigError, ProviderConfig};
