//! Provider configuration for the Site24x7 provider.
//!
//! The plugin host hands over whatever the user set in the provider
//! block; every key falls back to a `SITE24X7_*` environment variable and
//! then to a built-in default. The result is validated and translated
//! into a `site24x7_api::ClientConfig`.

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

use site24x7_api::{ClientConfig, DataCenter, OAuth2Credentials, RetryConfig, TransportConfig};

/// Prefix for environment fallbacks, e.g. `SITE24X7_OAUTH2_CLIENT_ID`.
pub const ENV_PREFIX: &str = "SITE24X7_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("{field} is required (set it in the provider block or via {env})")]
    Missing { field: String, env: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Raw values ──────────────────────────────────────────────────────

/// Values as merged from defaults, environment and host, before validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    oauth2_client_id: Option<String>,
    #[serde(default)]
    oauth2_client_secret: Option<String>,
    #[serde(default)]
    oauth2_refresh_token: Option<String>,
    #[serde(default)]
    data_center: Option<String>,
    #[serde(default = "default_retry_min_wait")]
    retry_min_wait: u64,
    #[serde(default = "default_retry_max_wait")]
    retry_max_wait: u64,
    #[serde(default = "default_max_retries")]
    max_retries: u32,
    #[serde(default = "default_timeout")]
    timeout: u64,
}

fn default_retry_min_wait() -> u64 {
    1
}
fn default_retry_max_wait() -> u64 {
    30
}
fn default_max_retries() -> u32 {
    4
}
fn default_timeout() -> u64 {
    30
}

// ── Validated config ────────────────────────────────────────────────

/// Validated provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub oauth2_client_id: String,
    pub oauth2_client_secret: SecretString,
    pub oauth2_refresh_token: SecretString,
    pub data_center: DataCenter,
    pub retry: RetryConfig,
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Merge host-supplied values over the `SITE24X7_*` environment.
    ///
    /// `host` is the provider block as a JSON object; `null` members are
    /// treated as unset so the environment fallback applies.
    pub fn figment(host: &serde_json::Value) -> Figment {
        let host = match host {
            serde_json::Value::Object(map) => map
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            _ => serde_json::Map::new(),
        };

        Figment::new()
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::globals(serde_json::Value::Object(host)))
    }

    /// Load and validate from host values plus environment.
    pub fn load(host: &serde_json::Value) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment(host))
    }

    /// Validate an already-assembled figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let raw: RawConfig = figment.extract()?;

        let oauth2_client_id = required(raw.oauth2_client_id, "oauth2_client_id")?;
        let oauth2_client_secret = required(raw.oauth2_client_secret, "oauth2_client_secret")?;
        let oauth2_refresh_token = required(raw.oauth2_refresh_token, "oauth2_refresh_token")?;

        let selector = raw.data_center.unwrap_or_default();
        let data_center =
            DataCenter::from_selector(&selector).map_err(|_| ConfigError::Validation {
                field: "data_center".into(),
                reason: format!("expected one of US, EU, CN, IN, AU, got '{selector}'"),
            })?;

        if raw.retry_min_wait > raw.retry_max_wait {
            return Err(ConfigError::Validation {
                field: "retry_min_wait".into(),
                reason: format!(
                    "{}s exceeds retry_max_wait ({}s)",
                    raw.retry_min_wait, raw.retry_max_wait
                ),
            });
        }

        Ok(Self {
            oauth2_client_id,
            oauth2_client_secret: SecretString::from(oauth2_client_secret),
            oauth2_refresh_token: SecretString::from(oauth2_refresh_token),
            data_center,
            retry: RetryConfig {
                min_wait: Duration::from_secs(raw.retry_min_wait),
                max_wait: Duration::from_secs(raw.retry_max_wait),
                max_retries: raw.max_retries,
            },
            timeout: Duration::from_secs(raw.timeout),
        })
    }

    /// Translate into API client settings.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            data_center: self.data_center,
            credentials: OAuth2Credentials {
                client_id: self.oauth2_client_id.clone(),
                client_secret: self.oauth2_client_secret.clone(),
                refresh_token: self.oauth2_refresh_token.clone(),
            },
            transport: TransportConfig {
                timeout: self.timeout,
                retry: self.retry.clone(),
            },
            api_base_url: None,
            token_url: None,
        }
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing {
            field: field.into(),
            env: format!("{ENV_PREFIX}{}", field.to_uppercase()),
        }),
    }
}
