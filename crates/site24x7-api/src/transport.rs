// Shared transport configuration for building reqwest::Client instances.
//
// The REST client and the OAuth2 token source share timeout and
// user-agent settings through this module.

use std::time::Duration;

use crate::error::Error;
use crate::retry::RetryConfig;

const USER_AGENT: &str = concat!("site24x7-provider/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout, applied to every attempt individually.
    pub timeout: Duration,
    /// Backoff policy for retryable failures.
    pub retry: RetryConfig,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::Transport)
    }
}
