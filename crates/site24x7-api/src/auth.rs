// Data-center routing and OAuth2 access tokens.
//
// Site24x7 runs one API host and one Zoho accounts host per region. Every
// API request carries a `Zoho-oauthtoken` header minted from a long-lived
// refresh token; `TokenSource` is the seam for that.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use strum::{Display, EnumString};
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Refresh tokens this long before they actually expire.
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Used when the token endpoint omits `expires_in`.
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

// ── DataCenter ──────────────────────────────────────────────────────

/// Site24x7 data center. Determines the API base URL and token endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DataCenter {
    #[default]
    #[strum(serialize = "US")]
    Us,
    #[strum(serialize = "EU")]
    Eu,
    #[strum(serialize = "CN")]
    Cn,
    #[strum(serialize = "IN")]
    In,
    #[strum(serialize = "AU")]
    Au,
}

impl DataCenter {
    /// Parse a configured selector. An empty selector means the US data center.
    pub fn from_selector(raw: &str) -> Result<Self, strum::ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::Us);
        }
        trimmed.parse()
    }

    /// Root of the REST API, without a trailing slash.
    pub fn api_base_url(self) -> &'static str {
        match self {
            Self::Us => "https://www.site24x7.com/api",
            Self::Eu => "https://www.site24x7.eu/api",
            Self::Cn => "https://www.site24x7.cn/api",
            Self::In => "https://www.site24x7.in/api",
            Self::Au => "https://www.site24x7.net.au/api",
        }
    }

    /// Zoho accounts endpoint used for the refresh-token grant.
    pub fn token_url(self) -> &'static str {
        match self {
            Self::Us => "https://accounts.zoho.com/oauth/v2/token",
            Self::Eu => "https://accounts.zoho.eu/oauth/v2/token",
            Self::Cn => "https://accounts.zoho.com.cn/oauth/v2/token",
            Self::In => "https://accounts.zoho.in/oauth/v2/token",
            Self::Au => "https://accounts.zoho.com.au/oauth/v2/token",
        }
    }
}

// ── TokenSource ─────────────────────────────────────────────────────

/// Supplies the bearer token attached to every API request.
///
/// Implementations must be safe to share between concurrent callers.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Result<SecretString, Error>;
}

/// A fixed token, for tests and pre-minted credentials.
#[derive(Debug, Clone)]
pub struct StaticToken(SecretString);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Result<SecretString, Error> {
        Ok(self.0.clone())
    }
}

// ── OAuth2 refresh-token grant ──────────────────────────────────────

/// Client id, secret and refresh token issued by the Zoho developer console.
#[derive(Debug, Clone)]
pub struct OAuth2Credentials {
    pub client_id: String,
    pub client_secret: SecretString,
    pub refresh_token: SecretString,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    error: Option<String>,
}

struct CachedToken {
    token: SecretString,
    /// Expiry with `TOKEN_EXPIRY_BUFFER` already applied.
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Mints access tokens with the refresh-token grant and caches them
/// until shortly before expiry.
pub struct OAuth2TokenSource {
    http: reqwest::Client,
    token_url: Url,
    credentials: OAuth2Credentials,
    cache: RwLock<Option<CachedToken>>,
}

impl OAuth2TokenSource {
    pub fn new(
        token_url: &str,
        credentials: OAuth2Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            token_url: Url::parse(token_url)?,
            credentials,
            cache: RwLock::new(None),
        })
    }

    async fn refresh(&self) -> Result<CachedToken, Error> {
        debug!(url = %self.token_url, "refreshing OAuth2 access token");

        let form = [
            ("grant_type", "refresh_token"),
            ("client_id", self.credentials.client_id.as_str()),
            (
                "client_secret",
                self.credentials.client_secret.expose_secret(),
            ),
            (
                "refresh_token",
                self.credentials.refresh_token.expose_secret(),
            ),
        ];

        // Network failures surface as authentication errors, never retried.
        let resp = self
            .http
            .post(self.token_url.clone())
            .form(&form)
            .send()
            .await
            .map_err(|e| token_request_failed(&e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| token_request_failed(&e))?;
        if !status.is_success() {
            let preview: String = body.chars().take(200).collect();
            return Err(Error::Authentication {
                message: format!("token refresh failed (HTTP {status}): {preview}"),
            });
        }

        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: format!("invalid token response: {e}"),
                body: body.clone(),
            })?;

        // Zoho reports grant errors with HTTP 200 and an `error` member.
        if let Some(error) = parsed.error {
            return Err(Error::Authentication { message: error });
        }
        let Some(access_token) = parsed.access_token else {
            return Err(Error::Authentication {
                message: "token response carried no access_token".into(),
            });
        };

        let ttl = parsed
            .expires_in
            .map_or(DEFAULT_TOKEN_TTL, Duration::from_secs);
        debug!(ttl_secs = ttl.as_secs(), "access token refreshed");

        Ok(CachedToken {
            token: SecretString::from(access_token),
            expires_at: Instant::now() + ttl.saturating_sub(TOKEN_EXPIRY_BUFFER),
        })
    }
}

fn token_request_failed(e: &reqwest::Error) -> Error {
    Error::Authentication {
        message: format!("token request failed: {e}"),
    }
}

#[async_trait]
impl TokenSource for OAuth2TokenSource {
    async fn token(&self) -> Result<SecretString, Error> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref().filter(|c| c.is_valid()) {
                return Ok(cached.token.clone());
            }
        }

        let mut cache = self.cache.write().await;
        // Another caller may have refreshed while we waited for the lock.
        if let Some(cached) = cache.as_ref().filter(|c| c.is_valid()) {
            return Ok(cached.token.clone());
        }

        let fresh = self.refresh().await?;
        let token = fresh.token.clone();
        *cache = Some(fresh);
        Ok(token)
    }
}
