// REST transport for the Site24x7 API
//
// Wraps `reqwest::Client` with resource-path URL construction, OAuth2
// header injection, and exponential-backoff retries. Endpoint modules
// compose requests through the `get()/post()/put()/delete()` builders.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::auth::TokenSource;
use crate::error::Error;
use crate::rest::response::{Response, status_error};
use crate::retry::RetryConfig;
use crate::transport::TransportConfig;

/// Site24x7 v2 content negotiation.
const ACCEPT_V2: &str = "application/json; version=2.0";

/// Content type the API expects on POST/PUT bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Raw HTTP client for the Site24x7 REST API.
///
/// Safe to share across tasks; every request fetches its bearer token
/// from the configured [`TokenSource`] and retries transient failures
/// according to the [`RetryConfig`].
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
    tokens: Arc<dyn TokenSource>,
    retry: RetryConfig,
}

impl RestClient {
    /// Create a client for `base_url` (e.g. `https://www.site24x7.com/api`).
    pub fn new(
        base_url: &str,
        tokens: Arc<dyn TokenSource>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            base_url: Url::parse(base_url)?,
            tokens,
            retry: transport.retry.clone(),
        })
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        tokens: Arc<dyn TokenSource>,
        retry: RetryConfig,
    ) -> Self {
        Self {
            http,
            base_url,
            tokens,
            retry,
        }
    }

    // ── Request builders ─────────────────────────────────────────────

    pub fn get(&self) -> Request<'_> {
        Request::new(self, Method::GET)
    }

    pub fn post(&self) -> Request<'_> {
        Request::new(self, Method::POST)
    }

    pub fn put(&self) -> Request<'_> {
        Request::new(self, Method::PUT)
    }

    pub fn delete(&self) -> Request<'_> {
        Request::new(self, Method::DELETE)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// `{base}/{resource}[/{id}]`, with the id percent-encoded as one segment.
    fn url(&self, resource: &str, resource_id: Option<&str>) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
            segments.pop_if_empty();
            segments.extend(resource.split('/').filter(|s| !s.is_empty()));
            if let Some(id) = resource_id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    // ── Execution ────────────────────────────────────────────────────

    /// Send a request, retrying transient failures with exponential backoff.
    async fn execute(
        &self,
        method: &Method,
        url: &Url,
        headers: &[(&'static str, String)],
        body: Option<&Bytes>,
    ) -> Result<Bytes, Error> {
        let mut attempt: u32 = 0;

        loop {
            match self.attempt(method, url, headers, body).await {
                Ok(bytes) => return Ok(bytes),
                Err(e) if e.is_transient() && self.retry.allows(attempt) => {
                    let delay = self.retry.delay(attempt);
                    warn!(
                        error = %e,
                        %method,
                        %url,
                        attempt,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        "retrying Site24x7 request"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// A single round-trip. Non-2xx responses become [`Error::Status`].
    async fn attempt(
        &self,
        method: &Method,
        url: &Url,
        headers: &[(&'static str, String)],
        body: Option<&Bytes>,
    ) -> Result<Bytes, Error> {
        let token = self.tokens.token().await?;
        debug!("{method} {url}");

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header(
                AUTHORIZATION,
                format!("Zoho-oauthtoken {}", token.expose_secret()),
            )
            .header(ACCEPT, ACCEPT_V2);
        for (name, value) in headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = body {
            builder = builder.body(body.clone());
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if status.is_success() {
            Ok(bytes)
        } else {
            Err(status_error(status, &bytes))
        }
    }
}

// ── Request ──────────────────────────────────────────────────────────

/// A request under construction, scoped to one resource path.
///
/// Nothing is sent until [`send`](Self::send); encoding failures in
/// [`body`](Self::body) are deferred and reported from the response.
#[must_use]
pub struct Request<'a> {
    client: &'a RestClient,
    method: Method,
    resource: String,
    resource_id: Option<String>,
    headers: Vec<(&'static str, String)>,
    body: Option<Result<Bytes, serde_json::Error>>,
}

impl<'a> Request<'a> {
    fn new(client: &'a RestClient, method: Method) -> Self {
        Self {
            client,
            method,
            resource: String::new(),
            resource_id: None,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Resource path relative to the API root, e.g. `"monitors"`.
    pub fn resource(mut self, resource: &str) -> Self {
        self.resource = resource.to_owned();
        self
    }

    /// Identifier appended as the last path segment.
    pub fn resource_id(mut self, id: &str) -> Self {
        self.resource_id = Some(id.to_owned());
        self
    }

    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_owned()));
        self
    }

    /// JSON-encode `body` as the request payload.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = Some(serde_json::to_vec(body).map(Bytes::from));
        self
    }

    /// Execute the request (with retries) and wrap the outcome.
    pub async fn send(self) -> Response {
        let url = match self
            .client
            .url(&self.resource, self.resource_id.as_deref())
        {
            Ok(url) => url,
            Err(e) => return Response::from_result(Err(e)),
        };

        let body = match self.body.transpose() {
            Ok(body) => body,
            Err(e) => return Response::from_result(Err(Error::Serialization(e))),
        };

        let result = self
            .client
            .execute(&self.method, &url, &self.headers, body.as_ref())
            .await;
        Response::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticToken;

    fn client(base: &str) -> RestClient {
        RestClient::with_client(
            reqwest::Client::new(),
            Url::parse(base).expect("valid test URL"),
            Arc::new(StaticToken::new("t")),
            RetryConfig::none(),
        )
    }

    #[test]
    fn url_joins_resource_and_id() {
        let c = client("https://www.site24x7.com/api");
        let url = c.url("monitors", Some("123")).expect("url");
        assert_eq!(url.as_str(), "https://www.site24x7.com/api/monitors/123");
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        let c = client("https://www.site24x7.com/api/");
        let url = c.url("location_profiles", None).expect("url");
        assert_eq!(
            url.as_str(),
            "https://www.site24x7.com/api/location_profiles"
        );
    }

    #[test]
    fn url_encodes_id_as_single_segment() {
        let c = client("https://www.site24x7.com/api");
        let url = c.url("monitors", Some("a/b")).expect("url");
        assert_eq!(url.as_str(), "https://www.site24x7.com/api/monitors/a%2Fb");
    }
}
