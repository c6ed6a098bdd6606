// site24x7-api: Async Rust client for the Site24x7 REST API

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod rest;
pub mod retry;
pub mod transport;

#[cfg(any(test, feature = "fake"))]
pub mod fake;

pub use auth::{DataCenter, OAuth2Credentials, OAuth2TokenSource, StaticToken, TokenSource};
pub use client::{Client, ClientConfig, Site24x7};
pub use endpoints::{Endpoint, Entity, RestEndpoint};
pub use error::Error;
pub use rest::{Request, Response, RestClient};
pub use retry::RetryConfig;
pub use transport::TransportConfig;
