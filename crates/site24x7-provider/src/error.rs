// ── Provider error types ──
//
// API errors pass through unchanged so callers (and tests) can still
// inspect the HTTP status. Everything else is a provider-side failure:
// no default candidate, an attribute that cannot be converted, or a
// state the host handed over that does not decode.

use thiserror::Error;

use site24x7_config::ConfigError;

#[derive(Debug, Error)]
pub enum ProviderError {
    // ── Remote ───────────────────────────────────────────────────────
    #[error(transparent)]
    Api(#[from] site24x7_api::Error),

    // ── Default resolution ───────────────────────────────────────────
    /// A reference was omitted and no candidate exists to fill it.
    #[error("no default {kind} available: {reason}")]
    NoDefault { kind: &'static str, reason: String },

    // ── Attribute trees ──────────────────────────────────────────────
    #[error("invalid {resource} attribute: {message}")]
    Conversion {
        resource: &'static str,
        message: String,
    },

    /// The attribute map could not be decoded into, or encoded from, the
    /// typed attribute struct.
    #[error("invalid resource state: {0}")]
    InvalidState(#[source] serde_json::Error),

    #[error("resource has no identifier; it must be created or imported first")]
    MissingId,

    // ── Provider ─────────────────────────────────────────────────────
    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ProviderError {
    /// The wrapped API error, if this failure came from the remote side.
    pub fn api(&self) -> Option<&site24x7_api::Error> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}
