use thiserror::Error;

/// Top-level error type for the `site24x7-api` crate.
///
/// Covers every failure mode of the REST surface: token acquisition,
/// transport, non-2xx responses and (de)serialization. Downstream crates
/// wrap this type unchanged so callers can still inspect the status.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// OAuth2 token refresh failed (bad client credentials, revoked refresh token, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-2xx response, parsed from the `{error_code, message, error_info}` body.
    #[error("Site24x7 API error (HTTP {status}): {message}")]
    Status {
        status: u16,
        message: String,
        error_code: Option<i64>,
        error_info: Option<serde_json::Value>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// Request body could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Shorthand for a status error without an API error code.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
            error_code: None,
            error_info: None,
        }
    }

    /// The HTTP status carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Extract the Site24x7 error code, if available.
    pub fn api_error_code(&self) -> Option<i64> {
        match self {
            Self::Status { error_code, .. } => *error_code,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_detected_from_status() {
        assert!(Error::status(404, "not found").is_not_found());
        assert!(!Error::status(500, "error").is_not_found());
        assert!(!Error::Authentication { message: "x".into() }.is_not_found());
    }

    #[test]
    fn server_errors_and_throttling_are_transient() {
        assert!(Error::status(500, "error").is_transient());
        assert!(Error::status(503, "unavailable").is_transient());
        assert!(Error::status(429, "slow down").is_transient());
        assert!(!Error::status(400, "bad request").is_transient());
        assert!(!Error::status(404, "not found").is_transient());
    }

    #[test]
    fn status_error_display_includes_code() {
        let err = Error::status(500, "error");
        assert_eq!(err.to_string(), "Site24x7 API error (HTTP 500): error");
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.api_error_code(), None);
    }
}
