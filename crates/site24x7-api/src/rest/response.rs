// Response envelope handling.
//
// Successful responses wrap their payload as
// `{"code": 0, "message": "success", "data": ...}`; failures carry
// `{"error_code": N, "message": "...", "error_info": {...}}`.

use bytes::Bytes;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::Error;

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_info: Option<serde_json::Value>,
}

/// Build an [`Error::Status`] from a non-2xx response body.
///
/// Falls back to a truncated copy of the raw body when it isn't the
/// documented error shape.
pub(crate) fn status_error(status: reqwest::StatusCode, body: &[u8]) -> Error {
    let parsed = serde_json::from_slice::<ErrorBody>(body).ok();
    let (error_code, message, error_info) = match parsed {
        Some(b) => (b.error_code, b.message, b.error_info),
        None => (None, None, None),
    };

    let message = message.unwrap_or_else(|| {
        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        if text.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_owned()
        } else {
            text.chars().take(200).collect()
        }
    });

    Error::Status {
        status: status.as_u16(),
        message,
        error_code,
        error_info,
    }
}

/// Outcome of an executed request.
#[derive(Debug)]
pub struct Response {
    result: Result<Bytes, Error>,
}

impl Response {
    pub(crate) fn from_result(result: Result<Bytes, Error>) -> Self {
        Self { result }
    }

    /// Deserialize the envelope's `data` member into `T`.
    pub fn parse<T: DeserializeOwned>(self) -> Result<T, Error> {
        let body = self.result?;
        let envelope: Envelope<T> = serde_json::from_slice(&body).map_err(|e| {
            let text = String::from_utf8_lossy(&body).into_owned();
            let preview: String = text.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: text,
            }
        })?;
        Ok(envelope.data)
    }

    /// Status-only check; the body is discarded.
    pub fn err(self) -> Result<(), Error> {
        self.result.map(|_| ())
    }
}
