// src/client/error.rs
// Error type for Zephyr API calls

use serde_json::Value;
use thiserror::Error;

/// Failure of a single Zephyr API call.
///
/// The split between `Status` and the message-only variants is decided at
/// the point the response is read, so callers can report the remote status
/// line and body without re-inspecting an opaque error later.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status code.
    #[error("request failed with status {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        /// Response body, parsed as JSON when possible, raw text otherwise
        body: Value,
    },

    /// The request never completed (connect, timeout, TLS, ...).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered 2xx but the body was not valid JSON.
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_error_displays_status_line() {
        let err = ApiError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
            body: json!({"foo": "bar"}),
        };
        assert_eq!(err.to_string(), "request failed with status 404 Not Found");
    }

    #[test]
    fn decode_error_carries_message() {
        let inner = serde_json::from_str::<Value>("not json").unwrap_err();
        let err = ApiError::from(inner);
        assert!(err.to_string().starts_with("invalid JSON in response"));
    }
}
