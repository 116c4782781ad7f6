//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation of [`FinbotClient`](crate::FinbotClient). Two families matter
//! to callers, see [`SdkError::is_transport`]:
//!
//! * transport / parse failures: the backend was unreachable, timed out,
//!   or did not answer with JSON;
//! * application failures: the backend answered with a non-200 status or
//!   without the expected payload.

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Invalid or missing configuration (e.g. bad URL).
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP transport failure (connection refused, TLS, body read, ...).
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The backend answered with a non-success status.
    #[error("backend error {code}: {message}")]
    Api {
        /// Application status code (or HTTP status when no envelope came back).
        code: i64,
        /// Message reported by the backend.
        message: String,
    },

    /// The backend reported success but sent no `data`.
    #[error("backend response carried no data")]
    MissingData,

    /// JSON serialization / deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SdkError::Timeout
        } else {
            SdkError::Http(e)
        }
    }
}

impl SdkError {
    /// Returns true for failures where no usable answer came back at all.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SdkError::Http(_) | SdkError::Timeout | SdkError::Serialization(_)
        )
    }

    /// The backend's own message for application failures.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SdkError::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
