//! Uniform response envelope of the Finbot backend.
//!
//! Every endpoint answers with the same JSON wrapper:
//!
//! ```json
//! { "status": { "code": 200, "message": "OK", "debug_info": {} }, "data": {} }
//! ```
//!
//! The `status.code` is an application-level code that is independent of
//! the HTTP status line; only `200` means success.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// Application status code that marks a successful call.
pub const STATUS_OK: i64 = 200;

// ---------------------------------------------------------------------------
// ApiStatus
// ---------------------------------------------------------------------------

/// The `status` block of an [`ApiEnvelope`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiStatus {
    /// Application status code (`200` on success).
    pub code: i64,
    /// Human-readable status message, possibly empty or `null`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Free-form diagnostics attached by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<serde_json::Value>,
}

impl ApiStatus {
    /// Returns true when the application code signals success.
    pub fn is_ok(&self) -> bool {
        self.code == STATUS_OK
    }
}

// ---------------------------------------------------------------------------
// ApiEnvelope
// ---------------------------------------------------------------------------

/// Outer wrapper of every backend response.
///
/// `data` is absent or `null` on most failures; the client decides whether
/// a missing payload is an error for the endpoint at hand.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiEnvelope<T = serde_json::Value> {
    /// Application status block.
    pub status: ApiStatus,
    /// Endpoint-specific payload.
    #[serde(default)]
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_success_envelope() {
        let env: ApiEnvelope =
            serde_json::from_value(json!({"status": {"code": 200, "message": "OK"}, "data": {}}))
                .unwrap();
        assert!(env.status.is_ok());
        assert_eq!(env.data, Some(json!({})));
    }

    #[test]
    fn null_and_missing_data_are_none() {
        let env: ApiEnvelope =
            serde_json::from_value(json!({"status": {"code": 500, "message": "boom"}, "data": null}))
                .unwrap();
        assert!(!env.status.is_ok());
        assert!(env.data.is_none());

        let env: ApiEnvelope =
            serde_json::from_value(json!({"status": {"code": 404}})).unwrap();
        assert_eq!(env.status.message, "");
        assert!(env.data.is_none());
    }

    #[test]
    fn debug_info_is_kept_when_present() {
        let env: ApiEnvelope = serde_json::from_value(json!({
            "status": {"code": 400, "message": "bad ticker", "debug_info": {"trace": "x"}},
            "data": null
        }))
        .unwrap();
        assert_eq!(env.status.debug_info, Some(json!({"trace": "x"})));
    }

    #[test]
    fn null_message_decodes_as_empty() {
        let env: ApiEnvelope = serde_json::from_value(json!({
            "status": {"code": 404, "message": null},
            "data": null
        }))
        .unwrap();
        assert_eq!(env.status.code, 404);
        assert_eq!(env.status.message, "");
    }
}
