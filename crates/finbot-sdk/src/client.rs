//! HTTP client for the Finbot backend.
//!
//! [`FinbotClient`] wraps a pooled `reqwest` client, attaches the bearer
//! credential and decodes the uniform `{status, data}` envelope of every
//! endpoint into either the typed payload or an [`SdkError`].
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use finbot_sdk::{ApiConfig, FinbotClient};
//!
//! # async fn run() -> Result<(), finbot_sdk::SdkError> {
//! let client = FinbotClient::new(ApiConfig::from_env())?;
//! let info = client.ticker("AAPL").await?;
//! println!("{} trades at {}", info.name, info.price_display());
//! # Ok(())
//! # }
//! ```

use finbot_models::{
    ApiEnvelope, ChatReply, ChatRequest, CleanupRequest, SessionId, StockInfo, TickerDataQuery,
    TickerPayload, TickerRequest,
};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::credentials::BearerCredential;
use crate::endpoints::Endpoints;
use crate::error::SdkError;

/// Longest slice of a non-JSON error body echoed back to the caller.
const MAX_RAW_ERROR_LEN: usize = 200;

/// Connection to one Finbot backend.
///
/// Cheap to clone: clones share the same connection pool, so a single
/// client can be handed to every screen.
#[derive(Clone, Debug)]
pub struct FinbotClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    credential: BearerCredential,
}

impl FinbotClient {
    /// Build a client from an explicit configuration.
    ///
    /// Fails with [`SdkError::Config`] when the base URL is empty or not an
    /// `http(s)` URL.
    pub fn new(config: ApiConfig) -> Result<Self, SdkError> {
        if config.base_url.is_empty() {
            return Err(SdkError::Config("API base URL is empty".into()));
        }
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "unsupported API base URL `{}`: expected http:// or https://",
                config.base_url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            endpoints: Endpoints::new(&config.base_url),
            credential: config.credential,
        })
    }

    /// The endpoint table this client talks to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // ------------------------------------------------------------------
    // Endpoints
    // ------------------------------------------------------------------

    /// Look up a company by ticker (`POST /ticker`).
    pub async fn ticker(&self, ticker: &str) -> Result<StockInfo, SdkError> {
        debug!(ticker, "looking up ticker");
        let request = self
            .authorize(self.http.post(self.endpoints.ticker()))
            .json(&TickerRequest {
                ticker: ticker.to_string(),
            });
        let payload: TickerPayload = self.call(request).await?;
        Ok(payload.stock_info)
    }

    /// Prepare the server-side context of a chat session
    /// (`GET /get_ticker_data`).
    ///
    /// The payload is opaque to the client; it only has to be present.
    pub async fn get_ticker_data(
        &self,
        session_id: &SessionId,
        symbol: &str,
    ) -> Result<Value, SdkError> {
        debug!(%session_id, symbol, "initializing chat session");
        let request = self
            .authorize(self.http.get(self.endpoints.get_ticker_data()))
            .query(&TickerDataQuery {
                session_id: session_id.clone(),
                tickers: symbol.to_string(),
            });
        self.call(request).await
    }

    /// Submit one user utterance and return the assistant's answer
    /// (`POST /chat`).
    pub async fn chat(&self, session_id: &SessionId, text: &str) -> Result<String, SdkError> {
        debug!(%session_id, chars = text.len(), "sending chat turn");
        let request = self
            .authorize(self.http.post(self.endpoints.chat()))
            .json(&ChatRequest::single(session_id.clone(), text));
        let reply: ChatReply = self.call(request).await?;
        reply.response.ok_or(SdkError::MissingData)
    }

    /// Release the server-side state of a session (`POST /cleanup_session`).
    ///
    /// Any payload in the answer is ignored.
    pub async fn cleanup_session(&self, session_id: &SessionId) -> Result<(), SdkError> {
        debug!(%session_id, "cleaning up chat session");
        let request = self
            .authorize(self.http.post(self.endpoints.cleanup_session()))
            .json(&CleanupRequest {
                session_id: session_id.clone(),
            });
        self.exchange(request).await.map(|_| ())
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if self.credential.is_empty() {
            request
        } else {
            request.bearer_auth(self.credential.expose())
        }
    }

    /// Send `request` and decode a mandatory payload of type `T`.
    async fn call<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, SdkError> {
        let data = self.exchange(request).await?.ok_or(SdkError::MissingData)?;
        Ok(serde_json::from_value(data)?)
    }

    /// Send `request` and check its envelope; returns the raw payload.
    async fn exchange(&self, request: RequestBuilder) -> Result<Option<Value>, SdkError> {
        let response = request.send().await?;
        let http_status = response.status();
        let body = response.text().await?;
        debug!(status = %http_status, bytes = body.len(), "backend answered");
        decode_envelope(http_status, &body)
    }
}

/// Apply the envelope rules to a raw response.
///
/// 1. Non-JSON body: an HTTP error becomes [`SdkError::Api`] with the HTTP
///    status, a success becomes [`SdkError::Serialization`].
/// 2. HTTP error or `status.code != 200`: [`SdkError::Api`] with the
///    backend's code and message.
/// 3. Otherwise the (possibly absent) `data`.
fn decode_envelope(http_status: StatusCode, body: &str) -> Result<Option<Value>, SdkError> {
    let envelope: ApiEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) if http_status.is_success() => return Err(SdkError::Serialization(e)),
        Err(_) => {
            let raw: String = body.trim().chars().take(MAX_RAW_ERROR_LEN).collect();
            return Err(SdkError::Api {
                code: i64::from(http_status.as_u16()),
                message: if raw.is_empty() { fallback_message(http_status) } else { raw },
            });
        }
    };

    if http_status.is_success() && envelope.status.is_ok() {
        return Ok(envelope.data.filter(|data| !data.is_null()));
    }

    let code = if envelope.status.is_ok() {
        i64::from(http_status.as_u16())
    } else {
        envelope.status.code
    };
    // An HTTP 200 rejection without a message stays blank so callers can
    // pick their own wording.
    let message = if !envelope.status.message.trim().is_empty() {
        envelope.status.message
    } else if http_status.is_success() {
        String::new()
    } else {
        fallback_message(http_status)
    };
    Err(SdkError::Api { code, message })
}

fn fallback_message(http_status: StatusCode) -> String {
    http_status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_returns_payload() {
        let body = json!({"status": {"code": 200, "message": "OK"}, "data": {"response": "hi"}});
        let data = decode_envelope(StatusCode::OK, &body.to_string()).unwrap();
        assert_eq!(data, Some(json!({"response": "hi"})));
    }

    #[test]
    fn success_with_null_data_has_no_payload() {
        let body = json!({"status": {"code": 200, "message": "OK"}, "data": null});
        assert_eq!(decode_envelope(StatusCode::OK, &body.to_string()).unwrap(), None);
    }

    #[test]
    fn application_error_inside_http_ok() {
        let body = json!({"status": {"code": 404, "message": "Ticker not found"}, "data": null});
        match decode_envelope(StatusCode::OK, &body.to_string()) {
            Err(SdkError::Api { code, message }) => {
                assert_eq!(code, 404);
                assert_eq!(message, "Ticker not found");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn http_error_with_envelope_uses_envelope_message() {
        let body = json!({"status": {"code": 401, "message": "Invalid secret key"}, "data": null});
        match decode_envelope(StatusCode::UNAUTHORIZED, &body.to_string()) {
            Err(SdkError::Api { code, message }) => {
                assert_eq!(code, 401);
                assert_eq!(message, "Invalid secret key");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn http_error_with_ok_envelope_keeps_http_code() {
        let body = json!({"status": {"code": 200, "message": ""}, "data": {}});
        match decode_envelope(StatusCode::BAD_GATEWAY, &body.to_string()) {
            Err(SdkError::Api { code, message }) => {
                assert_eq!(code, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn null_message_under_http_error_uses_reason_phrase() {
        let body = json!({"status": {"code": 404, "message": null}, "data": null});
        match decode_envelope(StatusCode::NOT_FOUND, &body.to_string()) {
            Err(SdkError::Api { code, message }) => {
                assert_eq!(code, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn null_message_under_http_ok_is_an_application_error() {
        let body = json!({"status": {"code": 500, "message": null}});
        let err = decode_envelope(StatusCode::OK, &body.to_string()).unwrap_err();
        assert!(!err.is_transport());
        match err {
            SdkError::Api { code, ref message } => {
                assert_eq!(code, 500);
                assert!(message.is_empty());
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn non_json_error_body_is_echoed() {
        match decode_envelope(StatusCode::INTERNAL_SERVER_ERROR, "  upstream exploded  ") {
            Err(SdkError::Api { code, message }) => {
                assert_eq!(code, 500);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn non_json_success_body_is_a_parse_error() {
        let err = decode_envelope(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, SdkError::Serialization(_)));
        assert!(err.is_transport());
    }

    #[test]
    fn rejects_bad_base_urls() {
        let err = FinbotClient::new(ApiConfig::new("", BearerCredential::default())).unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));

        let err = FinbotClient::new(ApiConfig::new("ftp://h", BearerCredential::default()))
            .unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn builds_endpoints_from_config() {
        let client = FinbotClient::new(ApiConfig::new(
            "http://127.0.0.1:5000/",
            BearerCredential::new("k"),
        ))
        .unwrap();
        assert_eq!(client.endpoints().chat(), "http://127.0.0.1:5000/chat");
    }
}
