//! Request bodies and response payloads of the four backend endpoints.
//!
//! | Endpoint | Request | `data` payload |
//! |----------|---------|----------------|
//! | `POST /ticker` | [`TickerRequest`] | [`TickerPayload`] |
//! | `GET /get_ticker_data` | [`TickerDataQuery`] | opaque JSON |
//! | `POST /chat` | [`ChatRequest`] | [`ChatReply`] |
//! | `POST /cleanup_session` | [`CleanupRequest`] | ignored |

use serde::{Deserialize, Serialize};

use crate::ids::SessionId;
use crate::stock::StockInfo;

/// Body of `POST /ticker`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TickerRequest {
    /// Symbol typed by the user.
    pub ticker: String,
}

/// `data` of a successful `POST /ticker`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TickerPayload {
    /// Company snapshot.
    pub stock_info: StockInfo,
}

/// Query string of `GET /get_ticker_data`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TickerDataQuery {
    /// Session being initialized.
    pub session_id: SessionId,
    /// Symbol the session is about.
    pub tickers: String,
}

/// Body of `POST /chat`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// Session the utterance belongs to.
    pub session_id: SessionId,
    /// User utterances; the client always sends exactly one.
    pub messages: Vec<String>,
}

impl ChatRequest {
    /// A request carrying a single utterance.
    pub fn single(session_id: SessionId, text: impl Into<String>) -> Self {
        Self {
            session_id,
            messages: vec![text.into()],
        }
    }
}

/// `data` of a successful `POST /chat`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatReply {
    /// Assistant answer; `None` when the backend sent `null` or nothing.
    #[serde(default)]
    pub response: Option<String>,
}

/// Body of `POST /cleanup_session`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CleanupRequest {
    /// Session to release.
    pub session_id: SessionId,
}
