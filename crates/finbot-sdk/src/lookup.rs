//! State of the landing view's ticker lookup.
//!
//! Same split as [`ChatSession`](crate::ChatSession): `begin_analyze`
//! guards re-entrancy and hands out the ticker to query, `finish_analyze`
//! stores the outcome.

use finbot_models::StockInfo;
use tracing::{info, warn};

use crate::client::FinbotClient;
use crate::error::SdkError;

/// Shown when the user submits an empty ticker.
pub const EMPTY_TICKER_TEXT: &str = "Please enter a ticker symbol.";
/// Shown when the backend rejected a lookup without explanation.
pub const GENERIC_LOOKUP_ERROR_TEXT: &str = "An error occurred";

/// Ticker input, busy flag, last result and last error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickerLookup {
    ticker: String,
    busy: bool,
    stock_info: Option<StockInfo>,
    error: Option<String>,
}

impl TickerLookup {
    /// An idle lookup with empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a lookup of the input buffer.
    ///
    /// Returns `None` while a lookup is outstanding, so a double submit has
    /// no additional network effect. Otherwise clears the previous result
    /// and error; a blank ticker then records an error and also returns
    /// `None`.
    pub fn begin_analyze(&mut self) -> Option<String> {
        if self.busy {
            return None;
        }
        self.stock_info = None;
        self.error = None;

        let ticker = self.ticker.trim().to_string();
        if ticker.is_empty() {
            self.error = Some(EMPTY_TICKER_TEXT.to_string());
            return None;
        }
        self.busy = true;
        Some(ticker)
    }

    /// Store the outcome of `POST /ticker`.
    pub fn finish_analyze(&mut self, result: Result<StockInfo, SdkError>) {
        self.busy = false;
        match result {
            Ok(info) => {
                info!(symbol = %info.symbol, "ticker lookup succeeded");
                self.stock_info = Some(info);
            }
            Err(e) => {
                warn!(error = %e, "ticker lookup failed");
                self.error = Some(lookup_error_text(&e));
            }
        }
    }

    /// Look up the input buffer; returns true when a result was stored.
    pub async fn analyze(&mut self, client: &FinbotClient) -> bool {
        let Some(ticker) = self.begin_analyze() else {
            return false;
        };
        let result = client.ticker(&ticker).await;
        self.finish_analyze(result);
        self.stock_info.is_some()
    }

    /// Symbol to open the chat with; `None` until a lookup succeeded.
    pub fn chat_symbol(&self) -> Option<&str> {
        self.stock_info
            .as_ref()
            .map(|info| info.symbol.trim())
            .filter(|symbol| !symbol.is_empty())
    }

    /// Current input buffer.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Replace the input buffer.
    pub fn set_ticker(&mut self, ticker: &str) {
        self.ticker = ticker.to_string();
    }

    /// A lookup is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Result of the last successful lookup.
    pub fn stock_info(&self) -> Option<&StockInfo> {
        self.stock_info.as_ref()
    }

    /// Error of the last failed lookup.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

fn lookup_error_text(error: &SdkError) -> String {
    match error {
        SdkError::Api { .. } | SdkError::MissingData => error
            .server_message()
            .unwrap_or(GENERIC_LOOKUP_ERROR_TEXT)
            .to_string(),
        other => other.to_string(),
    }
}
