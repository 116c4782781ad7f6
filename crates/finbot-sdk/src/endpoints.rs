//! Canonical endpoint paths of the Finbot backend.
//!
//! All URLs used by the client **must** be built through [`Endpoints`] so
//! the path layout is defined in exactly one place.
//!
//! ```text
//! POST {base}/ticker            ← company lookup
//! GET  {base}/get_ticker_data   ← chat session initialization
//! POST {base}/chat              ← one chat turn
//! POST {base}/cleanup_session   ← chat session release
//! ```

/// Central authority for endpoint URLs.
///
/// # Examples
///
/// ```
/// use finbot_sdk::Endpoints;
///
/// let endpoints = Endpoints::new("http://127.0.0.1:5000/");
/// assert_eq!(endpoints.chat(), "http://127.0.0.1:5000/chat");
/// assert_eq!(endpoints.ticker(), "http://127.0.0.1:5000/ticker");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Path of the company lookup.
    pub const TICKER: &'static str = "/ticker";
    /// Path of the chat session initialization.
    pub const GET_TICKER_DATA: &'static str = "/get_ticker_data";
    /// Path of a chat turn.
    pub const CHAT: &'static str = "/chat";
    /// Path of the chat session release.
    pub const CLEANUP_SESSION: &'static str = "/cleanup_session";

    /// Endpoints under `base_url` (a trailing slash is ignored).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /ticker`.
    pub fn ticker(&self) -> String {
        self.join(Self::TICKER)
    }

    /// `GET /get_ticker_data`.
    pub fn get_ticker_data(&self) -> String {
        self.join(Self::GET_TICKER_DATA)
    }

    /// `POST /chat`.
    pub fn chat(&self) -> String {
        self.join(Self::CHAT)
    }

    /// `POST /cleanup_session`.
    pub fn cleanup_session(&self) -> String {
        self.join(Self::CLEANUP_SESSION)
    }

    fn join(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_base_url() {
        let e = Endpoints::new("https://finbot.example.com/api");
        assert_eq!(e.get_ticker_data(), "https://finbot.example.com/api/get_ticker_data");
        assert_eq!(e.cleanup_session(), "https://finbot.example.com/api/cleanup_session");
    }

    #[test]
    fn trailing_slashes_are_dropped() {
        assert_eq!(Endpoints::new("http://h:1//").base_url(), "http://h:1");
    }
}
