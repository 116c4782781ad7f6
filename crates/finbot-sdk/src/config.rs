//! Client configuration.
//!
//! [`ApiConfig`] gathers everything the HTTP boundary needs. It is built
//! once at startup (usually from environment variables) and handed to
//! [`FinbotClient::new`](crate::FinbotClient::new); nothing reads the
//! environment afterwards.

use std::time::Duration;

use crate::credentials::BearerCredential;

/// Backend used when `FINBOT_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
/// Per-request timeout used when `FINBOT_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection parameters for the Finbot backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without trailing slash (e.g. `http://127.0.0.1:5000`).
    pub base_url: String,
    /// Bearer credential attached to every call when non-empty.
    pub credential: BearerCredential,
    /// Per-request timeout; `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, BearerCredential::default())
    }
}

impl ApiConfig {
    /// Configuration for `base_url` with the default timeout.
    pub fn new(base_url: &str, credential: BearerCredential) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            credential,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }

    /// Replace the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the configuration from environment variables.
    ///
    /// | Variable              | Default                 | Description                    |
    /// |-----------------------|-------------------------|--------------------------------|
    /// | `FINBOT_API_URL`      | `http://127.0.0.1:5000` | Backend base URL               |
    /// | `FINBOT_SECRET_KEY`   | *(empty)*               | Bearer credential              |
    /// | `FINBOT_TIMEOUT_SECS` | `30`                    | Per-request timeout, `0` = off |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("FINBOT_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let credential = lookup("FINBOT_SECRET_KEY")
            .map(|v| BearerCredential::new(&v))
            .unwrap_or_default();

        let timeout_secs = lookup("FINBOT_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(&base_url, credential).with_timeout(timeout_from_secs(timeout_secs))
    }
}

/// `0` disables the timeout.
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
