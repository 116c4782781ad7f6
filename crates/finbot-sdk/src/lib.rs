//! # Finbot SDK
//!
//! Client-side plumbing for the **Finbot** stock-analysis assistant.
//!
//! The SDK provides:
//!
//! * [`FinbotClient`]: HTTP boundary to the backend (bearer credential,
//!   envelope decoding, timeouts).
//! * [`ApiConfig`]: explicit configuration (base URL, credential,
//!   timeout), usually read from the environment at startup.
//! * [`ChatSession`]: session lifecycle and message sending of one chat
//!   view.
//! * [`TickerLookup`]: state of the landing view's ticker lookup.
//! * [`SdkError`]: unified error type for all SDK operations.
//!
//! The controllers hold no UI handles: a reactive front-end drives their
//! synchronous `begin_*`/`finish_*` steps around the network call, while
//! terminal front-ends and tests can use the async wrappers directly.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use finbot_sdk::{ApiConfig, ChatSession, FinbotClient};
//!
//! # async fn run() -> Result<(), finbot_sdk::SdkError> {
//! let client = FinbotClient::new(ApiConfig::from_env())?;
//!
//! let mut session = ChatSession::new(Some("AAPL".to_string()));
//! session.initialize(&client).await;
//! session.send_text("What is the P/E ratio?", &client).await;
//! session.teardown(&client).await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod lookup;
pub mod session;

pub use client::FinbotClient;
pub use config::ApiConfig;
pub use credentials::BearerCredential;
pub use endpoints::Endpoints;
pub use error::SdkError;
pub use lookup::TickerLookup;
pub use session::{ChatSession, InitTicket, PendingSend, SessionError, SessionPhase};

// Re-export the wire and transcript types for ergonomic usage.
pub use finbot_models::{
    ChatMessage, MessageId, MessageStatus, Sender, SessionId, StockInfo, Transcript,
};
