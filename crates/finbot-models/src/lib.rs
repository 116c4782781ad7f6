#![deny(missing_docs)]

//! # Finbot Models
//!
//! Core data types shared by the Finbot client crates.
//!
//! ## Wire layout
//!
//! ```text
//! ApiEnvelope<T>
//! ├── status: ApiStatus { code, message, debug_info? }
//! └── data:   Option<T>
//!     ├── TickerPayload { stock_info: StockInfo }   ← POST /ticker
//!     ├── ChatReply { response }                    ← POST /chat
//!     └── opaque JSON                               ← GET /get_ticker_data
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`envelope`] | `ApiEnvelope`, `ApiStatus` |
//! | [`requests`] | Request bodies and response payloads |
//! | [`stock`] | `StockInfo` snapshot and display helpers |
//! | [`chat`] | `ChatMessage`, `Sender`, `MessageStatus` |
//! | [`ids`] | `SessionId`, `MessageId` |
//! | [`transcript`] | Ordered message list of a chat session |

pub mod chat;
mod de;
pub mod envelope;
pub mod error;
pub mod ids;
pub mod requests;
pub mod stock;
pub mod transcript;

// Re-export all public types at crate root for convenience.
pub use chat::*;
pub use envelope::*;
pub use error::*;
pub use ids::*;
pub use requests::*;
pub use stock::*;
pub use transcript::*;
