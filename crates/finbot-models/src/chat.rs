//! Chat turns displayed in the chat view.
//!
//! A [`ChatMessage`] is created either when the user submits input or when
//! the backend answers. Its [`MessageStatus`] starts at `sending` for user
//! turns and is settled once the matching round trip completes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::MessageId;

/// Author of a chat turn.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    /// The assistant (backend replies and local notices).
    Bot,
    /// The person typing.
    User,
}

/// Delivery status of a chat turn.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageStatus {
    /// Submitted, round trip still outstanding.
    Sending,
    /// Delivered (user turn) or received (bot turn).
    Sent,
    /// The round trip failed.
    Error,
}

impl MessageStatus {
    /// Returns true once the status can no longer change.
    pub fn is_settled(self) -> bool {
        !matches!(self, MessageStatus::Sending)
    }
}

/// One entry of a chat transcript.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Locally generated identifier.
    pub id: MessageId,
    /// Author of the turn.
    pub sender: Sender,
    /// Text shown in the bubble.
    pub content: String,
    /// Delivery status.
    pub status: MessageStatus,
    /// Local creation time, for display only.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// A user turn waiting for its round trip.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content, MessageStatus::Sending)
    }

    /// A bot turn with an already settled status.
    pub fn bot(content: impl Into<String>, status: MessageStatus) -> Self {
        Self::new(Sender::Bot, content, status)
    }

    fn new(sender: Sender, content: impl Into<String>, status: MessageStatus) -> Self {
        Self {
            id: MessageId::generate(),
            sender,
            content: content.into(),
            status,
            timestamp: Utc::now(),
        }
    }

    /// Returns true for turns typed by the user.
    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}
