//! Ordered message list of one chat session.
//!
//! The transcript is append-only: turns are never re-sorted or removed
//! individually. The only in-place mutation is settling a turn's
//! [`MessageStatus`]; the only bulk mutation is replacing the whole list
//! when a new session starts.

use crate::chat::{ChatMessage, MessageStatus};
use crate::error::ModelError;
use crate::ids::MessageId;

/// Conversation in visible order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// An empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` at the end.
    ///
    /// Fails without touching the list if another message already uses the
    /// same id.
    pub fn push(&mut self, message: ChatMessage) -> Result<(), ModelError> {
        if self.get(&message.id).is_some() {
            return Err(ModelError::DuplicateMessageId { id: message.id });
        }
        self.messages.push(message);
        Ok(())
    }

    /// Set the status of the message with `id`.
    ///
    /// Returns `false` when no such message exists.
    pub fn update_status(&mut self, id: &MessageId, status: MessageStatus) -> bool {
        match self.messages.iter_mut().find(|m| m.id == *id) {
            Some(message) => {
                message.status = status;
                true
            }
            None => false,
        }
    }

    /// Replace the whole conversation with a single message.
    pub fn reset_with(&mut self, message: ChatMessage) {
        self.messages.clear();
        self.messages.push(message);
    }

    /// Drop every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Look up a message by id.
    pub fn get(&self, id: &MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == *id)
    }

    /// All messages in visible order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The newest message.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true when no message was recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;

    #[test]
    fn push_keeps_append_order() {
        let mut t = Transcript::new();
        t.push(ChatMessage::bot("greeting", MessageStatus::Sent)).unwrap();
        t.push(ChatMessage::user("question")).unwrap();
        t.push(ChatMessage::bot("answer", MessageStatus::Sent)).unwrap();

        let contents: Vec<_> = t.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["greeting", "question", "answer"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut t = Transcript::new();
        let msg = ChatMessage::user("hi");
        t.push(msg.clone()).unwrap();

        let err = t.push(msg.clone()).unwrap_err();
        assert_eq!(err, ModelError::DuplicateMessageId { id: msg.id });
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn update_status_changes_only_status() {
        let mut t = Transcript::new();
        let msg = ChatMessage::user("hi");
        let id = msg.id;
        t.push(msg.clone()).unwrap();

        assert!(t.update_status(&id, MessageStatus::Sent));
        let updated = t.get(&id).unwrap();
        assert_eq!(updated.status, MessageStatus::Sent);
        assert_eq!(updated.content, msg.content);
        assert_eq!(updated.sender, Sender::User);
        assert_eq!(updated.timestamp, msg.timestamp);
    }

    #[test]
    fn update_status_of_unknown_id_is_noop() {
        let mut t = Transcript::new();
        t.push(ChatMessage::user("hi")).unwrap();
        let before = t.clone();

        assert!(!t.update_status(&MessageId::generate(), MessageStatus::Error));
        assert_eq!(t, before);
    }

    #[test]
    fn reset_replaces_everything() {
        let mut t = Transcript::new();
        t.push(ChatMessage::user("one")).unwrap();
        t.push(ChatMessage::user("two")).unwrap();

        t.reset_with(ChatMessage::bot("fresh", MessageStatus::Sent));
        assert_eq!(t.len(), 1);
        assert_eq!(t.last().unwrap().content, "fresh");
    }
}
