//! Error types for the `finbot-models` crate.

use crate::ids::MessageId;

/// Errors produced when mutating model types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A message with the same id is already part of the transcript.
    #[error("duplicate message id {id}")]
    DuplicateMessageId {
        /// The offending id.
        id: MessageId,
    },
}
