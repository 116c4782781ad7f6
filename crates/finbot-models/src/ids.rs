//! Client-generated identifiers.
//!
//! Both identifiers are minted locally without any central allocator;
//! UUID v4 collisions are not a practical concern here.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// SessionId
// ---------------------------------------------------------------------------

/// Identifier of a server-side chat session.
///
/// # Examples
///
/// ```
/// use finbot_models::SessionId;
///
/// let id = SessionId::generate();
/// assert!(id.as_str().starts_with("session_"));
/// assert_ne!(id, SessionId::generate());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Mint a fresh session identifier (`session_<uuid>`).
    pub fn generate() -> Self {
        Self(format!("session_{}", Uuid::new_v4().simple()))
    }

    /// Wrap an existing identifier.
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Return the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// MessageId
// ---------------------------------------------------------------------------

/// Identifier of a single chat message, unique within a transcript.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Mint a fresh message identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_has_prefix_and_no_hyphens() {
        let id = SessionId::generate();
        let suffix = id.as_str().strip_prefix("session_").unwrap();
        assert_eq!(suffix.len(), 32);
        assert!(!suffix.contains('-'));
    }

    #[test]
    fn session_id_serializes_as_plain_string() {
        let id = SessionId::new("session_abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"session_abc\"");
    }

    #[test]
    fn message_ids_are_unique() {
        let a = MessageId::generate();
        let b = MessageId::generate();
        assert_ne!(a, b);
    }
}
