//! Static bearer credential attached to outgoing calls.

use std::fmt;

/// Shared secret sent as `Authorization: Bearer <secret>`.
///
/// This is a deployment-wide key, not a per-user login. `Debug` never
/// prints the secret.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BearerCredential(String);

impl BearerCredential {
    /// Wrap a secret; surrounding whitespace is dropped.
    pub fn new(secret: &str) -> Self {
        Self(secret.trim().to_string())
    }

    /// Returns true when no secret is configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw secret, for building the header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("BearerCredential(<unset>)")
        } else {
            f.write_str("BearerCredential(<redacted>)")
        }
    }
}
