//! One-way hashed password secret.

use std::fmt;

/// Hashed form of a user's secret, as produced by the password hasher.
///
/// Intentionally has no `Serialize` impl and redacts itself in `Debug`
/// output, so it cannot leak through logs or API responses.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash([redacted])")
    }
}
