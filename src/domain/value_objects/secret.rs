//! Secret Value Object
//!
//! Generated credentials. `Debug` is redacted and there is no `Display`, so a
//! secret can only reach output through an explicit `expose()`.

use std::fmt;

/// Hex-encoded random token
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Random bytes per secret (hex doubles the length)
    pub const BYTES: usize = 32;

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}
