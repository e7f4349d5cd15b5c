//! API key generation.
//!
//! Keys are opaque bearer tokens: `KEY_LENGTH` bytes from the OS CSPRNG,
//! URL-safe base64 encoded and cut down to `KEY_LENGTH` characters.

use std::{borrow::Borrow, fmt};

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use serde::Serialize;

use crate::error::CoreError;

/// Length in characters (and bytes) of every issued API key.
pub const KEY_LENGTH: usize = 32;

/// An issued API key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Generates a fresh random key.
    ///
    /// # Panics
    /// Panics if the operating system random source is unavailable. A host
    /// without entropy cannot issue keys safely, so this is not recoverable.
    #[must_use]
    pub fn generate() -> Self {
        match Self::try_generate() {
            Ok(key) => key,
            Err(e) => panic!("cannot generate API key: {e}"),
        }
    }

    /// Generates a fresh random key, reporting random source failure.
    ///
    /// # Errors
    /// Returns [`CoreError::EntropyUnavailable`] if `getrandom` fails.
    pub fn try_generate() -> Result<Self, CoreError> {
        let mut bytes = [0u8; KEY_LENGTH];
        getrandom::fill(&mut bytes).map_err(|e| CoreError::EntropyUnavailable(e.to_string()))?;
        Ok(Self::from_entropy(&bytes))
    }

    /// Encodes raw entropy into a key. 32 bytes encode to 44 base64 characters,
    /// so the cut always falls before any padding.
    fn from_entropy(bytes: &[u8; KEY_LENGTH]) -> Self {
        let mut encoded = URL_SAFE.encode(bytes);
        encoded.truncate(KEY_LENGTH);
        Self(encoded)
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash and Eq are derived from the inner `String`, so they agree with `str`.
impl Borrow<str> for ApiKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_url_safe(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    }

    #[test]
    fn generated_key_has_fixed_length() {
        let key = ApiKey::generate();
        assert_eq!(key.as_str().len(), KEY_LENGTH);
    }

    #[test]
    fn generated_keys_differ() {
        let a = ApiKey::generate();
        let b = ApiKey::generate();
        assert_ne!(a, b, "two draws from the CSPRNG must not collide");
    }

    #[test]
    fn all_zero_entropy_encodes_to_a_run_of_a() {
        let key = ApiKey::from_entropy(&[0u8; KEY_LENGTH]);
        assert_eq!(key.as_str(), "A".repeat(KEY_LENGTH));
    }

    #[test]
    fn high_bytes_use_url_safe_symbols() {
        let key = ApiKey::from_entropy(&[0xff_u8; KEY_LENGTH]);
        assert!(key.as_str().chars().all(|c| c == '_'), "0xff must encode to '_', got {key}");
    }

    #[test]
    fn display_and_serialize_emit_the_bare_token() {
        let key = ApiKey::from_entropy(&[7u8; KEY_LENGTH]);
        let json = match serde_json::to_string(&key) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, format!("\"{key}\""));
    }

    proptest::proptest! {
        #[test]
        fn proptest_any_entropy_yields_url_safe_key_of_fixed_length(
            raw in proptest::array::uniform32(proptest::prelude::any::<u8>()),
        ) {
            let key = ApiKey::from_entropy(&raw);
            proptest::prop_assert_eq!(key.as_str().len(), KEY_LENGTH);
            proptest::prop_assert!(
                key.as_str().chars().all(is_url_safe),
                "key must only contain URL-safe characters, got {}", key
            );
        }
    }
}
