//! API key validation against the [`KeyStore`].

use crate::{error::CoreError, key::KEY_LENGTH, store::KeyStore};

/// Result of checking a caller-supplied API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validation {
    /// The key was issued by the store.
    Ok,
    /// The key does not have exactly [`KEY_LENGTH`] bytes.
    WrongLength,
    /// The key has the right length but was never issued.
    Unknown,
}

impl Validation {
    /// Convert the outcome into a `Result`, carrying the supplied length for
    /// [`CoreError::KeyWrongLength`].
    ///
    /// # Errors
    /// Returns [`CoreError::KeyWrongLength`] or [`CoreError::UnknownKey`] for
    /// the corresponding outcomes.
    pub fn into_result(self, supplied_len: usize) -> Result<(), CoreError> {
        match self {
            Self::Ok => Ok(()),
            Self::WrongLength => Err(CoreError::KeyWrongLength { len: supplied_len }),
            Self::Unknown => Err(CoreError::UnknownKey),
        }
    }
}

impl KeyStore {
    /// Check a supplied key. The length check runs first and never touches
    /// the registry. The key is not bound to any particular operation.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn validate(&self, supplied: &str) -> Validation {
        if supplied.len() != KEY_LENGTH {
            return Validation::WrongLength;
        }
        if self.contains_key(supplied) {
            Validation::Ok
        } else {
            Validation::Unknown
        }
    }

    /// [`KeyStore::validate`] as a `Result`.
    ///
    /// # Errors
    /// Returns [`CoreError::KeyWrongLength`] or [`CoreError::UnknownKey`].
    pub fn ensure_valid(&self, supplied: &str) -> Result<(), CoreError> {
        self.validate(supplied).into_result(supplied.len())
    }
}
