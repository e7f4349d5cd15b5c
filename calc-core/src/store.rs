//! In-memory API key registry.
//!
//! Holds the email-to-record and key-to-email mappings behind a single lock
//! so the two directions can never drift apart. Nothing is persisted; the
//! registry lives exactly as long as the process.

use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::key::ApiKey;

/// The association between an email address and its API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct KeyRecord {
    /// Email address the key was issued to.
    pub email: String,
    /// The issued key.
    pub key: ApiKey,
    /// When the key was first issued.
    pub issued_at: DateTime<Utc>,
}

/// Outcome of [`KeyStore::issue_or_get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issued {
    /// The record now associated with the email.
    pub record: KeyRecord,
    /// `true` if the email already held a key before this call.
    pub existed: bool,
}

#[derive(Debug, Default)]
struct Maps {
    by_email: HashMap<String, KeyRecord>,
    by_key: HashMap<ApiKey, String>,
}

/// Thread-safe registry of issued API keys.
#[derive(Debug, Default)]
pub struct KeyStore {
    maps: RwLock<Maps>,
}

impl KeyStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the key for `email`, issuing a new one on first request.
    ///
    /// Lookup and insert happen under one write guard, so concurrent first
    /// requests for the same email all observe the same key.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned, or if the OS random source
    /// is unavailable when a new key must be generated.
    pub fn issue_or_get(&self, email: &str) -> Issued {
        let mut maps = self.write();

        if let Some(record) = maps.by_email.get(email) {
            return Issued { record: record.clone(), existed: true };
        }

        let key = loop {
            let candidate = ApiKey::generate();
            if !maps.by_key.contains_key(&candidate) {
                break candidate;
            }
        };
        let record = KeyRecord { email: email.to_owned(), key, issued_at: Utc::now() };
        maps.by_key.insert(record.key.clone(), record.email.clone());
        maps.by_email.insert(record.email.clone(), record.clone());

        tracing::debug!(email = %email, "issued new api key");

        Issued { record, existed: false }
    }

    /// Return the email the given key was issued to, if any.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn email_for(&self, key: &str) -> Option<String> {
        self.read().by_key.get(key).cloned()
    }

    /// Return the record for the given email, if a key was issued to it.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn record_for(&self, email: &str) -> Option<KeyRecord> {
        self.read().by_email.get(email).cloned()
    }

    /// Number of issued keys.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().by_email.len()
    }

    /// Return `true` if no key has been issued yet.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return `true` if `key` was issued by this store.
    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.read().by_key.contains_key(key)
    }

    fn read(&self) -> RwLockReadGuard<'_, Maps> {
        match self.maps.read() {
            Ok(guard) => guard,
            Err(_) => panic!("key store read lock poisoned"),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Maps> {
        match self.maps.write() {
            Ok(guard) => guard,
            Err(_) => panic!("key store write lock poisoned"),
        }
    }
}
