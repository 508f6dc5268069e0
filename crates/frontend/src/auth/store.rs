//! Persistence of the bearer token and its expiry record

use super::token::TokenExpiryRecord;
use crate::config::AppConfig;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Storage(#[from] StorageError),

    #[error("corrupt stored value: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("localStorage rejected the write: {0}")]
    Browser(String),
}

/// Where the session credentials live between page loads
pub trait TokenStore {
    fn token(&self) -> Option<String>;

    /// `Ok(None)` when no record was stored, `Err` when one exists but cannot be read
    fn expiry(&self) -> Result<Option<TokenExpiryRecord>, StoreError>;

    /// Persist a token. Without an expiry any previous record is removed.
    fn save(&self, token: &str, expiry: Option<&TokenExpiryRecord>) -> Result<(), StoreError>;

    fn clear(&self);
}

/// Returns the stored token if it is still usable.
///
/// An expired or unreadable expiry record clears both the token and the record.
/// A token stored without any record never expires client-side.
pub fn valid_token(store: &dyn TokenStore, now: i64) -> Option<String> {
    let token = store.token()?;

    match store.expiry() {
        Ok(None) => Some(token),
        Ok(Some(record)) if !record.is_expired(now) => Some(token),
        Ok(Some(record)) => {
            tracing::info!(expired_at = record.expires_at, "Stored token expired, clearing credentials");
            store.clear();
            None
        }
        Err(e) => {
            tracing::warn!("Unreadable token expiry record, clearing credentials: {e}");
            store.clear();
            None
        }
    }
}

/// Browser `localStorage`.
///
/// The token is kept as a raw string; only the expiry record is JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn token(&self) -> Option<String> {
        match LocalStorage::raw().get_item(AppConfig::TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read stored token: {e:?}");
                None
            }
        }
    }

    fn expiry(&self) -> Result<Option<TokenExpiryRecord>, StoreError> {
        match LocalStorage::get::<TokenExpiryRecord>(AppConfig::TOKEN_EXPIRY_KEY) {
            Ok(record) => Ok(Some(record)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str, expiry: Option<&TokenExpiryRecord>) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(AppConfig::TOKEN_KEY, token)
            .map_err(|e| StoreError::Browser(format!("{e:?}")))?;
        match expiry {
            Some(record) => LocalStorage::set(AppConfig::TOKEN_EXPIRY_KEY, record)?,
            None => LocalStorage::delete(AppConfig::TOKEN_EXPIRY_KEY),
        }
        Ok(())
    }

    fn clear(&self) {
        if let Err(e) = LocalStorage::raw().remove_item(AppConfig::TOKEN_KEY) {
            tracing::warn!("Failed to remove stored token: {e:?}");
        }
        LocalStorage::delete(AppConfig::TOKEN_EXPIRY_KEY);
    }
}

/// In-memory store, for tests and environments without web storage
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RefCell<HashMap<&'static str, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value under `key`, bypassing serialization
    pub fn insert_raw(&self, key: &'static str, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key, value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.entries
            .borrow()
            .get(AppConfig::TOKEN_KEY)
            .filter(|token| !token.is_empty())
            .cloned()
    }

    fn expiry(&self) -> Result<Option<TokenExpiryRecord>, StoreError> {
        self.entries
            .borrow()
            .get(AppConfig::TOKEN_EXPIRY_KEY)
            .map(|raw| serde_json::from_str(raw))
            .transpose()
            .map_err(StoreError::from)
    }

    fn save(&self, token: &str, expiry: Option<&TokenExpiryRecord>) -> Result<(), StoreError> {
        let expiry = expiry.map(serde_json::to_string).transpose()?;
        let mut entries = self.entries.borrow_mut();
        entries.insert(AppConfig::TOKEN_KEY, token.to_string());
        match expiry {
            Some(record) => entries.insert(AppConfig::TOKEN_EXPIRY_KEY, record),
            None => entries.remove(AppConfig::TOKEN_EXPIRY_KEY),
        };
        Ok(())
    }

    fn clear(&self) {
        let mut entries = self.entries.borrow_mut();
        entries.remove(AppConfig::TOKEN_KEY);
        entries.remove(AppConfig::TOKEN_EXPIRY_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_not_valid() {
        let store = MemoryTokenStore::new();
        assert_eq!(valid_token(&store, 0), None);
    }

    #[test]
    fn token_without_expiry_stays_valid() {
        let store = MemoryTokenStore::new();
        store.save("tok", None).unwrap();
        assert_eq!(valid_token(&store, i64::MAX), Some("tok".to_string()));
    }

    #[test]
    fn unexpired_token_is_returned() {
        let store = MemoryTokenStore::new();
        let record = TokenExpiryRecord::from_ttl(100, 60);
        store.save("tok", Some(&record)).unwrap();

        assert_eq!(valid_token(&store, 159), Some("tok".to_string()));
        assert!(store.contains(AppConfig::TOKEN_EXPIRY_KEY));
    }

    #[test]
    fn expired_token_is_cleared() {
        let store = MemoryTokenStore::new();
        let record = TokenExpiryRecord::from_ttl(100, 60);
        store.save("tok", Some(&record)).unwrap();

        assert_eq!(valid_token(&store, 160), None);
        assert!(!store.contains(AppConfig::TOKEN_KEY));
        assert!(!store.contains(AppConfig::TOKEN_EXPIRY_KEY));
    }

    #[test]
    fn corrupt_expiry_record_clears_credentials() {
        let store = MemoryTokenStore::new();
        store.insert_raw(AppConfig::TOKEN_KEY, "tok");
        store.insert_raw(AppConfig::TOKEN_EXPIRY_KEY, "not json");

        assert!(store.expiry().is_err());
        assert_eq!(valid_token(&store, 0), None);
        assert!(!store.contains(AppConfig::TOKEN_KEY));
    }

    #[test]
    fn saving_without_expiry_drops_stale_record() {
        let store = MemoryTokenStore::new();
        store
            .save("old", Some(&TokenExpiryRecord::from_ttl(0, 10)))
            .unwrap();
        store.save("new", None).unwrap();

        assert_eq!(store.expiry().unwrap(), None);
        assert_eq!(valid_token(&store, 1_000), Some("new".to_string()));
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let store = MemoryTokenStore::new();
        store.insert_raw(AppConfig::TOKEN_KEY, "");
        assert_eq!(valid_token(&store, 0), None);
    }
}
