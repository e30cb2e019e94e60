//! String key/value storage
//!
//! LocalStorage on the web, an in-memory map everywhere else.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// No backing store (private browsing, storage disabled)
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the write (quota, permissions)
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// A string-keyed slot store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile store used natively and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage`
    pub struct LocalStore {
        storage: Option<web_sys::Storage>,
    }

    impl LocalStore {
        pub fn new() -> Self {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten();
            if storage.is_none() {
                log::warn!("LocalStorage unavailable - scores will not persist");
            }
            Self { storage }
        }
    }

    impl Default for LocalStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl KeyValueStore for LocalStore {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.as_ref()?.get_item(key).ok().flatten()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
        }
    }
}
