//! Browser `localStorage` adapter for the gallery draft store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the [`KeyValueStore`] port to `window.localStorage` in hydrate
//! builds. SSR and native test builds have no storage facility, so
//! [`LocalStorage::open`] yields `None` and the draft store runs detached.

#[cfg(test)]
#[path = "browser_storage_test.rs"]
mod browser_storage_test;

use gallery::{DraftStore, KeyValueStore, StorageError};

/// Handle to the page's `localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    #[cfg(feature = "hydrate")]
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open `localStorage`, or `None` when the environment has none.
    pub fn open() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            Some(Self { storage })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            self.storage
                .get_item(key)
                .map_err(|e| StorageError::Backend(format!("localStorage getItem failed: {e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            self.storage
                .set_item(key, value)
                .map_err(|e| StorageError::Backend(format!("localStorage setItem failed: {e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            self.storage
                .remove_item(key)
                .map_err(|e| StorageError::Backend(format!("localStorage removeItem failed: {e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Draft store bound to the page's `localStorage`.
///
/// Opened per call so reactive closures only capture `Send` signals.
pub fn draft_store() -> DraftStore<LocalStorage> {
    DraftStore::from_option(LocalStorage::open())
}
