//! Best-effort local persistence of the editor's current gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor saves on every change, loads once at startup, and clears on an
//! explicit reset. Storage is reached through the [`KeyValueStore`] port so
//! the browser binds `localStorage`, the CLI binds a directory, and tests bind
//! [`MemoryStore`].
//!
//! ERROR HANDLING
//! ==============
//! None of the draft operations surface failures. A failed write means the
//! draft simply does not persist; a corrupt stored value loads as `None`.

#[cfg(test)]
#[path = "draft_test.rs"]
mod tests;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use crate::model::Gallery;

/// Fixed storage key holding the draft.
pub const GALLERY_DRAFT_KEY: &str = "gallery_draft_v1";

/// Error reported by a [`KeyValueStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing facility cannot be reached at all.
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota, permissions, I/O).
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// Minimal string key-value storage port.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Draft persistence over an optional storage backend.
///
/// A detached store (no backend) loads `None` and ignores writes.
#[derive(Debug, Clone)]
pub struct DraftStore<S> {
    store: Option<S>,
}

impl<S: KeyValueStore> DraftStore<S> {
    /// Draft store backed by `store`.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store: Some(store) }
    }

    /// Draft store for environments without a storage facility.
    #[must_use]
    pub fn detached() -> Self {
        Self { store: None }
    }

    /// Draft store over a backend that may be missing.
    #[must_use]
    pub fn from_option(store: Option<S>) -> Self {
        Self { store }
    }

    /// Whether a backend is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.store.is_some()
    }

    /// Overwrite the draft with `gallery`.
    pub fn save(&self, gallery: &Gallery) {
        let Some(store) = &self.store else {
            return;
        };
        let Ok(raw) = serde_json::to_string(gallery) else {
            return;
        };
        if let Err(e) = store.set(GALLERY_DRAFT_KEY, &raw) {
            tracing::warn!(error = %e, "gallery draft not saved");
        }
    }

    /// Load the draft, if one is stored and readable.
    #[must_use]
    pub fn load(&self) -> Option<Gallery> {
        let store = self.store.as_ref()?;
        let raw = match store.get(GALLERY_DRAFT_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::debug!(error = %e, "gallery draft unreadable");
                return None;
            }
        };
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(obj)) => Some(Gallery::from_json_object(&obj)),
            Ok(_) => {
                tracing::debug!("stored gallery draft is not an object");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "stored gallery draft is not valid json");
                None
            }
        }
    }

    /// Remove the draft. Clearing an empty store is fine.
    pub fn clear(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.remove(GALLERY_DRAFT_KEY) {
            tracing::warn!(error = %e, "gallery draft not cleared");
        }
    }
}
