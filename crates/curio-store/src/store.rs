//! Typed store with automatic JSON serialization.

use crate::backend::{Backend, FileBackend, MemoryBackend};
use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;

/// Type-safe key-value store over a [`Backend`].
///
/// Values are serialized as field-tagged JSON, so stored payloads stay
/// human-readable.
pub struct Store {
    backend: Box<dyn Backend>,
}

impl Store {
    /// Create a store over any backend.
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Create a volatile in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Create a store persisting to a JSON file.
    pub fn in_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileBackend::new(path))
    }

    /// Get a value, or `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.read(key)? {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    /// Set a value, replacing any previous one.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let payload = serde_json::to_string(value)?;
        self.backend.write(key, &payload)
    }

    /// Delete a value. Absent keys are not an error.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key)
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.backend.read(key)?.is_some())
    }

    /// List all keys.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.backend.keys()
    }
}

/// Helper to build namespaced store keys.
///
/// ```
/// use curio_store::store_key;
/// let key = store_key!("cart", "user-1");
/// assert_eq!(key, "cart:user-1");
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        label: String,
        count: u32,
    }

    #[test]
    fn test_typed_round_trip() {
        let store = Store::in_memory();
        let entry = Entry {
            label: "cart".to_string(),
            count: 3,
        };
        store.set("entry", &entry).unwrap();
        assert_eq!(store.get::<Entry>("entry").unwrap(), Some(entry));
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = Store::in_memory();
        assert_eq!(store.get::<Entry>("missing").unwrap(), None);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let store = Store::in_memory();
        store.set("raw", &"not an entry").unwrap();
        assert!(store.get::<Entry>("raw").is_err());
    }

    #[test]
    fn test_delete_and_exists() {
        let store = Store::in_memory();
        store.set("k", &1u32).unwrap();
        assert!(store.exists("k").unwrap());
        store.delete("k").unwrap();
        assert!(!store.exists("k").unwrap());
    }

    #[test]
    fn test_store_key_macro() {
        assert_eq!(store_key!("cart", "user-1"), "cart:user-1");
        assert_eq!(store_key!("a", "b", "c"), "a:b:c");
    }
}
