//! Best-effort session persistence over well-known keys.

use crate::Store;
use serde::{de::DeserializeOwned, Serialize};
#[cfg(test)]
use crate::StoreError;

/// Well-known key for the serialized cart.
pub const CART_KEY: &str = "curio_cart";
/// Well-known key for the current user record.
pub const CURRENT_USER_KEY: &str = "curio_current_user";
/// Well-known key for the purchase log.
pub const PURCHASES_KEY: &str = "curio_purchases";

/// Session persistence: durable state under fixed keys.
///
/// Reads degrade to defaults and writes are best-effort, so a missing,
/// malformed or unavailable backing store never takes the session down —
/// the in-memory state stays authoritative.
pub struct Session {
    store: Store,
}

impl Session {
    /// Create a session over a store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Create a volatile session (tests, ephemeral runs).
    pub fn in_memory() -> Self {
        Self::new(Store::in_memory())
    }

    /// Restore the value under a key.
    ///
    /// An absent or malformed payload yields `T::default()`.
    pub fn restore<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.store.get(key) {
            Ok(Some(value)) => value,
            Ok(None) | Err(_) => T::default(),
        }
    }

    /// Restore the value under a key, if present and well-formed.
    pub fn restore_opt<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.store.get(key).ok().flatten()
    }

    /// Persist a value under a key, best-effort.
    ///
    /// A failing backing store skips the write; the next successful
    /// persist overwrites whatever the store held.
    pub fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let _ = self.store.set(key, value);
    }

    /// Drop the value under a key, best-effort.
    pub fn forget(&self, key: &str) {
        let _ = self.store.delete(key);
    }

    /// Access the underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }
}

/// A failing backend for exercising degraded persistence.
#[cfg(test)]
pub(crate) struct UnavailableBackend;

#[cfg(test)]
impl crate::backend::Backend for UnavailableBackend {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Backend("storage disabled".to_string()))
    }

    fn write(&self, _key: &str, _payload: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("storage disabled".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("storage disabled".to_string()))
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Backend("storage disabled".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_missing_yields_default() {
        let session = Session::in_memory();
        let value: Vec<u32> = session.restore(CART_KEY);
        assert!(value.is_empty());
    }

    #[test]
    fn test_restore_malformed_yields_default() {
        let session = Session::in_memory();
        session
            .store()
            .set(CART_KEY, &"definitely not a list")
            .unwrap();
        let value: Vec<u32> = session.restore(CART_KEY);
        assert!(value.is_empty());
    }

    #[test]
    fn test_persist_then_restore() {
        let session = Session::in_memory();
        session.persist(PURCHASES_KEY, &vec![1u32, 2, 3]);
        let value: Vec<u32> = session.restore(PURCHASES_KEY);
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_persist_to_unavailable_store_does_not_panic() {
        let session = Session::new(Store::new(UnavailableBackend));
        session.persist(CART_KEY, &vec![1u32]);
        let value: Vec<u32> = session.restore(CART_KEY);
        assert!(value.is_empty());
    }

    #[test]
    fn test_forget() {
        let session = Session::in_memory();
        session.persist(CURRENT_USER_KEY, &"user");
        session.forget(CURRENT_USER_KEY);
        assert_eq!(session.restore_opt::<String>(CURRENT_USER_KEY), None);
    }
}
