//! Storage backends.
//!
//! A backend is a flat namespace of string keys holding JSON text. The
//! file backend keeps the whole namespace in one JSON object file, the
//! way browser local storage holds a site's entries.

use crate::StoreError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A string-keyed slab of JSON payloads.
pub trait Backend: Send {
    /// Read the payload stored under a key.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Write a payload under a key, replacing any previous value.
    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError>;
    /// Remove a key. Absent keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
    /// List all keys.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// Volatile in-memory backend.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))
    }
}

impl Backend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

/// File backend: the whole namespace in a single JSON object file.
///
/// Every write re-serializes the file. That is deliberate — the store
/// holds a handful of small session entries, and a full rewrite keeps
/// the file consistent without any journal.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend persisting to the given file.
    ///
    /// The file is created on first write; a missing file reads as an
    /// empty namespace.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this backend persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Backend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), payload.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.load()?.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        backend.write("k", "\"v\"").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("\"v\""));
        backend.remove("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);
    }

    #[test]
    fn test_memory_backend_keys() {
        let backend = MemoryBackend::new();
        backend.write("a", "1").unwrap();
        backend.write("b", "2").unwrap();
        assert_eq!(backend.keys().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_file_backend_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("store.json"));
        assert_eq!(backend.read("anything").unwrap(), None);
        assert!(backend.keys().unwrap().is_empty());
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let backend = FileBackend::new(&path);
        backend.write("cart", "{\"lines\":[]}").unwrap();

        // A fresh backend over the same file sees the entry.
        let reopened = FileBackend::new(&path);
        assert_eq!(
            reopened.read("cart").unwrap().as_deref(),
            Some("{\"lines\":[]}")
        );
    }

    #[test]
    fn test_file_backend_remove() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("store.json"));
        backend.write("k", "1").unwrap();
        backend.remove("k").unwrap();
        backend.remove("k").unwrap(); // absent key is fine
        assert_eq!(backend.read("k").unwrap(), None);
    }
}
