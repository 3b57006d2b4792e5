//! Durable client-local key-value storage.
//!
//! The storage analogue of a browser's local storage: a small set of named
//! JSON records that survive process restarts but are private to one data
//! directory. Each key maps to one `<key>.json` file. Writes are
//! synchronous; there is no cross-process coordination (multi-process sync
//! is a non-goal).

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Fixed keys for client-local records.
pub mod keys {
    /// Key for the persisted bearer token.
    pub const AUTH_TOKEN: &str = "auth_token";

    /// Key for the persisted cart contents.
    pub const CART: &str = "cart";
}

/// Errors that can occur when reading or writing the local store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("store I/O error: {0}")]
    Io(#[from] io::Error),

    /// Record (de)serialization failed.
    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A file-backed key-value store for client-local state.
///
/// Cheap to clone; clones share the same directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Read and deserialize the record under `key`.
    ///
    /// Returns `Ok(None)` if no record exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record exists but cannot be read or
    /// deserialized.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.record_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Serialize and write `value` under `key`, replacing any previous
    /// record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the write fails.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_vec(value)?;
        fs::write(self.record_path(key), json)?;
        Ok(())
    }

    /// Remove the record under `key`. No-op if absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the removal fails for a reason other
    /// than the record not existing.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.record_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether a record exists under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.record_path(key).exists()
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_get_missing_is_none() {
        let (_dir, store) = store();
        let value: Option<String> = store.get("nothing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_put_get_roundtrip() {
        let (_dir, store) = store();
        store.put(keys::AUTH_TOKEN, &"tok-123".to_string()).unwrap();

        let value: Option<String> = store.get(keys::AUTH_TOKEN).unwrap();
        assert_eq!(value.as_deref(), Some("tok-123"));
        assert!(store.contains(keys::AUTH_TOKEN));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = store();
        store.put("k", &1_u32).unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(!store.contains("k"));
    }

    #[test]
    fn test_clones_share_directory() {
        let (_dir, store) = store();
        let other = store.clone();
        store.put("shared", &vec![1_u32, 2, 3]).unwrap();

        let value: Option<Vec<u32>> = other.get("shared").unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_corrupt_record_is_an_error() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("cart.json"), b"{not json").unwrap();

        let result: Result<Option<Vec<u32>>, _> = store.get(keys::CART);
        assert!(matches!(result, Err(StoreError::Serde(_))));
    }
}
