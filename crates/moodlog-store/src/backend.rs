use std::collections::HashMap;
use std::fs;
use std::io;
use std::sync::{Mutex, PoisonError};

use crate::error::StoreError;
use crate::paths::StorePaths;
use crate::{lock_file, write_atomic, LockGuard};

/// Cross-process guard returned by [`KvBackend::lock_key`].
pub struct KeyGuard {
    _file: Option<LockGuard>,
}

impl KeyGuard {
    /// Guard for backends with no cross-process sharing.
    pub fn none() -> Self {
        Self { _file: None }
    }
}

/// String-keyed, string-valued persistent storage, the shape of a
/// platform key-value store.
pub trait KvBackend: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Exclusive lock on `key` against other processes sharing the backend.
    fn lock_key(&self, _key: &str) -> Result<KeyGuard, StoreError> {
        Ok(KeyGuard::none())
    }
}

// ── File backend ──

/// One `kv/<key>.json` file per key; writes are atomic renames.
#[derive(Debug, Clone)]
pub struct FileKv {
    paths: StorePaths,
}

impl FileKv {
    /// Open (and lay out, if needed) a store rooted at `paths.root`.
    pub fn open(paths: StorePaths) -> Result<Self, StoreError> {
        paths
            .ensure_layout()
            .map_err(|e| StoreError::write(&paths.root.display().to_string(), e))?;
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }
}

impl KvBackend for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.paths.key_file(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::read(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        write_atomic(&self.paths.key_file(key), value.as_bytes())
            .map_err(|e| StoreError::write(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.paths.key_file(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::write(key, e)),
        }
    }

    fn lock_key(&self, key: &str) -> Result<KeyGuard, StoreError> {
        let guard = lock_file(&self.paths.lock_file(key)).map_err(|e| StoreError::write(key, e))?;
        Ok(KeyGuard { _file: Some(guard) })
    }
}

// ── In-memory backend ──

/// Process-local backend for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryKv {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.map.lock().unwrap_or_else(PoisonError::into_inner);
        map.remove(key);
        Ok(())
    }
}
