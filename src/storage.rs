use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::errors::StorageError;

// 1. KeyValueStore Contract

/// KeyValueStore
///
/// Abstract contract for the two client storage regions the core relies on:
/// durable session storage (survives reloads) and ephemeral per-tab storage
/// (tab lifetime only). The trait lets callers swap the concrete
/// implementation — in-memory, file-backed, or a deliberately failing one
/// during testing — without affecting the stores built on top.
///
/// All operations are synchronous: every access happens within a single
/// navigation/render pass (there is no background processing in this core).
pub trait KeyValueStore: Send + Sync {
    /// Reads the value under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is a no-op, not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// DurableState
///
/// Shared handle to the durable storage region (the session record).
pub type DurableState = Arc<dyn KeyValueStore>;

/// EphemeralState
///
/// Shared handle to the per-tab storage region (the last internal path).
pub type EphemeralState = Arc<dyn KeyValueStore>;

// 2. In-Memory Implementation

/// MemoryStore
///
/// Process-lifetime key/value map guarded by a `parking_lot` lock. Models
/// the tab-scoped ephemeral region, and doubles as the durable region in
/// tests and in the demo shell.
#[derive(Default)]
pub struct MemoryStore {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.map.write().remove(key);
        Ok(())
    }
}

// 3. File-Backed Implementation (Durable)

/// FileStore
///
/// Durable region persisted as a single JSON object on disk, read and
/// rewritten whole on every access (the map holds a handful of small keys).
/// A missing file reads as an empty region. A file that no longer parses is
/// reported as `Corrupt` on read; a write replaces it wholesale, so one bad
/// record can never wedge the store permanently.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<HashMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    fn save(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(map)
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt existing file is replaced from empty rather than
        // propagated: writes must keep working after a bad record.
        let mut map = self.load().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        self.save(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.load().unwrap_or_default();
        map.remove(key);
        self.save(&map)
    }
}

// 4. The Failing Implementation (For Tests)

/// FailingStore
///
/// A store whose every operation reports `Unavailable`. Used in tests to
/// verify the fail-closed policy: storage outage must resolve to "absent
/// session" / "no provenance evidence", never to `Render` and never to a
/// panic.
#[derive(Clone, Default)]
pub struct FailingStore;

impl FailingStore {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("simulated outage".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("simulated outage".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("simulated outage".to_string()))
    }
}
