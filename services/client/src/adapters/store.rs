//! services/client/src/adapters/store.rs
//!
//! Concrete implementations of the `KeyValueStore` port from the `core` crate.
//! `JsonFileStore` is the durable store backing a real deployment;
//! `InMemoryStore` implements the same contract without touching the
//! filesystem and is what the tests inject.

use health_advisor_core::ports::KeyValueStore;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::warn;

type Cells = HashMap<String, String>;

// The port contract says store operations never fail their caller, so a
// poisoned lock is recovered rather than propagated.
fn lock(cells: &Mutex<Cells>) -> MutexGuard<'_, Cells> {
    cells.lock().unwrap_or_else(PoisonError::into_inner)
}

//=========================================================================================
// InMemoryStore
//=========================================================================================

/// A volatile `KeyValueStore` holding everything in a map.
#[derive(Default)]
pub struct InMemoryStore {
    cells: Mutex<Cells>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.cells).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        lock(&self.cells).insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        lock(&self.cells).remove(key);
    }
}

//=========================================================================================
// JsonFileStore
//=========================================================================================

/// A durable `KeyValueStore` persisting the whole key/value map as one JSON
/// file, rewritten on every mutation.
///
/// An absent or unreadable file opens as an empty store, and write failures
/// are logged without propagating; the port contract requires that no store
/// operation ever fails its caller.
pub struct JsonFileStore {
    path: PathBuf,
    cells: Mutex<Cells>,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading any existing contents.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cells = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self {
            path,
            cells: Mutex::new(cells),
        }
    }

    fn persist(&self, cells: &Cells) {
        let raw = match serde_json::to_string(cells) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize store contents: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, raw) {
            warn!("Failed to persist store to {}: {}", self.path.display(), e);
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.cells).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut cells = lock(&self.cells);
        cells.insert(key.to_string(), value.to_string());
        self.persist(&cells);
    }

    fn remove(&self, key: &str) {
        let mut cells = lock(&self.cells);
        cells.remove(key);
        self.persist(&cells);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_round_trips() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("users"), None);
        store.set("users", "[]");
        assert_eq!(store.get("users"), Some("[]".to_string()));
        store.remove("users");
        assert_eq!(store.get("users"), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = JsonFileStore::open(&path);
        store.set("users", r#"[{"username":"amy"}]"#);
        drop(store);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("users"), Some(r#"[{"username":"amy"}]"#.to_string()));
    }

    #[test]
    fn file_store_treats_malformed_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("users"), None);
    }

    #[test]
    fn file_store_remove_is_durable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = JsonFileStore::open(&path);
        store.set("loggedInUser", "{}");
        store.remove("loggedInUser");
        drop(store);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("loggedInUser"), None);
    }
}
