//! services/docgen/src/adapters/draft_store.rs
//!
//! Concrete implementations of the `DraftStore` port: a JSON file on disk for
//! normal runs and an in-memory map for tests and throwaway sessions.

use docgen_core::ports::{DraftStore, PortError, PortResult};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

//=========================================================================================
// FileDraftStore
//=========================================================================================

/// Keeps every entry in one JSON object file, e.g. `{"docGenUserData": "{...}"}`.
pub struct FileDraftStore {
    path: PathBuf,
    // Serialises read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileDraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> PortResult<HashMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(PortError::Storage(e.to_string())),
        };
        serde_json::from_str(&raw).map_err(|e| {
            PortError::Storage(format!("{} is not a valid store: {}", self.path.display(), e))
        })
    }
}

impl DraftStore for FileDraftStore {
    fn get(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> PortResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| PortError::Storage("store lock poisoned".to_string()))?;

        let mut entries = self.read_entries().unwrap_or_else(|e| {
            warn!("Replacing unreadable store: {}", e);
            HashMap::new()
        });
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PortError::Storage(e.to_string()))?;
        }
        let json =
            serde_json::to_string_pretty(&entries).map_err(|e| PortError::Storage(e.to_string()))?;

        // Write beside the target, then rename over it.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|e| PortError::Storage(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| PortError::Storage(e.to_string()))?;

        debug!("Stored '{}' in {}", key, self.path.display());
        Ok(())
    }
}

//=========================================================================================
// MemoryDraftStore
//=========================================================================================

#[derive(Default)]
pub struct MemoryDraftStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn get(&self, key: &str) -> PortResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| PortError::Storage("store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| PortError::Storage("store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDraftStore::new(dir.path().join("store.json"));
        assert_eq!(store.get("docGenUserData").unwrap(), None);
    }

    #[test]
    fn set_creates_parent_dirs_and_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");
        FileDraftStore::new(&path).set("a", "1").unwrap();
        FileDraftStore::new(&path).set("b", "2").unwrap();

        let reopened = FileDraftStore::new(&path);
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn corrupt_file_is_an_error_on_read_and_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "garbage").unwrap();
        let store = FileDraftStore::new(&path);

        assert!(matches!(store.get("a"), Err(PortError::Storage(_))));
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryDraftStore::new();
        store.set("k", "old").unwrap();
        store.set("k", "new").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("new"));
        assert_eq!(store.get("other").unwrap(), None);
    }
}
