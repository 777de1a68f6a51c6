//! Durable key-value storage for selections and the theme flag.
//!
//! Every entry is a string under a fixed key and is overwritten on each
//! change. Stores use interior mutability so one handle can be shared with
//! background write tasks.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::{Config, StorageBackend};
use crate::db::SqliteStore;
use crate::error::StorageError;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Writes several keys as one unit. Backends that can do better than
    /// sequential `set` calls override this.
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Flat JSON object on disk, rewritten in full on every `set`.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// A missing file starts empty. A malformed one is logged and ignored,
    /// and is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed storage file {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_many(&[(key, value)])
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut stored = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        for (key, value) in entries {
            stored.insert(key.to_string(), value.to_string());
        }
        self.flush(&stored)
    }
}

pub fn open_store(config: &Config) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    let store: Arc<dyn KeyValueStore> = match config.storage {
        StorageBackend::Json => Arc::new(JsonFileStore::open(&config.storage_path)),
        StorageBackend::Sqlite => Arc::new(SqliteStore::open(&config.storage_path)?),
    };
    tracing::debug!(
        "Opened {:?} storage at {}",
        config.storage,
        config.storage_path.display()
    );
    Ok(store)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_store_round_trips_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("selectedRegion").unwrap(), None);
        store.set("selectedRegion", "город Ташкент").unwrap();
        store.set("selectedRegion", "Андижанская область").unwrap();
        store.set("darkTheme", "true").unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(
            reopened.get("selectedRegion").unwrap().as_deref(),
            Some("Андижанская область")
        );
        assert_eq!(reopened.get("darkTheme").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_json_store_ignores_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("selectedRegion").unwrap(), None);
        store.set("selectedDistrict", "Асакинский район").unwrap();
        assert_eq!(
            JsonFileStore::open(&path)
                .get("selectedDistrict")
                .unwrap()
                .as_deref(),
            Some("Асакинский район")
        );
    }

    #[test]
    fn test_json_store_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        JsonFileStore::open(&path).set("darkTheme", "false").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_json_store_set_many_writes_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = JsonFileStore::open(&path);
        store.set("darkTheme", "true").unwrap();
        store
            .set_many(&[
                ("selectedRegion", "город Ташкент"),
                ("selectedDistrict", "Алмазарский район"),
                ("selectedInstitution", ""),
            ])
            .unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(
            reopened.get("selectedDistrict").unwrap().as_deref(),
            Some("Алмазарский район")
        );
        assert_eq!(reopened.get("selectedInstitution").unwrap().as_deref(), Some(""));
        assert_eq!(reopened.get("darkTheme").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_open_store_selects_backend() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            storage: StorageBackend::Sqlite,
            storage_path: dir.path().join("session.db"),
            ..Config::default()
        };
        let store = open_store(&config).unwrap();
        store.set("selectedInstitution", "Школа №1").unwrap();
        assert_eq!(
            store.get("selectedInstitution").unwrap().as_deref(),
            Some("Школа №1")
        );
    }
}
