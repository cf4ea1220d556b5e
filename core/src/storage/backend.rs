//! Storage backends that do not need a browser
//!
//! `MemoryBackend` backs tests and degraded environments, `FileBackend` backs
//! the native tooling with a single JSON object on disk.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;

use super::{StorageBackend, StorageError};

// ─────────────────────────────────────────────────────────────────────────────
// Memory
// ─────────────────────────────────────────────────────────────────────────────

/// In-process storage with optional quota and an "unavailable" mode that
/// mimics a browser with storage disabled.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
    unavailable: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that fails every operation
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Backend that rejects writes once keys + values exceed `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota_bytes: Some(bytes),
            ..Self::default()
        }
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        if let Some(quota) = self.quota_bytes
            && self.used_bytes_without(key) + key.len() + value.len() > quota
        {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.keys().cloned().collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File
// ─────────────────────────────────────────────────────────────────────────────

/// Preferences persisted as one JSON object: `{ "key": "<json-encoded value>" }`.
///
/// The file is re-read on every access so edits from another process are seen.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&content).map_err(|source| StorageError::CorruptFile {
            path: self.path.clone(),
            source,
        })
    }

    fn store(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        // Sorted output keeps the file diff-friendly
        let sorted: std::collections::BTreeMap<_, _> = entries.iter().collect();
        let content = serde_json::to_string_pretty(&sorted).map_err(|source| {
            StorageError::CorruptFile {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is left untouched rather than overwritten
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.store(&entries)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.load()?.into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::PreferenceStore;

    #[test]
    fn file_backend_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = PreferenceStore::new(FileBackend::new(&path));
        store.set("dexterSpoilerToggleVillains", &false);

        let reopened = PreferenceStore::new(FileBackend::new(&path));
        assert!(!reopened.get("dexterSpoilerToggleVillains", true));
        assert_eq!(reopened.keys(), vec!["dexterSpoilerToggleVillains".to_string()]);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("absent.json"));
        assert_eq!(backend.read("anything").unwrap(), None);
        assert!(backend.keys().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_falls_back_and_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "[oops").unwrap();

        let mut store = PreferenceStore::new(FileBackend::new(&path));
        assert!(store.get("flag", true));
        store.set("flag", &false);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[oops");
    }

    #[test]
    fn memory_quota_counts_replaced_values_once() {
        let mut backend = MemoryBackend::with_quota(10);
        backend.write("key", "12345").unwrap();
        backend.write("key", "1234567").unwrap();
        assert!(matches!(
            backend.write("other", "123"),
            Err(StorageError::QuotaExceeded { .. })
        ));
    }
}
