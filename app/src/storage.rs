//! `window.localStorage` backend for the preference store.

use dossier_core::storage::{PreferenceStore, StorageBackend, StorageError};

/// Preference backend over the browser's local storage.
///
/// Storage can be disabled (privacy modes, sandboxed frames); every access
/// re-resolves it and reports `Unavailable` instead of failing hard.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl StorageBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // setItem only throws for quota errors once storage is reachable
        self.storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::QuotaExceeded {
                key: key.to_string(),
            })
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let storage = self.storage()?;
        let len = storage
            .length()
            .map_err(|err| StorageError::Backend(format!("{err:?}")))?;
        Ok((0..len)
            .filter_map(|index| storage.key(index).ok().flatten())
            .collect())
    }
}

/// Preference store for this page load
pub fn browser_store() -> PreferenceStore {
    PreferenceStore::new(LocalStorageBackend)
}
