//! Persistent preference store
//!
//! Key/value store with JSON-encoded values. Every failure in the backend
//! (disabled storage, quota, corrupt data, encode errors) is swallowed here:
//! reads fall back to the caller's default and writes become no-ops.

mod backend;
mod error;

pub use backend::{FileBackend, MemoryBackend};
pub use error::StorageError;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Raw string storage, e.g. `window.localStorage` or a file on disk.
pub trait StorageBackend {
    /// Read the raw stored string for `key`. `Ok(None)` when absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persist the raw string for `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// All keys currently stored, for inspection tooling.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// Typed preference access over any backend.
///
/// Callers namespace their own keys; nothing here resolves collisions.
pub struct PreferenceStore {
    backend: Box<dyn StorageBackend>,
}

impl PreferenceStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Store backed by process memory only
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Store whose backend refuses every read and write
    pub fn unavailable() -> Self {
        Self::new(MemoryBackend::unavailable())
    }

    /// Stored value for `key`, or `fallback` if absent, empty, inaccessible or malformed.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(err) => {
                tracing::debug!(key, error = %err, "preference read failed, using fallback");
                fallback
            }
        }
    }

    /// Serialize and persist `value`. Failures are logged and otherwise ignored.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        if let Err(err) = self.try_set(key, value) {
            tracing::debug!(key, error = %err, "preference write dropped");
        }
    }

    /// Raw stored string, for inspection. Backend errors read as absent.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.backend.read(key).ok().flatten()
    }

    /// Stored keys, sorted. Backend errors read as empty.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = self.backend.keys().unwrap_or_default();
        keys.sort();
        keys
    }

    fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.backend.read(key)? else {
            return Ok(None);
        };
        // An empty string is treated like a missing entry
        if raw.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            })
    }

    fn try_set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.backend.write(key, &encoded)
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Value whose serialization always fails
    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not serializable"))
        }
    }

    #[test]
    fn missing_key_returns_fallback() {
        let store = PreferenceStore::in_memory();
        assert!(store.get("dexterSpoilerToggleVillains", true));
        assert!(!store.get("dexterSpoilerToggleVillains", false));
    }

    #[test]
    fn set_then_get_round_trips_json() {
        let mut store = PreferenceStore::in_memory();
        store.set("dexterSpoilerToggleTimeline", &false);
        assert!(!store.get("dexterSpoilerToggleTimeline", true));
        assert_eq!(store.raw("dexterSpoilerToggleTimeline").as_deref(), Some("false"));
    }

    #[test]
    fn structured_values_are_supported() {
        let mut store = PreferenceStore::in_memory();
        let mut value = BTreeMap::new();
        value.insert("seasons".to_string(), vec![1, 4]);
        store.set("layout", &value);
        let read: BTreeMap<String, Vec<u32>> = store.get("layout", BTreeMap::new());
        assert_eq!(read, value);
    }

    #[test]
    fn malformed_value_returns_fallback() {
        let mut backend = MemoryBackend::new();
        backend.write("banner", "{not json").unwrap();
        let store = PreferenceStore::new(backend);
        assert!(!store.get("banner", false));
    }

    #[test]
    fn wrong_type_returns_fallback() {
        let mut store = PreferenceStore::in_memory();
        store.set("flag", "yes");
        assert!(store.get("flag", true));
    }

    #[test]
    fn empty_string_is_treated_as_absent() {
        let mut backend = MemoryBackend::new();
        backend.write("flag", "").unwrap();
        let store = PreferenceStore::new(backend);
        assert!(store.get("flag", true));
    }

    #[test]
    fn unavailable_storage_never_raises() {
        let mut store = PreferenceStore::unavailable();
        store.set("flag", &false);
        assert!(store.get("flag", true));
        assert!(store.keys().is_empty());
    }

    #[test]
    fn quota_failure_is_a_silent_no_op() {
        let mut store = PreferenceStore::new(MemoryBackend::with_quota(8));
        store.set("a", &true);
        store.set("a-much-longer-key", &"a value that does not fit");
        assert!(store.get("a", false));
        assert_eq!(store.raw("a-much-longer-key"), None);
    }

    #[test]
    fn serialization_failure_is_a_silent_no_op() {
        let mut store = PreferenceStore::in_memory();
        store.set("broken", &Unserializable);
        assert_eq!(store.raw("broken"), None);
    }

    #[test]
    fn keys_are_sorted() {
        let mut store = PreferenceStore::in_memory();
        store.set("b", &1);
        store.set("a", &2);
        assert_eq!(store.keys(), vec!["a".to_string(), "b".to_string()]);
    }
}
