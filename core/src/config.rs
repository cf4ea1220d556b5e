//! Browser configuration persistence (native only)
//!
//! Re-exports the shared config types from dossier-types and loads them
//! through confy. The frontend never touches the filesystem and always runs
//! with defaults.

use std::path::PathBuf;

use thiserror::Error;

pub use dossier_types::{BrowserConfig, FeaturedIds, StorageKeys, SummaryLimits};

use crate::storage::{FileBackend, PreferenceStore};

const APP_NAME: &str = "dossier";
const CONFIG_NAME: &str = "config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to locate configuration directory")]
    Locate(#[source] confy::ConfyError),
}

// ─────────────────────────────────────────────────────────────────────────────
// BrowserConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for BrowserConfig persistence
pub trait BrowserConfigExt: Sized {
    /// Load the stored config, falling back to defaults on any error
    fn load() -> Self;
    fn config_path() -> Result<PathBuf, ConfigError>;
    /// Location of the file-backed preference store
    fn preferences_path(&self) -> PathBuf;
    fn open_preferences(&self) -> PreferenceStore;
}

impl BrowserConfigExt for BrowserConfig {
    fn load() -> Self {
        confy::load(APP_NAME, CONFIG_NAME).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            Self::default()
        })
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Locate)
    }

    fn preferences_path(&self) -> PathBuf {
        let dir = Self::config_path()
            .ok()
            .and_then(|path| path.parent().map(PathBuf::from))
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
            .unwrap_or_default();
        dir.join(&self.preferences_file)
    }

    fn open_preferences(&self) -> PreferenceStore {
        let path = self.preferences_path();
        tracing::debug!(path = %path.display(), "opening preference store");
        PreferenceStore::new(FileBackend::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_live_next_to_config() {
        let config = BrowserConfig {
            preferences_file: "prefs-test.json".into(),
            ..Default::default()
        };
        let path = config.preferences_path();
        assert!(path.ends_with("prefs-test.json"));
    }
}
