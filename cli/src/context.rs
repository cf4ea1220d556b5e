use std::path::{Path, PathBuf};

use dossier_core::config::BrowserConfigExt;
use dossier_core::storage::{FileBackend, PreferenceStore};
use dossier_core::{BrowserConfig, Catalog};

/// Holds all state for one CLI invocation.
pub struct CliContext {
    pub config: BrowserConfig,
    pub catalog: Catalog,
    pub store: PreferenceStore,
    pub prefs_path: PathBuf,
}

impl CliContext {
    /// Load configuration, the catalog at `data`, and the preference store.
    ///
    /// `prefs` overrides the configured preference file location.
    pub fn new(data: &Path, prefs: Option<PathBuf>) -> Result<Self, String> {
        let config = BrowserConfig::load();
        Self::with_config(config, data, prefs)
    }

    /// Configuration and preference store only. For commands that never read
    /// the catalog.
    pub fn preferences(prefs: Option<PathBuf>) -> Self {
        Self::without_catalog(BrowserConfig::load(), prefs)
    }

    pub fn with_config(
        config: BrowserConfig,
        data: &Path,
        prefs: Option<PathBuf>,
    ) -> Result<Self, String> {
        let catalog = Catalog::load(data).map_err(|e| format!("error: {}", describe(&e)))?;
        Ok(Self {
            catalog,
            ..Self::without_catalog(config, prefs)
        })
    }

    /// Context with an empty catalog
    pub fn without_catalog(config: BrowserConfig, prefs: Option<PathBuf>) -> Self {
        let (store, prefs_path) = match prefs {
            Some(path) => (PreferenceStore::new(FileBackend::new(&path)), path),
            None => (config.open_preferences(), config.preferences_path()),
        };
        Self {
            config,
            catalog: Catalog::default(),
            store,
            prefs_path,
        }
    }
}

/// Error message followed by its `source()` chain, on one line
pub fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(source) = current {
        message.push_str(": ");
        message.push_str(&source.to_string());
        current = source.source();
    }
    message
}
