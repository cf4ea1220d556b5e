pub mod card;
pub mod catalog;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod featured;
pub mod filter;
pub mod grid;
pub mod modal;
pub mod page;
pub mod shell;
pub mod storage;
pub mod summary;
pub mod timeline;

// Re-exports for convenience
pub use card::{CardOptions, SPOILER_PLACEHOLDER, render_card};
pub use catalog::{Catalog, CatalogError, EntitySet};
#[cfg(not(target_arch = "wasm32"))]
pub use config::{BrowserConfigExt, ConfigError};
pub use dossier_types::{BrowserConfig, Entity, EntityKind, PageKind, SpoilerLevel};
pub use filter::ViewState;
pub use grid::{DetailRequest, DetailTrigger, GridEngine, GridOptions, GridRender};
pub use modal::{
    DialogHost, FocusCandidate, Key, KeyOutcome, KeyPress, ModalContent, ModalController,
    PointerTarget,
};
pub use page::{PageView, init_page};
pub use storage::{PreferenceStore, StorageBackend, StorageError};
pub use summary::summarize;
pub use timeline::{Timeline, TimelineIndex};
