//! Page dispatch: exactly one enhanced view per page type.

use std::sync::Arc;

use dossier_types::{BrowserConfig, EntityKind, PageKind};

use crate::catalog::Catalog;
use crate::featured::render_featured;
use crate::grid::{GridEngine, GridOptions};
use crate::storage::PreferenceStore;
use crate::timeline::{Timeline, TimelineIndex};

/// The view a page initializes.
pub enum PageView {
    /// Home page featured cards
    Featured(String),
    Grid(GridEngine),
    Timeline(Timeline),
    /// Pages with shell behavior only
    Static,
}

impl PageView {
    /// Current markup of the page's main region, if it has one
    pub fn markup(&self) -> Option<&str> {
        match self {
            PageView::Featured(markup) => Some(markup),
            PageView::Grid(grid) => Some(&grid.current().markup),
            PageView::Timeline(timeline) => Some(timeline.markup()),
            PageView::Static => None,
        }
    }
}

pub fn init_page(
    page: PageKind,
    catalog: &Catalog,
    config: &BrowserConfig,
    store: &PreferenceStore,
) -> PageView {
    tracing::debug!(page = page.as_str(), "initializing page");
    match page {
        PageKind::Home => PageView::Featured(render_featured(
            catalog,
            &config.featured,
            config.summary_limits.featured,
        )),
        PageKind::Characters => PageView::Grid(init_grid(EntityKind::Character, catalog, config, store)),
        PageKind::Villains => PageView::Grid(init_grid(EntityKind::Villain, catalog, config, store)),
        PageKind::Timeline => PageView::Timeline(init_timeline(catalog, config, store)),
        PageKind::Other => PageView::Static,
    }
}

pub fn init_grid(
    kind: EntityKind,
    catalog: &Catalog,
    config: &BrowserConfig,
    store: &PreferenceStore,
) -> GridEngine {
    GridEngine::new(
        catalog.set(kind).clone(),
        GridOptions::for_kind(kind, config),
        store,
    )
}

pub fn init_timeline(catalog: &Catalog, config: &BrowserConfig, store: &PreferenceStore) -> Timeline {
    let index = TimelineIndex::build(&catalog.characters, &catalog.villains);
    Timeline::new(
        Arc::new(index),
        config.storage_keys.timeline_spoilers.clone(),
        config.summary_limits.timeline,
        store,
    )
}
