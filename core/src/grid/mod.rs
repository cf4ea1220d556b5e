//! Filter/render engine for the character and villain grids
//!
//! One `GridEngine` per grid. It owns the view state and re-derives the whole
//! grid from the immutable source set after every state change, so the current
//! render always equals `render(filter(source, state))`.

use dossier_types::{BrowserConfig, Entity, EntityKind};

use crate::card::{CardOptions, render_card};
use crate::catalog::EntitySet;
use crate::filter::ViewState;
use crate::storage::PreferenceStore;

/// Static configuration for one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    pub kind: EntityKind,
    /// Storage key of the spoiler toggle; `None` for grids without one
    pub spoiler_key: Option<String>,
    pub summary_limit: usize,
}

impl GridOptions {
    /// The page's grid for `kind`: villains carry a persisted spoiler toggle,
    /// characters do not.
    pub fn for_kind(kind: EntityKind, config: &BrowserConfig) -> Self {
        let spoiler_key = match kind {
            EntityKind::Villain => Some(config.storage_keys.villain_spoilers.clone()),
            EntityKind::Character => None,
        };
        Self {
            kind,
            spoiler_key,
            summary_limit: config.summary_limits.card,
        }
    }
}

/// A detail-trigger control present in the current render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTrigger {
    pub id: String,
    pub kind: EntityKind,
}

/// Output of one full render. Replaces the previous render entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridRender {
    pub markup: String,
    /// Live trigger bindings, one per rendered card
    pub triggers: Vec<DetailTrigger>,
}

impl GridRender {
    /// True when the render is the "no results" status
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

/// What a resolved detail trigger should open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub entity: Entity,
    pub type_label: &'static str,
}

pub struct GridEngine {
    source: EntitySet,
    options: GridOptions,
    state: ViewState,
    current: GridRender,
}

impl GridEngine {
    /// Create the engine and perform the initial render.
    ///
    /// The persisted spoiler flag is loaded before the first render. Grids
    /// without a spoiler toggle never hide summaries.
    pub fn new(source: EntitySet, options: GridOptions, store: &PreferenceStore) -> Self {
        let mut state = ViewState::default();
        state.hide_spoilers = match &options.spoiler_key {
            Some(key) => store.get(key, true),
            None => false,
        };

        let mut engine = Self {
            source,
            options,
            state,
            current: GridRender::default(),
        };
        engine.render();
        tracing::debug!(
            kind = %engine.options.kind,
            total = engine.source.len(),
            hide_spoilers = engine.state.hide_spoilers,
            "grid initialized"
        );
        engine
    }

    pub fn kind(&self) -> EntityKind {
        self.options.kind
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn has_spoiler_toggle(&self) -> bool {
        self.options.spoiler_key.is_some()
    }

    /// Seasons offered by the season filter controls
    pub fn available_seasons(&self) -> Vec<u32> {
        self.source.seasons()
    }

    /// The latest committed render
    pub fn current(&self) -> &GridRender {
        &self.current
    }

    /// Entities that pass the current filter, in source order
    pub fn filtered(&self) -> Vec<&Entity> {
        self.state.apply(self.source.entities())
    }

    pub fn set_search(&mut self, text: &str) -> &GridRender {
        self.state.set_search(text);
        self.render()
    }

    pub fn toggle_season(&mut self, season: u32, included: bool) -> &GridRender {
        self.state.toggle_season(season, included);
        self.render()
    }

    /// Season checkbox change carrying the control's raw `value`.
    ///
    /// Values that are not season numbers leave the state untouched.
    pub fn toggle_season_value(&mut self, value: &str, included: bool) -> &GridRender {
        match value.trim().parse::<u32>() {
            Ok(season) => self.toggle_season(season, included),
            Err(_) => {
                tracing::warn!(value, "ignoring season control with non-numeric value");
                &self.current
            }
        }
    }

    /// Flip spoiler hiding and persist it under the grid's key.
    ///
    /// Grids without a spoiler toggle ignore the call.
    pub fn set_hide_spoilers(&mut self, hide: bool, store: &mut PreferenceStore) -> &GridRender {
        let Some(key) = &self.options.spoiler_key else {
            tracing::warn!(kind = %self.options.kind, "grid has no spoiler toggle");
            return &self.current;
        };
        store.set(key, &hide);
        self.state.hide_spoilers = hide;
        self.render()
    }

    /// Look up the record behind a detail trigger in the full data set.
    ///
    /// Unknown ids resolve to `None` and nothing should open.
    pub fn resolve_trigger(&self, id: &str) -> Option<DetailRequest> {
        let Some(entity) = self.source.get(id) else {
            tracing::debug!(id, kind = %self.options.kind, "detail trigger references unknown id");
            return None;
        };
        Some(DetailRequest {
            entity: entity.clone(),
            type_label: self.options.kind.type_label(),
        })
    }

    fn render(&mut self) -> &GridRender {
        let card_options = CardOptions::new(self.options.kind)
            .hide_spoilers(self.state.hide_spoilers)
            .summary_limit(self.options.summary_limit);

        let results = self.state.apply(self.source.entities());
        let render = if results.is_empty() {
            GridRender {
                markup: empty_state(self.options.kind),
                triggers: Vec::new(),
            }
        } else {
            GridRender {
                markup: results
                    .iter()
                    .map(|entity| render_card(entity, &card_options))
                    .collect(),
                triggers: results
                    .iter()
                    .map(|entity| DetailTrigger {
                        id: entity.id.clone(),
                        kind: self.options.kind,
                    })
                    .collect(),
            }
        };

        self.current = render;
        &self.current
    }
}

/// Live status shown when no entity passes the filter
pub fn empty_state(kind: EntityKind) -> String {
    format!(
        r#"<div class="empty-state" role="status">No {} match your filters yet.</div>"#,
        kind.plural()
    )
}

#[cfg(test)]
mod grid_tests;
