//! Page chrome shared by every page: navigation, spoiler banner, footer.

use chrono::{Datelike, Local, NaiveDate};
use serde_json::Value;

use crate::storage::PreferenceStore;

/// DOM attribute contract between the static pages and the frontend.
pub mod attrs {
    pub const PAGE: &str = "data-page";
    pub const NAV: &str = "data-nav";
    pub const NAV_TOGGLE: &str = "data-nav-toggle";
    pub const NAV_LINK: &str = "data-nav-link";
    pub const SEARCH: &str = "data-search";
    pub const FILTER_SEASON: &str = "data-filter-season";
    pub const SPOILER_TOGGLE: &str = "data-spoiler-toggle";
    pub const SPOILER_BANNER: &str = "data-spoiler-banner";
    pub const SPOILER_BANNER_KEY: &str = "data-spoiler-banner-key";
    pub const SPOILER_DISMISS: &str = "data-spoiler-dismiss";
    pub const DETAIL_TRIGGER: &str = "data-detail-trigger";
    pub const ENTITY_TYPE: &str = "data-entity-type";
    pub const MODAL: &str = "data-modal";
    pub const MODAL_TITLE: &str = "data-modal-title";
    pub const MODAL_SUMMARY: &str = "data-modal-summary";
    pub const MODAL_ALIASES: &str = "data-modal-aliases";
    pub const MODAL_EPISODES: &str = "data-modal-episodes";
    pub const MODAL_SEASONS: &str = "data-modal-seasons";
    pub const MODAL_TYPE: &str = "data-modal-type";
    pub const MODAL_CLOSE: &str = "data-modal-close";
    pub const CHARACTER_GRID: &str = "data-character-grid";
    pub const VILLAIN_GRID: &str = "data-villain-grid";
    pub const TIMELINE: &str = "data-timeline";
    pub const FEATURED: &str = "data-featured";
    pub const CURRENT_YEAR: &str = "data-current-year";

    /// `[attr]` selector for an attribute constant
    pub fn selector(attr: &str) -> String {
        format!("[{attr}]")
    }
}

pub const NAV_ACTIVE_CLASS: &str = "nav__link--active";
pub const NAV_OPEN_CLASS: &str = "is-open";

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLinkState {
    pub active: bool,
    /// `aria-current` value; `None` removes the attribute
    pub aria_current: Option<&'static str>,
}

/// Highlight state for a nav link whose `data-nav-link` is `link_page`.
pub fn nav_link_state(link_page: &str, current_page: &str) -> NavLinkState {
    if link_page == current_page {
        NavLinkState {
            active: true,
            aria_current: Some("page"),
        }
    } else {
        NavLinkState {
            active: false,
            aria_current: None,
        }
    }
}

/// Collapsible navigation on narrow layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new open state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any nav link click collapses the menu
    pub fn link_clicked(&mut self) {
        self.open = false;
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Spoiler banner
// ─────────────────────────────────────────────────────────────────────────────

/// Dismissible spoiler warning. Dismissal persists only when the banner
/// names a storage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpoilerBanner {
    key: Option<String>,
    dismissed: bool,
}

impl SpoilerBanner {
    pub fn load(key: Option<&str>, store: &PreferenceStore) -> Self {
        let key = key.filter(|k| !k.is_empty()).map(str::to_string);
        let dismissed = key
            .as_deref()
            .is_some_and(|k| is_truthy(&store.get(k, Value::Null)));
        Self { key, dismissed }
    }

    pub fn is_hidden(&self) -> bool {
        self.dismissed
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn dismiss(&mut self, store: &mut PreferenceStore) {
        self.dismissed = true;
        if let Some(key) = &self.key {
            store.set(key, &true);
        }
    }
}

/// Truthiness of a stored value as the page script sees it
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Footer
// ─────────────────────────────────────────────────────────────────────────────

/// Current year from the local clock, for `[data-current-year]`
pub fn footer_year() -> i32 {
    year_of(Local::now().date_naive())
}

fn year_of(date: NaiveDate) -> i32 {
    date.year()
}
