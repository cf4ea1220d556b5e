//! Shared data model for Dossier
//!
//! This crate contains the serializable record and configuration types that are
//! shared between the host-agnostic engine (dossier-core), the WASM frontend
//! (dossier-app) and the native tooling (dossier-cli).

use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Entity Records
// ─────────────────────────────────────────────────────────────────────────────

/// How much of the story an entity's summary gives away.
///
/// Unknown levels in source data are read as `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpoilerLevel {
    #[default]
    Normal,
    High,
}

impl SpoilerLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpoilerLevel::Normal => "normal",
            SpoilerLevel::High => "high",
        }
    }
}

impl From<String> for SpoilerLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "high" => SpoilerLevel::High,
            _ => SpoilerLevel::Normal,
        }
    }
}

impl From<SpoilerLevel> for String {
    fn from(level: SpoilerLevel) -> Self {
        level.as_str().to_string()
    }
}

/// A character or villain record as supplied by the page data.
///
/// Records are never mutated after loading; views copy or borrow from them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Stable identifier, also used as the DOM anchor
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub img: String,
    /// Seasons the entity appears in (unique within one record, any order)
    #[serde(default)]
    pub seasons: Vec<u32>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub notable_episodes: Vec<String>,
    #[serde(default)]
    pub spoiler_level: SpoilerLevel,
}

impl Entity {
    /// Whether the summary should be covered while spoiler hiding is on
    pub fn is_high_spoiler(&self) -> bool {
        self.spoiler_level == SpoilerLevel::High
    }

    /// Seasons in ascending order, duplicates removed
    pub fn sorted_seasons(&self) -> Vec<u32> {
        let mut seasons = self.seasons.clone();
        seasons.sort_unstable();
        seasons.dedup();
        seasons
    }
}

/// Which data set an entity comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    #[default]
    Character,
    Villain,
}

impl EntityKind {
    /// Attribute value used on detail triggers (`data-entity-type`)
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Character => "character",
            EntityKind::Villain => "villain",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Character => "characters",
            EntityKind::Villain => "villains",
        }
    }

    /// Label shown in the detail dialog header
    pub fn type_label(&self) -> &'static str {
        match self {
            EntityKind::Character => "Character Profile",
            EntityKind::Villain => "Villain Profile",
        }
    }

    /// Static page that hosts this kind's grid
    pub fn profile_page(&self) -> &'static str {
        match self {
            EntityKind::Character => "characters.html",
            EntityKind::Villain => "villains.html",
        }
    }

    /// Parse a trigger attribute value. Anything but `villain` is a character.
    pub fn from_attr(value: &str) -> Self {
        if value == "villain" {
            EntityKind::Villain
        } else {
            EntityKind::Character
        }
    }

    pub fn all() -> &'static [EntityKind] {
        &[EntityKind::Character, EntityKind::Villain]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pages
// ─────────────────────────────────────────────────────────────────────────────

/// Page type read from the body's `data-page` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    Characters,
    Villains,
    Timeline,
    /// Any page without an enhanced view (about, credits, ...)
    #[default]
    #[serde(other)]
    Other,
}

impl PageKind {
    pub fn from_attr(value: &str) -> Self {
        match value {
            "home" => PageKind::Home,
            "characters" => PageKind::Characters,
            "villains" => PageKind::Villains,
            "timeline" => PageKind::Timeline,
            _ => PageKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Characters => "characters",
            PageKind::Villains => "villains",
            PageKind::Timeline => "timeline",
            PageKind::Other => "",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Browser Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Summary length budgets, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLimits {
    #[serde(default = "default_card_limit")]
    pub card: usize,
    #[serde(default = "default_timeline_limit")]
    pub timeline: usize,
    #[serde(default = "default_featured_limit")]
    pub featured: usize,
}

fn default_card_limit() -> usize { 165 }
fn default_timeline_limit() -> usize { 220 }
fn default_featured_limit() -> usize { 180 }

impl Default for SummaryLimits {
    fn default() -> Self {
        Self {
            card: default_card_limit(),
            timeline: default_timeline_limit(),
            featured: default_featured_limit(),
        }
    }
}

/// Storage keys for the persisted spoiler toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    #[serde(default = "default_villain_key")]
    pub villain_spoilers: String,
    #[serde(default = "default_timeline_key")]
    pub timeline_spoilers: String,
}

fn default_villain_key() -> String { "dexterSpoilerToggleVillains".to_string() }
fn default_timeline_key() -> String { "dexterSpoilerToggleTimeline".to_string() }

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            villain_spoilers: default_villain_key(),
            timeline_spoilers: default_timeline_key(),
        }
    }
}

/// Ids promoted on the home page. Falls back to the first record of each set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedIds {
    #[serde(default = "default_featured_character")]
    pub character: String,
    #[serde(default = "default_featured_villain")]
    pub villain: String,
}

fn default_featured_character() -> String { "dexter-morgan".to_string() }
fn default_featured_villain() -> String { "arthur-mitchell".to_string() }

impl Default for FeaturedIds {
    fn default() -> Self {
        Self {
            character: default_featured_character(),
            villain: default_featured_villain(),
        }
    }
}

/// Browser configuration.
///
/// Note: Loading from disk is done by the native tooling through confy; the
/// frontend always runs with `BrowserConfig::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default)]
    pub summary_limits: SummaryLimits,
    #[serde(default)]
    pub storage_keys: StorageKeys,
    #[serde(default)]
    pub featured: FeaturedIds,
    /// File name of the native preference store (inside the config directory)
    #[serde(default = "default_preferences_file")]
    pub preferences_file: String,
}

fn default_preferences_file() -> String { "preferences.json".to_string() }

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            summary_limits: SummaryLimits::default(),
            storage_keys: StorageKeys::default(),
            featured: FeaturedIds::default(),
            preferences_file: default_preferences_file(),
        }
    }
}
