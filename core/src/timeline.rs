//! Season-grouped timeline of characters and villains.
//!
//! The grouping is built once per page load and shared; toggling spoilers only
//! re-renders from the same index.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;

use dossier_types::{Entity, EntityKind};

use crate::card::SPOILER_PLACEHOLDER;
use crate::catalog::EntitySet;
use crate::storage::PreferenceStore;
use crate::summary::summarize;

pub const EMPTY_TIMELINE: &str = r#"<p class="empty-state">Timeline data coming soon.</p>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub entity: Entity,
    pub kind: EntityKind,
}

/// Season → entries, seasons ascending, entries sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineIndex {
    seasons: BTreeMap<u32, Vec<TimelineEntry>>,
}

impl TimelineIndex {
    /// Group characters then villains by every season they appear in.
    pub fn build(characters: &EntitySet, villains: &EntitySet) -> Self {
        let mut seasons: BTreeMap<u32, Vec<TimelineEntry>> = BTreeMap::new();

        let sources = [
            (characters, EntityKind::Character),
            (villains, EntityKind::Villain),
        ];
        for (set, kind) in sources {
            for entity in set.entities() {
                for season in entity.sorted_seasons() {
                    seasons.entry(season).or_default().push(TimelineEntry {
                        entity: entity.clone(),
                        kind,
                    });
                }
            }
        }

        // Stable sort keeps insertion order (characters first) for equal names
        for entries in seasons.values_mut() {
            entries.sort_by(|a, b| {
                a.entity
                    .name
                    .to_lowercase()
                    .cmp(&b.entity.name.to_lowercase())
                    .then_with(|| a.entity.name.cmp(&b.entity.name))
            });
        }

        tracing::debug!(seasons = seasons.len(), "timeline index built");
        Self { seasons }
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }

    pub fn seasons(&self) -> impl Iterator<Item = u32> + '_ {
        self.seasons.keys().copied()
    }

    pub fn entries(&self, season: u32) -> &[TimelineEntry] {
        self.seasons.get(&season).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Render the whole timeline.
    pub fn render(&self, hide_spoilers: bool, summary_limit: usize) -> String {
        if self.seasons.is_empty() {
            return EMPTY_TIMELINE.to_string();
        }

        let mut html = String::new();
        for (season, entries) in &self.seasons {
            let _ = write!(
                html,
                r#"<section class="timeline__season" aria-labelledby="season-{season}">
  <h3 id="season-{season}" class="timeline__header">Season {season}</h3>
  <ul class="timeline__list">
"#
            );
            for entry in entries {
                render_entry(&mut html, entry, hide_spoilers, summary_limit);
            }
            html.push_str("  </ul>\n</section>\n");
        }
        html
    }
}

fn render_entry(html: &mut String, entry: &TimelineEntry, hide_spoilers: bool, limit: usize) {
    let entity = &entry.entity;
    let summary = if hide_spoilers && entity.is_high_spoiler() {
        SPOILER_PLACEHOLDER.to_string()
    } else {
        summarize(&entity.summary, limit)
    };
    let _ = write!(
        html,
        r#"    <li class="timeline__item">
      <details>
        <summary>{name} <span class="sr-only">({kind})</span></summary>
        <p>{summary}</p>
        <a href="{page}#{id}">Open {kind} profile</a>
      </details>
    </li>
"#,
        name = entity.name,
        kind = entry.kind,
        page = entry.kind.profile_page(),
        id = entity.id,
    );
}

/// The timeline page view: shared index plus the persisted spoiler flag.
#[derive(Debug, Clone)]
pub struct Timeline {
    index: Arc<TimelineIndex>,
    storage_key: String,
    summary_limit: usize,
    hide_spoilers: bool,
    markup: String,
}

impl Timeline {
    pub fn new(
        index: Arc<TimelineIndex>,
        storage_key: impl Into<String>,
        summary_limit: usize,
        store: &PreferenceStore,
    ) -> Self {
        let storage_key = storage_key.into();
        let hide_spoilers = store.get(&storage_key, true);
        let markup = index.render(hide_spoilers, summary_limit);
        Self {
            index,
            storage_key,
            summary_limit,
            hide_spoilers,
            markup,
        }
    }

    pub fn hide_spoilers(&self) -> bool {
        self.hide_spoilers
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn index(&self) -> &TimelineIndex {
        &self.index
    }

    pub fn set_hide_spoilers(&mut self, hide: bool, store: &mut PreferenceStore) -> &str {
        store.set(&self.storage_key, &hide);
        self.hide_spoilers = hide;
        self.markup = self.index.render(hide, self.summary_limit);
        &self.markup
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_types::SpoilerLevel;

    fn entity(id: &str, name: &str, seasons: &[u32]) -> Entity {
        Entity {
            id: id.into(),
            name: name.into(),
            summary: format!("About {name}."),
            seasons: seasons.to_vec(),
            ..Default::default()
        }
    }

    fn index() -> TimelineIndex {
        let characters = EntitySet::new(vec![
            entity("dexter-morgan", "Dexter Morgan", &[2, 1]),
            entity("angel-batista", "angel Batista", &[1]),
        ]);
        let villains = EntitySet::new(vec![Entity {
            spoiler_level: SpoilerLevel::High,
            ..entity("brian-moser", "Brian Moser", &[1])
        }]);
        TimelineIndex::build(&characters, &villains)
    }

    fn names(entries: &[TimelineEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.entity.name.as_str()).collect()
    }

    #[test]
    fn groups_by_season_ascending() {
        let index = index();
        assert_eq!(index.seasons().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(names(index.entries(2)), vec!["Dexter Morgan"]);
        assert!(index.entries(9).is_empty());
    }

    #[test]
    fn entries_sort_by_name_ignoring_case() {
        let index = index();
        assert_eq!(
            names(index.entries(1)),
            vec!["angel Batista", "Brian Moser", "Dexter Morgan"]
        );
        assert_eq!(index.entries(1)[1].kind, EntityKind::Villain);
    }

    #[test]
    fn equal_names_keep_characters_first() {
        let characters = EntitySet::new(vec![entity("c", "Lumen", &[5])]);
        let villains = EntitySet::new(vec![entity("v", "Lumen", &[5])]);
        let index = TimelineIndex::build(&characters, &villains);
        let kinds: Vec<_> = index.entries(5).iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EntityKind::Character, EntityKind::Villain]);
    }

    #[test]
    fn empty_data_renders_coming_soon() {
        let index = TimelineIndex::build(&EntitySet::default(), &EntitySet::default());
        assert!(index.is_empty());
        assert_eq!(index.render(true, 220), EMPTY_TIMELINE);
    }

    #[test]
    fn render_links_to_profile_pages() {
        let html = index().render(false, 220);
        assert!(html.contains(r#"<h3 id="season-1" class="timeline__header">Season 1</h3>"#));
        assert!(html.contains(r#"<a href="villains.html#brian-moser">Open villain profile</a>"#));
        assert!(html.contains(r#"<a href="characters.html#dexter-morgan">Open character profile</a>"#));
        assert!(html.contains(r#"Brian Moser <span class="sr-only">(villain)</span>"#));
        assert!(html.find("season-1").unwrap() < html.find("season-2").unwrap());
    }

    #[test]
    fn hide_show_hide_restores_the_same_markup() {
        let mut store = PreferenceStore::in_memory();
        let mut timeline = Timeline::new(Arc::new(index()), "timelineKey", 220, &store);
        let hidden = timeline.markup().to_string();
        assert_eq!(hidden.matches(SPOILER_PLACEHOLDER).count(), 1);
        assert!(hidden.contains("About Dexter Morgan."));

        let shown = timeline.set_hide_spoilers(false, &mut store).to_string();
        assert!(!shown.contains(SPOILER_PLACEHOLDER));
        assert!(shown.contains("About Dexter Morgan."));

        assert_eq!(timeline.set_hide_spoilers(true, &mut store), hidden);
    }

    #[test]
    fn toggle_persists_and_rerenders_from_same_index() {
        let mut store = PreferenceStore::in_memory();
        let index = Arc::new(index());
        let mut timeline = Timeline::new(index.clone(), "timelineKey", 220, &store);
        assert!(timeline.hide_spoilers());
        assert!(timeline.markup().contains(SPOILER_PLACEHOLDER));
        assert!(!timeline.markup().contains("About Brian Moser."));

        let markup = timeline.set_hide_spoilers(false, &mut store).to_string();
        assert!(markup.contains("About Brian Moser."));
        assert!(!store.get("timelineKey", true));
        assert!(std::ptr::eq(timeline.index(), index.as_ref()));

        let reloaded = Timeline::new(index, "timelineKey", 220, &store);
        assert!(!reloaded.hide_spoilers());
    }
}
