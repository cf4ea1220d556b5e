//! View state and the grid filter predicate.

use std::collections::BTreeSet;

use dossier_types::Entity;

/// Mutable search/filter/toggle state driving one grid's render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Trimmed query; lowercased only when matching
    pub search: String,
    /// Selected seasons. Empty means no season filter.
    pub selected_seasons: BTreeSet<u32>,
    pub hide_spoilers: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            selected_seasons: BTreeSet::new(),
            hide_spoilers: true,
        }
    }
}

impl ViewState {
    pub fn set_search(&mut self, text: &str) {
        self.search = text.trim().to_string();
    }

    pub fn toggle_season(&mut self, season: u32, included: bool) {
        if included {
            self.selected_seasons.insert(season);
        } else {
            self.selected_seasons.remove(&season);
        }
    }

    /// Case-insensitive substring match on the name AND season intersection.
    pub fn matches(&self, entity: &Entity) -> bool {
        self.matches_search(&self.search.to_lowercase(), entity) && self.matches_seasons(entity)
    }

    fn matches_search(&self, query: &str, entity: &Entity) -> bool {
        query.is_empty() || entity.name.to_lowercase().contains(query)
    }

    fn matches_seasons(&self, entity: &Entity) -> bool {
        self.selected_seasons.is_empty()
            || entity
                .seasons
                .iter()
                .any(|season| self.selected_seasons.contains(season))
    }

    /// Entities passing the filter, in source order.
    pub fn apply<'a>(&self, entities: &'a [Entity]) -> Vec<&'a Entity> {
        let query = self.search.to_lowercase();
        entities
            .iter()
            .filter(|entity| self.matches_search(&query, entity) && self.matches_seasons(entity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: &str, name: &str, seasons: &[u32]) -> Entity {
        Entity {
            id: id.into(),
            name: name.into(),
            seasons: seasons.to_vec(),
            ..Default::default()
        }
    }

    fn cast() -> Vec<Entity> {
        vec![
            entity("dexter-morgan", "Dexter Morgan", &[1, 2, 3]),
            entity("deb-morgan", "Debra Morgan", &[1]),
            entity("angel-batista", "Angel Batista", &[2, 4]),
        ]
    }

    fn ids(found: Vec<&Entity>) -> Vec<&str> {
        found.into_iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn empty_state_matches_everything_in_order() {
        let data = cast();
        let state = ViewState::default();
        assert_eq!(ids(state.apply(&data)), vec!["dexter-morgan", "deb-morgan", "angel-batista"]);
    }

    #[test]
    fn search_is_trimmed_and_case_insensitive() {
        let data = cast();
        let mut state = ViewState::default();
        state.set_search("  MORGAN ");
        assert_eq!(state.search, "MORGAN");
        assert_eq!(ids(state.apply(&data)), vec!["dexter-morgan", "deb-morgan"]);
    }

    #[test]
    fn search_is_plain_substring_not_tokens() {
        let data = cast();
        let mut state = ViewState::default();
        state.set_search("morgan dexter");
        assert!(state.apply(&data).is_empty());
        state.set_search("el bat");
        assert_eq!(ids(state.apply(&data)), vec!["angel-batista"]);
    }

    #[test]
    fn seasons_match_on_any_intersection() {
        let data = cast();
        let mut state = ViewState::default();
        state.toggle_season(4, true);
        state.toggle_season(3, true);
        assert_eq!(ids(state.apply(&data)), vec!["dexter-morgan", "angel-batista"]);
    }

    #[test]
    fn unselecting_all_seasons_matches_all_again() {
        let data = cast();
        let mut state = ViewState::default();
        state.toggle_season(4, true);
        state.toggle_season(4, false);
        assert_eq!(state.apply(&data).len(), 3);
    }

    #[test]
    fn search_and_seasons_must_both_hold() {
        let data = cast();
        let mut state = ViewState::default();
        state.set_search("morgan");
        state.toggle_season(2, true);
        assert_eq!(ids(state.apply(&data)), vec!["dexter-morgan"]);
        assert!(state.matches(&data[0]));
        assert!(!state.matches(&data[1]));
    }

    #[test]
    fn predicate_agrees_with_definition_for_every_subset() {
        let data = cast();
        let queries = ["", "a", "morgan", "DEB", "zzz"];
        let season_sets: [&[u32]; 5] = [&[], &[1], &[2], &[3, 4], &[5]];
        for query in queries {
            for seasons in season_sets {
                let mut state = ViewState::default();
                state.set_search(query);
                for &season in seasons {
                    state.toggle_season(season, true);
                }
                let expected: Vec<&str> = data
                    .iter()
                    .filter(|e| e.name.to_lowercase().contains(&query.to_lowercase()))
                    .filter(|e| seasons.is_empty() || e.seasons.iter().any(|s| seasons.contains(s)))
                    .map(|e| e.id.as_str())
                    .collect();
                assert_eq!(ids(state.apply(&data)), expected, "query {query:?} seasons {seasons:?}");
            }
        }
    }
}
