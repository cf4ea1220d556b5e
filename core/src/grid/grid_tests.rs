use super::*;
use crate::card::SPOILER_PLACEHOLDER;
use dossier_types::SpoilerLevel;

fn entity(id: &str, name: &str, seasons: &[u32], spoiler: SpoilerLevel) -> Entity {
    Entity {
        id: id.into(),
        name: name.into(),
        summary: format!("{name} works at Miami Metro."),
        img: format!("img/{id}.jpg"),
        seasons: seasons.to_vec(),
        spoiler_level: spoiler,
        ..Default::default()
    }
}

fn morgans() -> EntitySet {
    EntitySet::new(vec![
        entity("dexter-morgan", "Dexter Morgan", &[1, 2], SpoilerLevel::Normal),
        entity("deb-morgan", "Debra Morgan", &[1], SpoilerLevel::High),
    ])
}

fn villain_grid(store: &PreferenceStore) -> GridEngine {
    let config = BrowserConfig::default();
    GridEngine::new(morgans(), GridOptions::for_kind(EntityKind::Villain, &config), store)
}

fn trigger_ids(render: &GridRender) -> Vec<&str> {
    render.triggers.iter().map(|t| t.id.as_str()).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Filtering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn initial_render_shows_every_entity() {
    let engine = villain_grid(&PreferenceStore::in_memory());
    assert_eq!(trigger_ids(engine.current()), vec!["dexter-morgan", "deb-morgan"]);
    assert_eq!(engine.available_seasons(), vec![1, 2]);
}

#[test]
fn search_narrows_the_grid() {
    let mut engine = villain_grid(&PreferenceStore::in_memory());
    let render = engine.set_search("dex");
    assert_eq!(trigger_ids(render), vec!["dexter-morgan"]);
    assert!(render.markup.contains("Dexter Morgan"));
    assert!(!render.markup.contains("Debra Morgan"));
}

#[test]
fn season_filter_narrows_and_widens() {
    let mut engine = villain_grid(&PreferenceStore::in_memory());
    assert_eq!(trigger_ids(engine.toggle_season(2, true)), vec!["dexter-morgan"]);
    engine.toggle_season(2, false);
    assert_eq!(
        trigger_ids(engine.toggle_season(1, true)),
        vec!["dexter-morgan", "deb-morgan"]
    );
}

#[test]
fn non_numeric_season_control_is_ignored() {
    let mut engine = villain_grid(&PreferenceStore::in_memory());
    let before = engine.current().clone();
    assert_eq!(engine.toggle_season_value("all", true), &before);
    assert!(engine.state().selected_seasons.is_empty());
    assert_eq!(trigger_ids(engine.toggle_season_value(" 2 ", true)), vec!["dexter-morgan"]);
}

#[test]
fn no_results_render_the_empty_status() {
    let mut engine = villain_grid(&PreferenceStore::in_memory());
    let render = engine.set_search("trinity");
    assert!(render.is_empty());
    assert_eq!(
        render.markup,
        r#"<div class="empty-state" role="status">No villains match your filters yet.</div>"#
    );
}

#[test]
fn render_always_matches_current_state() {
    let mut engine = villain_grid(&PreferenceStore::in_memory());
    engine.set_search("morgan");
    engine.toggle_season(2, true);
    engine.toggle_season(2, false);
    engine.set_search("deb");

    let expected: Vec<&str> = engine.filtered().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(trigger_ids(engine.current()), expected);
    assert_eq!(expected, vec!["deb-morgan"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Spoilers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn villain_grid_hides_spoilers_by_default() {
    let engine = villain_grid(&PreferenceStore::in_memory());
    assert!(engine.has_spoiler_toggle());
    assert!(engine.state().hide_spoilers);
    assert!(engine.current().markup.contains(SPOILER_PLACEHOLDER));
}

#[test]
fn hidden_summary_still_resolves_full_record() {
    let engine = villain_grid(&PreferenceStore::in_memory());
    assert!(!engine.current().markup.contains("Debra Morgan works at Miami Metro."));

    let request = engine.resolve_trigger("deb-morgan").unwrap();
    assert_eq!(request.entity.summary, "Debra Morgan works at Miami Metro.");
    assert_eq!(request.type_label, "Villain Profile");
}

#[test]
fn spoiler_toggle_is_persisted_and_restored() {
    let mut store = PreferenceStore::in_memory();
    let mut engine = villain_grid(&store);
    let render = engine.set_hide_spoilers(false, &mut store);
    assert!(!render.markup.contains(SPOILER_PLACEHOLDER));

    let key = BrowserConfig::default().storage_keys.villain_spoilers;
    assert_eq!(store.raw(&key).as_deref(), Some("false"));

    // A fresh page load picks the stored value up before the first render
    let reloaded = villain_grid(&store);
    assert!(!reloaded.state().hide_spoilers);
    assert!(reloaded.current().markup.contains("Debra Morgan works at Miami Metro."));
}

#[test]
fn hide_show_hide_restores_the_same_markup() {
    let mut store = PreferenceStore::in_memory();
    let mut engine = villain_grid(&store);
    let hidden = engine.current().markup.clone();
    assert_eq!(hidden.matches(SPOILER_PLACEHOLDER).count(), 1);
    assert!(hidden.contains("Dexter Morgan works at Miami Metro."));

    let shown = engine.set_hide_spoilers(false, &mut store).markup.clone();
    assert!(!shown.contains(SPOILER_PLACEHOLDER));
    assert!(shown.contains("Dexter Morgan works at Miami Metro."));
    assert!(shown.contains("Debra Morgan works at Miami Metro."));

    assert_eq!(engine.set_hide_spoilers(true, &mut store).markup, hidden);
}

#[test]
fn unavailable_storage_falls_back_to_hiding() {
    let mut store = PreferenceStore::unavailable();
    let mut engine = villain_grid(&store);
    assert!(engine.state().hide_spoilers);
    // The toggle still works for the session
    engine.set_hide_spoilers(false, &mut store);
    assert!(!engine.state().hide_spoilers);
}

#[test]
fn character_grid_never_hides_spoilers() {
    let config = BrowserConfig::default();
    let mut store = PreferenceStore::in_memory();
    let mut engine = GridEngine::new(
        morgans(),
        GridOptions::for_kind(EntityKind::Character, &config),
        &store,
    );
    assert!(!engine.has_spoiler_toggle());
    assert!(engine.current().markup.contains("Debra Morgan works at Miami Metro."));

    engine.set_hide_spoilers(true, &mut store);
    assert!(!engine.state().hide_spoilers);
    assert!(store.keys().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail triggers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_trigger_resolves_to_nothing() {
    let engine = villain_grid(&PreferenceStore::in_memory());
    assert!(engine.resolve_trigger("trinity").is_none());
}

#[test]
fn triggers_resolve_against_the_full_set_not_the_filtered_one() {
    let mut engine = villain_grid(&PreferenceStore::in_memory());
    engine.set_search("dex");
    assert!(engine.resolve_trigger("deb-morgan").is_some());
}

#[test]
fn triggers_carry_the_grid_kind() {
    let engine = villain_grid(&PreferenceStore::in_memory());
    assert!(engine.current().triggers.iter().all(|t| t.kind == EntityKind::Villain));
    assert_eq!(engine.kind(), EntityKind::Villain);
}
