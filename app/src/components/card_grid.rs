//! Searchable, season-filterable card grid for one data set.

use dioxus::prelude::*;
use dossier_core::grid::GridEngine;
use dossier_core::modal::ModalController;
use dossier_core::page::init_grid;
use dossier_core::shell::attrs;
use dossier_types::EntityKind;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::{use_browser, use_catalog};
use crate::dialog::DomDialog;

fn grid_attr(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Character => attrs::CHARACTER_GRID,
        EntityKind::Villain => attrs::VILLAIN_GRID,
    }
}

/// Delegated click handling for the grid's detail triggers.
///
/// Card markup is replaced on every render, so a single document listener
/// resolves triggers instead of binding each button.
fn install_trigger_listener(
    kind: EntityKind,
    grid: Signal<GridEngine>,
    mut modal: Signal<ModalController<DomDialog>>,
) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let trigger_selector = attrs::selector(attrs::DETAIL_TRIGGER);
    let grid_selector = attrs::selector(grid_attr(kind));

    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |e: web_sys::MouseEvent| {
        let Some(trigger) = e
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(&trigger_selector).ok().flatten())
        else {
            return;
        };
        // Only triggers rendered inside this grid
        if trigger.closest(&grid_selector).ok().flatten().is_none() {
            return;
        }
        let Some(id) = trigger.get_attribute(attrs::DETAIL_TRIGGER) else {
            return;
        };
        let Some(request) = grid
            .try_read()
            .ok()
            .and_then(|engine| engine.resolve_trigger(&id))
        else {
            return;
        };
        if let Ok(mut controller) = modal.try_write() {
            controller.open(&request.entity, request.type_label);
        }
    });

    if document
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_ok()
    {
        on_click.forget();
    }
}

#[component]
pub fn CardGrid(kind: EntityKind) -> Element {
    let browser = use_browser();
    let catalog = use_catalog();
    let mut grid = use_signal(|| {
        init_grid(kind, &catalog, &browser.config.peek(), &browser.store.peek())
    });
    let seasons = use_hook(|| grid.peek().available_seasons());

    use_hook(move || install_trigger_listener(kind, grid, browser.modal));

    let engine = grid.read();
    let markup = engine.current().markup.clone();
    let hide_spoilers = engine.state().hide_spoilers;
    let has_toggle = engine.has_spoiler_toggle();
    let result_count = engine.current().triggers.len();
    drop(engine);

    let mut store = browser.store;

    rsx! {
        div { class: "filters",
            label { class: "filters__search",
                span { class: "sr-only", "Search {kind.plural()}" }
                input {
                    r#type: "search",
                    placeholder: "Search by name",
                    "data-search": "",
                    oninput: move |e| {
                        grid.write().set_search(&e.value());
                    }
                }
            }
            fieldset { class: "filters__seasons",
                legend { "Seasons" }
                for season in seasons.iter().copied() {
                    label { key: "{season}", class: "filters__season",
                        input {
                            r#type: "checkbox",
                            value: "{season}",
                            "data-filter-season": "",
                            onchange: move |e| {
                                grid.write().toggle_season(season, e.checked());
                            }
                        }
                        "Season {season}"
                    }
                }
            }
            if has_toggle {
                label { class: "filters__spoilers",
                    input {
                        r#type: "checkbox",
                        "data-spoiler-toggle": "",
                        checked: hide_spoilers,
                        onchange: move |e| {
                            let mut store = store.write();
                            grid.write().set_hide_spoilers(e.checked(), &mut store);
                        }
                    }
                    "Hide spoilers"
                }
            }
            p { class: "filters__count sr-only", role: "status", "{result_count} {kind.plural()} shown" }
        }
        match kind {
            EntityKind::Character => rsx! {
                div { class: "card-grid", "data-character-grid": "", dangerous_inner_html: "{markup}" }
            },
            EntityKind::Villain => rsx! {
                div { class: "card-grid", "data-villain-grid": "", dangerous_inner_html: "{markup}" }
            },
        }
    }
}
