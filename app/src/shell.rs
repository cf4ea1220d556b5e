//! Enhancements for the static page chrome: nav, spoiler banner, footer year.
//!
//! Each feature looks up its own elements and silently skips when they are
//! absent from the page.

use dioxus::prelude::*;
use dossier_core::shell::{
    NAV_ACTIVE_CLASS, NAV_OPEN_CLASS, NavToggle, SpoilerBanner, attrs, footer_year, nav_link_state,
};
use dossier_core::storage::PreferenceStore;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

fn select(root: &Document, attr: &str) -> Option<Element> {
    root.query_selector(&attrs::selector(attr)).ok().flatten()
}

fn select_all(root: &Element, attr: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(&attrs::selector(attr)) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn on_click(element: &Element, handler: impl FnMut(web_sys::MouseEvent) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(handler);
    if element
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        // Lives as long as the page
        closure.forget();
    }
}

/// Run every shell enhancement once for the current page.
pub fn enhance(page_attr: &str, store: Signal<PreferenceStore>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };

    highlight_nav(&root, page_attr);
    init_nav_toggle(&document);
    init_spoiler_banner(&document, store);
    stamp_footer_year(&document);
}

fn highlight_nav(root: &Element, page_attr: &str) {
    for link in select_all(root, attrs::NAV_LINK) {
        let link_page = link.get_attribute(attrs::NAV_LINK).unwrap_or_default();
        let state = nav_link_state(&link_page, page_attr);
        let classes = link.class_list();
        if state.active {
            let _ = classes.add_1(NAV_ACTIVE_CLASS);
        } else {
            let _ = classes.remove_1(NAV_ACTIVE_CLASS);
        }
        match state.aria_current {
            Some(value) => {
                let _ = link.set_attribute("aria-current", value);
            }
            None => {
                let _ = link.remove_attribute("aria-current");
            }
        }
    }
}

fn init_nav_toggle(document: &Document) {
    let (Some(nav), Some(toggle)) = (select(document, attrs::NAV), select(document, attrs::NAV_TOGGLE))
    else {
        return;
    };
    let state = Signal::new(NavToggle::default());

    let apply = {
        let nav = nav.clone();
        let toggle = toggle.clone();
        move |nav_state: NavToggle| {
            let classes = nav.class_list();
            if nav_state.is_open() {
                let _ = classes.add_1(NAV_OPEN_CLASS);
            } else {
                let _ = classes.remove_1(NAV_OPEN_CLASS);
            }
            let _ = toggle.set_attribute("aria-expanded", nav_state.aria_expanded());
        }
    };

    {
        let apply = apply.clone();
        let mut state = state;
        on_click(&toggle, move |_| {
            let Ok(mut nav_state) = state.try_write() else {
                return;
            };
            nav_state.toggle();
            apply(*nav_state);
        });
    }

    for link in select_all(&nav, attrs::NAV_LINK) {
        let apply = apply.clone();
        let mut state = state;
        on_click(&link, move |_| {
            let Ok(mut nav_state) = state.try_write() else {
                return;
            };
            nav_state.link_clicked();
            apply(*nav_state);
        });
    }
}

fn init_spoiler_banner(document: &Document, mut store: Signal<PreferenceStore>) {
    let Some(banner_el) = select(document, attrs::SPOILER_BANNER) else {
        return;
    };
    let key = banner_el.get_attribute(attrs::SPOILER_BANNER_KEY);
    let banner = SpoilerBanner::load(key.as_deref(), &store.peek());
    if banner.is_hidden() {
        let _ = banner_el.set_attribute("hidden", "true");
        return;
    }

    let Some(dismiss) = banner_el
        .query_selector(&attrs::selector(attrs::SPOILER_DISMISS))
        .ok()
        .flatten()
    else {
        return;
    };

    let mut banner = banner;
    on_click(&dismiss, move |_| {
        let _ = banner_el.set_attribute("hidden", "true");
        if let Ok(mut store) = store.try_write() {
            banner.dismiss(&mut store);
        }
    });
}

fn stamp_footer_year(document: &Document) {
    if let Some(target) = select(document, attrs::CURRENT_YEAR) {
        target.set_text_content(Some(&footer_year().to_string()));
    }
}
