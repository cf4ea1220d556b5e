use dioxus::prelude::*;
use dossier_core::page::init_timeline;

use crate::app::{use_browser, use_catalog};

/// Season timeline with its persisted spoiler toggle.
#[component]
pub fn TimelineView() -> Element {
    let browser = use_browser();
    let catalog = use_catalog();
    let mut timeline =
        use_signal(|| init_timeline(&catalog, &browser.config.peek(), &browser.store.peek()));
    let mut store = browser.store;

    let view = timeline.read();
    let markup = view.markup().to_string();
    let hide_spoilers = view.hide_spoilers();
    drop(view);

    rsx! {
        div { class: "filters",
            label { class: "filters__spoilers",
                input {
                    r#type: "checkbox",
                    "data-spoiler-toggle": "",
                    checked: hide_spoilers,
                    onchange: move |e| {
                        let mut store = store.write();
                        timeline.write().set_hide_spoilers(e.checked(), &mut store);
                    }
                }
                "Hide spoilers"
            }
        }
        div { class: "timeline", "data-timeline": "", dangerous_inner_html: "{markup}" }
    }
}
