//! Detail dialog markup.
//!
//! Rendered once and never re-rendered; the dialog host fills the regions and
//! toggles visibility directly on the DOM.

use dioxus::prelude::*;
use dossier_core::modal::PointerTarget;

use crate::app::use_browser;

#[component]
pub fn ModalShell() -> Element {
    let browser = use_browser();
    let mut modal = browser.modal;

    rsx! {
        div {
            class: "modal",
            "data-modal": "",
            role: "dialog",
            aria_modal: "true",
            aria_labelledby: "modal-title",
            aria_hidden: "true",
            tabindex: "-1",
            onclick: move |_| {
                modal.write().handle_pointer(PointerTarget::Backdrop);
            },
            div {
                class: "modal__content",
                onclick: move |e| {
                    // Clicks inside the content never reach the backdrop
                    e.stop_propagation();
                    modal.write().handle_pointer(PointerTarget::Content);
                },
                button {
                    class: "modal__close",
                    r#type: "button",
                    "data-modal-close": "",
                    aria_label: "Close details",
                    onclick: move |e| {
                        e.stop_propagation();
                        modal.write().handle_pointer(PointerTarget::CloseControl);
                    },
                    "×"
                }
                p { class: "modal__type", "data-modal-type": "" }
                h2 { id: "modal-title", class: "modal__title", "data-modal-title": "" }
                p { class: "modal__seasons", "data-modal-seasons": "" }
                p { class: "modal__summary", "data-modal-summary": "" }
                div { class: "modal__lists",
                    div {
                        h3 { "Aliases" }
                        ul { "data-modal-aliases": "" }
                    }
                    div {
                        h3 { "Notable episodes" }
                        ul { "data-modal-episodes": "" }
                    }
                }
            }
        }
    }
}
