//! DOM host for the detail dialog.
//!
//! The controller in dossier-core owns all dialog state; this type only reads
//! and mutates the dialog's elements.

use dossier_core::modal::{DialogHost, FOCUSABLE_SELECTOR, FocusCandidate, ModalContent};
use dossier_core::shell::attrs;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

pub type KeyListener = Closure<dyn FnMut(KeyboardEvent)>;

const OPEN_CLASS: &str = "is-open";

pub struct DomDialog {
    document: Document,
    root: HtmlElement,
    title: Element,
    summary: Element,
    kind: Option<Element>,
    seasons: Option<Element>,
    aliases: Option<Element>,
    episodes: Option<Element>,
    key_listener: KeyListener,
    capturing: bool,
}

impl DomDialog {
    /// Find the dialog in the document.
    ///
    /// Returns `None` unless the container, title and summary regions all exist;
    /// the dialog is then disabled for the page.
    pub fn locate(key_listener: KeyListener) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let root = document
            .query_selector(&attrs::selector(attrs::MODAL))
            .ok()??
            .dyn_into::<HtmlElement>()
            .ok()?;
        let region = |attr: &str| root.query_selector(&attrs::selector(attr)).ok().flatten();

        let (Some(title), Some(summary)) = (region(attrs::MODAL_TITLE), region(attrs::MODAL_SUMMARY))
        else {
            tracing::warn!("dialog markup is missing its title or summary region");
            return None;
        };

        Some(Self {
            kind: region(attrs::MODAL_TYPE),
            seasons: region(attrs::MODAL_SEASONS),
            aliases: region(attrs::MODAL_ALIASES),
            episodes: region(attrs::MODAL_EPISODES),
            document,
            root,
            title,
            summary,
            key_listener,
            capturing: false,
        })
    }
}

impl DialogHost for DomDialog {
    type Element = HtmlElement;

    fn active_element(&self) -> Option<HtmlElement> {
        self.document
            .active_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn container(&self) -> HtmlElement {
        self.root.clone()
    }

    fn focus_candidates(&self) -> Vec<FocusCandidate<HtmlElement>> {
        let Ok(nodes) = self.root.query_selector_all(FOCUSABLE_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|element| FocusCandidate {
                disabled: element.has_attribute("disabled"),
                element,
            })
            .collect()
    }

    fn focus(&mut self, element: &HtmlElement) -> bool {
        element.focus().is_ok()
    }

    fn can_focus(&self, element: &HtmlElement) -> bool {
        element.is_connected()
    }

    fn populate(&mut self, content: &ModalContent) {
        self.title.set_text_content(Some(&content.title));
        self.summary.set_text_content(Some(&content.summary));
        if let Some(kind) = &self.kind {
            kind.set_text_content(Some(&content.type_label));
        }
        if let Some(seasons) = &self.seasons {
            seasons.set_text_content(Some(&content.seasons));
        }
        if let Some(aliases) = &self.aliases {
            aliases.set_inner_html(&content.aliases.markup());
        }
        if let Some(episodes) = &self.episodes {
            episodes.set_inner_html(&content.episodes.markup());
        }
    }

    fn set_open(&mut self, open: bool) {
        let classes = self.root.class_list();
        if open {
            let _ = classes.add_1(OPEN_CLASS);
            let _ = self.root.remove_attribute("aria-hidden");
        } else {
            let _ = classes.remove_1(OPEN_CLASS);
            let _ = self.root.set_attribute("aria-hidden", "true");
        }
    }

    fn set_key_capture(&mut self, capture: bool) {
        if capture == self.capturing {
            return;
        }
        let callback = self.key_listener.as_ref().unchecked_ref();
        let result = if capture {
            self.document
                .add_event_listener_with_callback("keydown", callback)
        } else {
            self.document
                .remove_event_listener_with_callback("keydown", callback)
        };
        match result {
            Ok(()) => self.capturing = capture,
            Err(err) => tracing::warn!(?err, capture, "failed to update dialog key listener"),
        }
    }
}
