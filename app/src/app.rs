use dioxus::prelude::*;
use dossier_core::modal::{Key, KeyOutcome, KeyPress, ModalController};
use dossier_core::storage::PreferenceStore;
use dossier_core::{BrowserConfig, Catalog};
use dossier_types::{EntityKind, PageKind};
use wasm_bindgen::prelude::*;

use crate::components::{CardGrid, FeaturedCards, ModalShell, TimelineView};
use crate::data;
use crate::dialog::{DomDialog, KeyListener};
use crate::shell;
use crate::storage::browser_store;

// ─────────────────────────────────────────────────────────────────────────────
// Shared State
// ─────────────────────────────────────────────────────────────────────────────

/// Page-wide state shared with every view through context.
#[derive(Clone, Copy)]
pub struct BrowserContext {
    pub store: Signal<PreferenceStore>,
    pub modal: Signal<ModalController<DomDialog>>,
    pub config: Signal<BrowserConfig>,
}

pub fn use_browser() -> BrowserContext {
    use_context::<BrowserContext>()
}

/// Document key handler for the open dialog. Installed and removed by the
/// dialog host as the dialog opens and closes.
fn dialog_key_listener(mut modal: Signal<ModalController<DomDialog>>) -> KeyListener {
    Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
        let Ok(mut controller) = modal.try_write() else {
            return;
        };
        let press = KeyPress {
            key: Key::from_name(&e.key()),
            shift: e.shift_key(),
        };
        if controller.handle_key(press) == KeyOutcome::Trapped {
            e.prevent_default();
        }
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Root
// ─────────────────────────────────────────────────────────────────────────────

#[component]
pub fn App() -> Element {
    let page_attr = use_hook(data::current_page_attr);
    let page = PageKind::from_attr(&page_attr);

    use_context_provider(data::load_catalog);
    let browser = use_context_provider(|| BrowserContext {
        store: Signal::new(browser_store()),
        modal: Signal::new(ModalController::detached()),
        config: Signal::new(BrowserConfig::default()),
    });

    use_hook({
        let page_attr = page_attr.clone();
        move || shell::enhance(&page_attr, browser.store)
    });

    // The dialog markup exists only after the first render
    use_effect(move || {
        let mut modal = browser.modal;
        let listener = dialog_key_listener(modal);
        match DomDialog::locate(listener) {
            Some(host) => modal.write().attach(host),
            None => tracing::info!("page has no detail dialog"),
        }
    });

    tracing::debug!(page = ?page, "rendering page");

    rsx! {
        match page {
            PageKind::Home => rsx! { FeaturedCards {} },
            PageKind::Characters => rsx! { CardGrid { kind: EntityKind::Character } },
            PageKind::Villains => rsx! { CardGrid { kind: EntityKind::Villain } },
            PageKind::Timeline => rsx! { TimelineView {} },
            PageKind::Other => rsx! {},
        }
        ModalShell {}
    }
}

/// Catalog provided by [`App`]
pub fn use_catalog() -> Catalog {
    use_context::<Catalog>()
}
