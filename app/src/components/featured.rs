use dioxus::prelude::*;
use dossier_core::featured::render_featured;

use crate::app::{use_browser, use_catalog};

/// Home page featured character and villain.
#[component]
pub fn FeaturedCards() -> Element {
    let browser = use_browser();
    let catalog = use_catalog();
    let markup = use_hook(|| {
        let config = browser.config.peek();
        render_featured(&catalog, &config.featured, config.summary_limits.featured)
    });

    rsx! {
        div { class: "feature-grid", "data-featured": "", dangerous_inner_html: "{markup}" }
    }
}
