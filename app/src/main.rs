#![allow(non_snake_case)]

mod app;
mod components;
mod data;
mod dialog;
mod shell;
mod storage;

use dioxus_logger::tracing::Level;

fn main() {
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        web_sys::console::error_1(&format!("failed to init logger: {err}").into());
    }
    dioxus::launch(app::App);
}
