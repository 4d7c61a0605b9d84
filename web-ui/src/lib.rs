//! Web UI for posts-table
//!
//! A Yew single-page app showing a paginated, filterable table of posts
//! whose view state is kept in the URL query string.

mod api;
mod app;
mod components;
mod page;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    yew::Renderer::<app::App>::new().render();
}
