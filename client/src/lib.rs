//! # client
//!
//! Leptos + WASM frontend for the social post scheduler.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). It contains pages, view components, per-view state, the REST
//! client, and the host bridge for the `canvas` text-overlay editor.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated WASM loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    log::info!("hydrating client");
    leptos::mount::hydrate_body(app::App);
}
