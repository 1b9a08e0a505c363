//! # client
//!
//! Leptos + WASM frontend for composing and viewing shareable galleries.
//!
//! The editor keeps a draft in `localStorage` and builds share links whose
//! fragment carries the whole gallery; the viewer rebuilds the gallery from
//! that fragment. Model, codec, and draft logic live in the `gallery` crate.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
