//! # portal-client
//!
//! Leptos + WASM frontend for the portal's content administration: the
//! news/training modal form and the header user menu.
//!
//! Form and menu logic live in `state` as plain values driven by the
//! `ContentSaver` and `SessionProvider` collaborators; `components` wrap them
//! in signals, and the article body is a `richtext::Document`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
