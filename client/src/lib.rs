//! # client
//!
//! Leptos + WASM dashboard for the ERP data-entry screens.
//!
//! This crate contains the app shell, pages, schema-driven form components
//! and UI state. Form schemas, validation and the module catalog come from the
//! `forms` crate, so the same rules run in the browser and on the server.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
