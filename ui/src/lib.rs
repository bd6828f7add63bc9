//! # finansrisk-ui
//!
//! Leptos + WASM single-page client for FinansRisk.
//!
//! This crate contains pages, components, reactive state, and the browser
//! implementations of the core's `Transport` and `TokenStore` seams. Session
//! logic lives in the `finansrisk` crate; this crate only mirrors it into
//! signals and renders it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
