//! # rolegate-client
//!
//! Leptos + WASM frontend for username/password login with optional role
//! selection and a collapsible navigation menu.
//!
//! This crate contains pages, components, application state, the REST client
//! for the auth and menu endpoints, and unverified token decoding.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
