//! # safeminor-web
//!
//! Leptos + WASM frontend for SafeMinor Kenya, a reporting and tracking
//! application for gender-based-violence cases affecting minors.
//!
//! This crate contains pages, components, application state, static
//! configuration data, and the notification/toast plumbing. All data is
//! in-memory: the case store is a mock standing in for a real intake
//! backend, and form submissions only notify and reset local state.

pub mod app;
pub mod components;
pub mod data;
pub mod notify;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
