//! # site
//!
//! Leptos + WASM presentation layer for the itiden.se portfolio site.
//!
//! This crate contains the document shell, pages, components, global styles,
//! the per-request style sheet collector, and the small amount of browser
//! behavior the site has (lazy image loading, title parallax, dark mode).
//! The `portfolio` binary renders it on the server; the `hydrate` feature
//! builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod styles;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
