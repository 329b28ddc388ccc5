//! # turfbook-ui
//!
//! Leptos + WASM front end for the turf booking site. Mounts into pages
//! rendered by the booking server and owns two controllers: the
//! create-turf form and the home page catalog with its login/logout toggle.
//!
//! Browser glue sits behind the `csr` feature. Everything else (validation,
//! request shaping, outcome mapping, visibility rules, catalog data) is plain
//! Rust and is tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then mount every
/// controller whose host element is present on the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, load_error) = match config::AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };
    let _ = console_log::init_with_level(config.level());
    if let Some(e) = load_error {
        log::warn!("turfbook config rejected, using defaults: {e}");
    }

    app::mount_pages(&config);
}
