//! Figure studio frontend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Client-side rendered Leptos app, compiled to WASM and served as static
//! files by the server. Browser-only dependencies sit behind the `csr`
//! feature so the pure logic (validation, URL building, response parsing,
//! upload state machine) builds and unit-tests on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
