//! chatdocs browser application.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on the server (`ssr`) and hydrated in the browser (`hydrate`).
//! Authentication runs entirely client-side through [`oidc::SessionClient`];
//! the server only publishes the public OIDC settings.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
