//! # client
//!
//! Leptos frontend for the Model WEF conference site: public landing page,
//! sign-in, the delegate dashboard, the admin review panels, and the
//! allow-listed system area.
//!
//! Rows and session shapes come from `records`; this crate adds pages,
//! components, client-side state, and the JSON API wrappers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// Hydration entry point for the WASM client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
