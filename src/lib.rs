//! # admin-ui
//!
//! Leptos + WASM behaviours for the server-rendered admin area: mobile
//! navigation, flash-message dismissal, form validation with numeric
//! clamping, image preview, sortable/filterable tables, data export,
//! clipboard copy, and transient notifications.
//!
//! The `state` and `util` layers are plain Rust and run headlessly under
//! `cargo test`; `components` and `pages` bind them to the DOM. Browser-only
//! glue is gated behind the `hydrate` feature, server rendering behind `ssr`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&e.to_string().into());
    }

    let page = util::embedded::read_json::<net::types::PageData>(net::types::PAGE_DATA_ELEMENT_ID)
        .unwrap_or_default();
    let config = config::UiConfig::load();
    log::debug!(
        "hydrating admin-ui: {} flash message(s), {} user row(s)",
        page.flashes.len(),
        page.users.len()
    );

    leptos::mount::hydrate_body(move || {
        use app::App;
        leptos::view! { <App page=page config=config/> }
    });
}
