//! # register-harness
//!
//! Leptos test page for exercising a registration endpoint by hand.
//!
//! The page renders three inputs, posts them as JSON to `/api/register`, and
//! reports the payload and the outcome to the diagnostic log. Everything
//! below the page (form state, wire payload, transport seam, diagnostics) is
//! plain Rust so the `cli` crate can drive the same submit flow natively.

pub mod app;
pub mod diagnostics;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install console logging and mount the app.
///
/// No server renders this page, so `App` is mounted onto an empty body
/// instead of hydrating server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    diagnostics::init_console_logging();
    leptos::mount::mount_to_body(app::App);
}
