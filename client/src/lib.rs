//! # client
//!
//! Leptos + WASM login/registration screen for the chat portal.
//!
//! The screen posts credentials to the authentication service, renders the
//! service's text reply next to the form, and redirects to the chat page on
//! a successful login. Submission logic lives behind the `AccessView` and
//! `AuthTransport` seams so it runs unchanged in the browser, in the `cli`
//! crate, and under native unit tests.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
