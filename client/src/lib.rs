//! # client
//!
//! Leptos + WASM file upload widget.
//!
//! The widget renders a drop zone, a file picker, an image preview, a
//! simulated progress bar and the resulting link. All upload rules live in the
//! `uploader` crate; this crate binds them to browser files, object URLs,
//! `fetch` and timers.

pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod components;

/// WASM entry point: install panic/log hooks and mount the widget.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
