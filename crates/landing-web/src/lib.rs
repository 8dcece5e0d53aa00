//! DhanKanya Landing Page
//!
//! Leptos-based WASM frontend: hero, pricing cards, and an FAQ accordion.

mod api;
mod app;
pub mod channel;
pub mod components;
mod pages;

pub use app::App;
pub use channel::AccordionChannel;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Also receives accordion-core's tracing events through the `log` bridge.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
