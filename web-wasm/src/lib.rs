//! Profile Verify Web App (Leptos + WASM)

pub mod app;
mod components;
pub mod api;
pub mod encoder;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
