// lib.rs - Root module of the bullwork_finder library
//
// The web_app module holds the application; fixtures holds sample items
// shared by unit tests, integration tests and the fake REST service.

pub mod fixtures;
pub mod web_app;

/// WASM entry point: hydrate the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
