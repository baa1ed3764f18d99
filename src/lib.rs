//! # car-inventory-client
//!
//! Leptos + WASM frontend for the car inventory management application.
//!
//! The crate renders the login/register flow, the car catalog views and the
//! admin CRUD screens. All persistence lives behind the remote HTTP API; the
//! client only owns the session snapshot (`state::session`) and the routing
//! decisions derived from it (`util::auth`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod route;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
