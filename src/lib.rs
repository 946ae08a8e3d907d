//! # keyfront
//!
//! Leptos + WASM client shell for the Keyfront property portal.
//!
//! The heart of the crate is the client-side session lifecycle: bearer-token
//! storage (`util::token_store`), the transport with silent refresh-and-replay
//! (`net`), the reducer-driven session store (`state::session`), the one-shot
//! bootstrap gate (`components::auth_bootstrap`), and role-gated navigation
//! (`util::auth`). Pages are thin surfaces over that core.

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
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
