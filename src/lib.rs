//! User-center admin front end.
//!
//! SYSTEM CONTEXT
//! ==============
//! A browser client for the user-center backend. Every backend call goes
//! through one request pipeline (`net`) that unwraps the `{code, data,
//! description}` envelope, redirects to the login route on `40100`, and turns
//! other failures into typed errors. On load the session is bootstrapped once
//! (`state::bootstrap`); the route guard (`util::auth`) then keeps signed-out
//! users on public routes.
//!
//! The `csr` feature builds the WASM entry point. Without it the crate is a
//! plain library whose browser transport reports itself unavailable, which
//! is how the pure pipeline and state logic are tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_helpers;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = match config::AppConfig::from_build() {
        Ok(cfg) if cfg.env.is_dev() => log::Level::Debug,
        _ => log::Level::Info,
    };
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }

    log::info!("user center mounting");
    leptos::mount::mount_to_body(app::App);
}
