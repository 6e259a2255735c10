mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
mod test_support;
pub mod utils;

/// Browser entry point: logging, runtime config, then the router.
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting Rakshak frontend");

    // window.__RAKSHAK_ENV (env.js) takes precedence over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
