//! Todo UI Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod persistence;
mod store;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = app::start() {
        log::error!("[APP] Startup failed: {}", err);
    }
}
