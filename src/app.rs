//! Todo UI App
//!
//! Startup: logging, config, then mounting the list into `document.body`
//! once the document has loaded.

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppError;
use crate::logging;

pub fn start() -> Result<(), AppError> {
    logging::init(log::LevelFilter::Info);

    let window = web_sys::window().ok_or(AppError::NoWindow)?;
    let document = window.document().ok_or(AppError::NoWindow)?;

    let config = AppConfig::from_document(&document);
    logging::init(config.level_filter());

    if document.ready_state() == "loading" {
        let loaded_document = document.clone();
        let on_loaded = Closure::once_into_js(move || {
            if let Err(err) = mount(&loaded_document, config) {
                log::error!("[APP] Mount failed: {}", err);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_loaded.unchecked_ref::<js_sys::Function>())?;
        Ok(())
    } else {
        mount(&document, config)
    }
}

fn mount(document: &Document, config: AppConfig) -> Result<(), AppError> {
    let body = document.body().ok_or(AppError::NoBody)?;
    let context = AppContext::in_browser(config).leak();
    context.mount_into(&body)?;
    log::info!("[APP] Mounted '{}'", context.config.title);
    Ok(())
}
