#![cfg(target_arch = "wasm32")]
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod buttons;
mod config;
mod constants;
mod core;
mod dom;
mod reveal;

use config::RevealConfig;

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-reveal starting");

    let Some(document) = dom::window_document() else {
        log::warn!("no document; reveal disabled");
        return Ok(());
    };
    let doc = document.clone();
    dom::on_dom_ready(&document, move || {
        if let Err(e) = init(&doc) {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init(document: &web::Document) -> anyhow::Result<()> {
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let cfg = RevealConfig::default();
    cfg.validate()?;

    let sections = reveal::observe_sections(document, &cfg)?;
    let buttons = buttons::wire_toggle_buttons(document, &cfg)?;
    log::info!("[init] observing {} sections, {} triggers", sections, buttons);
    Ok(())
}
