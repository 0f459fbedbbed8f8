use crate::config::RevealConfig;
use crate::core::toggle_class;
use crate::dom;
use web_sys as web;

/// Wire every trigger so a click flips the active class on itself.
/// Returns the number of triggers wired.
pub fn wire_toggle_buttons(document: &web::Document, cfg: &RevealConfig) -> anyhow::Result<usize> {
    let buttons = dom::query_all(document, &cfg.trigger_selector)?;
    if buttons.is_empty() {
        log::debug!("[click] no elements match {:?}", cfg.trigger_selector);
    }
    for button in &buttons {
        let target = button.clone();
        let active_class = cfg.active_class.clone();
        dom::add_click_listener(button, move || {
            let mut classes = target.class_list();
            let now_active = toggle_class(&mut classes, &active_class);
            log::debug!("[click] {} -> {}", active_class, now_active);
        });
    }
    Ok(buttons.len())
}
