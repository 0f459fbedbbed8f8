use crate::config::RevealConfig;
use crate::core::{apply_visibility, ClassList};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// DOMTokenList already has set semantics; errors only arise for malformed
// tokens, which RevealConfig::validate rules out. Toggling goes through the
// trait default so clicks use the same add/remove path as intersections.
impl ClassList for web::DomTokenList {
    fn contains(&self, class: &str) -> bool {
        web::DomTokenList::contains(self, class)
    }

    fn add(&mut self, class: &str) {
        _ = self.add_1(class);
    }

    fn remove(&mut self, class: &str) {
        _ = self.remove_1(class);
    }
}

fn handle_entries(entries: &js_sys::Array, visible_class: &str) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
            continue;
        };
        let intersecting = entry.is_intersecting();
        let mut classes = entry.target().class_list();
        if apply_visibility(&mut classes, intersecting, visible_class) {
            log::debug!("[reveal] {} -> {}", visible_class, intersecting);
        }
    }
}

/// Observe every section for viewport intersection and keep the visible class
/// in sync. Returns the number of sections observed.
pub fn observe_sections(document: &web::Document, cfg: &RevealConfig) -> anyhow::Result<usize> {
    let sections = dom::query_all(document, &cfg.section_selector)?;
    if sections.is_empty() {
        log::debug!("[reveal] no elements match {:?}", cfg.section_selector);
        return Ok(0);
    }

    let visible_class = cfg.visible_class.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            handle_entries(&entries, &visible_class);
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    // root left unset: intersect against the viewport
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(cfg.threshold));
    options.set_root_margin(&cfg.root_margin);

    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver unavailable: {:?}", e))?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }
    Ok(sections.len())
}
