//! Reveal-on-scroll: `.reveal` elements gain `revealed` the first time they
//! enter the viewport and keep it.

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::LandingConfig;
use crate::dom;

pub fn attach(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    let targets = dom::query_all(doc, ".reveal")?;
    if targets.is_empty() {
        return Ok(());
    }
    let count = targets.len();
    dom::observe_intersections(
        &targets,
        cfg.reveal_threshold,
        Some(&cfg.reveal_root_margin),
        |entries, observer| {
            for entry in entries.iter().filter(|e| e.is_intersecting()) {
                let el = entry.target();
                el.class_list().add_1("revealed").ok();
                observer.unobserve(&el);
            }
        },
    )?;
    log::debug!("reveal: observing {count} elements");
    Ok(())
}
