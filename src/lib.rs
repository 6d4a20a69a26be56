//! Lobal Chess Academy landing page, WASM side.
//!
//! Every decorative behaviour of the page lives here as an independent module
//! that attaches listeners to fixed DOM hooks (ids, classes, data attributes).
//! The modules share no state; each owns whatever it needs behind its own
//! closures. Pure state (trail particles, counters, accordion, validation, …)
//! is kept free of web-sys so it can be tested natively with `cargo test`.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

pub mod anchors;
pub mod click_pieces;
pub mod config;
pub mod counters;
mod dom;
pub mod faq;
pub mod forms;
pub mod glyphs;
pub mod hero;
pub mod nav;
pub mod reveal;
pub mod tilt;
pub mod trail;

pub use config::LandingConfig;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) keeps the existing logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_landing() -> Result<(), JsValue> {
    start_with(LandingConfig::default())
}

/// Same as `start_landing`, with a JSON object overriding any config keys.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_landing_with_config(json: &str) -> Result<(), JsValue> {
    let cfg = LandingConfig::from_json(json)
        .map_err(|e| JsValue::from_str(&format!("invalid landing config: {e}")))?;
    start_with(cfg)
}

fn start_with(cfg: LandingConfig) -> Result<(), JsValue> {
    let doc = dom::document()?;
    if doc.ready_state() != "loading" {
        return attach_all(&doc, &cfg);
    }
    let mut pending = Some(cfg);
    let loaded_doc = doc.clone();
    dom::listen(&doc, "DOMContentLoaded", move |_: Event| {
        if let Some(cfg) = pending.take() {
            if let Err(e) = attach_all(&loaded_doc, &cfg) {
                log::error!("landing: attach failed: {e:?}");
            }
        }
    })
}

/// Attach every feature. A failing feature does not stop the others; the
/// first error is returned after all have been tried.
pub fn attach_all(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    let features: [(&str, &dyn Fn() -> Result<(), JsValue>); 11] = [
        ("floating pieces", &|| glyphs::attach(doc, cfg)),
        ("cursor trail", &|| trail::attach(doc, cfg)),
        ("navbar", &|| nav::attach(doc, cfg)),
        ("reveal", &|| reveal::attach(doc, cfg)),
        ("counters", &|| counters::attach(doc, cfg)),
        ("tilt", &|| tilt::attach(doc, cfg)),
        ("faq", &|| faq::attach(doc)),
        ("forms", &|| forms::attach(doc, cfg)),
        ("anchors", &|| anchors::attach(doc)),
        ("click pieces", &|| click_pieces::attach(doc, cfg)),
        ("hero", &|| hero::attach(doc, cfg)),
    ];
    let mut first_err = None;
    for (name, attach) in features {
        if let Err(e) = attach() {
            log::error!("{name}: {e:?}");
            first_err.get_or_insert(e);
        }
    }
    match first_err {
        Some(e) => Err(e),
        None => {
            log::info!("landing page effects attached");
            Ok(())
        }
    }
}
