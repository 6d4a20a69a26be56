//! Clicking on empty page space pops a chess piece that floats up, spins,
//! shrinks and fades before being removed.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::config::LandingConfig;
use crate::dom;
use crate::glyphs;

/// Clicks landing inside any of these never spawn a piece.
pub const INTERACTIVE_SELECTOR: &str = "button, a, input, select, .faq-question, form";

const GLYPH_COLOR: &str = "#c9a84c";

#[derive(Clone, Debug, PartialEq)]
pub struct ClickPiece {
    pub glyph: &'static str,
    pub x: f64,
    pub y: f64,
    pub spin_deg: f64, // -45..45
}

impl ClickPiece {
    pub fn random(x: f64, y: f64, rng: &mut fastrand::Rng) -> Self {
        Self {
            glyph: glyphs::random_glyph(rng),
            x,
            y,
            spin_deg: rng.f64() * 90.0 - 45.0,
        }
    }

    pub fn final_transform(&self, rise_px: f64) -> String {
        format!("translateY(-{rise_px}px) rotate({}deg) scale(0.3)", self.spin_deg)
    }

    fn build(&self, doc: &Document) -> Result<HtmlElement, JsValue> {
        let el: HtmlElement = doc.create_element("div")?.dyn_into()?;
        el.set_text_content(Some(self.glyph));
        for (prop, value) in [
            ("position", "fixed".to_string()),
            ("left", format!("{}px", self.x)),
            ("top", format!("{}px", self.y)),
            ("font-size", "1.8rem".to_string()),
            ("color", GLYPH_COLOR.to_string()),
            ("pointer-events", "none".to_string()),
            ("z-index", "9998".to_string()),
            ("transition", "all 1s ease-out".to_string()),
            ("opacity", "0.8".to_string()),
        ] {
            dom::set_style(&el, prop, &value);
        }
        Ok(el)
    }
}

fn hits_interactive(target: &Element) -> bool {
    matches!(target.closest(INTERACTIVE_SELECTOR), Ok(Some(_)))
}

fn spawn(doc: &Document, piece: &ClickPiece, cfg: &LandingConfig) -> Result<(), JsValue> {
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let el = piece.build(doc)?;
    body.append_child(&el)?;

    let end = piece.final_transform(cfg.click_glyph_rise_px);
    let animated = el.clone();
    dom::next_frame(move |_| {
        dom::set_style(&animated, "transform", &end);
        dom::set_style(&animated, "opacity", "0");
    })?;
    Timeout::new(cfg.click_glyph_lifetime_ms, move || el.remove()).forget();
    Ok(())
}

pub fn attach(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    let (doc_ref, cfg) = (doc.clone(), cfg.clone());
    let mut rng = fastrand::Rng::new();
    dom::listen(doc, "click", move |evt: MouseEvent| {
        let target = evt.target().and_then(|t| t.dyn_into::<Element>().ok());
        if target.as_ref().is_some_and(hits_interactive) {
            return;
        }
        let piece = ClickPiece::random(evt.client_x() as f64, evt.client_y() as f64, &mut rng);
        if let Err(e) = spawn(&doc_ref, &piece, &cfg) {
            log::error!("click pieces: spawn failed: {e:?}");
        }
    })
}
