//! Ambient floating chess pieces drifting behind the page content.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::config::LandingConfig;
use crate::dom;

/// White and black chess symbols used by every decorative glyph on the page.
pub const CHESS_GLYPHS: [&str; 12] = [
    "♔", "♕", "♖", "♗", "♘", "♙", "♚", "♛", "♜", "♝", "♞", "♟",
];

pub fn random_glyph(rng: &mut fastrand::Rng) -> &'static str {
    CHESS_GLYPHS[rng.usize(..CHESS_GLYPHS.len())]
}

/// Randomised inline style for one floating piece.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingGlyph {
    pub glyph: &'static str,
    pub left_pct: f64,     // 0..100
    pub font_rem: f64,     // 1.2..3.2
    pub opacity: f64,      // 0.02..0.08
    pub duration_s: f64,   // 15..35
    pub delay_s: f64,      // negative: starts mid-animation
}

impl FloatingGlyph {
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        let glyph = random_glyph(rng);
        let left_pct = rng.f64() * 100.0;
        let font_rem = rng.f64() * 2.0 + 1.2;
        let opacity = rng.f64() * 0.06 + 0.02;
        let duration_s = rng.f64() * 20.0 + 15.0;
        let delay_s = -(rng.f64() * duration_s);
        Self { glyph, left_pct, font_rem, opacity, duration_s, delay_s }
    }

    fn apply(&self, el: &HtmlElement) {
        el.set_text_content(Some(self.glyph));
        dom::set_style(el, "left", &format!("{}%", self.left_pct));
        dom::set_style(el, "font-size", &format!("{}rem", self.font_rem));
        dom::set_style(el, "opacity", &self.opacity.to_string());
        dom::set_style(el, "animation-duration", &format!("{}s", self.duration_s));
        dom::set_style(el, "animation-delay", &format!("{}s", self.delay_s));
    }
}

pub fn attach(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    let Some(container) = doc.get_element_by_id("floating-pieces") else {
        log::warn!("floating pieces: #floating-pieces missing, skipping");
        return Ok(());
    };
    let mut rng = fastrand::Rng::new();
    for _ in 0..cfg.floating_piece_count {
        let el: HtmlElement = doc.create_element("div")?.dyn_into()?;
        el.class_list().add_1("floating-piece")?;
        FloatingGlyph::random(&mut rng).apply(&el);
        container.append_child(&el)?;
    }
    log::debug!("floating pieces: spawned {}", cfg.floating_piece_count);
    Ok(())
}
