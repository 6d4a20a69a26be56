//! 3D tilt hover on `[data-tilt]` cards.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::LandingConfig;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub lift: f64,
}

impl Tilt {
    pub const RESTING: Tilt = Tilt { rotate_x: 0.0, rotate_y: 0.0, lift: 0.0 };

    /// Tilt for a pointer at (`x`, `y`) relative to a `width` x `height` card.
    /// Pointer below centre tips the top edge away (negative X rotation); pointer
    /// right of centre turns the card right. Degenerate boxes stay flat.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, max_deg: f64, lift: f64) -> Self {
        let cx = width / 2.0;
        let cy = height / 2.0;
        let rotate_x = if cy > 0.0 { (cy - y) / cy * max_deg } else { 0.0 };
        let rotate_y = if cx > 0.0 { (x - cx) / cx * max_deg } else { 0.0 };
        Tilt { rotate_x, rotate_y, lift }
    }

    pub fn transform(&self, perspective_px: f64) -> String {
        format!(
            "perspective({perspective_px}px) rotateX({}deg) rotateY({}deg) translateY({}px)",
            self.rotate_x,
            self.rotate_y,
            0.0 - self.lift
        )
    }
}

fn attach_card(card: HtmlElement, cfg: &LandingConfig) -> Result<(), JsValue> {
    let (max_deg, lift, perspective) = (cfg.tilt_max_deg, cfg.tilt_lift_px, cfg.tilt_perspective_px);
    {
        let card_ref = card.clone();
        dom::listen(&card, "mousemove", move |evt: MouseEvent| {
            let rect = card_ref.get_bounding_client_rect();
            let tilt = Tilt::from_pointer(
                evt.client_x() as f64 - rect.left(),
                evt.client_y() as f64 - rect.top(),
                rect.width(),
                rect.height(),
                max_deg,
                lift,
            );
            dom::set_style(&card_ref, "transform", &tilt.transform(perspective));
        })?;
    }
    {
        let card_ref = card.clone();
        let reset = cfg.tilt_reset_transition.clone();
        dom::listen(&card, "mouseleave", move |_: MouseEvent| {
            dom::set_style(&card_ref, "transform", &Tilt::RESTING.transform(perspective));
            dom::set_style(&card_ref, "transition", &reset);
        })?;
    }
    {
        let card_ref = card.clone();
        dom::listen(&card, "mouseenter", move |_: MouseEvent| {
            dom::set_style(&card_ref, "transition", "none");
        })?;
    }
    Ok(())
}

pub fn attach(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    let cards: Vec<HtmlElement> = dom::query_all(doc, "[data-tilt]")?
        .into_iter()
        .filter_map(|el| el.dyn_into().ok())
        .collect();
    let count = cards.len();
    for card in cards {
        attach_card(card, cfg)?;
    }
    log::debug!("tilt: {count} cards");
    Ok(())
}
