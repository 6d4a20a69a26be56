//! Hero section effects: board parallax and the typewriter badge.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::config::LandingConfig;
use crate::dom;

pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

/// Reveals a string one character per tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), index: 0 }
    }

    pub fn total(&self) -> usize {
        self.chars.len()
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Show one more character; returns the visible prefix, or None once the
    /// whole string is out.
    pub fn tick(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.index += 1;
        Some(self.chars[..self.index].iter().collect())
    }
}

fn attach_parallax(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    let Some(board) = doc
        .query_selector(".hero-chessboard")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("parallax: .hero-chessboard not on this page");
        return Ok(());
    };
    let factor = cfg.parallax_factor;
    let win = dom::window()?;
    dom::listen(&win, "scroll", move |_: Event| {
        let dy = parallax_offset(dom::scroll_y(), factor);
        dom::set_style(&board, "transform", &format!("translateY({dy}px)"));
    })
}

fn type_next(badge: Element, mut writer: Typewriter, interval_ms: u32) {
    let Some(text) = writer.tick() else {
        return;
    };
    badge.set_text_content(Some(&text));
    if !writer.is_done() {
        Timeout::new(interval_ms, move || type_next(badge, writer, interval_ms)).forget();
    }
}

fn attach_typewriter(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    let Some(badge) = doc.query_selector(".hero-badge")? else {
        log::debug!("typewriter: .hero-badge not on this page");
        return Ok(());
    };
    let writer = Typewriter::new(&badge.text_content().unwrap_or_default());
    badge.set_text_content(Some(""));
    let interval = cfg.typewriter_interval_ms;
    Timeout::new(cfg.typewriter_delay_ms, move || type_next(badge, writer, interval)).forget();
    Ok(())
}

pub fn attach(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    attach_parallax(doc, cfg)?;
    attach_typewriter(doc, cfg)?;
    log::debug!("hero: attached");
    Ok(())
}
