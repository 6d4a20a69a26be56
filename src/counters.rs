//! Animated stat counters. The first time the stats grid is at least half
//! visible every `.stat-number` counts from zero up to its `data-target`.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::LandingConfig;
use crate::dom;

/// Leading integer of an attribute value, `parseInt` style: `"120+"` is 120,
/// anything without leading digits is 0. Digit runs past `i64` saturate.
pub fn parse_target(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }
    match digits.parse::<i64>() {
        Ok(n) => sign * n,
        Err(_) if sign < 0 => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// Per-counter frame state: a fixed increment is added every frame and the
/// floor of the running total is shown until it reaches the target.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    step: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, duration_ms: f64, frame_ms: f64) -> Self {
        let frames = duration_ms / frame_ms;
        Self { target, step: target as f64 / frames, current: 0.0, finished: false }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one frame and return the value to display.
    pub fn advance(&mut self) -> i64 {
        if self.finished {
            return self.target;
        }
        self.current += self.step;
        if self.current >= self.target as f64 {
            self.finished = true;
            return self.target;
        }
        self.current.floor() as i64
    }
}

/// Latches on the first intersecting notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnceTrigger {
    fired: bool,
}

impl OnceTrigger {
    pub fn fire(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }
}

fn run_counter(el: Element, mut anim: CounterAnimation) {
    let value = anim.advance();
    el.set_text_content(Some(&value.to_string()));
    if anim.is_finished() {
        return;
    }
    if let Err(e) = dom::next_frame(move |_| run_counter(el, anim)) {
        log::error!("counters: frame scheduling failed: {e:?}");
    }
}

fn animate_all(counters: &[Element], cfg: &LandingConfig) {
    for el in counters {
        let target = el.get_attribute("data-target").map(|v| parse_target(&v)).unwrap_or(0);
        let anim = CounterAnimation::new(target, cfg.counter_duration_ms, cfg.counter_frame_ms);
        run_counter(el.clone(), anim);
    }
}

pub fn attach(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    let counters = dom::query_all(doc, ".stat-number")?;
    if counters.is_empty() {
        log::debug!("counters: no .stat-number on this page");
        return Ok(());
    }
    let Some(grid) = counters.first().and_then(|c| c.closest(".stats-grid").ok().flatten()) else {
        log::warn!("counters: .stat-number outside a .stats-grid, skipping");
        return Ok(());
    };
    let trigger = Rc::new(Cell::new(OnceTrigger::default()));
    let cfg = cfg.clone();
    dom::observe_intersections(&[grid], cfg.counter_threshold, None, move |entries, _| {
        for entry in entries {
            let mut t = trigger.get();
            let fire = t.fire(entry.is_intersecting());
            trigger.set(t);
            if fire {
                log::debug!("counters: animating {}", counters.len());
                animate_all(&counters, &cfg);
            }
        }
    })?;
    Ok(())
}
