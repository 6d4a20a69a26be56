//! Cursor trail: small rotated squares in board colours that fade out behind
//! the pointer. The particle buffer is a bounded FIFO; the canvas is redrawn
//! on every animation frame for the lifetime of the page.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent};

use crate::config::LandingConfig;
use crate::dom;

/// Light and dark square colours of the hero board.
pub const TRAIL_COLORS: [&str; 2] = ["#c9a84c", "#b58863"];

const INITIAL_OPACITY: f64 = 0.35;
const OPACITY_PER_LIFE: f64 = 0.3;
const SHRINK_PER_FRAME: f64 = 0.98;

#[derive(Clone, Debug, PartialEq)]
pub struct TrailParticle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub color: &'static str,
    pub rotation_deg: f64,
    pub life: f64, // 1.0 at spawn, removed at <= 0
}

impl TrailParticle {
    pub fn spawn(x: f64, y: f64, rng: &mut fastrand::Rng) -> Self {
        Self {
            x,
            y,
            size: 8.0 + rng.f64() * 6.0,
            opacity: INITIAL_OPACITY,
            color: if rng.bool() { TRAIL_COLORS[0] } else { TRAIL_COLORS[1] },
            rotation_deg: rng.f64() * 45.0,
            life: 1.0,
        }
    }

    /// Age by one frame. Returns false once the particle has expired.
    fn age(&mut self, life_step: f64) -> bool {
        self.life -= life_step;
        self.opacity = self.life * OPACITY_PER_LIFE;
        self.size *= SHRINK_PER_FRAME;
        self.life > 0.0
    }
}

#[derive(Debug)]
pub struct Trail {
    particles: VecDeque<TrailParticle>,
    capacity: usize,
    life_step: f64,
}

impl Trail {
    pub fn new(capacity: usize, life_step: f64) -> Self {
        Self { particles: VecDeque::with_capacity(capacity + 1), capacity, life_step }
    }

    /// Append a particle, evicting the oldest when over capacity.
    pub fn push(&mut self, particle: TrailParticle) {
        self.particles.push_back(particle);
        while self.particles.len() > self.capacity {
            self.particles.pop_front();
        }
    }

    /// Advance every particle by one frame and drop the expired ones.
    pub fn tick(&mut self) {
        let step = self.life_step;
        self.particles.retain_mut(|p| p.age(step));
    }

    pub fn particles(&self) -> impl Iterator<Item = &TrailParticle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d) {
        for p in self.particles() {
            ctx.save();
            ctx.set_global_alpha(p.opacity);
            ctx.translate(p.x, p.y).ok();
            ctx.rotate(p.rotation_deg.to_radians()).ok();
            ctx.set_fill_style_str(p.color);
            ctx.fill_rect(-p.size / 2.0, -p.size / 2.0, p.size, p.size);
            ctx.restore();
        }
    }
}

fn fit_to_viewport(canvas: &HtmlCanvasElement) {
    if let Some(win) = web_sys::window() {
        let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
    }
}

pub fn attach(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    let Some(el) = doc.get_element_by_id("cursor-trail") else {
        log::warn!("cursor trail: #cursor-trail missing, skipping");
        return Ok(());
    };
    let canvas: HtmlCanvasElement = el.dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    fit_to_viewport(&canvas);
    {
        let canvas = canvas.clone();
        let win = dom::window()?;
        dom::listen(&win, "resize", move |_: web_sys::Event| fit_to_viewport(&canvas))?;
    }

    let trail = Rc::new(RefCell::new(Trail::new(cfg.trail_capacity, cfg.trail_life_step)));
    {
        let trail = trail.clone();
        let mut rng = fastrand::Rng::new();
        dom::listen(doc, "mousemove", move |evt: MouseEvent| {
            let p = TrailParticle::spawn(evt.client_x() as f64, evt.client_y() as f64, &mut rng);
            trail.borrow_mut().push(p);
        })?;
    }

    dom::frame_loop(move |_ts| {
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        let mut trail = trail.borrow_mut();
        trail.tick();
        trail.draw(&ctx);
    })?;
    log::debug!("cursor trail: attached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle() -> TrailParticle {
        TrailParticle::spawn(10.0, 20.0, &mut fastrand::Rng::with_seed(1))
    }

    #[test]
    fn spawn_uses_fixed_ranges() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..200 {
            let p = TrailParticle::spawn(0.0, 0.0, &mut rng);
            assert!((8.0..14.0).contains(&p.size));
            assert!((0.0..45.0).contains(&p.rotation_deg));
            assert!(TRAIL_COLORS.contains(&p.color));
            assert_eq!(p.opacity, INITIAL_OPACITY);
            assert_eq!(p.life, 1.0);
        }
    }

    #[test]
    fn capacity_evicts_oldest_first() {
        let mut trail = Trail::new(20, 0.03);
        for i in 0..21 {
            let mut p = particle();
            p.x = i as f64;
            trail.push(p);
        }
        assert_eq!(trail.len(), 20);
        assert_eq!(trail.particles().next().map(|p| p.x), Some(1.0));
        assert_eq!(trail.particles().last().map(|p| p.x), Some(20.0));
    }

    #[test]
    fn life_decreases_per_frame_until_removed() {
        let mut trail = Trail::new(20, 0.03);
        trail.push(particle());
        let mut last_life = 1.0;
        for _ in 0..33 {
            trail.tick();
            let p = trail.particles().next().expect("still alive");
            assert!((last_life - p.life - 0.03).abs() < 1e-9);
            assert!((p.opacity - p.life * 0.3).abs() < 1e-12);
            last_life = p.life;
        }
        // 1.0 - 34 * 0.03 < 0
        trail.tick();
        assert!(trail.is_empty());
    }

    #[test]
    fn particles_shrink_two_percent_per_frame() {
        let mut trail = Trail::new(20, 0.03);
        let p = particle();
        let start = p.size;
        trail.push(p);
        trail.tick();
        trail.tick();
        let size = trail.particles().next().map(|p| p.size).unwrap();
        assert!((size - start * 0.98 * 0.98).abs() < 1e-9);
    }

    #[test]
    fn every_particle_ages_in_the_same_frame() {
        let mut trail = Trail::new(20, 0.5);
        trail.push(particle());
        trail.tick(); // first at 0.5
        trail.push(particle()); // second at 1.0
        trail.tick(); // first expires, second at 0.5
        assert_eq!(trail.len(), 1);
        assert!((trail.particles().next().unwrap().life - 0.5).abs() < 1e-12);
    }
}
