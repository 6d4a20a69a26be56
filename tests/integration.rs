// Integration tests (native) for the `lobal-chess` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use lobal_chess::counters::CounterAnimation;
use lobal_chess::faq::Accordion;
use lobal_chess::forms::{TrialValidation, success_html, valid_email, valid_name, valid_phone};
use lobal_chess::nav::{MobileMenu, SectionBounds, active_section};
use lobal_chess::trail::{Trail, TrailParticle};
use lobal_chess::LandingConfig;

#[test]
fn documented_validation_examples() {
    assert!(!valid_name("a"));
    assert!(valid_name("ab"));
    assert!(!valid_phone("12345"));
    assert!(valid_phone("+1 234 5678"));
    assert!(!valid_email("bad"));
    assert!(valid_email("a@b.co"));
}

#[test]
fn valid_booking_produces_success_block_with_phone() {
    let phone = "+1 234 5678";
    let result = TrialValidation::check("Magnus", phone, "magnus@chess.no");
    assert!(result.is_valid());
    let cfg = LandingConfig::default();
    let html = success_html(&cfg.academy_name, phone);
    assert!(html.contains("form-success"));
    assert!(html.contains(phone));
}

#[test]
fn trail_with_default_config_is_bounded() {
    let cfg = LandingConfig::default();
    let mut trail = Trail::new(cfg.trail_capacity, cfg.trail_life_step);
    let mut rng = fastrand::Rng::with_seed(5);
    for i in 0..100 {
        trail.push(TrailParticle::spawn(i as f64, 0.0, &mut rng));
        assert!(trail.len() <= 20);
        if i % 3 == 0 {
            trail.tick();
        }
    }
}

#[test]
fn accordion_sequence_keeps_single_open_item() {
    let mut acc = Accordion::default();
    for idx in [0, 0, 3, 1, 1, 2, 4, 4, 4] {
        acc.click(idx);
    }
    assert_eq!(acc.open_item(), Some(4));
}

#[test]
fn menu_parity_then_link_click() {
    let mut menu = MobileMenu::default();
    for _ in 0..3 {
        menu.toggle();
    }
    assert!(menu.is_open());
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn exactly_one_link_inside_sections_none_in_gaps() {
    let sections = vec![
        SectionBounds { id: "hero".into(), top: 0.0, height: 700.0 },
        SectionBounds { id: "programs".into(), top: 700.0, height: 500.0 },
        SectionBounds { id: "contact".into(), top: 1400.0, height: 300.0 },
    ];
    let offset = LandingConfig::default().active_link_offset;
    assert_eq!(active_section(&sections, 650.0, offset), Some("programs"));
    assert_eq!(active_section(&sections, 1150.0, offset), None);
    assert_eq!(active_section(&sections, 1350.0, offset), Some("contact"));
}

#[test]
fn counter_with_default_timing_ends_on_target() {
    let cfg = LandingConfig::default();
    let mut anim = CounterAnimation::new(350, cfg.counter_duration_ms, cfg.counter_frame_ms);
    let mut last = 0;
    while !anim.is_finished() {
        let v = anim.advance();
        assert!(v >= last && v <= 350);
        last = v;
    }
    assert_eq!(last, 350);
}
