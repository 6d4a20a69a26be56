//! Tunable constants for every landing-page effect.
//!
//! Defaults reproduce the production page. With the `serde` feature the struct
//! can be deserialised from a partial JSON object; missing keys keep their
//! default values.

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct LandingConfig {
    // --- Ambient pieces ---
    pub floating_piece_count: usize,

    // --- Cursor trail ---
    pub trail_capacity: usize,
    pub trail_life_step: f64, // life lost per frame

    // --- Navbar / scroll ---
    pub header_scroll_threshold: f64, // px before the header gets `scrolled`
    pub active_link_offset: f64,      // added to scrollY before section hit-testing

    // --- Reveal ---
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,

    // --- Counters ---
    pub counter_threshold: f64,
    pub counter_duration_ms: f64,
    pub counter_frame_ms: f64,

    // --- Tilt ---
    pub tilt_max_deg: f64,
    pub tilt_lift_px: f64,
    pub tilt_perspective_px: f64,
    pub tilt_reset_transition: String,

    // --- Forms ---
    pub academy_name: String,
    pub newsletter_confirmation: String,
    pub newsletter_placeholder: String,
    pub newsletter_revert_ms: u32,

    // --- Click glyphs ---
    pub click_glyph_lifetime_ms: u32,
    pub click_glyph_rise_px: f64,

    // --- Hero ---
    pub parallax_factor: f64,
    pub typewriter_delay_ms: u32,
    pub typewriter_interval_ms: u32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            floating_piece_count: 18,
            trail_capacity: 20,
            trail_life_step: 0.03,
            header_scroll_threshold: 50.0,
            active_link_offset: 100.0,
            reveal_threshold: 0.15,
            reveal_root_margin: "0px 0px -40px 0px".to_string(),
            counter_threshold: 0.5,
            counter_duration_ms: 2000.0,
            counter_frame_ms: 16.0,
            tilt_max_deg: 8.0,
            tilt_lift_px: 8.0,
            tilt_perspective_px: 1000.0,
            tilt_reset_transition: "transform 0.5s ease".to_string(),
            academy_name: "Lobal Chess".to_string(),
            newsletter_confirmation: "✓ Subscribed!".to_string(),
            newsletter_placeholder: "Your email".to_string(),
            newsletter_revert_ms: 3000,
            click_glyph_lifetime_ms: 1000,
            click_glyph_rise_px: 80.0,
            parallax_factor: 0.3,
            typewriter_delay_ms: 500,
            typewriter_interval_ms: 40,
        }
    }
}

impl LandingConfig {
    /// Parse a JSON object of overrides on top of the defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_page() {
        let cfg = LandingConfig::default();
        assert_eq!(cfg.floating_piece_count, 18);
        assert_eq!(cfg.trail_capacity, 20);
        assert!((cfg.trail_life_step - 0.03).abs() < 1e-12);
        assert_eq!(cfg.reveal_root_margin, "0px 0px -40px 0px");
        assert_eq!(cfg.newsletter_revert_ms, 3000);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = LandingConfig::from_json(r#"{"parallax_factor": 0.5, "trail_capacity": 5}"#).unwrap();
        assert_eq!(cfg.trail_capacity, 5);
        assert!((cfg.parallax_factor - 0.5).abs() < 1e-12);
        assert_eq!(cfg.floating_piece_count, 18);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn malformed_json_is_rejected() {
        assert!(LandingConfig::from_json("{not json").is_err());
    }
}
