//! Trial-booking and newsletter forms. Validation is local only; nothing is
//! submitted anywhere.

use std::sync::OnceLock;

use gloo_timers::callback::Timeout;
use regex::Regex;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlInputElement};

use crate::config::LandingConfig;
use crate::dom;

const TRIAL_FIELDS: [&str; 3] = ["name", "phone", "email"];

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9\s\-]{8,15}$").expect("phone pattern"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

/// At least two UTF-16 code units after trimming, the same length the
/// browser reports for the field value.
pub fn valid_name(name: &str) -> bool {
    name.trim().encode_utf16().count() >= 2
}

pub fn valid_phone(phone: &str) -> bool {
    phone_re().is_match(phone.trim())
}

pub fn valid_email(email: &str) -> bool {
    email_re().is_match(email.trim())
}

/// Per-field validity of one trial form submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialValidation {
    pub name: bool,
    pub phone: bool,
    pub email: bool,
}

impl TrialValidation {
    pub fn check(name: &str, phone: &str, email: &str) -> Self {
        Self { name: valid_name(name), phone: valid_phone(phone), email: valid_email(email) }
    }

    pub fn is_valid(&self) -> bool {
        self.name && self.phone && self.email
    }

    fn flags(&self) -> [bool; 3] {
        [self.name, self.phone, self.email]
    }
}

/// Markup that replaces the form card after a successful booking. The phone
/// number is inserted exactly as typed.
pub fn success_html(academy: &str, phone: &str) -> String {
    format!(
        r#"<div class="form-success"><div class="form-success-icon">♔</div><h3>Welcome to {academy}!</h3><p>Thank you for booking your free trial. Our team will reach out to you shortly at <strong>{phone}</strong>.</p></div>"#
    )
}

fn input_by_id(doc: &Document, id: &str) -> Option<HtmlInputElement> {
    doc.get_element_by_id(id).and_then(|el| el.dyn_into().ok())
}

fn attach_trial(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    let Some(form) = doc.get_element_by_id("trialForm") else {
        log::debug!("trial form: #trialForm not on this page");
        return Ok(());
    };
    let inputs: Vec<HtmlInputElement> = TRIAL_FIELDS.iter().filter_map(|id| input_by_id(doc, id)).collect();
    let Ok([name, phone, email]) = <[HtmlInputElement; 3]>::try_from(inputs) else {
        log::warn!("trial form: #name, #phone or #email missing, skipping");
        return Ok(());
    };

    for input in [&name, &phone, &email] {
        let el = input.clone();
        dom::listen(input, "input", move |_: Event| {
            el.class_list().remove_1("error").ok();
        })?;
    }

    let form_ref = form.clone();
    let academy = cfg.academy_name.clone();
    dom::listen(&form, "submit", move |evt: Event| {
        evt.prevent_default();
        let result = TrialValidation::check(&name.value(), &phone.value(), &email.value());
        for (input, ok) in [&name, &phone, &email].into_iter().zip(result.flags()) {
            input.class_list().toggle_with_force("error", !ok).ok();
        }
        if !result.is_valid() {
            log::debug!("trial form: rejected {result:?}");
            return;
        }
        match form_ref.closest(".trial-form-card") {
            Ok(Some(card)) => {
                card.set_inner_html(&success_html(&academy, &phone.value()));
                log::info!("trial form: booking accepted");
            }
            _ => log::warn!("trial form: no enclosing .trial-form-card"),
        }
    })
}

fn attach_newsletter(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    let Some(form) = doc.get_element_by_id("newsletterForm") else {
        log::debug!("newsletter: #newsletterForm not on this page");
        return Ok(());
    };
    let Some(input) = form
        .query_selector("input")?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        log::warn!("newsletter: form has no input, skipping");
        return Ok(());
    };
    let confirmation = cfg.newsletter_confirmation.clone();
    let placeholder = cfg.newsletter_placeholder.clone();
    let revert_ms = cfg.newsletter_revert_ms;
    dom::listen(&form, "submit", move |evt: Event| {
        evt.prevent_default();
        if input.value().trim().is_empty() {
            return;
        }
        input.set_value("");
        input.set_placeholder(&confirmation);
        log::info!("newsletter: subscribed");
        let (input, placeholder) = (input.clone(), placeholder.clone());
        Timeout::new(revert_ms, move || input.set_placeholder(&placeholder)).forget();
    })
}

pub fn attach(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    attach_trial(doc, cfg)?;
    attach_newsletter(doc, cfg)?;
    log::debug!("forms: attached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_needs_two_characters_after_trim() {
        assert!(!valid_name("a"));
        assert!(valid_name("ab"));
        assert!(!valid_name("  a  "));
        assert!(!valid_name(""));
        assert!(valid_name("Žé"));
    }

    #[test]
    fn astral_character_counts_as_two_units() {
        assert!(valid_name("😀"));
        assert!(valid_name(" ♞😀 "));
        assert!(!valid_name(" ♞ "));
    }

    #[test]
    fn phone_pattern() {
        assert!(!valid_phone("12345"));
        assert!(valid_phone("+1 234 5678"));
        assert!(valid_phone("0123-456-789"));
        assert!(valid_phone("  98765432  "));
        assert!(!valid_phone("++12345678"));
        assert!(!valid_phone("1234567890123456"));
        assert!(!valid_phone("12345abc78"));
    }

    #[test]
    fn email_pattern() {
        assert!(!valid_email("bad"));
        assert!(valid_email("a@b.co"));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("a b@c.de"));
        assert!(!valid_email("a@@b.co"));
        assert!(valid_email(" kid@school.edu "));
    }

    #[test]
    fn validation_reports_each_field() {
        let r = TrialValidation::check("a", "+1 234 5678", "bad");
        assert_eq!(r, TrialValidation { name: false, phone: true, email: false });
        assert!(!r.is_valid());
        assert!(TrialValidation::check("ab", "+1 234 5678", "a@b.co").is_valid());
    }

    #[test]
    fn success_block_embeds_phone_verbatim() {
        let html = success_html("Lobal Chess", "+1 <234> 5678");
        assert!(html.contains("Welcome to Lobal Chess!"));
        assert!(html.contains("<strong>+1 <234> 5678</strong>"));
        assert!(html.starts_with(r#"<div class="form-success">"#));
    }
}
