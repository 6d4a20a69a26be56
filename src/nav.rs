//! Navbar behaviour: the `scrolled` header state, active-link highlighting
//! while scrolling through sections, and the mobile menu toggle.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::config::LandingConfig;
use crate::dom;

pub fn header_is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Vertical extent of a page section, as measured from `offsetTop`/`offsetHeight`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section whose range holds `scroll_y + offset`. When ranges overlap the last
/// one in document order wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    let probe = scroll_y + offset;
    sections
        .iter()
        .filter(|s| s.contains(probe))
        .last()
        .map(|s| s.id.as_str())
}

pub fn link_targets_section(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(|h| h.strip_prefix('#')) == Some(section_id)
}

/// Open/closed state of the collapsible mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A link inside the menu was followed: always closes.
    pub fn close(&mut self) {
        self.open = false;
    }
}

fn measure_sections(sections: &[HtmlElement]) -> Vec<SectionBounds> {
    sections
        .iter()
        .map(|s| SectionBounds {
            id: s.id(),
            top: s.offset_top() as f64,
            height: s.offset_height() as f64,
        })
        .collect()
}

fn attach_header(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    let Some(navbar) = doc.get_element_by_id("navbar") else {
        log::warn!("navbar: #navbar missing, skipping header state");
        return Ok(());
    };
    let threshold = cfg.header_scroll_threshold;
    let update = move || {
        navbar
            .class_list()
            .toggle_with_force("scrolled", header_is_scrolled(dom::scroll_y(), threshold))
            .ok();
    };
    update();
    let win = dom::window()?;
    dom::listen(&win, "scroll", move |_: Event| update())
}

fn attach_active_links(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    let sections: Vec<HtmlElement> = dom::query_all(doc, "section[id]")?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    let links = dom::query_all(doc, ".nav-link")?;
    let offset = cfg.active_link_offset;
    let win = dom::window()?;
    dom::listen(&win, "scroll", move |_: Event| {
        // Layout can shift after load (fonts, images), so measure on every scroll.
        let bounds = measure_sections(&sections);
        if let Some(id) = active_section(&bounds, dom::scroll_y(), offset) {
            for link in &links {
                let on = link_targets_section(link.get_attribute("href").as_deref(), id);
                link.class_list().toggle_with_force("active", on).ok();
            }
        }
    })
}

fn render_menu(state: MobileMenu, toggle: &Element, menu: &Element) {
    toggle.class_list().toggle_with_force("active", state.is_open()).ok();
    menu.class_list().toggle_with_force("open", state.is_open()).ok();
}

fn attach_mobile_menu(doc: &Document) -> Result<(), JsValue> {
    let (Some(toggle), Some(menu)) = (
        doc.get_element_by_id("mobileToggle"),
        doc.get_element_by_id("navLinks"),
    ) else {
        log::warn!("mobile menu: #mobileToggle or #navLinks missing, skipping");
        return Ok(());
    };
    let state = Rc::new(Cell::new(MobileMenu::default()));
    {
        let (state, t, m) = (state.clone(), toggle.clone(), menu.clone());
        dom::listen(&toggle, "click", move |_: Event| {
            let mut s = state.get();
            s.toggle();
            state.set(s);
            render_menu(s, &t, &m);
        })?;
    }
    for link in dom::elements(menu.query_selector_all(".nav-link")?) {
        let (state, t, m) = (state.clone(), toggle.clone(), menu.clone());
        dom::listen(&link, "click", move |_: Event| {
            let mut s = state.get();
            s.close();
            state.set(s);
            render_menu(s, &t, &m);
        })?;
    }
    Ok(())
}

pub fn attach(doc: &Document, cfg: &LandingConfig) -> Result<(), JsValue> {
    attach_header(doc, cfg)?;
    attach_active_links(doc, cfg)?;
    attach_mobile_menu(doc)?;
    log::debug!("navbar: attached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sec(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds { id: id.to_string(), top, height }
    }

    #[test]
    fn header_threshold_is_exclusive() {
        assert!(!header_is_scrolled(0.0, 50.0));
        assert!(!header_is_scrolled(50.0, 50.0));
        assert!(header_is_scrolled(50.5, 50.0));
    }

    #[test]
    fn active_section_uses_offset_and_half_open_ranges() {
        let sections = vec![sec("hero", 0.0, 600.0), sec("programs", 600.0, 400.0)];
        assert_eq!(active_section(&sections, 0.0, 100.0), Some("hero"));
        assert_eq!(active_section(&sections, 499.0, 100.0), Some("hero"));
        assert_eq!(active_section(&sections, 500.0, 100.0), Some("programs"));
        assert_eq!(active_section(&sections, 900.0, 100.0), None);
    }

    #[test]
    fn gaps_between_sections_match_nothing() {
        let sections = vec![sec("a", 0.0, 100.0), sec("b", 300.0, 100.0)];
        assert_eq!(active_section(&sections, 100.0, 100.0), None);
        assert_eq!(active_section(&sections, 50.0, 0.0), Some("a"));
    }

    #[test]
    fn overlapping_sections_last_wins() {
        let sections = vec![sec("outer", 0.0, 1000.0), sec("inner", 200.0, 100.0)];
        assert_eq!(active_section(&sections, 150.0, 100.0), Some("inner"));
        assert_eq!(active_section(&sections, 400.0, 100.0), Some("outer"));
    }

    #[test]
    fn link_matching_requires_exact_fragment() {
        assert!(link_targets_section(Some("#faq"), "faq"));
        assert!(!link_targets_section(Some("#faqs"), "faq"));
        assert!(!link_targets_section(Some("faq"), "faq"));
        assert!(!link_targets_section(None, "faq"));
    }

    #[test]
    fn menu_toggles_by_parity_and_link_always_closes() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        for n in 1..=7 {
            menu.toggle();
            assert_eq!(menu.is_open(), n % 2 == 1);
        }
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
