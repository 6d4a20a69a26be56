//! Smooth scrolling for same-page `#fragment` links.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::dom;

/// Selector for the element an in-page link points at. A bare `#` points at
/// nothing.
pub fn fragment_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => Some(href),
        _ => None,
    }
}

fn resolve(doc: &Document, anchor: &Element) -> Option<Element> {
    let href = anchor.get_attribute("href")?;
    let selector = fragment_selector(&href)?;
    // Fragments that are not valid selectors simply fall back to default navigation.
    doc.query_selector(selector).ok().flatten()
}

pub fn attach(doc: &Document) -> Result<(), JsValue> {
    let anchors = dom::query_all(doc, r##"a[href^="#"]"##)?;
    let count = anchors.len();
    for anchor in anchors {
        let (doc, a) = (doc.clone(), anchor.clone());
        dom::listen(&anchor, "click", move |evt: MouseEvent| {
            let Some(target) = resolve(&doc, &a) else {
                return;
            };
            evt.prevent_default();
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        })?;
    }
    log::debug!("anchors: {count} links");
    Ok(())
}
