//! FAQ accordion with at most one open item.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use crate::dom;

/// Index of the open item, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, idx: usize) -> bool {
        self.open == Some(idx)
    }

    /// Close everything, then open `idx` unless it was the one already open.
    pub fn click(&mut self, idx: usize) {
        let was_open = self.is_open(idx);
        self.open = None;
        if !was_open {
            self.open = Some(idx);
        }
    }
}

struct FaqItem {
    item: Element,
    question: Element,
}

fn render(items: &[FaqItem], state: Accordion) {
    for (i, it) in items.iter().enumerate() {
        let open = state.is_open(i);
        it.item.class_list().toggle_with_force("active", open).ok();
        it.question
            .set_attribute("aria-expanded", if open { "true" } else { "false" })
            .ok();
    }
}

pub fn attach(doc: &Document) -> Result<(), JsValue> {
    let mut items = Vec::new();
    for item in dom::query_all(doc, ".faq-item")? {
        match item.query_selector(".faq-question")? {
            Some(question) => items.push(FaqItem { item, question }),
            None => log::warn!("faq: item without .faq-question ignored"),
        }
    }
    // Respect markup that ships with an item already expanded.
    let initial = items.iter().position(|it| it.item.class_list().contains("active"));
    let items = Rc::new(items);
    let state = Rc::new(RefCell::new(Accordion { open: initial }));

    for idx in 0..items.len() {
        let (items_cb, state) = (items.clone(), state.clone());
        dom::listen(&items[idx].question, "click", move |_: Event| {
            let mut s = state.borrow_mut();
            s.click(idx);
            render(&items_cb, *s);
        })?;
    }
    log::debug!("faq: {} items", items.len());
    Ok(())
}
