//! Thin helpers over web-sys shared by the feature modules: lookups, listener
//! registration and frame scheduling. Listeners are leaked with `forget()`;
//! every handler on the page lives as long as the page does.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Window,
};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Collect a NodeList into elements, skipping non-element nodes.
pub(crate) fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(doc.query_selector_all(selector)?))
}

pub(crate) fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub(crate) fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    el.style().set_property(prop, value).ok();
}

/// Register `f` for `event` on `target` for the lifetime of the page.
pub(crate) fn listen<E, F>(target: &EventTarget, event: &str, f: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once on the next repaint.
pub(crate) fn next_frame<F>(f: F) -> Result<(), JsValue>
where
    F: FnOnce(f64) + 'static,
{
    let cb = Closure::once_into_js(f);
    window()?.request_animation_frame(cb.unchecked_ref())?;
    Ok(())
}

/// Watch `targets` with an IntersectionObserver. The callback receives the
/// batch of entries and the observer itself (for unobserving).
pub(crate) fn observe_intersections<F>(
    targets: &[Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut f: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let entries = entries
            .iter()
            .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
            .collect();
        f(entries, &observer);
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        opts.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)?;
    callback.forget();
    for t in targets {
        observer.observe(t);
    }
    Ok(observer)
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Endless self-rescheduling frame loop.
pub(crate) fn frame_loop<F>(mut tick: F) -> Result<(), JsValue>
where
    F: FnMut(f64) + 'static,
{
    let win = window()?;
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let loop_win = win.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        tick(ts);
        if let Some(cb) = f.borrow().as_ref() {
            let _ = loop_win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
