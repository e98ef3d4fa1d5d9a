//! Reveal-on-scroll animation for catalog cards.

use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{self, Elements};

const THRESHOLD: f64 = 0.1;

/// Observe every card; the first time one crosses the visibility threshold
/// it gets the fade-in class and is dropped from the observer.
pub fn observe_cards(els: &Elements) {
    if els.cards.is_empty() {
        return;
    }

    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::add_class(&target, "fade-in-up");
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options).unwrap();
    cb.forget();

    for card in &els.cards {
        observer.observe(card);
    }
}
