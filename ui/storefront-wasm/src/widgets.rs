//! Bootstrap widget activation and smooth anchor scrolling.

use gloo_console::debug;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{self, Elements};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    fn new(el: &web_sys::Element) -> Tooltip;

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Popover;

    #[wasm_bindgen(constructor, js_namespace = bootstrap)]
    fn new(el: &web_sys::Element) -> Popover;
}

/// True when the named global exists on `window`.
pub fn has_global(name: &str) -> bool {
    js_sys::Reflect::get(dom::window().as_ref(), &JsValue::from_str(name))
        .map(|v| !v.is_undefined())
        .unwrap_or(false)
}

/// Activate tooltips and popovers on their data-attribute triggers.
pub fn init_bootstrap(els: &Elements) {
    if !has_global("bootstrap") {
        debug!("bootstrap global missing; tooltips left inert");
        return;
    }
    for el in &els.tooltip_triggers {
        let _ = Tooltip::new(el);
    }
    for el in &els.popover_triggers {
        let _ = Popover::new(el);
    }
}

/// Intercept intra-page anchor clicks and scroll the target into view.
pub fn bind_smooth_anchors(els: &Elements) {
    for anchor in &els.anchors {
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(anchor.as_ref(), "click", move |e: web_sys::MouseEvent| {
            e.prevent_default();
            if let Some(target) = dom::query(&href) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}
