//! DOM lookups and small mutation helpers.
//!
//! All page handles are resolved once at startup into [`Elements`]. Every
//! storefront page renders only a subset of the widgets, so singletons are
//! optional and group queries may come back empty.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

pub fn body() -> web_sys::HtmlElement {
    doc().body().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_typed<T: JsCast>(selector: &str) -> Option<T> {
    query(selector).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn query_all_typed<T: JsCast>(selector: &str) -> Vec<T> {
    query_all(selector)
        .into_iter()
        .filter_map(|e| e.dyn_into::<T>().ok())
        .collect()
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let nl = parent.query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// Nearest ancestor (or self) matching the selector.
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

/// Set the inline `display` style; no-op for non-HTML elements.
pub fn set_display(el: &Element, value: &str) {
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("display", value);
    }
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

/// Attach a persistent event listener. The closure is leaked on purpose:
/// storefront listeners live for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

// ── Elements struct ──

/// All DOM handles used by the storefront, resolved once after the document
/// has been parsed. Clone-friendly (all inner types are reference-counted
/// via the JS GC).
#[derive(Clone)]
pub struct Elements {
    // Framework widgets
    pub tooltip_triggers: Vec<Element>,
    pub popover_triggers: Vec<Element>,
    pub anchors: Vec<Element>,

    // Forms
    pub forms: Vec<HtmlFormElement>,
    pub modal_forms: Vec<HtmlFormElement>,
    pub image_inputs: Vec<HtmlInputElement>,

    // Catalog
    pub cards: Vec<Element>,
    pub filter_btns: Vec<Element>,
    pub sort_select: Option<HtmlSelectElement>,
    pub product_grid: Option<Element>,

    // Search
    pub search_input: Option<HtmlInputElement>,
    pub search_suggestions: Option<Element>,

    // Cart
    pub add_to_cart_btns: Vec<Element>,
    pub wishlist_btns: Vec<Element>,
    pub quantity_controls: Vec<Element>,

    // Payment
    pub payment_form: Option<HtmlFormElement>,
}

impl Elements {
    /// Resolve all handles. Call once on startup.
    pub fn bind() -> Elements {
        Elements {
            tooltip_triggers: query_all(r#"[data-bs-toggle="tooltip"]"#),
            popover_triggers: query_all(r#"[data-bs-toggle="popover"]"#),
            anchors: query_all(r##"a[href^="#"]"##),

            forms: query_all_typed("form"),
            modal_forms: query_all_typed(".modal form"),
            image_inputs: query_all_typed(r#"input[type="file"][accept*="image"]"#),

            cards: query_all(".card, .product-card"),
            filter_btns: query_all("[data-filter]"),
            sort_select: query_typed(r#"select[name="sort"]"#),
            product_grid: query(".row.g-4"),

            search_input: query_typed(r#"input[name="search"]"#),
            search_suggestions: query(".search-suggestions"),

            add_to_cart_btns: query_all(r#"[data-action="add-to-cart"]"#),
            wishlist_btns: query_all(r#"[data-action="wishlist"]"#),
            quantity_controls: query_all(".quantity-control"),

            payment_form: by_id_typed("payment-form"),
        }
    }
}
