//! Global `window.ResaleX` namespace.
//!
//! Server-rendered templates call these helpers from inline scripts, so
//! they are exposed as plain JS functions next to the module exports.

use rx_storefront::notify::NotificationKind;
use wasm_bindgen::prelude::*;

use crate::dom::{self, Elements};
use crate::notify;
use crate::search;

/// Attach `{showNotification, generateSuggestions, displaySuggestions}`.
pub fn install(els: &Elements) {
    let namespace = js_sys::Object::new();

    let show = Closure::wrap(Box::new(|message: String, kind: JsValue| {
        let kind = kind
            .as_string()
            .map(|k| NotificationKind::from_value(&k))
            .unwrap_or_default();
        notify::show(&message, kind);
    }) as Box<dyn FnMut(String, JsValue)>);
    set_member(&namespace, "showNotification", show.as_ref());
    show.forget();

    let generate = Closure::wrap(Box::new(|query: String| -> js_sys::Array {
        search::generate(&query)
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect()
    }) as Box<dyn FnMut(String) -> js_sys::Array>);
    set_member(&namespace, "generateSuggestions", generate.as_ref());
    generate.forget();

    let els2 = els.clone();
    let display = Closure::wrap(Box::new(move |items: JsValue| {
        if !js_sys::Array::is_array(&items) {
            return;
        }
        let names: Vec<String> = js_sys::Array::from(&items)
            .iter()
            .filter_map(|v| v.as_string())
            .collect();
        search::render_suggestions(&els2, &names);
    }) as Box<dyn FnMut(JsValue)>);
    set_member(&namespace, "displaySuggestions", display.as_ref());
    display.forget();

    let _ = js_sys::Reflect::set(
        dom::window().as_ref(),
        &JsValue::from_str("ResaleX"),
        &namespace,
    );
}

fn set_member(namespace: &js_sys::Object, name: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(namespace, &JsValue::from_str(name), value);
}
