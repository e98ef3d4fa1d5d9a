//! ResaleX storefront WASM front-end.
//!
//! Decorates the server-rendered marketplace pages: tooltips, smooth
//! anchors, form spinners, image previews, reveal-on-scroll, the search
//! box, catalog filtering and sorting, cart/wishlist buttons, the quantity
//! stepper, toasts, and the hosted payment flow. Modularised for
//! extensibility: each widget concern lives in its own module.

pub mod cart;
pub mod catalog;
pub mod dom;
pub mod exports;
pub mod forms;
pub mod notify;
pub mod payment;
pub mod reveal;
pub mod search;
pub mod widgets;


use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated,
/// which (with a deferred module script) is after the document has been
/// parsed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Main initialisation sequence: resolve DOM handles once, then wire every
/// widget. Widgets are independent; pages missing a widget's nodes simply
/// skip it.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind();

    widgets::init_bootstrap(&els);
    widgets::bind_smooth_anchors(&els);

    forms::bind_submit_spinner(&els);
    forms::bind_image_preview(&els);
    forms::bind_modal_validation(&els);

    reveal::observe_cards(&els);

    catalog::format_prices();
    catalog::bind_filters(&els);
    catalog::bind_sort(&els);

    cart::bind_cart_buttons(&els);
    cart::bind_wishlist_buttons(&els);
    cart::bind_quantity_controls(&els);

    search::bind(&els);
    payment::init(&els);

    exports::install(&els);

    Ok(())
}
