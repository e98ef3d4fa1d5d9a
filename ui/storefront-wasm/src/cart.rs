//! Cart and wishlist buttons, quantity stepper with live row totals.

use gloo_timers::callback::Timeout;
use rx_storefront::money;
use rx_storefront::quantity;
use rx_storefront::wishlist::Favorite;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::dom::{self, Elements};
use crate::notify;

const PULSE_MS: u32 = 1_000;
const CART_ADDED_MSG: &str = "Товар добавлен в корзину!";
const WISHLIST_ADDED_MSG: &str = "Добавлено в избранное!";
const WISHLIST_REMOVED_MSG: &str = "Удалено из избранного";

/// Pulse the button and toast on add-to-cart clicks.
pub fn bind_cart_buttons(els: &Elements) {
    for btn in &els.add_to_cart_btns {
        let btn2 = btn.clone();
        dom::listen(btn.as_ref(), "click", move |e: web_sys::MouseEvent| {
            e.prevent_default();
            dom::add_class(&btn2, "pulse");
            let btn3 = btn2.clone();
            Timeout::new(PULSE_MS, move || dom::remove_class(&btn3, "pulse")).forget();
            notify::success(CART_ADDED_MSG);
        });
    }
}

/// Toggle the heart icon between outline and solid, with a toast either way.
/// Buttons without a child icon are ignored.
pub fn bind_wishlist_buttons(els: &Elements) {
    for btn in &els.wishlist_btns {
        let btn2 = btn.clone();
        dom::listen(btn.as_ref(), "click", move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let Some(icon) = btn2.query_selector("i").ok().flatten() else {
                return;
            };
            let state = Favorite::from_icon(dom::has_class(&icon, "far"));
            let next = state.toggled();

            dom::remove_class(&icon, state.icon_class());
            dom::add_class(&icon, next.icon_class());
            if next.marks_button() {
                dom::add_class(&btn2, "text-danger");
                notify::success(WISHLIST_ADDED_MSG);
            } else {
                dom::remove_class(&btn2, "text-danger");
                notify::info(WISHLIST_REMOVED_MSG);
            }
        });
    }
}

/// Wire the minus/plus buttons of every quantity control.
pub fn bind_quantity_controls(els: &Elements) {
    for control in &els.quantity_controls {
        let Some(input) = control
            .query_selector(r#"input[type="number"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };

        if let Some(minus) = control.query_selector(".quantity-minus").ok().flatten() {
            let input2 = input.clone();
            dom::listen(minus.as_ref(), "click", move |_: web_sys::MouseEvent| {
                let current = quantity::parse_quantity(&input2.value());
                if current > 1 {
                    input2.set_value(&quantity::decrement(current).to_string());
                    update_totals();
                }
            });
        }

        if let Some(plus) = control.query_selector(".quantity-plus").ok().flatten() {
            let input2 = input.clone();
            dom::listen(plus.as_ref(), "click", move |_: web_sys::MouseEvent| {
                let current = quantity::parse_quantity(&input2.value());
                input2.set_value(&quantity::increment(current).to_string());
                update_totals();
            });
        }
    }
}

/// Recompute `quantity × unit price` for every row. Quantity inputs pair
/// with `.product-price` nodes by index; rows without a `.product-total`
/// cell are skipped.
pub fn update_totals() {
    let inputs = dom::query_all(r#"input[name="quantity"]"#);
    let prices = dom::query_all(".product-price");

    for (index, el) in inputs.iter().enumerate() {
        let Some(input) = el.dyn_ref::<HtmlInputElement>() else {
            continue;
        };
        let qty = quantity::parse_quantity(&input.value());
        let unit = prices
            .get(index)
            .and_then(|p| p.text_content())
            .and_then(|text| money::parse_labeled_price(&text))
            .unwrap_or(0.0);

        let cell = dom::closest(el, ".product-item")
            .and_then(|item| item.query_selector(".product-total").ok().flatten());
        if let Some(cell) = cell {
            dom::set_text(&cell, &money::format_usd(money::line_total(qty, unit)));
        }
    }
}
