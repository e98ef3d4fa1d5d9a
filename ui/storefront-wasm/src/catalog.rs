//! Product card decoration: price pass, category filters, sorting.

use rx_storefront::filter::CategoryFilter;
use rx_storefront::money;
use rx_storefront::sort::{self, SortKey};
use web_sys::Element;

use crate::dom::{self, Elements};

/// Rewrite every `.price` node as `$` + two decimals; leave unparseable
/// text alone.
pub fn format_prices() {
    for el in dom::query_all(".price") {
        let text = el.text_content().unwrap_or_default();
        if let Some(price) = money::parse_price(&text) {
            dom::set_text(&el, &money::format_usd(price));
        }
    }
}

/// Radio-group behavior over the `data-filter` buttons.
pub fn bind_filters(els: &Elements) {
    for btn in &els.filter_btns {
        let filter = CategoryFilter::from_value(&btn.get_attribute("data-filter").unwrap_or_default());
        let all_btns = els.filter_btns.clone();
        let btn2 = btn.clone();
        dom::listen(btn.as_ref(), "click", move |_: web_sys::MouseEvent| {
            for b in &all_btns {
                dom::remove_class(b, "active");
            }
            dom::add_class(&btn2, "active");
            apply_filter(&filter);
        });
    }
}

fn apply_filter(filter: &CategoryFilter) {
    for card in dom::query_all(".product-card") {
        let category = card.get_attribute("data-category");
        if filter.matches(category.as_deref()) {
            dom::set_display(&card, "block");
            dom::add_class(&card, "fade-in-up");
        } else {
            dom::set_display(&card, "none");
        }
    }
}

/// Reorder the grid on `select[name="sort"]` changes.
pub fn bind_sort(els: &Elements) {
    let Some(select) = els.sort_select.clone() else {
        return;
    };
    let grid = els.product_grid.clone();
    let select2 = select.clone();
    dom::listen(select.as_ref(), "change", move |_: web_sys::Event| {
        if let Some(grid) = &grid {
            sort_grid(grid, SortKey::from_value(&select2.value()));
        }
    });
}

/// Sort the column wrappers by card price and re-append them in order.
fn sort_grid(grid: &Element, key: SortKey) {
    let columns = dom::query_all_within(grid, ".col-lg-3, .col-md-6");
    let prices: Vec<f64> = columns.iter().map(|col| column_price(col)).collect();
    for i in sort::sorted_order(key, &prices) {
        grid.append_child(&columns[i]).unwrap();
    }
}

/// Price shown on a card's `.text-primary` node; missing or unparseable
/// text counts as zero.
fn column_price(col: &Element) -> f64 {
    col.query_selector(".text-primary")
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .and_then(|text| money::parse_labeled_price(&text))
        .unwrap_or(0.0)
}
