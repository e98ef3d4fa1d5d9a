//! Search box: debounced loading state and the mock suggestion panel.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use rx_storefront::suggest::{self, SuggestionCatalog};
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use crate::dom::{self, Elements};

const DEBOUNCE_MS: u32 = 500;
const LOADING_MS: u32 = 1_000;
const SUGGEST_DELAY_MS: u32 = 300;

thread_local! {
    // Pending debounce handle; replacing it drops, and thereby cancels,
    // the previous timer.
    static DEBOUNCE: RefCell<Option<Timeout>> = RefCell::new(None);
    static CATALOG: RefCell<SuggestionCatalog> = RefCell::new(SuggestionCatalog::default());
}

/// Swap the suggestion source (tests inject fixtures here).
pub fn set_catalog(catalog: SuggestionCatalog) {
    CATALOG.with(|c| *c.borrow_mut() = catalog);
}

/// Names matching the query, in catalog order.
pub fn generate(query: &str) -> Vec<String> {
    CATALOG.with(|c| c.borrow().filter(query))
}

pub fn bind(els: &Elements) {
    let Some(input) = els.search_input.clone() else {
        return;
    };

    // Debounced loading state on the enclosing form.
    {
        let input2 = input.clone();
        dom::listen(input.as_ref(), "input", move |_: web_sys::Event| {
            let form = dom::closest(input2.as_ref(), "form");
            DEBOUNCE.with(|slot| {
                *slot.borrow_mut() = Some(Timeout::new(DEBOUNCE_MS, move || {
                    if let Some(form) = form {
                        dom::add_class(&form, "loading");
                        let form2 = form.clone();
                        Timeout::new(LOADING_MS, move || dom::remove_class(&form2, "loading"))
                            .forget();
                    }
                }));
            });
        });
    }

    // Suggestion panel: render shortly after typing pauses on a long-enough
    // query, hide immediately otherwise.
    if els.search_suggestions.is_some() {
        let input2 = input.clone();
        let els2 = els.clone();
        dom::listen(input.as_ref(), "input", move |_: web_sys::Event| {
            let query = input2.value().trim().to_string();
            if suggest::should_suggest(&query) {
                let els3 = els2.clone();
                Timeout::new(SUGGEST_DELAY_MS, move || {
                    render_suggestions(&els3, &generate(&query));
                })
                .forget();
            } else if let Some(panel) = &els2.search_suggestions {
                dom::set_display(panel, "none");
            }
        });
    }

    // Clicking outside the search container closes the panel.
    {
        let els2 = els.clone();
        dom::listen(
            dom::document().as_ref(),
            "click",
            move |e: web_sys::MouseEvent| {
                let inside = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| dom::closest(&el, ".search-container"));
                if inside.is_none() {
                    if let Some(panel) = &els2.search_suggestions {
                        dom::set_display(panel, "none");
                    }
                }
            },
        );
    }
}

/// Replace panel contents with one clickable row per match; hide the panel
/// when there are none.
pub fn render_suggestions(els: &Elements, matches: &[String]) {
    let Some(panel) = &els.search_suggestions else {
        return;
    };
    if matches.is_empty() {
        dom::set_display(panel, "none");
        return;
    }

    let html: String = matches
        .iter()
        .map(|name| format!(r#"<div class="suggestion-item" data-suggestion="{name}">{name}</div>"#))
        .collect();
    panel.set_inner_html(&html);
    dom::set_display(panel, "block");

    for item in dom::query_all_within(panel, ".suggestion-item") {
        let suggestion = item.get_attribute("data-suggestion").unwrap_or_default();
        let els2 = els.clone();
        dom::listen(item.as_ref(), "click", move |_: web_sys::MouseEvent| {
            let Some(input) = &els2.search_input else {
                return;
            };
            input.set_value(&suggestion);
            if let Some(form) = dom::closest(input.as_ref(), "form") {
                if let Ok(form) = form.dyn_into::<HtmlFormElement>() {
                    let _ = form.submit();
                }
            }
        });
    }
}
