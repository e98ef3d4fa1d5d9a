//! Form decorations: submit spinner, image-upload preview, modal validation.

use gloo_console::warn;
use gloo_timers::callback::Timeout;
use rx_storefront::validate;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlButtonElement, HtmlImageElement};

use crate::dom::{self, Elements};
use crate::notify;

const RESTORE_MS: u32 = 5_000;
const LOADING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin me-2"></i>Загрузка..."#;
const REQUIRED_FIELDS_MSG: &str = "Пожалуйста, заполните все обязательные поля";

/// Swap every submit button for a spinner while the navigation is in
/// flight. Submission itself is not intercepted; the button is restored on
/// a fallback timer in case the request never navigates.
pub fn bind_submit_spinner(els: &Elements) {
    for form in &els.forms {
        let form2 = form.clone();
        dom::listen(form.as_ref(), "submit", move |_: web_sys::Event| {
            let Some(btn) = form2.query_selector(r#"button[type="submit"]"#).ok().flatten() else {
                return;
            };
            let Ok(btn) = btn.dyn_into::<HtmlButtonElement>() else {
                return;
            };
            let original = btn.inner_html();
            btn.set_inner_html(LOADING_LABEL);
            btn.set_disabled(true);

            let btn2 = btn.clone();
            Timeout::new(RESTORE_MS, move || {
                btn2.set_inner_html(&original);
                btn2.set_disabled(false);
            })
            .forget();
        });
    }
}

/// Read the selected image as a data URL and show it in the preview node.
pub fn bind_image_preview(els: &Elements) {
    for input in &els.image_inputs {
        let input2 = input.clone();
        dom::listen(input.as_ref(), "change", move |_: web_sys::Event| {
            let Some(file) = input2.files().and_then(|list| list.get(0)) else {
                return;
            };
            let Ok(reader) = web_sys::FileReader::new() else {
                return;
            };

            let reader2 = reader.clone();
            let onload = Closure::once(move |_: web_sys::ProgressEvent| {
                let Ok(result) = reader2.result() else { return };
                let Some(data_url) = result.as_string() else { return };
                // Both preview nodes live inside the upload modal; resolve
                // them at read time since the modal may not be on every page.
                let img = dom::by_id_typed::<HtmlImageElement>("previewImg");
                let container = dom::by_id("imagePreview");
                if let (Some(img), Some(container)) = (img, container) {
                    img.set_src(&data_url);
                    dom::set_display(&container, "block");
                }
            });
            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            onload.forget();

            if reader.read_as_data_url(&file).is_err() {
                warn!("image preview: file read failed");
            }
        });
    }
}

/// Block modal submission while any required field is blank.
pub fn bind_modal_validation(els: &Elements) {
    for form in &els.modal_forms {
        let form2 = form.clone();
        dom::listen(form.as_ref(), "submit", move |e: web_sys::Event| {
            let mut valid = true;
            for field in dom::query_all_within(form2.as_ref(), "[required]") {
                if validate::is_blank(&field_value(&field)) {
                    dom::add_class(&field, "is-invalid");
                    valid = false;
                } else {
                    dom::remove_class(&field, "is-invalid");
                }
            }
            if !valid {
                e.prevent_default();
                notify::error(REQUIRED_FIELDS_MSG);
            }
        });
    }
}

/// Current value of a form control, whatever its tag.
fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        return select.value();
    }
    if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return area.value();
    }
    el.text_content().unwrap_or_default()
}
