//! Toast notifications.
//!
//! Fixed-position dismissible alerts appended to `<body>`, removed after
//! three seconds unless the framework close button got there first.

use gloo_timers::callback::Timeout;
use rx_storefront::notify::NotificationKind;
use wasm_bindgen::JsCast;

use crate::dom;

const AUTO_REMOVE_MS: u32 = 3_000;

/// Inject a toast into the document body.
pub fn show(message: &str, kind: NotificationKind) {
    let alert = dom::create_element("div");
    alert.set_class_name(&format!(
        "alert alert-{} alert-dismissible fade show position-fixed",
        kind.as_str()
    ));
    if let Some(html) = alert.dyn_ref::<web_sys::HtmlElement>() {
        html.style()
            .set_css_text("top: 20px; right: 20px; z-index: 9999; min-width: 300px;");
    }
    alert.set_inner_html(&format!(
        r#"{message}<button type="button" class="btn-close" data-bs-dismiss="alert"></button>"#
    ));

    dom::body().append_child(&alert).unwrap();

    let node = alert.clone();
    Timeout::new(AUTO_REMOVE_MS, move || {
        if node.is_connected() {
            node.remove();
        }
    })
    .forget();
}

pub fn success(message: &str) {
    show(message, NotificationKind::Success);
}

pub fn info(message: &str) {
    show(message, NotificationKind::Info);
}

pub fn error(message: &str) {
    show(message, NotificationKind::Error);
}
