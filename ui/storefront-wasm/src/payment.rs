//! Hosted card payment flow.
//!
//! Tokenization and authorization are delegated to the Stripe SDK; this
//! module only mounts the card element and maps the confirm outcome to a
//! toast (and, on success, the dashboard redirect).

use gloo_console::{debug, warn};
use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::dom::{self, Elements};
use crate::notify;
use crate::widgets;

const PUBLISHABLE_KEY: &str = "pk_test_your_stripe_key";
const PAYMENT_OK_MSG: &str = "Платеж успешно обработан!";
const REDIRECT_DELAY_MS: u32 = 2_000;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    type StripeClient;

    /// The hosted SDK exposes `Stripe(publishableKey)` as a bare function.
    #[wasm_bindgen(js_name = Stripe, catch)]
    fn stripe_client(publishable_key: &str) -> Result<StripeClient, JsValue>;

    #[wasm_bindgen(method)]
    fn elements(this: &StripeClient) -> StripeElements;

    #[wasm_bindgen(method, js_name = confirmCardPayment)]
    fn confirm_card_payment(
        this: &StripeClient,
        client_secret: &str,
        data: &JsValue,
    ) -> js_sys::Promise;

    type StripeElements;

    #[wasm_bindgen(method)]
    fn create(this: &StripeElements, element_type: &str, options: &JsValue) -> StripeCardElement;

    #[derive(Clone)]
    type StripeCardElement;

    #[wasm_bindgen(method, catch)]
    fn mount(this: &StripeCardElement, selector: &str) -> Result<(), JsValue>;
}

/// Inline style bag for the hosted card input, as the SDK expects it.
/// The json-compatible serializer keeps nested maps as plain JS objects.
fn card_options() -> JsValue {
    let options = serde_json::json!({
        "style": {
            "base": {
                "fontSize": "16px",
                "color": "#424770",
                "::placeholder": { "color": "#aab7c4" },
            },
        },
    });
    options
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::UNDEFINED)
}

/// Mount the card element and intercept the payment form's submit.
pub fn init(els: &Elements) {
    if !widgets::has_global("Stripe") {
        debug!("Stripe SDK not loaded; payment form left inert");
        return;
    }
    let Some(form) = els.payment_form.clone() else {
        return;
    };

    let client = match stripe_client(PUBLISHABLE_KEY) {
        Ok(client) => client,
        Err(e) => {
            warn!("Stripe init failed", e);
            return;
        }
    };
    let card = client.elements().create("card", &card_options());
    if let Err(e) = card.mount("#card-element") {
        warn!("card element mount failed", e);
        return;
    }

    let form2 = form.clone();
    dom::listen(form.as_ref(), "submit", move |e: web_sys::Event| {
        e.prevent_default();
        let secret = form2.dataset().get("clientSecret").unwrap_or_default();
        let client2 = client.clone();
        let card2 = card.clone();
        wasm_bindgen_futures::spawn_local(async move {
            confirm(&client2, &secret, &card2).await;
        });
    });
}

/// Run the confirm operation and surface the outcome.
async fn confirm(client: &StripeClient, client_secret: &str, card: &StripeCardElement) {
    let payment_method = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&payment_method, &"card".into(), card.as_ref());
    let data = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&data, &"payment_method".into(), &payment_method);

    let outcome = JsFuture::from(client.confirm_card_payment(client_secret, data.as_ref())).await;

    match error_message(outcome) {
        Some(message) => notify::error(&message),
        None => {
            notify::success(PAYMENT_OK_MSG);
            Timeout::new(REDIRECT_DELAY_MS, || {
                let _ = dom::window().location().set_href("/dashboard");
            })
            .forget();
        }
    }
}

/// The SDK resolves with `{error}` on failure; a rejected promise is also
/// treated as a failure. The message string is forwarded verbatim.
fn error_message(outcome: Result<JsValue, JsValue>) -> Option<String> {
    let result = match outcome {
        Ok(value) => value,
        Err(e) => return Some(format!("{e:?}")),
    };
    let error = js_sys::Reflect::get(&result, &"error".into()).ok()?;
    if error.is_undefined() || error.is_null() {
        return None;
    }
    let message = js_sys::Reflect::get(&error, &"message".into())
        .ok()
        .and_then(|m| m.as_string());
    Some(message.unwrap_or_else(|| format!("{error:?}")))
}
