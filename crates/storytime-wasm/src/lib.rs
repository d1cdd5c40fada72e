//! # storytime-wasm
//!
//! WebAssembly bindings for the storytime buy button.
//!
//! This crate provides:
//! - `pay_now`, the checkout trigger wired to `window.localStorage`,
//!   `window.alert` and `window.location`
//! - Read helpers for the stored cart
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { pay_now, cart_item_count } from 'storytime-wasm';
//!
//! await init();
//!
//! // window.PAYPAL_CLIENT_ID selects the hosted placeholder when set
//! pay_now('moon-book', 'The Sleepy Moon', 12.99);
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use storytime_core::{
    select_strategy, Cart, CartError, CartResult, CheckoutConfig, CheckoutOutcome,
    CheckoutStrategy, KeyValueStore, CART_STORAGE_KEY,
};
use wasm_bindgen::prelude::*;

/// Global the page sets to enable hosted checkout
const CLIENT_ID_GLOBAL: &str = "PAYPAL_CLIENT_ID";

/// `window.localStorage` behind the `KeyValueStore` seam
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    /// Open local storage; a page with storage disabled gets a store that
    /// reads nothing and fails every write.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> CartResult<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| CartError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| CartError::Storage(js_error_text(&e)))
    }
}

/// Buy a product from a static page.
///
/// Shows the placeholder notice when a payment client id is configured,
/// otherwise adds the item to the stored cart and navigates to the
/// confirmation page.
#[wasm_bindgen]
pub fn pay_now(sku: &str, title: &str, price: f64) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let config = CheckoutConfig::new(payment_client_id(&window));
    let strategy = select_strategy(&config, BrowserStorage::open());

    let outcome = strategy
        .pay_now(sku, title, price)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    match outcome {
        CheckoutOutcome::Notice(message) => window.alert_with_message(&message),
        CheckoutOutcome::Redirect(url) => window.location().set_href(&url),
    }
}

/// Number of line items in the stored cart
#[wasm_bindgen]
pub fn cart_item_count() -> usize {
    Cart::load(&BrowserStorage::open(), CART_STORAGE_KEY).len()
}

/// Stored cart as a JSON array (empty array when absent or unreadable)
#[wasm_bindgen]
pub fn cart_json() -> Result<String, JsValue> {
    Cart::load(&BrowserStorage::open(), CART_STORAGE_KEY)
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format a price for display
#[wasm_bindgen]
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn payment_client_id(window: &web_sys::Window) -> Option<String> {
    js_sys::Reflect::get(window, &JsValue::from_str(CLIENT_ID_GLOBAL))
        .ok()
        .filter(JsValue::is_truthy)
        .map(|v| v.as_string().unwrap_or_else(|| "configured".to_string()))
}

fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
