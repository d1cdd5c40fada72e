//! # Checkout Strategy
//!
//! The buy button runs one of two checkout strategies, chosen once from
//! configuration:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  CheckoutStrategy (trait)                   │
//! │  ├── pay_now()                                              │
//! │  └── mode_name()                                            │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!              ┌─────────────┴─────────────┐
//!              │                           │
//!  ┌───────────┴───────────┐   ┌───────────┴───────────┐
//!  │HostedPlaceholder      │   │   LocalCartCheckout   │
//!  │Checkout (client id)   │   │  (no client id set)   │
//!  └───────────────────────┘   └───────────────────────┘
//! ```
//!
//! Strategies do not touch the page themselves. They return a
//! [`CheckoutOutcome`] and the caller shows the notice or navigates.

use crate::cart::{Cart, CartLineItem, CART_STORAGE_KEY};
use crate::error::CartResult;
use crate::storage::KeyValueStore;

/// Page the browser lands on after a cart checkout
pub const CONFIRMATION_PATH: &str = "/thank-you.html";

/// Notice shown while hosted checkout is not wired up
pub const HOSTED_PLACEHOLDER_NOTICE: &str =
    "PayPal Smart Buttons placeholder. Insert production script with your client ID.";

/// What the caller must do after `pay_now` returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Show a notice to the shopper and stay on the page
    Notice(String),
    /// Navigate the whole page to this URL
    Redirect(String),
}

/// Startup configuration for checkout
#[derive(Debug, Clone, Default)]
pub struct CheckoutConfig {
    /// Hosted payment provider client identifier
    pub payment_client_id: Option<String>,
}

impl CheckoutConfig {
    pub fn new(payment_client_id: Option<String>) -> Self {
        Self { payment_client_id }
    }

    /// True when a non-empty client identifier is configured
    pub fn hosted_checkout_enabled(&self) -> bool {
        self.payment_client_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }
}

/// Core trait for buy-button behaviour.
pub trait CheckoutStrategy {
    /// Buy a single product.
    ///
    /// # Arguments
    /// * `sku` - Product identifier
    /// * `title` - Display title
    /// * `price` - Unit price
    fn pay_now(&self, sku: &str, title: &str, price: f64) -> CartResult<CheckoutOutcome>;

    /// Short name of the strategy (for logging)
    fn mode_name(&self) -> &'static str;
}

/// Stand-in for a hosted checkout that has not been integrated yet.
/// Never mutates the cart.
#[derive(Debug, Clone)]
pub struct HostedPlaceholderCheckout {
    client_id: String,
}

impl HostedPlaceholderCheckout {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

impl CheckoutStrategy for HostedPlaceholderCheckout {
    fn pay_now(&self, _sku: &str, _title: &str, _price: f64) -> CartResult<CheckoutOutcome> {
        Ok(CheckoutOutcome::Notice(HOSTED_PLACEHOLDER_NOTICE.to_string()))
    }

    fn mode_name(&self) -> &'static str {
        "hosted-placeholder"
    }
}

/// Fallback checkout: append to the stored cart, then go to the
/// confirmation page.
#[derive(Debug)]
pub struct LocalCartCheckout<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LocalCartCheckout<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: CART_STORAGE_KEY.to_string(),
        }
    }

    /// Builder: use a different storage slot
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current cart contents
    pub fn cart(&self) -> Cart {
        Cart::load(&self.store, &self.key)
    }
}

impl<S: KeyValueStore> CheckoutStrategy for LocalCartCheckout<S> {
    fn pay_now(&self, sku: &str, title: &str, price: f64) -> CartResult<CheckoutOutcome> {
        let mut cart = Cart::load(&self.store, &self.key);
        cart.push(CartLineItem::new(sku, title, price))?;
        cart.save(&self.store, &self.key)?;

        Ok(CheckoutOutcome::Redirect(confirmation_url(sku)))
    }

    fn mode_name(&self) -> &'static str {
        "local-cart"
    }
}

/// Confirmation page URL with the sku as a query parameter
pub fn confirmation_url(sku: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("sku", sku)
        .finish();
    format!("{}?{}", CONFIRMATION_PATH, query)
}

/// Pick the checkout strategy for this page load.
pub fn select_strategy<'a, S: KeyValueStore + 'a>(
    config: &CheckoutConfig,
    store: S,
) -> Box<dyn CheckoutStrategy + 'a> {
    match config.payment_client_id.as_deref() {
        Some(id) if config.hosted_checkout_enabled() => {
            Box::new(HostedPlaceholderCheckout::new(id))
        }
        _ => Box::new(LocalCartCheckout::new(store)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_confirmation_url_encodes_sku() {
        assert_eq!(confirmation_url("book-1"), "/thank-you.html?sku=book-1");
        assert_eq!(
            confirmation_url("a&b=c"),
            "/thank-you.html?sku=a%26b%3Dc"
        );
        assert_eq!(confirmation_url("moon night"), "/thank-you.html?sku=moon+night");
    }

    #[test]
    fn test_local_cart_appends_in_call_order() {
        let existing = r#"[{"sku":"old","title":"Old","price":1.0,"qty":1}]"#;
        let store = MemoryStore::new().with_value(CART_STORAGE_KEY, existing);
        let checkout = LocalCartCheckout::new(&store);

        let first = checkout.pay_now("a", "Alpha", 5.0).unwrap();
        assert_eq!(first, CheckoutOutcome::Redirect("/thank-you.html?sku=a".into()));
        assert_eq!(checkout.cart().len(), 2);

        checkout.pay_now("b", "Beta", 7.5).unwrap();
        let items = checkout.cart().items();
        let skus: Vec<_> = items.iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(skus, vec!["old", "a", "b"]);
        assert!(items.iter().all(|i| i.qty == 1));
    }

    #[test]
    fn test_local_cart_keeps_unexpected_entries() {
        let existing = r#"[{"sku":101,"title":"Old","price":null,"qty":1},{"sku":"b","title":"Beta","price":2.0,"qty":1,"note":"gift"}]"#;
        let store = MemoryStore::new().with_value(CART_STORAGE_KEY, existing);
        let checkout = LocalCartCheckout::new(&store);

        checkout.pay_now("new", "New", 3.0).unwrap();

        let cart = checkout.cart();
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.entries()[0]["sku"], 101);
        assert!(cart.entries()[0]["price"].is_null());
        assert_eq!(cart.entries()[1]["note"], "gift");
        assert_eq!(cart.entries()[2]["sku"], "new");
        assert_eq!(cart.entries()[2]["qty"], 1);
    }

    #[test]
    fn test_local_cart_recovers_from_corrupt_slot() {
        let store = MemoryStore::new().with_value(CART_STORAGE_KEY, "{oops");
        let checkout = LocalCartCheckout::new(&store);

        checkout.pay_now("a", "Alpha", 5.0).unwrap();
        assert_eq!(checkout.cart().len(), 1);
    }

    #[test]
    fn test_placeholder_never_touches_cart() {
        let existing = r#"[{"sku":"old","title":"Old","price":1.0,"qty":1}]"#;
        let store = MemoryStore::new().with_value(CART_STORAGE_KEY, existing);
        let config = CheckoutConfig::new(Some("client-123".into()));
        let checkout = select_strategy(&config, &store);

        assert_eq!(checkout.mode_name(), "hosted-placeholder");
        let outcome = checkout.pay_now("a", "Alpha", 5.0).unwrap();
        assert_eq!(
            outcome,
            CheckoutOutcome::Notice(HOSTED_PLACEHOLDER_NOTICE.to_string())
        );
        assert_eq!(store.get(CART_STORAGE_KEY).as_deref(), Some(existing));
    }

    #[test]
    fn test_select_strategy() {
        let store = MemoryStore::new();

        let none = select_strategy(&CheckoutConfig::default(), &store);
        assert_eq!(none.mode_name(), "local-cart");

        let empty = select_strategy(&CheckoutConfig::new(Some(String::new())), &store);
        assert_eq!(empty.mode_name(), "local-cart");

        let spaces = select_strategy(&CheckoutConfig::new(Some("  ".into())), &store);
        assert_eq!(spaces.mode_name(), "hosted-placeholder");

        let hosted = select_strategy(&CheckoutConfig::new(Some("id".into())), &store);
        assert_eq!(hosted.mode_name(), "hosted-placeholder");
    }

    #[test]
    fn test_custom_storage_key() {
        let store = MemoryStore::new();
        let checkout = LocalCartCheckout::new(&store).with_key("other_cart");
        checkout.pay_now("a", "Alpha", 1.0).unwrap();

        assert!(store.get(CART_STORAGE_KEY).is_none());
        assert!(store.get("other_cart").is_some());
    }
}
