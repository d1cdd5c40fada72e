//! # Cart Types
//!
//! Client-side cart accumulated by the fallback checkout flow.
//! The cart lives as a JSON array under [`CART_STORAGE_KEY`] and is always
//! rewritten in full.

use crate::error::{CartError, CartResult};
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Storage slot holding the serialized cart
pub const CART_STORAGE_KEY: &str = "cc_cart";

/// A single product entry pending checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product identifier
    #[serde(default)]
    pub sku: String,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Unit price as supplied by the page
    #[serde(default)]
    pub price: f64,

    /// Quantity (always 1 when added by checkout)
    #[serde(default = "default_qty")]
    pub qty: u32,
}

fn default_qty() -> u32 {
    1
}

impl CartLineItem {
    /// Create a line item with a quantity of one
    pub fn new(sku: impl Into<String>, title: impl Into<String>, price: f64) -> Self {
        Self {
            sku: sku.into(),
            title: title.into(),
            price,
            qty: 1,
        }
    }

    /// Line total (price × quantity)
    pub fn total(&self) -> f64 {
        self.price * self.qty as f64
    }

    /// Lenient typed view of a stored entry. Missing or mistyped fields
    /// fall back to empty text, a zero price and a quantity of one.
    pub fn from_entry(entry: &Value) -> Self {
        Self {
            sku: entry.get("sku").map(scalar_text).unwrap_or_default(),
            title: entry.get("title").map(scalar_text).unwrap_or_default(),
            price: entry.get("price").and_then(scalar_number).unwrap_or(0.0),
            qty: entry
                .get("qty")
                .and_then(Value::as_u64)
                .and_then(|q| u32::try_from(q).ok())
                .unwrap_or(1),
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn scalar_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Ordered sequence of stored entries.
///
/// Entries are kept as raw JSON and written back exactly as read, so
/// items of any shape survive an append.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<Value>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse stored cart text. Anything that is not a JSON array is
    /// treated as an empty cart.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(Value::Array(entries)) => Self { entries },
            _ => Self::default(),
        }
    }

    /// Read the cart from `store`, defaulting to empty.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Self {
        store
            .get(key)
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    /// Serialize the whole cart back into `store`.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S, key: &str) -> CartResult<()> {
        let raw = self.to_json()?;
        store.set(key, &raw)
    }

    /// Encode as a JSON array
    pub fn to_json(&self) -> CartResult<String> {
        serde_json::to_string(self).map_err(|e| CartError::Serialization(e.to_string()))
    }

    /// Append a line item at the end
    pub fn push(&mut self, item: CartLineItem) -> CartResult<()> {
        let entry =
            serde_json::to_value(item).map_err(|e| CartError::Serialization(e.to_string()))?;
        self.entries.push(entry);
        Ok(())
    }

    /// Stored entries exactly as read
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    /// Typed view of every entry, in order
    pub fn items(&self) -> Vec<CartLineItem> {
        self.entries.iter().map(CartLineItem::from_entry).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all line totals
    pub fn total(&self) -> f64 {
        self.items().iter().map(CartLineItem::total).sum()
    }
}
