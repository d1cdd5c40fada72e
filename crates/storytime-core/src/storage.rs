//! # Key-Value Storage
//!
//! The checkout flow keeps its cart in a single named slot of a
//! string-to-string store. In the browser that store is `localStorage`;
//! everywhere else (tests, native callers) it is [`MemoryStore`].

use crate::error::CartResult;
use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal get/set interface over a persistent string store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> CartResult<()>;
}

/// In-memory store, single-threaded like the UI thread it stands in for.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: pre-populate a slot
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Number of populated slots
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> CartResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> CartResult<()> {
        (**self).set(key, value)
    }
}
