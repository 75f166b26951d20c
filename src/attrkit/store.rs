//! # Configuration Store
//!
//! The key/value collection threaded through every operation. A store is built
//! once per render, extended by each helper call, and handed to the rendering
//! layer.
//!
//! Keys are plain strings so that entries added by callers at runtime (for
//! example `phx_click` or `@click`) stay discoverable without a fixed schema.
//! Values are either raw data (`serde_json::Value`) or a [`SafeFragment`]
//! produced by this crate.
//!
//! Iteration follows insertion order. Nothing in the helpers depends on it for
//! semantics, but it keeps discovery and combined fragments deterministic.

use indexmap::IndexMap;
use safe_markup::SafeFragment;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Prefix of every key this crate writes.
pub const DERIVED_KEY_PREFIX: &str = "raw_";

/// Returns the derived storage key for a name: `foo` → `raw_foo`.
pub fn derived_key(name: &str) -> String {
    format!("{}{}", DERIVED_KEY_PREFIX, name)
}

/// A single store entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoreValue {
    /// Caller-supplied data, escaped whenever it is turned into markup.
    Raw(Value),
    /// Markup already safe for attribute context.
    Safe(SafeFragment),
}

impl StoreValue {
    /// `Raw(Null)` carries no value. The key still counts as present.
    pub fn is_null(&self) -> bool {
        matches!(self, StoreValue::Raw(Value::Null))
    }

    pub fn as_safe(&self) -> Option<&SafeFragment> {
        match self {
            StoreValue::Safe(fragment) => Some(fragment),
            StoreValue::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            StoreValue::Raw(value) => Some(value),
            StoreValue::Safe(_) => None,
        }
    }
}

impl From<Value> for StoreValue {
    fn from(value: Value) -> Self {
        StoreValue::Raw(value)
    }
}

impl From<SafeFragment> for StoreValue {
    fn from(fragment: SafeFragment) -> Self {
        StoreValue::Safe(fragment)
    }
}

impl From<&str> for StoreValue {
    fn from(value: &str) -> Self {
        StoreValue::Raw(Value::String(value.to_string()))
    }
}

impl From<String> for StoreValue {
    fn from(value: String) -> Self {
        StoreValue::Raw(Value::String(value))
    }
}

impl From<bool> for StoreValue {
    fn from(value: bool) -> Self {
        StoreValue::Raw(Value::Bool(value))
    }
}

impl From<i64> for StoreValue {
    fn from(value: i64) -> Self {
        StoreValue::Raw(Value::from(value))
    }
}

/// Ordered mapping from key to [`StoreValue`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigStore {
    entries: IndexMap<String, StoreValue>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from the members of a JSON object.
    ///
    /// Any other JSON value yields an empty store.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(key, value)| (key, StoreValue::Raw(value)))
                .collect(),
            _ => Self::new(),
        }
    }

    /// Chainable insert, replacing any previous value at `key`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StoreValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a value, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<StoreValue>,
    ) -> Option<StoreValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Serializes arbitrary data into a raw entry.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::Serialization`](crate::error::AttrError::Serialization)
    /// when the data has no JSON representation (for example a map with
    /// non-string keys).
    pub fn try_insert<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Option<StoreValue>> {
        let value = serde_json::to_value(value)?;
        Ok(self.insert(key, StoreValue::Raw(value)))
    }

    /// Inserts only when `key` has no entry yet. Returns whether it inserted.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<StoreValue>) -> bool {
        let mut inserted = false;
        self.entries.entry(key.into()).or_insert_with(|| {
            inserted = true;
            value.into()
        });
        inserted
    }

    pub fn get(&self, key: &str) -> Option<&StoreValue> {
        self.entries.get(key)
    }

    /// Returns the fragment at `key` if that entry is safe markup.
    pub fn get_safe(&self, key: &str) -> Option<&SafeFragment> {
        self.get(key).and_then(StoreValue::as_safe)
    }

    /// Presence check. Independent of the value: `false`, `""` and null all count.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StoreValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<StoreValue>> FromIterator<(K, V)> for ConfigStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<StoreValue>> Extend<(K, V)> for ConfigStore {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}
