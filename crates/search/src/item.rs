//! Labeled candidates offered by the picker.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key holding the display label.
pub const TEXT_KEY: &str = "text";
/// Key holding the opaque identifier.
pub const VALUE_KEY: &str = "value";

/// A selectable entry: a string map where `text` and `value` matter.
///
/// Serializes as a plain JSON object. Either key may be missing; a missing
/// key reads as `None` and never matches a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    fields: BTreeMap<String, String>,
}

impl Item {
    /// Creates an item with both a label and a value.
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        let mut item = Self::default();
        item.insert(TEXT_KEY, text);
        item.insert(VALUE_KEY, value);
        item
    }

    /// Creates an item from arbitrary key/value pairs.
    pub fn from_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Sets a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(key.into(), value.into())
    }

    /// Looks up any field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The display label.
    pub fn text(&self) -> Option<&str> {
        self.get(TEXT_KEY)
    }

    /// The opaque identifier.
    pub fn value(&self) -> Option<&str> {
        self.get(VALUE_KEY)
    }
}

/// Parse a JSON array of items.
///
/// # Example
/// ```
/// let items = lazer_search::parse_items(r#"[{"text": "Main St", "value": "1"}]"#).unwrap();
/// assert_eq!(items[0].text(), Some("Main St"));
/// ```
pub fn parse_items(json: &str) -> Result<Vec<Item>> {
    Ok(serde_json::from_str(json)?)
}
