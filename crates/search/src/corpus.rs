//! Indexed corpus: the candidate list prepared for repeated searches.

use crate::engine::SearchOptions;
use crate::item::{Item, TEXT_KEY, VALUE_KEY};
use std::fmt;

/// A named field extractor used to build the index.
pub struct SearchKey<T> {
    /// Field name, for diagnostics
    pub name: &'static str,
    /// Reads the field from an item; `None` when the item lacks it
    pub get: fn(&T) -> Option<&str>,
}

impl<T> Clone for SearchKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SearchKey<T> {}

impl<T> fmt::Debug for SearchKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SearchKey").field(&self.name).finish()
    }
}

/// The fields a corpus indexes, in order.
pub struct SearchKeys<T> {
    keys: Vec<SearchKey<T>>,
}

impl<T> SearchKeys<T> {
    /// An empty key set. A corpus without keys matches nothing.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Adds a field extractor.
    pub fn key(mut self, name: &'static str, get: fn(&T) -> Option<&str>) -> Self {
        self.keys.push(SearchKey { name, get });
        self
    }

    /// Iterates over the configured keys.
    pub fn iter(&self) -> impl Iterator<Item = &SearchKey<T>> {
        self.keys.iter()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when no key is configured.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key names, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.keys.iter().map(|k| k.name).collect()
    }
}

impl<T> Clone for SearchKeys<T> {
    fn clone(&self) -> Self {
        Self { keys: self.keys.clone() }
    }
}

impl<T> fmt::Debug for SearchKeys<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys.iter()).finish()
    }
}

impl Default for SearchKeys<Item> {
    /// Index `text` and `value`.
    fn default() -> Self {
        Self::new()
            .key(TEXT_KEY, Item::text)
            .key(VALUE_KEY, Item::value)
    }
}

/// One item's prepared fields, aligned with the corpus keys.
pub(crate) type PreparedFields = Vec<Option<Vec<char>>>;

/// The full candidate list plus its prepared search fields.
///
/// Built once per item list; replacing the list means building a new corpus.
pub struct Corpus<T> {
    items: Vec<T>,
    fields: Vec<PreparedFields>,
    keys: SearchKeys<T>,
    options: SearchOptions,
}

impl Corpus<Item> {
    /// Index items on `text` and `value` with default options.
    pub fn build(items: Vec<Item>) -> Self {
        Self::with_keys(items, SearchKeys::default(), SearchOptions::default())
    }
}

impl<T> Corpus<T> {
    /// Index items on the given keys.
    pub fn with_keys(items: Vec<T>, keys: SearchKeys<T>, options: SearchOptions) -> Self {
        let fields: Vec<PreparedFields> = items
            .iter()
            .map(|item| {
                keys.iter()
                    .map(|key| (key.get)(item).map(|s| prepare(s, options.ignore_case)))
                    .collect()
            })
            .collect();

        tracing::debug!(
            items = items.len(),
            keys = ?keys.names(),
            ignore_case = options.ignore_case,
            "Corpus indexed"
        );

        Self {
            items,
            fields,
            keys,
            options,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True for an empty corpus.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in original order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Item at `index` in original order.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Indexed keys.
    pub fn keys(&self) -> &SearchKeys<T> {
        &self.keys
    }

    /// Options the corpus was built with.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Gives the items back, dropping the index.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub(crate) fn prepared(&self) -> &[PreparedFields] {
        &self.fields
    }
}

impl<T: fmt::Debug> fmt::Debug for Corpus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Corpus")
            .field("items", &self.items)
            .field("keys", &self.keys)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Fold a string into the form queries are compared against.
pub(crate) fn prepare(s: &str, ignore_case: bool) -> Vec<char> {
    if ignore_case {
        s.to_lowercase().chars().collect()
    } else {
        s.chars().collect()
    }
}
