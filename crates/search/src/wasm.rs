//! WASM bindings for search utilities.

use crate::{Corpus, Item};
use wasm_bindgen::prelude::*;

/// Calculate relevance score for a query against text.
///
/// # Arguments
/// * `query` - Search query
/// * `text` - Text to match against
///
/// # Returns
/// Relevance tier (0-50, higher is better)
#[wasm_bindgen]
pub fn relevance_score(query: &str, text: &str) -> u32 {
    crate::calculate_relevance(text, query)
}

/// Check if text contains a fuzzy match for query.
///
/// Returns true if all characters in query appear in text in order.
#[wasm_bindgen]
pub fn fuzzy_contains(query: &str, text: &str) -> bool {
    crate::fuzzy_match(text, query)
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Search items and return the visible list as JSON.
///
/// # Arguments
/// * `query` - Search query; blank returns every item in order
/// * `items_json` - JSON array of items with `text` and `value` fields
/// * `max_results` - Maximum ranked results (0 for the default of 50)
///
/// # Returns
/// JSON array of items, best match first
#[wasm_bindgen]
pub fn search_items(query: &str, items_json: &str, max_results: usize) -> String {
    let items: Vec<Item> = match crate::parse_items(items_json) {
        Ok(items) => items,
        Err(_) => return "[]".to_string(),
    };

    let limit = if max_results == 0 { crate::DEFAULT_LIMIT } else { max_results };
    let corpus = Corpus::build(items);
    let results = crate::search(&corpus, Some(query), limit);

    serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
}
