//! Typo-tolerant typeahead search for Lazer.
//!
//! This crate provides:
//! - `Item`, the labeled candidate a picker offers
//! - An indexed corpus over configurable fields
//! - Multi-level relevance scoring with typo tolerance
//! - Ranked, size-bounded search with "blank query shows everything"
//! - WASM bindings for the web front-end
//!
//! # Example
//!
//! ```
//! use lazer_search::{search, Corpus, Item, DEFAULT_LIMIT};
//!
//! let corpus = Corpus::build(vec![
//!     Item::new("Parked in bike lane", "bike-lane"),
//!     Item::new("Blocking crosswalk", "crosswalk"),
//! ]);
//!
//! let hits = search(&corpus, Some("crosswlak"), DEFAULT_LIMIT);
//! assert_eq!(hits[0].value(), Some("crosswalk"));
//! ```

mod corpus;
mod engine;
mod error;
mod fuzzy;
mod item;
mod relevance;

#[cfg(feature = "wasm")]
mod wasm;

pub use corpus::{Corpus, SearchKey, SearchKeys};
pub use engine::{is_blank, search, search_indices, search_scored, SearchOptions, DEFAULT_LIMIT};
pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::{approximate_match, fuzzy_match, levenshtein_distance, ApproximateMatch};
pub use item::{parse_items, Item, TEXT_KEY, VALUE_KEY};
pub use relevance::{calculate_relevance, score_field, RelevanceScore, DEFAULT_THRESHOLD};

/// Search result with relevance score.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Relevance score (higher is better)
    pub score: u32,
}
