//! Ranked, size-bounded search over an indexed corpus.

use crate::corpus::{prepare, Corpus, PreparedFields};
use crate::error::{Result, SearchError};
use crate::relevance::{score_field, DEFAULT_THRESHOLD};
use crate::SearchResult;

/// Maximum number of ranked results the picker shows.
pub const DEFAULT_LIMIT: usize = 50;

/// Matching options fixed when a corpus is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Highest tolerated share of edited query characters (0.0 to 1.0)
    pub threshold: f64,
    /// Compare without regard to letter case
    pub ignore_case: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            ignore_case: true,
        }
    }
}

impl SearchOptions {
    /// Reject a threshold outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SearchError::InvalidOptions(format!(
                "threshold {} is outside 0.0..=1.0",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// True when a query should show the whole corpus.
#[inline]
pub fn is_blank(query: Option<&str>) -> bool {
    query.is_none_or(|q| q.trim().is_empty())
}

/// Search the corpus.
///
/// A blank query returns every item in original order and ignores `limit`.
/// Otherwise at most `limit` matching items are returned, best first; items
/// scoring the same keep their corpus order.
///
/// # Example
/// ```
/// use lazer_search::{search, Corpus, Item, DEFAULT_LIMIT};
///
/// let corpus = Corpus::build(vec![
///     Item::new("Main St", "1"),
///     Item::new("Maple Ave", "2"),
///     Item::new("Oak Blvd", "3"),
/// ]);
///
/// let hits = search(&corpus, Some("mian"), DEFAULT_LIMIT);
/// assert_eq!(hits[0].text(), Some("Main St"));
///
/// let all = search(&corpus, Some("  "), DEFAULT_LIMIT);
/// assert_eq!(all.len(), 3);
/// ```
pub fn search<'c, T>(corpus: &'c Corpus<T>, query: Option<&str>, limit: usize) -> Vec<&'c T> {
    search_indices(corpus, query, limit)
        .into_iter()
        .filter_map(|index| corpus.get(index))
        .collect()
}

/// Like [`search`], returning positions in the corpus.
pub fn search_indices<T>(corpus: &Corpus<T>, query: Option<&str>, limit: usize) -> Vec<usize> {
    match query {
        Some(q) if !is_blank(query) => {
            rank(corpus, q, limit).into_iter().map(|(index, _)| index).collect()
        }
        _ => (0..corpus.len()).collect(),
    }
}

/// Like [`search`], keeping each item's score.
///
/// Items returned for a blank query carry a score of 0.
pub fn search_scored<'c, T>(
    corpus: &'c Corpus<T>,
    query: Option<&str>,
    limit: usize,
) -> Vec<SearchResult<&'c T>> {
    let ranked = match query {
        Some(q) if !is_blank(query) => rank(corpus, q, limit),
        _ => (0..corpus.len()).map(|index| (index, 0)).collect(),
    };

    ranked
        .into_iter()
        .filter_map(|(index, score)| corpus.get(index).map(|item| SearchResult { item, score }))
        .collect()
}

/// Score every item, keep matches, sort best first and cut to `limit`.
fn rank<T>(corpus: &Corpus<T>, query: &str, limit: usize) -> Vec<(usize, u32)> {
    let options = corpus.options();
    let prepared = prepare(query, options.ignore_case);
    let threshold = options.threshold;

    let score_item = |(index, fields): (usize, &PreparedFields)| {
        fields
            .iter()
            .flatten()
            .filter_map(|field| score_field(field, &prepared, threshold))
            .max()
            .map(|score| (index, score))
    };

    #[cfg(feature = "parallel")]
    let mut scored: Vec<(usize, u32)> = {
        use rayon::prelude::*;
        corpus.prepared().par_iter().enumerate().filter_map(score_item).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut scored: Vec<(usize, u32)> =
        corpus.prepared().iter().enumerate().filter_map(score_item).collect();

    let matched = scored.len();
    // Stable: equal scores stay in corpus order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);

    tracing::debug!(query, matched, returned = scored.len(), limit, "Search completed");

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Item;
    use proptest::prelude::*;

    fn streets() -> Corpus<Item> {
        Corpus::build(vec![
            Item::new("Main St", "1"),
            Item::new("Maple Ave", "2"),
            Item::new("Oak Blvd", "3"),
        ])
    }

    fn texts<'a>(items: &[&'a Item]) -> Vec<&'a str> {
        items.iter().copied().filter_map(Item::text).collect()
    }

    #[test]
    fn test_typo_ranks_intended_item_first() {
        let corpus = streets();
        let hits = search(&corpus, Some("mian"), DEFAULT_LIMIT);
        assert_eq!(texts(&hits).first(), Some(&"Main St"));
        assert!(!texts(&hits).contains(&"Oak Blvd"));
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let corpus = streets();
        for query in [None, Some(""), Some("   "), Some("\t\n")] {
            let hits = search(&corpus, query, DEFAULT_LIMIT);
            assert_eq!(texts(&hits), vec!["Main St", "Maple Ave", "Oak Blvd"]);
        }
    }

    #[test]
    fn test_empty_query_ignores_limit() {
        let corpus = streets();
        assert_eq!(search(&corpus, None, 1).len(), 3);
    }

    #[test]
    fn test_limit_applies_to_ranked_results() {
        let items = (0..120).map(|i| Item::new(format!("Street {}", i), i.to_string())).collect();
        let corpus = Corpus::build(items);
        assert_eq!(search(&corpus, Some("street"), DEFAULT_LIMIT).len(), DEFAULT_LIMIT);
        assert_eq!(search(&corpus, Some("street"), 5).len(), 5);
    }

    #[test]
    fn test_matches_on_value_field() {
        let corpus = Corpus::build(vec![
            Item::new("Blocked bike lane", "bike-lane"),
            Item::new("Double parking", "double-park"),
        ]);
        let hits = search(&corpus, Some("double-park"), DEFAULT_LIMIT);
        assert_eq!(hits[0].value(), Some("double-park"));
    }

    #[test]
    fn test_missing_fields_do_not_match() {
        let corpus = Corpus::build(vec![
            Item::from_fields([("value", "7")]),
            Item::new("Main St", "1"),
        ]);
        let hits = search(&corpus, Some("main"), DEFAULT_LIMIT);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].value(), Some("1"));
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let corpus = Corpus::build(vec![
            Item::new("Elm St", "b"),
            Item::new("Elm St", "a"),
        ]);
        let hits = search(&corpus, Some("elm st"), DEFAULT_LIMIT);
        let values: Vec<_> = hits.iter().filter_map(|i| i.value()).collect();
        assert_eq!(values, vec!["b", "a"]);
    }

    #[test]
    fn test_better_tier_ranks_first() {
        let corpus = Corpus::build(vec![
            Item::new("Broad St", "1"),
            Item::new("Street Light Out", "2"),
        ]);
        let hits = search(&corpus, Some("street"), DEFAULT_LIMIT);
        assert_eq!(hits[0].value(), Some("2"));
    }

    #[test]
    fn test_case_sensitive_option() {
        let options = SearchOptions {
            ignore_case: false,
            threshold: 0.0,
        };
        let corpus = Corpus::with_keys(
            vec![Item::new("MAIN", "1"), Item::new("main", "2")],
            crate::SearchKeys::default(),
            options,
        );
        let hits = search(&corpus, Some("main"), DEFAULT_LIMIT);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].value(), Some("2"));
    }

    #[test]
    fn test_empty_corpus_returns_empty() {
        let corpus = Corpus::build(Vec::new());
        assert!(search(&corpus, Some("main"), DEFAULT_LIMIT).is_empty());
        assert!(search(&corpus, None, DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_scored_results_descend() {
        let corpus = streets();
        let results = search_scored(&corpus, Some("ma"), DEFAULT_LIMIT);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(results.iter().all(|r| r.score > 0));
    }

    #[test]
    fn test_options_validation() {
        assert!(SearchOptions::default().validate().is_ok());
        let bad = SearchOptions {
            threshold: -0.1,
            ..SearchOptions::default()
        };
        assert!(matches!(bad.validate(), Err(SearchError::InvalidOptions(_))));
    }

    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec(("[a-zA-Z ]{0,12}", "[0-9]{1,3}"), 0..80)
            .prop_map(|pairs| pairs.into_iter().map(|(t, v)| Item::new(t, v)).collect())
    }

    proptest! {
        #[test]
        fn prop_blank_query_is_identity(items in arb_items(), blank in "[ \t]{0,3}") {
            let corpus = Corpus::build(items.clone());
            let hits: Vec<Item> =
                search(&corpus, Some(&blank), DEFAULT_LIMIT).into_iter().cloned().collect();
            prop_assert_eq!(hits, items);
        }

        #[test]
        fn prop_output_is_bounded(
            items in arb_items(),
            query in "[a-z]{1,6}",
            limit in 0usize..60,
        ) {
            let corpus = Corpus::build(items);
            prop_assert!(search(&corpus, Some(&query), limit).len() <= limit);
        }

        #[test]
        fn prop_output_is_subset(items in arb_items(), query in "[a-z0-9 ]{1,6}") {
            let corpus = Corpus::build(items.clone());
            for hit in search(&corpus, Some(&query), DEFAULT_LIMIT) {
                prop_assert!(items.contains(hit));
            }
        }

        #[test]
        fn prop_search_is_deterministic(items in arb_items(), query in "[a-z]{1,6}") {
            let corpus = Corpus::build(items);
            let first = search_indices(&corpus, Some(&query), DEFAULT_LIMIT);
            let second = search_indices(&corpus, Some(&query), DEFAULT_LIMIT);
            prop_assert_eq!(first, second);
        }
    }
}
