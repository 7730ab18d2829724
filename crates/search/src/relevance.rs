//! Relevance scoring for search results.

use crate::fuzzy::{approximate_match_chars, subsequence_chars};

/// Default share of typos tolerated by [`calculate_relevance`].
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Relevance score levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelevanceScore {
    /// No match
    None = 0,
    /// Within the typo threshold of some substring
    Approximate = 5,
    /// Fuzzy match
    Fuzzy = 10,
    /// Contains substring
    Contains = 20,
    /// Word boundary match
    WordBoundary = 30,
    /// Starts with query
    StartsWith = 40,
    /// Exact match
    Exact = 50,
}

/// Points separating two tiers in a field score.
const TIER_SCALE: u32 = 100;
const MAX_CLOSENESS: usize = 99;

/// Calculate relevance score for a text against a query.
///
/// # Arguments
/// * `text` - The text to score
/// * `query` - The search query
///
/// # Returns
/// Relevance tier (higher is better)
pub fn calculate_relevance(text: &str, query: &str) -> u32 {
    let text_chars: Vec<char> = text.to_lowercase().chars().collect();
    let query_chars: Vec<char> = query.to_lowercase().chars().collect();

    score_field(&text_chars, &query_chars, DEFAULT_THRESHOLD)
        .map_or(RelevanceScore::None as u32, |score| score / TIER_SCALE)
}

/// Score one prepared field against a prepared query.
///
/// The score is `tier * 100 + closeness`. Closeness (0..=99) orders matches
/// inside a tier: for literal tiers it is the share of the field the query
/// covers, for the approximate tier the share of query characters that
/// needed no edit. Returns `None` when the field does not match at all or
/// needs more edits than `threshold` allows.
pub fn score_field(field: &[char], query: &[char], threshold: f64) -> Option<u32> {
    let m = query.len();
    let n = field.len();
    if m == 0 || n == 0 {
        return None;
    }

    let tier = literal_tier(field, query);
    if tier != RelevanceScore::None {
        let closeness = (MAX_CLOSENESS * m / n).min(MAX_CLOSENESS);
        return Some(tier as u32 * TIER_SCALE + closeness as u32);
    }

    let errors = approximate_match_chars(field, query).distance;
    if errors >= m || errors as f64 / m as f64 > threshold {
        return None;
    }
    let closeness = MAX_CLOSENESS * (m - errors) / m;
    Some(RelevanceScore::Approximate as u32 * TIER_SCALE + closeness as u32)
}

fn literal_tier(field: &[char], query: &[char]) -> RelevanceScore {
    if field == query {
        return RelevanceScore::Exact;
    }

    if field.starts_with(query) {
        return RelevanceScore::StartsWith;
    }

    if query.len() < field.len() {
        let at_word = (1..=field.len() - query.len())
            .any(|p| field[p - 1].is_whitespace() && field[p..].starts_with(query));
        if at_word {
            return RelevanceScore::WordBoundary;
        }

        if field.windows(query.len()).any(|w| w == query) {
            return RelevanceScore::Contains;
        }
    }

    if subsequence_chars(field, query) {
        return RelevanceScore::Fuzzy;
    }

    RelevanceScore::None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(calculate_relevance("Hello", "hello"), RelevanceScore::Exact as u32);
    }

    #[test]
    fn test_starts_with() {
        assert_eq!(calculate_relevance("Hello World", "hello"), RelevanceScore::StartsWith as u32);
    }

    #[test]
    fn test_word_boundary() {
        assert_eq!(calculate_relevance("Say Hello", "hello"), RelevanceScore::WordBoundary as u32);
    }

    #[test]
    fn test_contains() {
        assert_eq!(calculate_relevance("SayHelloWorld", "hello"), RelevanceScore::Contains as u32);
    }

    #[test]
    fn test_subsequence() {
        assert_eq!(calculate_relevance("Main Street", "mst"), RelevanceScore::Fuzzy as u32);
    }

    #[test]
    fn test_typo_is_approximate() {
        assert_eq!(calculate_relevance("Main St", "mian"), RelevanceScore::Approximate as u32);
    }

    #[test]
    fn test_unrelated_is_none() {
        assert_eq!(calculate_relevance("Oak Blvd", "mian"), RelevanceScore::None as u32);
    }

    #[test]
    fn test_closeness_prefers_shorter_fields() {
        let query = chars("ma");
        let main = score_field(&chars("main st"), &query, DEFAULT_THRESHOLD).unwrap();
        let maple = score_field(&chars("maple ave"), &query, DEFAULT_THRESHOLD).unwrap();
        assert!(main > maple);
    }

    #[test]
    fn test_tiers_dominate_closeness() {
        let query = chars("oak");
        let contains = score_field(&chars("soak"), &query, DEFAULT_THRESHOLD).unwrap();
        let field = chars("oak boulevard extension");
        let prefix = score_field(&field, &query, DEFAULT_THRESHOLD).unwrap();
        assert!(prefix > contains);
    }

    #[test]
    fn test_threshold_zero_rejects_typos() {
        assert!(score_field(&chars("main st"), &chars("mian"), 0.0).is_none());
        assert!(score_field(&chars("main st"), &chars("main"), 0.0).is_some());
    }

    #[test]
    fn test_empty_inputs_never_match() {
        assert!(score_field(&[], &chars("a"), 1.0).is_none());
        assert!(score_field(&chars("a"), &[], 1.0).is_none());
    }
}
