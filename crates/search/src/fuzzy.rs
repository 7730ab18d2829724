//! Fuzzy matching algorithms.

/// Calculate Levenshtein edit distance between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Use two rows for space optimization
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Check if text contains all characters of query in order.
///
/// This is a simple fuzzy match that checks if all query characters
/// appear in the text in the same order (but not necessarily consecutively).
///
/// # Arguments
/// * `text` - Text to search in
/// * `query` - Query characters to find
///
/// # Returns
/// true if all query characters are found in order
pub fn fuzzy_match(text: &str, query: &str) -> bool {
    let text_chars: Vec<char> = text.chars().collect();
    let query_chars: Vec<char> = query.chars().collect();
    subsequence_chars(&text_chars, &query_chars)
}

pub(crate) fn subsequence_chars(text: &[char], query: &[char]) -> bool {
    let mut text_chars = text.iter();
    query.iter().all(|q| text_chars.any(|c| c == q))
}

/// Best approximate occurrence of a query inside a longer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproximateMatch {
    /// Edits needed to turn the query into the matched substring
    pub distance: usize,
    /// Char offset one past the end of the matched substring
    pub end: usize,
}

/// Find the substring of `text` closest to `query`.
///
/// Insertions, deletions, substitutions and swaps of two adjacent
/// characters each count as one edit, so `"mian"` is one edit away from
/// `"main st"`. The earliest end position wins among equally close
/// substrings.
///
/// # Example
/// ```
/// use lazer_search::approximate_match;
///
/// let m = approximate_match("main st", "mian");
/// assert_eq!(m.distance, 1);
/// assert_eq!(m.end, 4);
/// ```
pub fn approximate_match(text: &str, query: &str) -> ApproximateMatch {
    let text_chars: Vec<char> = text.chars().collect();
    let query_chars: Vec<char> = query.chars().collect();
    approximate_match_chars(&text_chars, &query_chars)
}

pub(crate) fn approximate_match_chars(text: &[char], query: &[char]) -> ApproximateMatch {
    let m = query.len();
    let mut best = ApproximateMatch { distance: m, end: 0 };
    if m == 0 {
        return best;
    }

    // Column-wise DP over the text; row 0 stays zero so a match may start anywhere.
    let mut before: Vec<usize> = (0..=m).collect();
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0; m + 1];

    for j in 1..=text.len() {
        curr[0] = 0;
        for i in 1..=m {
            let cost = usize::from(query[i - 1] != text[j - 1]);
            let mut d = (prev[i] + 1)
                .min(curr[i - 1] + 1)
                .min(prev[i - 1] + cost);
            if i > 1 && j > 1 && query[i - 1] == text[j - 2] && query[i - 2] == text[j - 1] {
                d = d.min(before[i - 2] + 1);
            }
            curr[i] = d;
        }

        if curr[m] < best.distance {
            best = ApproximateMatch { distance: curr[m], end: j };
            if best.distance == 0 {
                break;
            }
        }

        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_same() {
        assert_eq!(levenshtein_distance("hello", "hello"), 0);
    }

    #[test]
    fn test_levenshtein_one_edit() {
        assert_eq!(levenshtein_distance("hello", "hallo"), 1);
    }

    #[test]
    fn test_levenshtein_insert() {
        assert_eq!(levenshtein_distance("helo", "hello"), 1);
    }

    #[test]
    fn test_levenshtein_delete() {
        assert_eq!(levenshtein_distance("hello", "helo"), 1);
    }

    #[test]
    fn test_fuzzy_match_true() {
        assert!(fuzzy_match("hello world", "hwo"));
    }

    #[test]
    fn test_fuzzy_match_false() {
        assert!(!fuzzy_match("hello", "lhe"));
    }

    #[test]
    fn test_fuzzy_match_exact() {
        assert!(fuzzy_match("hello", "hello"));
    }

    #[test]
    fn test_approximate_exact_substring() {
        let m = approximate_match("oak blvd", "blvd");
        assert_eq!(m, ApproximateMatch { distance: 0, end: 8 });
    }

    #[test]
    fn test_approximate_transposition() {
        assert_eq!(approximate_match("main st", "mian").distance, 1);
    }

    #[test]
    fn test_approximate_substitution() {
        assert_eq!(approximate_match("broad street", "stroet").distance, 1);
    }

    #[test]
    fn test_approximate_no_shared_chars() {
        assert_eq!(approximate_match("oak", "xyz").distance, 3);
    }

    #[test]
    fn test_approximate_empty_inputs() {
        assert_eq!(approximate_match("anything", "").distance, 0);
        assert_eq!(approximate_match("", "abc").distance, 3);
    }

    #[test]
    fn test_approximate_earliest_end_on_ties() {
        let m = approximate_match("cat cat", "cat");
        assert_eq!(m.end, 3);
    }
}
