use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-document feature counts.
///
/// Counts how often each feature occurs in one text, a corpus entry's
/// question or a user query. Insertion order is kept, so rebuilding the
/// same document always yields the same iteration sequence.
///
/// # Examples
/// ```
/// use faq_retriever::TermFrequency;
/// let mut freq = TermFrequency::new();
/// freq.add_term("track").add_term("order").add_term("track");
/// assert_eq!(freq.term_count("track"), 2);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

/// Adding terms
impl TermFrequency {
    /// Create an empty frequency map
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Count one term occurrence
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Count every term in a slice, in order
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// Accessors
impl TermFrequency {
    /// Get one term's count (0 when absent)
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        *self.term_count.get(term).unwrap_or(&0)
    }

    /// Get the sum of all counts
    #[inline]
    pub fn total_term_count(&self) -> u64 {
        self.total_term_count
    }

    /// Iterate terms and counts in insertion order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Get the distinct terms, first-seen order kept
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    /// Check whether a term was counted
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    /// True when nothing was counted
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_terms() {
        let mut freq = TermFrequency::new();
        freq.add_terms(&["track", "order", "track order", "track"]);
        assert_eq!(freq.term_count("track"), 2);
        assert_eq!(freq.term_count("order"), 1);
        assert_eq!(freq.term_count("track order"), 1);
        assert_eq!(freq.term_count("missing"), 0);
        assert_eq!(freq.total_term_count(), 4);
        assert_eq!(freq.term_num(), 3);
    }

    #[test]
    fn distinct_terms_keep_first_seen_order() {
        let mut freq = TermFrequency::new();
        freq.add_terms(&["b", "a", "b", "c"]);
        assert_eq!(freq.term_set_ref_str(), vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_map() {
        let freq = TermFrequency::new();
        assert!(freq.is_empty());
        assert_eq!(freq.total_term_count(), 0);
        assert!(!freq.contains_term("track"));
    }
}
