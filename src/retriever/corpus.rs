use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Corpus-wide document frequencies.
///
/// Counts, per feature, how many entries contain it at least once.
/// Filled during the one-shot build pass and read-only afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Corpus {
    entry_count: u64,
    #[serde(with = "indexmap::map::serde_seq")]
    doc_freq: IndexMap<String, u32>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Corpus {
            entry_count: 0,
            doc_freq: IndexMap::new(),
        }
    }

    /// Add one entry's distinct features.
    ///
    /// The caller passes the entry's feature *set*: an entry raises a
    /// feature's document frequency by at most 1 no matter how often
    /// the feature repeats inside it.
    pub fn add_set<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        self.entry_count += 1;
        for term in terms {
            let count = self.doc_freq.entry(term.as_ref().to_string()).or_insert(0);
            *count += 1;
        }
        self
    }

    /// Get the number of entries seen
    #[inline]
    pub fn entry_num(&self) -> u64 {
        self.entry_count
    }

    /// Get one feature's document frequency (0 when absent)
    #[inline]
    pub fn doc_freq(&self, term: &str) -> u32 {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// Iterate features and document frequencies in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.doc_freq.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Get the vocabulary size (number of distinct features)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.doc_freq.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_distinct_entries_per_feature() {
        let mut corpus = Corpus::new();
        corpus.add_set(&["track", "order", "track order"]);
        corpus.add_set(&["order", "status"]);
        assert_eq!(corpus.entry_num(), 2);
        assert_eq!(corpus.doc_freq("order"), 2);
        assert_eq!(corpus.doc_freq("track"), 1);
        assert_eq!(corpus.doc_freq("missing"), 0);
        assert_eq!(corpus.vocab_size(), 4);
    }

    #[test]
    fn empty_corpus() {
        let corpus = Corpus::new();
        assert_eq!(corpus.entry_num(), 0);
        assert_eq!(corpus.vocab_size(), 0);
    }
}
