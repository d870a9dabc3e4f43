use indexmap::IndexMap;
use num::Num;
use serde::{Deserialize, Serialize};

use crate::retriever::corpus::Corpus;

/// Weighting scheme plugged into the index.
///
/// `idf` turns a corpus-wide document frequency into an inverse
/// document frequency, `weight` combines it with a raw per-document
/// term count. Implemented for `f64` and `f32`.
pub trait TFIDFEngine<N>
where
    N: Num,
{
    /// Inverse document frequency of one feature
    ///
    /// # Arguments
    /// * `entry_num` - total number of corpus entries
    /// * `doc_freq` - number of entries containing the feature
    fn idf(entry_num: u64, doc_freq: u32) -> N;

    /// TF-IDF weight of one feature within one document
    fn weight(term_count: u32, idf: N) -> N;
}

/// Default engine: `idf = ln(N / (df + 1))`, `weight = tf * idf`.
///
/// TF is the raw occurrence count. Widespread features can go negative
/// (df + 1 may exceed the entry count); they are kept as-is, not
/// clamped to zero.
#[derive(Debug)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine<f64> for DefaultTFIDFEngine {
    fn idf(entry_num: u64, doc_freq: u32) -> f64 {
        (entry_num as f64 / (doc_freq as f64 + 1.0)).ln()
    }

    fn weight(term_count: u32, idf: f64) -> f64 {
        term_count as f64 * idf
    }
}

impl TFIDFEngine<f32> for DefaultTFIDFEngine {
    fn idf(entry_num: u64, doc_freq: u32) -> f32 {
        (entry_num as f32 / (doc_freq as f32 + 1.0)).ln()
    }

    fn weight(term_count: u32, idf: f32) -> f32 {
        term_count as f32 * idf
    }
}

/// Corpus-wide IDF weights, one per feature observed at build time.
///
/// Built once from a [`Corpus`] and never mutated afterwards. Features
/// the corpus never saw are absent and read back as zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound(serialize = "N: Serialize", deserialize = "N: Deserialize<'de>"))]
pub struct IDFTable<N = f64>
where
    N: Num,
{
    #[serde(with = "indexmap::map::serde_seq")]
    weights: IndexMap<String, N>,
    entry_count: u64,
}

impl<N> IDFTable<N>
where
    N: Num + Copy,
{
    /// Compute the table for a corpus with the given engine
    pub fn from_corpus<E>(corpus: &Corpus) -> Self
    where
        E: TFIDFEngine<N>,
    {
        let entry_count = corpus.entry_num();
        let weights = corpus
            .iter()
            .map(|(term, doc_freq)| (term.to_string(), E::idf(entry_count, doc_freq)))
            .collect();
        IDFTable {
            weights,
            entry_count,
        }
    }

    /// Get one feature's IDF weight (zero when absent)
    #[inline]
    pub fn idf(&self, term: &str) -> N {
        self.weights.get(term).copied().unwrap_or(N::zero())
    }

    /// Check whether a feature was observed at build time
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    /// Number of features carrying a weight
    #[inline]
    pub fn term_num(&self) -> usize {
        self.weights.len()
    }

    /// True for the empty-corpus table
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of corpus entries the table was built from
    #[inline]
    pub fn entry_num(&self) -> u64 {
        self.entry_count
    }
}
