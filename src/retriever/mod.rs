//! The retrieval engine: entries, vectors and the index that ties them
//! together.
//!
//! [`FaqIndex::build`] turns a list of [`FaqEntry`] values into one
//! TF-IDF vector per entry, and [`FaqIndex::reply`] matches free text
//! against them.

pub mod corpus;
pub mod rank;
pub mod snapshot;
pub mod term;
pub mod tfidf;
pub mod vector;

use num::Num;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analyze;
use self::corpus::Corpus;
use self::rank::DEFAULT_SCORE_THRESHOLD;
use self::term::TermFrequency;
use self::tfidf::{DefaultTFIDFEngine, IDFTable, TFIDFEngine};
use self::vector::FeatureVector;

/// One question/answer pair.
///
/// Entries have no id of their own. Their position in the list they
/// were indexed from is their identity, and ranking reports that
/// position back.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// An immutable index over a set of FAQ entries.
///
/// Built once from the full entry list; queries never mutate it. The
/// generic parameters pick the weight type and the weighting engine,
/// `FaqIndex<f64, DefaultTFIDFEngine>` by default.
#[derive(Serialize, Deserialize, Debug)]
pub struct FaqIndex<N = f64, E = DefaultTFIDFEngine>
where
    N: Num + Copy + Into<f64> + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    entries: Vec<FaqEntry>,
    vectors: Vec<FeatureVector<N>>,
    idf: IDFTable<N>,
    threshold: f64,
    #[serde(skip)]
    _marker: std::marker::PhantomData<E>,
}

/// Building and vectorizing
impl<N, E> FaqIndex<N, E>
where
    N: Num + Copy + Into<f64> + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Index a list of entries.
    ///
    /// Runs the text pipeline over every question, counts document
    /// frequencies across the whole corpus, then weighs each entry's
    /// features. The vectors come out in entry order, one per entry.
    pub fn build(entries: Vec<FaqEntry>) -> Self {
        let freqs: Vec<TermFrequency> = entries
            .par_iter()
            .map(|entry| {
                let mut freq = TermFrequency::new();
                freq.add_terms(&analyze::features(&entry.question));
                freq
            })
            .collect();

        let mut corpus = Corpus::new();
        for freq in &freqs {
            corpus.add_set(&freq.term_set_ref_str());
        }
        let idf = IDFTable::from_corpus::<E>(&corpus);

        let vectors: Vec<FeatureVector<N>> = freqs
            .par_iter()
            .map(|freq| Self::weigh(freq, &idf))
            .collect();

        FaqIndex {
            entries,
            vectors,
            idf,
            threshold: DEFAULT_SCORE_THRESHOLD,
            _marker: std::marker::PhantomData,
        }
    }

    /// Replace the confidence threshold a best match must strictly beat
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Vectorize free text with this index's IDF table.
    ///
    /// Same pipeline as the indexed questions, so a query repeating an
    /// entry's question reproduces that entry's vector. Features the
    /// corpus has never seen get weight 0 and drop out of scoring.
    pub fn vectorize(&self, text: &str) -> FeatureVector<N> {
        let mut freq = TermFrequency::new();
        freq.add_terms(&analyze::features(text));
        Self::weigh(&freq, &self.idf)
    }

    fn weigh(freq: &TermFrequency, idf: &IDFTable<N>) -> FeatureVector<N> {
        let mut vector = FeatureVector::new();
        for (term, count) in freq.iter() {
            vector.set_weight(term, E::weight(count, idf.idf(term)));
        }
        vector
    }
}

/// Access
impl<N, E> FaqIndex<N, E>
where
    N: Num + Copy + Into<f64> + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Get one entry by position
    #[inline]
    pub fn entry(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    /// All entries, in indexed order
    #[inline]
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// All entry vectors, parallel to [`entries`](Self::entries)
    #[inline]
    pub fn vectors(&self) -> &[FeatureVector<N>] {
        &self.vectors
    }

    /// The IDF table built from the indexed questions
    #[inline]
    pub fn idf_table(&self) -> &IDFTable<N> {
        &self.idf
    }

    /// The confidence threshold a best match must strictly beat
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of indexed entries
    #[inline]
    pub fn entry_num(&self) -> usize {
        self.entries.len()
    }

    /// True when the index holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
