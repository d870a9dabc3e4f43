use num::Num;
use rayon::prelude::*;

use crate::retriever::tfidf::TFIDFEngine;
use crate::retriever::vector::FeatureVector;
use crate::retriever::FaqIndex;

/// Score a best match must strictly beat to count as confident
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.01;

/// Position and score of the best-scoring entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub score: f64,
}

/// A confident answer, borrowed from the index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reply<'a> {
    pub answer: &'a str,
    pub index: usize,
    pub score: f64,
}

/// Ranking
impl<N, E> FaqIndex<N, E>
where
    N: Num + Copy + Into<f64> + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Cosine scores of a query vector against every entry, in entry
    /// order
    pub fn scores(&self, query: &FeatureVector<N>) -> Vec<f64> {
        self.vectors()
            .par_iter()
            .map(|vector| query.cosine_similarity(vector))
            .collect()
    }

    /// The best-scoring entry for a query vector.
    ///
    /// Ties go to the earliest entry: a later score must strictly beat
    /// the current best to replace it. `None` only when the index is
    /// empty.
    pub fn best_match(&self, query: &FeatureVector<N>) -> Option<Hit> {
        let mut best: Option<Hit> = None;
        for (index, score) in self.scores(query).into_iter().enumerate() {
            let beats = match best {
                Some(ref hit) => score > hit.score,
                None => true,
            };
            if beats {
                best = Some(Hit { index, score });
            }
        }
        best
    }

    /// Answer free text, or `None` when nothing scores above the
    /// threshold.
    ///
    /// A best score exactly at the threshold is not confident.
    pub fn reply(&self, text: &str) -> Option<Reply<'_>> {
        let query = self.vectorize(text);
        let hit = self.best_match(&query)?;
        if hit.score > self.threshold() {
            let entry = self.entry(hit.index)?;
            Some(Reply {
                answer: &entry.answer,
                index: hit.index,
                score: hit.score,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::retriever::{FaqEntry, FaqIndex};

    fn sample_index() -> FaqIndex {
        FaqIndex::build(vec![
            FaqEntry {
                question: "What is your return policy?".to_string(),
                answer: "You can return items within 30 days.".to_string(),
            },
            FaqEntry {
                question: "How do I track my order?".to_string(),
                answer: "Use the tracking link in your confirmation email.".to_string(),
            },
            FaqEntry {
                question: "What payment methods do you accept?".to_string(),
                answer: "We accept cards and PayPal.".to_string(),
            },
        ])
    }

    #[test]
    fn matches_the_tracking_entry() {
        let index = sample_index();
        let reply = index.reply("track order").unwrap();
        assert_eq!(reply.index, 1);
        assert_eq!(reply.answer, "Use the tracking link in your confirmation email.");
        assert!(reply.score > 0.0);
    }

    #[test]
    fn unseen_terms_give_no_match() {
        let index = sample_index();
        assert!(index.reply("asdkjasd").is_none());
    }

    #[test]
    fn all_stopword_query_gives_no_match() {
        let index = sample_index();
        assert!(index.reply("what is it for").is_none());
    }

    #[test]
    fn empty_corpus_never_matches() {
        let index: FaqIndex = FaqIndex::build(Vec::new());
        assert!(index.reply("track order").is_none());
    }

    #[test]
    fn first_entry_wins_exact_ties() {
        // Two identical questions plus two fillers so the duplicated
        // features keep a nonzero idf (df = 2 of 4).
        let index: FaqIndex = FaqIndex::build(vec![
            FaqEntry {
                question: "How do I track my order?".to_string(),
                answer: "first".to_string(),
            },
            FaqEntry {
                question: "How do I track my order?".to_string(),
                answer: "second".to_string(),
            },
            FaqEntry {
                question: "What is your return policy?".to_string(),
                answer: "You can return items within 30 days.".to_string(),
            },
            FaqEntry {
                question: "What payment methods do you accept?".to_string(),
                answer: "We accept cards and PayPal.".to_string(),
            },
        ]);
        let query = index.vectorize("track my order");
        let scores = index.scores(&query);
        assert_eq!(scores[0], scores[1]);
        assert!(scores[0] > 0.0);
        let reply = index.reply("track my order").unwrap();
        assert_eq!(reply.index, 0);
        assert_eq!(reply.answer, "first");
    }

    #[test]
    fn scores_come_back_in_entry_order() {
        let index = sample_index();
        let query = index.vectorize("return policy");
        let scores = index.scores(&query);
        assert_eq!(scores.len(), 3);
        assert!(scores[0] > scores[1]);
        assert!(scores[0] > scores[2]);
    }

    #[test]
    fn single_entry_corpus_matches_despite_negative_idf() {
        // With one entry every df is 1, so idf = ln(1/2) < 0. Cosine
        // of two all-negative vectors is still positive.
        let index: FaqIndex = FaqIndex::build(vec![FaqEntry {
            question: "How do I track my order?".to_string(),
            answer: "Use the tracking link.".to_string(),
        }]);
        let reply = index.reply("track order").unwrap();
        assert_eq!(reply.index, 0);
        assert!(reply.score > 0.0);
    }

    #[test]
    fn exact_question_is_the_unique_maximum() {
        let index = sample_index();
        let query = index.vectorize("How do I track my order?");
        let scores = index.scores(&query);
        assert!((scores[1] - 1.0).abs() < 1e-9);
        assert!(scores[1] > scores[0]);
        assert!(scores[1] > scores[2]);
    }

    #[test]
    fn a_best_score_at_the_threshold_is_not_confident() {
        let index = sample_index();
        let query = index.vectorize("track order");
        let best = index.best_match(&query).unwrap();
        let index = sample_index().with_threshold(best.score);
        assert!(index.reply("track order").is_none());
    }

    #[test]
    fn threshold_is_applied_strictly() {
        let index = sample_index().with_threshold(0.999);
        assert!(index.reply("How do I track my order?").is_some());
        assert!(index.reply("track").is_none());
    }
}
