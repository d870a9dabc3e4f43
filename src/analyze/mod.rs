//! Text analysis: normalization and n-gram expansion.
//!
//! Corpus questions and user queries both go through [`features`], so
//! the two sides of a similarity comparison always live in the same
//! feature space.

pub mod ngram;
pub mod normalize;

pub use ngram::ngrams;
pub use normalize::{normalize, STOP_WORDS};

/// Full pipeline: raw text to feature multiset.
pub fn features(text: &str) -> Vec<String> {
    ngrams(&normalize(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_yields_unigrams_and_bigrams() {
        assert_eq!(
            features("How do I track my order?"),
            vec!["do", "track", "order", "do track", "track order"]
        );
    }

    #[test]
    fn unanalyzable_text_yields_nothing() {
        assert!(features("How is it?!").is_empty());
    }
}
